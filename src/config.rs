use std::env;

#[derive(Clone, Debug)]
pub struct Config {
  pub base_url: String,
  pub password: String,
  pub user_name: String,
}

impl Config {
  const DEFAULT_BASE_URL: &str = "https://d3s5nxhwblsjbi.cloudfront.net";

  const DEFAULT_PASSWORD: &str = "tsvetaemdim135";

  const DEFAULT_USER_NAME: &str = "tsvetaemdim";

  pub fn from_env() -> Self {
    Self::resolve(|name| env::var(name).ok())
  }

  fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let base_url = lookup("STORY_SPOILER_BASE_URL")
      .map(|url| url.trim_end_matches('/').to_string())
      .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

    Self {
      base_url,
      password: lookup("STORY_SPOILER_PASSWORD")
        .unwrap_or_else(|| Self::DEFAULT_PASSWORD.to_string()),
      user_name: lookup("STORY_SPOILER_USER")
        .unwrap_or_else(|| Self::DEFAULT_USER_NAME.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolve_falls_back_to_the_hosted_service() {
    let config = Config::resolve(|_| None);

    assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
    assert_eq!(config.password, Config::DEFAULT_PASSWORD);
    assert_eq!(config.user_name, Config::DEFAULT_USER_NAME);
  }

  #[test]
  fn resolve_prefers_overrides_and_trims_trailing_slashes() {
    let config = Config::resolve(|name| match name {
      "STORY_SPOILER_BASE_URL" => Some("http://localhost:8080/".to_string()),
      "STORY_SPOILER_USER" => Some("someone".to_string()),
      _ => None,
    });

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.password, Config::DEFAULT_PASSWORD);
    assert_eq!(config.user_name, "someone");
  }
}
