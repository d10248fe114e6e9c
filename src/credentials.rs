use super::*;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
  pub password: String,
  pub user_name: String,
}

impl From<&Config> for Credentials {
  fn from(config: &Config) -> Self {
    Self {
      password: config.password.clone(),
      user_name: config.user_name.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_with_camel_case_keys() {
    let credentials = Credentials {
      password: "secret".to_string(),
      user_name: "tester".to_string(),
    };

    assert_eq!(
      serde_json::to_string(&credentials).unwrap(),
      r#"{"password":"secret","userName":"tester"}"#
    );
  }
}
