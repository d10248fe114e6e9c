use super::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Story {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

impl Story {
  pub fn new(title: &str, description: &str) -> Self {
    Self {
      description: Some(description.to_string()),
      title: Some(title.to_string()),
      url: Some(String::new()),
    }
  }
}
