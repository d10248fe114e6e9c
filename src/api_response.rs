use super::*;

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
  pub msg: Option<String>,
  #[serde(rename = "storyId")]
  pub story_id: Option<String>,
}

impl ApiResponse {
  pub fn msg_contains(&self, needle: &str) -> bool {
    self.msg.as_deref().is_some_and(|msg| msg.contains(needle))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_a_create_reply() {
    let reply = serde_json::from_str::<ApiResponse>(
      r#"{"storyId": "f1b2", "msg": "Successfully created!"}"#,
    )
    .unwrap();

    assert_eq!(reply.story_id.as_deref(), Some("f1b2"));
    assert_eq!(reply.msg.as_deref(), Some(CREATED_MESSAGE));
  }

  #[test]
  fn tolerates_foreign_error_payloads() {
    let reply = serde_json::from_str::<ApiResponse>(
      r#"{"title": "One or more validation errors occurred.", "status": 400}"#,
    )
    .unwrap();

    assert!(reply.msg.is_none());
    assert!(reply.story_id.is_none());
  }

  #[test]
  fn msg_contains_matches_substrings_only_when_present() {
    let reply = serde_json::from_str::<ApiResponse>(
      r#"{"msg": "No spoilers were found for this id"}"#,
    )
    .unwrap();

    assert!(reply.msg_contains(MISSING_SPOILER_MESSAGE));
    assert!(!reply.msg_contains("Unable to delete"));

    let empty = serde_json::from_str::<ApiResponse>("{}").unwrap();

    assert!(!empty.msg_contains(""));
  }
}
