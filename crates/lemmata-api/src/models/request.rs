//! Request model definition

use serde::Deserialize;

/// Lemmatization request
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
  /// Text to lemmatize
  pub text: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"text": "Gatos bonitos"}"#;
    let req: ProcessRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "Gatos bonitos");
  }

  #[test]
  fn deserialize_missing_text_fails() {
    assert!(serde_json::from_str::<ProcessRequest>(r#"{"texto": "x"}"#).is_err());
  }
}
