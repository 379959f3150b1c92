//! Structured error types for the match engine's I/O shell.
//!
//! The engine proper recognizes no throwable errors: absent or unrecognized
//! profile values resolve to defined defaults. The only failure surface is
//! the JSON boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_errors_carry_the_parse_context() {
    let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = EngineError::from(parse_err);
    assert!(err.to_string().starts_with("json: "));
  }
}
