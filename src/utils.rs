use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

pub mod error;

static EMAIL_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Permissive syntactic check: non-blank local part, `@`, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
  EMAIL_REGEX.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
  if !is_valid_email(email) {
    return Err(ValidationError::new("invalid_email").with_message("Valid email is required".into()));
  }

  Ok(())
}

/// Minimal escaping for values interpolated into HTML bodies.
pub fn escape_html(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
