use std::env;

use crate::email::{Brand, SmtpConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub bind_address: String,
  pub admin_email: String,
  pub smtp: SmtpConfig,
  pub brand: Brand,
  /// Empty means any origin may post to the API.
  pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      bind_address: "0.0.0.0:8000".to_string(),
      admin_email: "admin@designbell.com".to_string(),
      smtp: SmtpConfig::default(),
      brand: Brand::default(),
      allowed_origins: Vec::new(),
    }
  }
}

impl AppConfig {
  /// Reads the process environment once; call after `dotenvy::dotenv()`.
  pub fn from_env() -> anyhow::Result<Self> {
    let defaults = AppConfig::default();

    let username = env::var("SMTP_USER").unwrap_or_default();
    let smtp = SmtpConfig {
      host: env_or("SMTP_HOST", &defaults.smtp.host),
      port: env::var("SMTP_PORT")
        .unwrap_or_else(|_| defaults.smtp.port.to_string())
        .parse()
        .unwrap_or(defaults.smtp.port),
      password: env::var("SMTP_PASSWORD").unwrap_or_default(),
      from_email: env::var("SMTP_FROM_EMAIL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| username.clone()),
      username,
    };

    let brand = Brand {
      name: env_or("BRAND_NAME", &defaults.brand.name),
      tagline: env_or("BRAND_TAGLINE", &defaults.brand.tagline),
      launch_date: env_or("BRAND_LAUNCH_DATE", &defaults.brand.launch_date),
      focus: env_or("BRAND_FOCUS", &defaults.brand.focus),
      pitch: env_or("BRAND_PITCH", &defaults.brand.pitch),
      footer_note: env_or("BRAND_FOOTER_NOTE", &defaults.brand.footer_note),
    };

    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
      .unwrap_or_default()
      .split(',')
      .map(str::trim)
      .filter(|origin| !origin.is_empty())
      .map(String::from)
      .collect();

    let admin_email = env_or("ADMIN_EMAIL", &defaults.admin_email);
    if !crate::utils::is_valid_email(&admin_email) {
      anyhow::bail!("ADMIN_EMAIL is not a valid email address: {}", admin_email);
    }

    Ok(AppConfig {
      bind_address: env_or("BIND_ADDRESS", &defaults.bind_address),
      admin_email,
      smtp,
      brand,
      allowed_origins,
    })
  }
}

fn env_or(key: &str, default: &str) -> String {
  env::var(key)
    .ok()
    .filter(|v| !v.trim().is_empty())
    .unwrap_or_else(|| default.to_string())
}
