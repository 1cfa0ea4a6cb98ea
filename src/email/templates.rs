//! Waitlist message templates.
//!
//! Both templates share one structure; the wording that differs between
//! deployments lives in [`Brand`] and is chosen through configuration.

use chrono::{DateTime, Utc};

use super::types::RenderedEmail;
use crate::utils::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
  pub name: String,
  pub tagline: String,
  pub launch_date: String,
  /// Short noun phrase describing the product area, e.g. "construction law".
  pub focus: String,
  /// Sentence fragment completing "you'll be among the first to experience ...".
  pub pitch: String,
  pub footer_note: String,
}

impl Default for Brand {
  fn default() -> Self {
    Brand {
      name: "DesignBell".to_string(),
      tagline: "Construction Law Made Simple".to_string(),
      launch_date: "September 25, 2025".to_string(),
      focus: "construction law".to_string(),
      pitch: "our AI-powered legal assistant built specifically for Aussie builders, subcontractors, and tradies"
        .to_string(),
      footer_note: "Headquartered in Wyoming, US".to_string(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
  Welcome,
  AdminNotice,
}

pub fn render(kind: MessageKind, brand: &Brand, email: &str, registered_at: DateTime<Utc>) -> RenderedEmail {
  match kind {
    MessageKind::Welcome => welcome_email(brand, email),
    MessageKind::AdminNotice => admin_notification_email(brand, email, registered_at),
  }
}

/// `September 25, 2025 at 03:04 PM`
pub fn format_registration_time(at: DateTime<Utc>) -> String {
  at.format("%B %-d, %Y at %I:%M %p").to_string()
}

pub fn welcome_email(brand: &Brand, email: &str) -> RenderedEmail {
  let subject = format!("Welcome to {}! 🎉", brand.name);
  let html_email = escape_html(email);

  let html = format!(
    r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Welcome to {name}</title>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
    .content {{ background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }}
    .footer {{ text-align: center; margin-top: 30px; color: #666; font-size: 14px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>Welcome to {name}! 🎉</h1>
      <p>{tagline}</p>
    </div>
    <div class="content">
      <h2>Hello {email},</h2>
      <p>Thank you for joining the {name} waitlist! We're excited to have you on board and can't wait to revolutionize how you handle {focus}.</p>
      <p>As a founding member, you'll get:</p>
      <ul>
        <li>✅ <strong>Early access</strong> to our platform</li>
        <li>✅ <strong>Discounted pricing</strong> for life</li>
        <li>✅ <strong>Priority support</strong> from our team</li>
        <li>✅ <strong>Exclusive updates</strong> on our progress</li>
      </ul>
      <p>We'll be launching on <strong>{launch_date}</strong>, and you'll be among the first to experience {pitch}.</p>
      <p>In the meantime, we'll keep you updated on our progress and send you valuable {focus} tips and insights.</p>
      <p>Warm regards,<br>
      <strong>The {name} Team</strong></p>
    </div>
    <div class="footer">
      <p>{name} - {tagline}</p>
      <p>{footer_note}</p>
    </div>
  </div>
</body>
</html>
"#,
    name = brand.name,
    tagline = brand.tagline,
    email = html_email,
    focus = brand.focus,
    launch_date = brand.launch_date,
    pitch = brand.pitch,
    footer_note = brand.footer_note,
  );

  let text = format!(
    "Welcome to {name}! 🎉

Hello {email},

Thank you for joining the {name} waitlist! We're excited to have you on board and can't wait to revolutionize how you handle {focus}.

As a founding member, you'll get:
✅ Early access to our platform
✅ Discounted pricing for life
✅ Priority support from our team
✅ Exclusive updates on our progress

We'll be launching on {launch_date}, and you'll be among the first to experience {pitch}.

In the meantime, we'll keep you updated on our progress and send you valuable {focus} tips and insights.

Warm regards,
The {name} Team

{name} - {tagline}
{footer_note}
",
    name = brand.name,
    email = email,
    focus = brand.focus,
    launch_date = brand.launch_date,
    pitch = brand.pitch,
    tagline = brand.tagline,
    footer_note = brand.footer_note,
  );

  RenderedEmail { subject, html, text }
}

pub fn admin_notification_email(brand: &Brand, email: &str, registered_at: DateTime<Utc>) -> RenderedEmail {
  let subject = format!("New Waitlist Registration - {}", brand.name);
  let registered = format_registration_time(registered_at);

  let html = format!(
    r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>New Waitlist Registration</title>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: #2c3e50; color: white; padding: 20px; text-align: center; border-radius: 5px; }}
    .content {{ background: #f8f9fa; padding: 20px; border-radius: 5px; margin-top: 10px; }}
    .info-box {{ background: #e8f4fd; border-left: 4px solid #3498db; padding: 15px; margin: 15px 0; }}
    .footer {{ text-align: center; margin-top: 20px; color: #666; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h2>🔔 New Waitlist Registration</h2>
    </div>
    <div class="content">
      <p>A new user has joined the {name} waitlist!</p>
      <div class="info-box">
        <h3>Registration Details:</h3>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Registration Time:</strong> {registered} UTC</p>
      </div>
      <p>This user will receive a welcome email and be added to our founding members list.</p>
      <p>You can view all waitlist registrations in your admin panel.</p>
      <p>Best regards,<br>
      <strong>{name} System</strong></p>
    </div>
    <div class="footer">
      <p>{name} Admin Notification</p>
    </div>
  </div>
</body>
</html>
"#,
    name = brand.name,
    email = escape_html(email),
    registered = registered,
  );

  let text = format!(
    "New Waitlist Registration - {name}

A new user has joined the {name} waitlist!

Registration Details:
Email: {email}
Registration Time: {registered} UTC

This user will receive a welcome email and be added to our founding members list.

You can view all waitlist registrations in your admin panel.

Best regards,
{name} System
",
    name = brand.name,
    email = email,
    registered = registered,
  );

  RenderedEmail { subject, html, text }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn registered_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 25, 15, 4, 0).unwrap()
  }

  #[test]
  fn test_welcome_embeds_address_in_both_bodies() {
    let rendered = welcome_email(&Brand::default(), "a@b.com");
    assert!(rendered.html.contains("Hello a@b.com,"));
    assert!(rendered.text.contains("Hello a@b.com,"));
    assert_eq!(rendered.subject, "Welcome to DesignBell! 🎉");
  }

  #[test]
  fn test_welcome_leaves_template_text_untouched() {
    let brand = Brand::default();
    let first = welcome_email(&brand, "a@b.com");
    let second = welcome_email(&brand, "someone.else@example.org");

    assert_eq!(
      first.text.replace("a@b.com", "{email}"),
      second.text.replace("someone.else@example.org", "{email}")
    );
    assert_eq!(
      first.html.replace("a@b.com", "{email}"),
      second.html.replace("someone.else@example.org", "{email}")
    );
  }

  #[test]
  fn test_welcome_is_deterministic() {
    let brand = Brand::default();
    assert_eq!(welcome_email(&brand, "a@b.com"), welcome_email(&brand, "a@b.com"));
  }

  #[test]
  fn test_welcome_uses_brand_content() {
    let brand = Brand {
      name: "Acme".to_string(),
      tagline: "Rockets for everyone".to_string(),
      launch_date: "January 1, 2030".to_string(),
      focus: "rocketry".to_string(),
      pitch: "our self-assembling rocket kit".to_string(),
      footer_note: "Made in the desert".to_string(),
    };
    let rendered = welcome_email(&brand, "a@b.com");

    assert_eq!(rendered.subject, "Welcome to Acme! 🎉");
    assert!(rendered.text.contains("We'll be launching on January 1, 2030"));
    assert!(rendered.text.contains("experience our self-assembling rocket kit."));
    assert!(rendered.html.contains("<p>Acme - Rockets for everyone</p>"));
    assert!(!rendered.html.contains("DesignBell"));
  }

  #[test]
  fn test_html_body_escapes_markup_in_address() {
    let rendered = welcome_email(&Brand::default(), "<b>x</b>@evil.com");
    assert!(rendered.html.contains("&lt;b&gt;x&lt;/b&gt;@evil.com"));
    assert!(rendered.text.contains("<b>x</b>@evil.com"));
  }

  #[test]
  fn test_admin_notice_includes_address_and_time() {
    let rendered = admin_notification_email(&Brand::default(), "a@b.com", registered_at());

    assert_eq!(rendered.subject, "New Waitlist Registration - DesignBell");
    assert!(rendered.text.contains("Email: a@b.com"));
    assert!(rendered.text.contains("Registration Time: September 25, 2025 at 03:04 PM UTC"));
    assert!(rendered.html.contains("<strong>Email:</strong> a@b.com"));
    assert!(rendered.html.contains("DesignBell System"));
  }

  #[test]
  fn test_render_dispatches_on_kind() {
    let brand = Brand::default();
    let welcome = render(MessageKind::Welcome, &brand, "a@b.com", registered_at());
    let notice = render(MessageKind::AdminNotice, &brand, "a@b.com", registered_at());

    assert_eq!(welcome, welcome_email(&brand, "a@b.com"));
    assert_eq!(notice, admin_notification_email(&brand, "a@b.com", registered_at()));
  }

  #[test]
  fn test_format_registration_time_morning() {
    let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap();
    assert_eq!(format_registration_time(at), "March 5, 2024 at 09:07 AM");
  }
}
