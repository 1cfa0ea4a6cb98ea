//! Email rendering and delivery.
//!
//! Messages are rendered from [`templates`] and handed to an
//! [`EmailTransport`]: lettre-backed SMTP when credentials are configured,
//! a log-only transport otherwise.

mod mock;
mod smtp;
pub mod templates;
mod transport;
mod types;

pub use mock::LogTransport;
pub use smtp::SmtpTransport;
pub use templates::{Brand, MessageKind};
pub use transport::{build_transport, EmailTransport, TransportKind};
pub use types::{OutgoingEmail, RenderedEmail, SmtpConfig, TransportError};
