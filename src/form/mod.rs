//! Client side of the waitlist signup.
//!
//! Every page placement (hero section, footer, modal) drives the same
//! [`SignupForm`] state machine: idle, pending, then success or error.

mod client;
mod state;

pub use client::{ClientError, HttpWaitlistClient, SignupReply, WaitlistClient};
pub use state::{Placement, SignupForm, SubmitState, FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
