//! Session state and login plumbing for Atlas.
//!
//! The login flow is the sole producer of the session (token + user id)
//! consumed by the weather view; everything here is network-free except
//! the `AuthClient`.

pub mod claims;
pub mod client;
pub mod crypto;
pub mod error;
pub mod session;

pub use client::AuthClient;
pub use error::AuthError;
pub use session::{Session, SessionStore};
