//! Authentication for the Wardrobe application
//!
//! Accounts live in the external store; the signed-in identity of a browser
//! profile lives in a key-value store. [`SessionManager`] ties the two
//! together and decides which pages a visitor may see.

pub mod error;
pub mod models;
pub mod repositories;
pub mod session;
pub mod validation;

pub use error::{AuthError, AuthResult};
pub use models::{AccessDecision, Identity, PageKind, SessionContext};
pub use repositories::UserRepository;
pub use session::{SESSION_KEY, SessionManager};
