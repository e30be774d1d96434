//! Authentication models

pub mod session;
pub mod user;

// Re-export for convenience
pub use session::{AccessDecision, Identity, PageKind, SessionContext, SessionRequirement};
pub use user::{Account, LoginCredentials, NewAccount, Registration};
