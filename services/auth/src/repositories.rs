//! Repositories for external store operations

pub mod user;

pub use user::UserRepository;
