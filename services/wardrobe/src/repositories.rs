//! Repositories for external store operations

pub mod dress;

pub use dress::DressRepository;
