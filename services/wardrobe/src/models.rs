//! Wardrobe models for store records, forms and view data

pub mod dress;

pub use dress::{Dress, DressDraft, DressPatch, DressStats, FilterCriteria, NewDress};
