// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{memorable_password, random_password};
pub use strength::validate_strength;
