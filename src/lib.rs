// src/lib.rs
//! Passforge core: password generation, strength scoring and a hashed
//! credential store backed by a single JSON file.
//!
//! The interactive shell in `cli` is a thin consumer of these modules;
//! everything it renders comes from `generators` and `store`.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod generators;
pub mod models;
pub mod store;

pub use models::{CredentialRecord, Strength, StrengthReport};
pub use store::CredentialStore;
