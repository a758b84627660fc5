// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved credential. Only the SHA-256 digest of the password is kept;
/// the plaintext never reaches this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub service: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Strength tier for a scored password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Medium => write!(f, "Medium"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

/// Result of scoring a password: tier, 0-6 score and one fixed suggestion
/// per failed criterion, in rubric order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub strength: Strength,
    pub score: u8,
    pub suggestions: Vec<String>,
}

// Random password generation options. Lowercase letters are always part of
// the character universe and have no flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomPasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl Default for RandomPasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            digits: true,
            special: true,
        }
    }
}

// Memorable (word-based) password generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorablePasswordOptions {
    pub words: usize,
    pub separator: String,
    pub capitalize: bool,
}

impl Default for MemorablePasswordOptions {
    fn default() -> Self {
        Self {
            words: 4,
            separator: "-".to_string(),
            capitalize: true,
        }
    }
}
