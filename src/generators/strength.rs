// src/generators/strength.rs
use crate::models::{Strength, StrengthReport};

use super::password::SPECIAL;

/// Score a password against a fixed six-point rubric.
///
/// Each criterion is worth one point and is checked independently; a failed
/// criterion contributes its suggestion and nothing else. The length-12
/// criterion is a bonus: it never adds a suggestion of its own. Scores map
/// to tiers as 0-2 Weak, 3-4 Medium, 5-6 Strong.
pub fn validate_strength(password: &str) -> StrengthReport {
    let mut score: u8 = 0;
    let mut suggestions = Vec::new();

    let length = password.chars().count();

    if length >= 8 {
        score += 1;
    } else {
        suggestions.push("Password should be at least 8 characters".to_string());
    }

    if length >= 12 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        suggestions.push("Add lowercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        suggestions.push("Add uppercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        suggestions.push("Add digits".to_string());
    }

    // Byte-wise scan: the special set is pure ASCII, and UTF-8 continuation
    // bytes never fall below 0x80, so multi-byte characters cannot alias.
    if password.bytes().any(|b| SPECIAL.contains(&b)) {
        score += 1;
    } else {
        suggestions.push("Add special characters".to_string());
    }

    let strength = match score {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        _ => Strength::Strong,
    };

    StrengthReport {
        strength,
        score,
        suggestions,
    }
}
