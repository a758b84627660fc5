// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::models::{MemorablePasswordOptions, RandomPasswordOptions};

// Character classes for random generation. Lowercase is always eligible;
// the other three are switched in by their option flags.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()-_=+";

// Built-in vocabulary for memorable passwords.
const WORDS: [&str; 24] = [
    "apple", "banana", "cherry", "dragon", "eagle", "forest",
    "guitar", "hammer", "island", "jungle", "kitten", "lemon",
    "mountain", "ocean", "piano", "queen", "river", "star",
    "tiger", "umbrella", "valley", "water", "yellow", "zebra",
];

/// Generate a fully random password of `options.length` characters.
///
/// Every position is drawn independently and uniformly from the combined
/// character universe, with replacement. Enabling a class makes its
/// characters eligible; it does not guarantee one appears in the output.
/// A length of zero yields the empty string.
pub fn random_password<R: Rng>(rng: &mut R, options: &RandomPasswordOptions) -> String {
    let mut chars: Vec<u8> = LOWERCASE.to_vec();
    if options.uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if options.digits {
        chars.extend_from_slice(DIGITS);
    }
    if options.special {
        chars.extend_from_slice(SPECIAL);
    }

    let dist = Uniform::from(0..chars.len());
    (0..options.length)
        .map(|_| chars[dist.sample(rng)] as char)
        .collect()
}

/// Generate a word-based password: `options.words` dictionary words joined
/// by `options.separator`, followed directly by a random number in
/// [100, 999].
///
/// Words are drawn with replacement from a 24-word list, so this trades
/// entropy for memorability; prefer [`random_password`] when strength
/// matters more than recall.
pub fn memorable_password<R: Rng>(rng: &mut R, options: &MemorablePasswordOptions) -> String {
    let words: Vec<String> = (0..options.words)
        .map(|_| {
            let word = WORDS[rng.gen_range(0..WORDS.len())];
            if options.capitalize {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect();

    let suffix: u32 = rng.gen_range(100..=999);
    format!("{}{}", words.join(&options.separator), suffix)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn random_password_has_requested_length() {
        let mut rng = rng();
        for length in [0, 1, 12, 64] {
            let options = RandomPasswordOptions {
                length,
                ..Default::default()
            };
            assert_eq!(random_password(&mut rng, &options).chars().count(), length);
        }
    }

    #[test]
    fn all_flags_disabled_still_yields_lowercase() {
        let mut rng = rng();
        let options = RandomPasswordOptions {
            length: 48,
            uppercase: false,
            digits: false,
            special: false,
        };
        let password = random_password(&mut rng, &options);
        assert!(password.bytes().all(|b| LOWERCASE.contains(&b)));
    }

    #[test]
    fn output_stays_within_the_selected_universe() {
        let mut rng = rng();
        for bits in 0u8..8 {
            let options = RandomPasswordOptions {
                length: 96,
                uppercase: bits & 1 != 0,
                digits: bits & 2 != 0,
                special: bits & 4 != 0,
            };
            let password = random_password(&mut rng, &options);
            for b in password.bytes() {
                let allowed = LOWERCASE.contains(&b)
                    || (options.uppercase && UPPERCASE.contains(&b))
                    || (options.digits && DIGITS.contains(&b))
                    || (options.special && SPECIAL.contains(&b));
                assert!(allowed, "unexpected character {:?}", b as char);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_password() {
        let options = RandomPasswordOptions::default();
        let first = random_password(&mut ChaCha8Rng::seed_from_u64(7), &options);
        let second = random_password(&mut ChaCha8Rng::seed_from_u64(7), &options);
        assert_eq!(first, second);
    }

    #[test]
    fn memorable_password_joins_known_words_and_ends_in_three_digits() {
        let mut rng = rng();
        let options = MemorablePasswordOptions {
            words: 3,
            separator: "-".to_string(),
            capitalize: false,
        };
        let password = memorable_password(&mut rng, &options);

        let (prefix, suffix) = password.split_at(password.len() - 3);
        let number: u32 = suffix.parse().expect("suffix should be numeric");
        assert!((100..=999).contains(&number));

        let tokens: Vec<&str> = prefix.split('-').collect();
        assert_eq!(tokens.len(), 3);
        for token in tokens {
            assert!(WORDS.contains(&token), "unknown word {:?}", token);
        }
    }

    #[test]
    fn capitalize_flag_uppercases_each_word_initial() {
        let mut rng = rng();
        let options = MemorablePasswordOptions {
            words: 4,
            separator: ".".to_string(),
            capitalize: true,
        };
        let password = memorable_password(&mut rng, &options);
        let prefix = &password[..password.len() - 3];

        for token in prefix.split('.') {
            assert!(token.chars().next().unwrap().is_ascii_uppercase());
            assert!(WORDS.contains(&token.to_lowercase().as_str()));
        }
    }

    #[test]
    fn empty_separator_concatenates_words() {
        let mut rng = rng();
        let options = MemorablePasswordOptions {
            words: 2,
            separator: String::new(),
            capitalize: true,
        };
        let password = memorable_password(&mut rng, &options);
        // Two capitalized words run together: exactly two uppercase letters
        // before the numeric suffix.
        let prefix = &password[..password.len() - 3];
        let capitals = prefix.chars().filter(|c| c.is_ascii_uppercase()).count();
        assert_eq!(capitals, 2);
    }
}
