// src/cli/handlers.rs
use console::style;
use inquire::Password;

use crate::config::Config;
use crate::generators::{memorable_password, random_password, validate_strength};
use crate::models::{
    CredentialRecord, MemorablePasswordOptions, RandomPasswordOptions, Strength, StrengthReport,
};
use crate::store::CredentialStore;

// Handlers for one-shot CLI commands
pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    no_uppercase: bool,
    no_digits: bool,
    no_special: bool,
) -> anyhow::Result<()> {
    let options = RandomPasswordOptions {
        length: length.unwrap_or(config.default_length),
        uppercase: !no_uppercase,
        digits: !no_digits,
        special: !no_special,
    };
    let password = random_password(&mut rand::thread_rng(), &options);
    println!("{}", password);
    Ok(())
}

pub fn handle_memorable(
    config: &Config,
    words: Option<usize>,
    separator: String,
    no_capitalize: bool,
) -> anyhow::Result<()> {
    let options = MemorablePasswordOptions {
        words: words.unwrap_or(config.default_words),
        separator,
        capitalize: !no_capitalize,
    };
    let password = memorable_password(&mut rand::thread_rng(), &options);
    println!("{}", password);
    Ok(())
}

pub fn handle_check(password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new("Password to check:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?,
    };
    let report = validate_strength(&password);
    print_strength_report(&report);
    Ok(())
}

pub fn handle_add(
    store: &mut CredentialStore,
    service: &str,
    username: &str,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new("Password to store:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .prompt()?,
    };
    store.append(service, username, &password)?;
    println!("✅ Credential for '{}' saved", service);
    Ok(())
}

pub fn handle_list(store: &CredentialStore) -> anyhow::Result<()> {
    print_records(store.list());
    Ok(())
}

pub fn handle_search(store: &CredentialStore, query: &str) -> anyhow::Result<()> {
    let matches = store.search(query);
    if matches.is_empty() {
        println!("❗ No credentials match '{}'", query);
        return Ok(());
    }
    print_records(&matches);
    Ok(())
}

pub fn handle_delete(store: &mut CredentialStore, number: usize) -> anyhow::Result<()> {
    // List output numbers entries from 1
    let index = match number.checked_sub(1) {
        Some(index) => index,
        None => anyhow::bail!("entry numbers start at 1"),
    };
    let removed = store.delete_at(index)?;
    println!("✅ Deleted credential for '{}'", removed.service);
    Ok(())
}

pub(crate) fn print_records(records: &[CredentialRecord]) {
    if records.is_empty() {
        println!("❗ No credentials stored yet.");
        return;
    }
    for (i, record) in records.iter().enumerate() {
        println!(
            "{}: {} ({}) added {}",
            i + 1,
            record.service,
            record.username,
            record.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}

pub(crate) fn print_strength_report(report: &StrengthReport) {
    println!(
        "Strength: {} ({}/6)",
        paint_strength(report.strength),
        report.score
    );
    for suggestion in &report.suggestions {
        println!("  • {}", suggestion);
    }
}

fn paint_strength(strength: Strength) -> console::StyledObject<String> {
    let label = strength.to_string();
    match strength {
        Strength::Weak => style(label).red(),
        Strength::Medium => style(label).yellow(),
        Strength::Strong => style(label).green(),
    }
}
