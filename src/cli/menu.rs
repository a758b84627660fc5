// src/cli/menu.rs
use inquire::{Confirm, Password, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::generators::{memorable_password, random_password, validate_strength};
use crate::models::{MemorablePasswordOptions, RandomPasswordOptions};
use crate::store::CredentialStore;

use super::handlers::{print_records, print_strength_report};

pub fn run_cli_menu(
    store: &mut CredentialStore,
    config: &Config,
    should_exit: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 PASSFORGE MANAGER         ║");
    println!("╚══════════════════════════════════════╝");

    let mut rng = rand::thread_rng();

    // Main application loop
    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        // Main menu options
        let options = vec![
            "🔐  Generate secure password",
            "🧠  Generate memorable password",
            "💪  Check password strength",
            "1️⃣  Add a new credential",
            "2️⃣  View saved credentials",
            "🔍  Search credentials",
            "🗑️  Delete credential",
            "❌  Exit",
        ];

        let selection_result = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .with_page_size(50)
            .prompt_skippable();

        // Check if we should exit
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        // Process selection
        match selection_result {
            Ok(Some(selection)) => {
                match selection {
                    "🔐  Generate secure password" => {
                        let default_length = config.default_length.to_string();
                        let length: usize = Text::new("Password length:")
                            .with_default(&default_length)
                            .prompt()
                            .and_then(|s| {
                                s.parse().map_err(|_| {
                                    inquire::InquireError::Custom("Invalid number".into())
                                })
                            })?;

                        let include_uppercase = Confirm::new("Include uppercase letters?")
                            .with_default(true)
                            .prompt()?;

                        let include_digits = Confirm::new("Include digits?")
                            .with_default(true)
                            .prompt()?;

                        let include_special = Confirm::new("Include special characters?")
                            .with_default(true)
                            .prompt()?;

                        let generation_options = RandomPasswordOptions {
                            length,
                            uppercase: include_uppercase,
                            digits: include_digits,
                            special: include_special,
                        };

                        let generated = random_password(&mut rng, &generation_options);
                        println!("\nGenerated Password: {}", generated);
                        print_strength_report(&validate_strength(&generated));

                        let save = Confirm::new("Save this password as a credential?")
                            .with_default(false)
                            .prompt()?;

                        if save {
                            let service = Text::new("Website or service:").prompt()?;
                            let username = Text::new("Username or email:").prompt()?;

                            match store.append(&service, &username, &generated) {
                                Ok(_) => println!("✅ Credential saved successfully!"),
                                Err(e) => println!("❌ Failed to save credential: {}", e),
                            }
                        }

                        // Wait for user to press enter
                        let _ = Text::new("Press enter to continue...").prompt();
                    }
                    "🧠  Generate memorable password" => {
                        let default_words = config.default_words.to_string();
                        let words: usize = Text::new("Number of words:")
                            .with_default(&default_words)
                            .prompt()
                            .and_then(|s| {
                                s.parse().map_err(|_| {
                                    inquire::InquireError::Custom("Invalid number".into())
                                })
                            })?;

                        let separator = Text::new("Word separator:")
                            .with_default("-")
                            .prompt()?;

                        let capitalize = Confirm::new("Capitalize each word?")
                            .with_default(true)
                            .prompt()?;

                        let generation_options = MemorablePasswordOptions {
                            words,
                            separator,
                            capitalize,
                        };

                        let generated = memorable_password(&mut rng, &generation_options);
                        println!("\nGenerated Password: {}", generated);
                        print_strength_report(&validate_strength(&generated));

                        let save = Confirm::new("Save this password as a credential?")
                            .with_default(false)
                            .prompt()?;

                        if save {
                            let service = Text::new("Website or service:").prompt()?;
                            let username = Text::new("Username or email:").prompt()?;

                            match store.append(&service, &username, &generated) {
                                Ok(_) => println!("✅ Credential saved successfully!"),
                                Err(e) => println!("❌ Failed to save credential: {}", e),
                            }
                        }

                        // Wait for user to press enter
                        let _ = Text::new("Press enter to continue...").prompt();
                    }
                    "💪  Check password strength" => {
                        let password = Password::new("Password to check:")
                            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                            .without_confirmation()
                            .prompt()?;

                        print_strength_report(&validate_strength(&password));

                        // Wait for user to press enter
                        let _ = Text::new("Press enter to continue...").prompt();
                    }
                    "1️⃣  Add a new credential" => {
                        let service = Text::new("Website or service:").prompt()?;
                        let username = Text::new("Username or email:").prompt()?;

                        let generate = Confirm::new("Generate a secure password?")
                            .with_default(false)
                            .prompt()?;

                        let password = if generate {
                            let default_length = config.default_length.to_string();
                            let length: usize = Text::new("Password length:")
                                .with_default(&default_length)
                                .prompt()
                                .and_then(|s| {
                                    s.parse().map_err(|_| {
                                        inquire::InquireError::Custom("Invalid number".into())
                                    })
                                })?;

                            let include_uppercase = Confirm::new("Include uppercase letters?")
                                .with_default(true)
                                .prompt()?;

                            let include_digits = Confirm::new("Include digits?")
                                .with_default(true)
                                .prompt()?;

                            let include_special = Confirm::new("Include special characters?")
                                .with_default(true)
                                .prompt()?;

                            let generation_options = RandomPasswordOptions {
                                length,
                                uppercase: include_uppercase,
                                digits: include_digits,
                                special: include_special,
                            };

                            let generated = random_password(&mut rng, &generation_options);
                            println!("Generated password: {}", generated);

                            let use_generated = Confirm::new("Use this password?")
                                .with_default(true)
                                .prompt()?;

                            if use_generated {
                                generated
                            } else {
                                Password::new("Enter password:")
                                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                                    .prompt()?
                            }
                        } else {
                            Password::new("Enter password:")
                                .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                                .prompt()?
                        };

                        match store.append(&service, &username, &password) {
                            Ok(_) => println!("✅ Credential added successfully!"),
                            Err(e) => println!("❌ Failed to add credential: {}", e),
                        }
                    }
                    "2️⃣  View saved credentials" => {
                        let records = store.list();

                        if records.is_empty() {
                            println!("❗ No credentials stored yet.");
                            continue;
                        }

                        let display: Vec<String> = records
                            .iter()
                            .map(|r| format!("{} ({})", r.service, r.username))
                            .collect();

                        let selection = Select::new("Select a credential to view details:", display.clone())
                            .with_page_size(50)
                            .prompt()?;

                        // Find the selected credential
                        let selected_idx = display.iter().position(|s| s == &selection).unwrap();
                        let selected = &records[selected_idx];

                        println!("\n🔐 Credential Details");
                        println!("Service: {}", selected.service);
                        println!("Username: {}", selected.username);
                        println!("Password hash (SHA-256): {}", selected.password_hash);
                        println!("Created: {}", selected.created_at);

                        // Wait for user to press enter
                        let _ = Text::new("Press enter to continue...").prompt();
                    }
                    "🔍  Search credentials" => {
                        let query = Text::new("Service contains:").prompt()?;

                        let matches = store.search(&query);

                        if matches.is_empty() {
                            println!("❗ No credentials match your search.");
                            continue;
                        }

                        println!("\n🔍 Search Results: {} credentials found", matches.len());
                        print_records(&matches);

                        // Wait for user to press enter
                        let _ = Text::new("Press enter to continue...").prompt();
                    }
                    "🗑️  Delete credential" => {
                        let records = store.list();

                        if records.is_empty() {
                            println!("❗ No credentials stored yet.");
                            continue;
                        }

                        let display: Vec<String> = records
                            .iter()
                            .map(|r| format!("{} ({})", r.service, r.username))
                            .collect();

                        let selection = Select::new("Select a credential to delete:", display.clone())
                            .with_page_size(50)
                            .prompt()?;

                        // Find the selected credential
                        let selected_idx = display.iter().position(|s| s == &selection).unwrap();
                        let service = records[selected_idx].service.clone();

                        let confirm = Confirm::new(&format!(
                            "Are you sure you want to delete the entry for '{}'?",
                            service
                        ))
                        .with_default(false)
                        .prompt()?;

                        if confirm {
                            match store.delete_at(selected_idx) {
                                Ok(_) => println!("✅ Credential deleted successfully!"),
                                Err(e) => println!("❌ Failed to delete credential: {}", e),
                            }
                        }
                    }
                    "❌  Exit" => {
                        println!("👋 Goodbye!");

                        // Set the exit flag so the main thread knows to clean up
                        should_exit.store(true, Ordering::SeqCst);

                        // Exit the menu loop
                        exit_requested = true;
                    }
                    _ => {}
                }
            }
            Ok(None) => {
                // Check if Ctrl+C was pressed
                if should_exit.load(Ordering::SeqCst) {
                    break;
                }
                // Sleep briefly to avoid consuming CPU while waiting for input
                thread::sleep(Duration::from_millis(100));
            }
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
