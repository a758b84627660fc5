// src/main.rs
use clap::Parser;
use std::path::Path;
use std::process;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use passforge::cli::{handlers, menu, Args, CliCommand};
use passforge::config::Config;
use passforge::store::CredentialStore;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();
    let config = Config::load(args.store);

    let mut store = CredentialStore::open(config.store_path.clone());

    let result = match args.command {
        Some(command) => run_command(command, &mut store, &config),
        None => {
            log::info!("🔐 Starting Passforge - password generator and credential store");

            let should_exit = Arc::new(AtomicBool::new(false));

            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Shutting down...");
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    process::exit(0);
                })
                .expect("Failed to set Ctrl+C handler");
            }

            println!("Using credential file: {}", store.path().display());
            menu::run_cli_menu(&mut store, &config, should_exit)
        }
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        eprintln!("❌ Error: {:#}", e);
        process::exit(1);
    }
}

fn run_command(
    command: CliCommand,
    store: &mut CredentialStore,
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        CliCommand::Generate {
            length,
            no_uppercase,
            no_digits,
            no_special,
        } => handlers::handle_generate(config, length, no_uppercase, no_digits, no_special),
        CliCommand::Memorable {
            words,
            separator,
            no_capitalize,
        } => handlers::handle_memorable(config, words, separator, no_capitalize),
        CliCommand::Check { password } => handlers::handle_check(password),
        CliCommand::Add {
            service,
            username,
            password,
        } => handlers::handle_add(store, &service, &username, password),
        CliCommand::List => handlers::handle_list(store),
        CliCommand::Search { query } => handlers::handle_search(store, &query),
        CliCommand::Delete { number } => handlers::handle_delete(store, number),
    }
}
