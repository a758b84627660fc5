// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Generate {
        /// Password length [default: 12]
        #[arg(long)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Generate a memorable word-based password
    Memorable {
        /// Number of words [default: 4]
        #[arg(long)]
        words: Option<usize>,

        /// Separator placed between words
        #[arg(long, default_value = "-")]
        separator: String,

        /// Keep words lowercase
        #[arg(long)]
        no_capitalize: bool,
    },

    /// Check the strength of a password
    Check {
        /// Password to score; prompted for when omitted
        password: Option<String>,
    },

    /// Add a credential to the store
    Add {
        /// Website or service
        #[arg(required = true)]
        service: String,

        /// Username or email
        #[arg(required = true)]
        username: String,

        /// Password to hash and store; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// List all stored credentials
    List,

    /// Search credentials by service name
    Search {
        /// Text the service name must contain
        #[arg(required = true)]
        query: String,
    },

    /// Delete a credential
    Delete {
        /// Entry number as shown by list
        #[arg(required = true)]
        number: usize,
    },
}
