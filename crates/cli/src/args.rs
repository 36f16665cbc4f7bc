use clap::{Parser, Subcommand, ValueEnum};
use neo_wallets::Nep2Variant;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line arguments for the NEP-2 tool
#[derive(Parser, Debug, Clone)]
#[command(
    name = "neo-nep2",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decrypt, encrypt and inspect Neo NEP-2 encrypted private keys",
    long_about = "Decrypts NEP-2 passphrase-protected private keys for Neo N3 (standard) and Neo Legacy accounts. The passphrase is read from --password, the NEP2_PASSWORD environment variable or an interactive prompt."
)]
pub struct CliArgs {
    /// Specifies the config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Passphrase of the NEP-2 key
    #[arg(
        short = 'p',
        long = "password",
        value_name = "PASSWORD",
        env = "NEP2_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// The verbose log level, overrides the config file and RUST_LOG
    #[arg(long = "verbose", value_enum)]
    pub verbose: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decrypt a NEP-2 key and print the private key as hex
    Decrypt {
        /// Key variant: standard (Neo N3) or legacy (Neo 2)
        #[arg(long, value_name = "VARIANT")]
        variant: Option<Nep2Variant>,

        /// Also print the address the key controls
        #[arg(long)]
        show_address: bool,

        /// The NEP-2 key (starts with 6PY)
        key: String,
    },

    /// Encrypt a hex or WIF private key into a NEP-2 key
    Encrypt {
        /// Key variant: standard (Neo N3) or legacy (Neo 2)
        #[arg(long, value_name = "VARIANT")]
        variant: Option<Nep2Variant>,

        /// The private key, hex or WIF
        key: String,
    },

    /// Check the structure of a NEP-2 key without decrypting it
    Validate {
        /// The NEP-2 key
        key: String,
    },

    /// Print the address of a hex or WIF private key
    Address {
        /// Key variant: standard (Neo N3) or legacy (Neo 2)
        #[arg(long, value_name = "VARIANT")]
        variant: Option<Nep2Variant>,

        /// The private key, hex or WIF
        key: String,
    },
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level logging
    Trace,
    /// Debug level logging
    Debug,
    /// Info level logging
    Info,
    /// Warning level logging
    #[default]
    Warn,
    /// Error level logging
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
