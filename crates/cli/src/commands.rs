//! Command execution. Each command returns the text printed on stdout.

use anyhow::{Context, Result};
use neo_nep2::{decrypt_with_params, validate_encrypted};
use neo_wallets::KeyPair;
use tracing::info;
use zeroize::Zeroizing;

use crate::args::Command;
use crate::config::CliConfig;

/// Runs `command`; `passphrase` is only invoked by commands that need one.
pub fn execute<F>(command: &Command, config: &CliConfig, passphrase: F) -> Result<Zeroizing<String>>
where
    F: FnOnce() -> Result<Zeroizing<String>>,
{
    match command {
        Command::Decrypt {
            variant,
            show_address,
            key,
        } => {
            let variant = variant.unwrap_or(config.variant);
            let passphrase = passphrase()?;
            let hex = decrypt_with_params(variant, key, &passphrase, &config.scrypt)
                .context("failed to decrypt NEP-2 key")?;
            info!(%variant, "NEP-2 key decrypted");

            if *show_address {
                let address = KeyPair::from_hex(&hex)?.address(variant);
                Ok(Zeroizing::new(format!("{}\n{}", hex.as_str(), address)))
            } else {
                Ok(hex)
            }
        }
        Command::Encrypt { variant, key } => {
            let variant = variant.unwrap_or(config.variant);
            let key_pair = KeyPair::from_key_str(key).context("invalid private key")?;
            let passphrase = passphrase()?;
            let nep2 = key_pair
                .to_nep2(&passphrase, variant, &config.scrypt)
                .context("failed to encrypt private key")?;
            info!(%variant, "private key encrypted");
            Ok(Zeroizing::new(nep2))
        }
        Command::Validate { key } => {
            let verdict = if validate_encrypted(key) { "valid" } else { "invalid" };
            Ok(Zeroizing::new(verdict.to_string()))
        }
        Command::Address { variant, key } => {
            let variant = variant.unwrap_or(config.variant);
            let key_pair = KeyPair::from_key_str(key).context("invalid private key")?;
            Ok(Zeroizing::new(key_pair.address(variant)))
        }
    }
}

/// Takes the passphrase from the command line or environment, else prompts without echo.
pub fn resolve_passphrase(given: Option<&str>) -> Result<Zeroizing<String>> {
    match given {
        Some(passphrase) => Ok(Zeroizing::new(passphrase.to_string())),
        None => rpassword::prompt_password("Passphrase: ")
            .map(Zeroizing::new)
            .context("failed to read passphrase"),
    }
}
