//! FunPoint Command Line Tool
//!
//! Provides commands for working with CheckMacValue parameter files:
//! - sign: Compute (and optionally attach) the checksum token
//! - verify: Check the token carried inside a parameter file
//! - canonicalize: Print the canonical string fed to the hash
//!
//! Parameter files are JSON objects of string values, e.g.
//! `{"MerchantID": "1000031", "TotalAmount": "100"}`.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use funpoint_core::{ParameterSet, SecretPair, CHECK_MAC_VALUE};
use funpoint_mac::{canonical_string, sign, verify};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "funpoint")]
#[command(version)]
#[command(about = "FunPoint CLI - Sign, verify, and canonicalize checkout parameters")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the CheckMacValue for a parameter file
    #[command(about = "Compute the CheckMacValue for a JSON parameter file")]
    Sign {
        /// Path to the JSON parameter file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Merchant HashKey
        #[arg(long, env = "FUNPOINT_HASH_KEY")]
        hash_key: String,

        /// Merchant HashIV
        #[arg(long, env = "FUNPOINT_HASH_IV")]
        hash_iv: String,

        /// Print the full parameter set with the token attached
        #[arg(long, short)]
        attach: bool,
    },

    /// Verify the CheckMacValue carried inside a parameter file
    #[command(about = "Verify the CheckMacValue inside a JSON parameter file")]
    Verify {
        /// Path to the JSON parameter file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Merchant HashKey
        #[arg(long, env = "FUNPOINT_HASH_KEY")]
        hash_key: String,

        /// Merchant HashIV
        #[arg(long, env = "FUNPOINT_HASH_IV")]
        hash_iv: String,
    },

    /// Print the canonical hash input for a parameter file
    #[command(about = "Print the canonical string fed to SHA-256")]
    Canonicalize {
        /// Path to the JSON parameter file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Merchant HashKey
        #[arg(long, env = "FUNPOINT_HASH_KEY")]
        hash_key: String,

        /// Merchant HashIV
        #[arg(long, env = "FUNPOINT_HASH_IV")]
        hash_iv: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign {
            file,
            hash_key,
            hash_iv,
            attach,
        } => handle_sign(&file, &hash_key, &hash_iv, attach),
        Commands::Verify {
            file,
            hash_key,
            hash_iv,
        } => handle_verify(&file, &hash_key, &hash_iv),
        Commands::Canonicalize {
            file,
            hash_key,
            hash_iv,
        } => handle_canonicalize(&file, &hash_key, &hash_iv),
    }
}

fn load_params(file: &PathBuf) -> Result<ParameterSet> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Not a JSON object of strings: {}", file.display()))
}

fn load_secrets(hash_key: &str, hash_iv: &str) -> Result<SecretPair> {
    SecretPair::new(hash_key, hash_iv).context("Invalid merchant secrets")
}

fn handle_sign(file: &PathBuf, hash_key: &str, hash_iv: &str, attach: bool) -> Result<()> {
    let params = load_params(file)?;
    let secrets = load_secrets(hash_key, hash_iv)?;

    if attach {
        let signed = funpoint_mac::signed(&params, &secrets);
        println!("{}", serde_json::to_string_pretty(&signed)?);
    } else {
        println!("{}", sign(&params, &secrets));
    }
    Ok(())
}

fn handle_verify(file: &PathBuf, hash_key: &str, hash_iv: &str) -> Result<()> {
    let params = load_params(file)?;
    let secrets = load_secrets(hash_key, hash_iv)?;

    if !params.contains_key(CHECK_MAC_VALUE) {
        bail!("No CheckMacValue in {}", file.display());
    }

    if verify(&params, &secrets) {
        println!("CheckMacValue valid");
        Ok(())
    } else {
        bail!("CheckMacValue mismatch");
    }
}

fn handle_canonicalize(file: &PathBuf, hash_key: &str, hash_iv: &str) -> Result<()> {
    let params = load_params(file)?;
    let secrets = load_secrets(hash_key, hash_iv)?;

    println!("{}", canonical_string(&params, &secrets));
    Ok(())
}
