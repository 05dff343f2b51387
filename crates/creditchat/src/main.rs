// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Creditchat - a credit-metered Python/ML chat service.
//!
//! This is the binary entry point for the Creditchat server.

use clap::{Parser, Subcommand};

mod grant;
mod serve;

/// Creditchat - a credit-metered Python/ML chat service.
#[derive(Parser, Debug)]
#[command(name = "creditchat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Creditchat HTTP server.
    Serve,
    /// Provision a profile or grant credits to an existing one.
    Grant {
        /// User id as issued by the auth provider.
        user_id: String,
        /// User email, required when the profile does not exist yet.
        #[arg(long)]
        email: Option<String>,
        /// Credits to grant.
        #[arg(long, default_value_t = 10)]
        credits: i64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match creditchat_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            creditchat_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Grant {
            user_id,
            email,
            credits,
        }) => grant::run_grant(config, &user_id, email.as_deref(), credits).await,
        None => {
            println!("creditchat: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config =
            creditchat_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.service.name, "creditchat");
        assert_eq!(config.credits.cost_per_message, 1);
    }
}
