/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use crate::pending::PendingAction;
use crate::routing::route_for;
use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use connector::auth::RegisterRequest;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Jobboard", display_name = "Jobboard", bin_name = "jobboard", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
    #[arg(long, global = true, env = "JOBBOARD_LOG_LEVEL", default_value = "warn")]
    log_level: String,
    /// Configuration file, defaults to `<config dir>/jobboard/config.toml`
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AccountType {
    Employer,
    Seeker,
}

impl From<AccountType> for Role {
    fn from(account: AccountType) -> Self {
        match account {
            AccountType::Employer => Role::Employer,
            AccountType::Seeker => Role::Seeker,
        }
    }
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Register {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, value_enum)]
        role: AccountType,
    },
    Login {
        #[arg(short, long)]
        email: Option<String>,
        /// Only accept accounts of this type
        #[arg(long = "as", value_enum)]
        role: Option<AccountType>,
    },
    Logout {
        #[arg(short, long)]
        yes: bool,
    },
    Info,
    Jobs {
        #[command(subcommand)]
        cmd: seeker::JobCommands,
    },
    Applications {
        #[command(subcommand)]
        cmd: seeker::ApplicationCommands,
    },
    Employer {
        #[command(subcommand)]
        cmd: employer::Commands,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub async fn run_cli() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_logging(&cli.log_level);

    let Some(cmd) = cli.cmd else {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    };

    match run(cmd, cli.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cmd: MainCommands, config: Option<PathBuf>) -> Result<()> {
    let path = match config {
        Some(path) => path,
        None => config_file()?,
    };

    let mut session = SessionStore::open(path)?;

    match cmd {
        MainCommands::Config { key, value } => handle_config(&mut session, key, value),

        MainCommands::Register { email, name, role } => {
            let input_fields = [("Email", email), ("Full Name", name)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();

            let input = handle_input(input_fields)?;
            let password = ask_for_password()?;

            let req = RegisterRequest {
                email: input["Email"].clone(),
                full_name: input["Full Name"].clone(),
                role: role.into(),
                password,
            };

            let user = session
                .register(&req)
                .await
                .context("Registration failed")?;

            println!("Registered as {} ({}).", user.full_name, user.role.label());
            println!("Next: `{}`", route_for(Some(&user)).command());
            Ok(())
        }

        MainCommands::Login { email, role } => {
            let email = match email {
                Some(email) => email,
                None => ask_for_input("Email")?,
            };

            let password = ask_for_password()?;

            let user = session
                .login(email, password, role.map(Role::from))
                .await
                .context("Login failed")?;

            println!("Logged in as {} ({}).", user.full_name, user.role.label());
            println!("Next: `{}`", route_for(Some(&user)).command());
            Ok(())
        }

        MainCommands::Logout { yes } => {
            let pending = PendingAction::logout();
            let confirmed = ask_for_confirmation(&pending, yes)?;

            match pending.resolve(confirmed) {
                Some(_) => {
                    session.logout()?;
                    println!("Logged out.");
                }
                None => println!("Cancelled."),
            }

            Ok(())
        }

        MainCommands::Info => {
            let Some(user) = session.current() else {
                println!("Not logged in. Use `jobboard login` to log in.");
                return Ok(());
            };

            println!("User ID: {}", user.id);
            println!("Name: {}", user.full_name);
            println!("Email: {}", user.email);
            println!("Role: {}", user.role.label());
            println!("Server: {}", session.config().server_url());
            println!("Home: {}", route_for(Some(user)));
            Ok(())
        }

        MainCommands::Jobs { cmd } => seeker::handle_jobs(&session, cmd).await,
        MainCommands::Applications { cmd } => seeker::handle_applications(&session, cmd).await,
        MainCommands::Employer { cmd } => employer::handle(&session, cmd).await,
    }
}

fn handle_config(session: &mut SessionStore, key: String, value: Option<String>) -> Result<()> {
    let Ok(config_key) = key.parse::<ConfigKey>() else {
        let valid = ConfigKey::iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("Invalid key: {}. Valid keys are: {}", key, valid);
    };

    match value {
        Some(value) => {
            session.set_value(config_key, Some(value))?;
            match session.config().get(config_key) {
                Some(value) => println!("{} set to \"{}\"", config_key, value),
                None => println!("{} unset", config_key),
            }
        }
        None => match session.config().get(config_key) {
            Some(value) => println!("{}", value),
            None if config_key == ConfigKey::Server => println!("{} [default]", DEFAULT_SERVER),
            None => println!("[unset]"),
        },
    }

    Ok(())
}
