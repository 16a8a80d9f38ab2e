//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use super::action::{Action, ActionContext};
use super::output::{Output, OutputFormat};
use super::shell::{self, GREETING_REPLY};
use crate::storage::{Config, ContactStore};

#[derive(Parser)]
#[command(name = "contacts")]
#[command(author, version, about = "Local-first contact book with birthday reminders")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Address book file
    #[arg(long, global = true, env = "CONTACTS_BOOK")]
    pub book: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "CONTACTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Date to use as today (YYYY-MM-DD)
    #[arg(long, global = true, hide = true, env = "CONTACTS_TODAY")]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a contact, or add a phone to an existing contact
    Add {
        /// Contact name
        name: String,

        /// Phone number (10 digits)
        phone: String,
    },

    /// Replace one of a contact's phones
    Change {
        /// Contact name
        name: String,

        /// Phone to replace
        old_phone: String,

        /// New phone number (10 digits)
        new_phone: String,
    },

    /// Show a contact's phones
    Phone {
        /// Contact name
        name: String,
    },

    /// List all contacts
    All,

    /// Set a contact's birthday
    AddBirthday {
        /// Contact name
        name: String,

        /// Birthday as DD.MM.YYYY
        date: String,
    },

    /// Show a contact's birthday
    ShowBirthday {
        /// Contact name
        name: String,
    },

    /// Show who to congratulate in the coming week
    Birthdays,

    /// Delete a contact
    Delete {
        /// Contact name
        name: String,
    },

    /// Remove a phone from a contact
    RemovePhone {
        /// Contact name
        name: String,

        /// Phone to remove
        phone: String,
    },

    /// Say hello
    Hello,

    /// Start the interactive assistant (default)
    Shell,
}

impl Commands {
    fn into_action(self) -> Option<Action> {
        let action = match self {
            Commands::Add { name, phone } => Action::Add { name, phone },
            Commands::Change {
                name,
                old_phone,
                new_phone,
            } => Action::Change {
                name,
                old_phone,
                new_phone,
            },
            Commands::Phone { name } => Action::Phone { name },
            Commands::All => Action::All,
            Commands::AddBirthday { name, date } => Action::AddBirthday { name, date },
            Commands::ShowBirthday { name } => Action::ShowBirthday { name },
            Commands::Birthdays => Action::Birthdays,
            Commands::Delete { name } => Action::Delete { name },
            Commands::RemovePhone { name, phone } => Action::RemovePhone { name, phone },
            Commands::Hello | Commands::Shell => return None,
        };
        Some(action)
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli.format.unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);

    let store = ContactStore::new(config.book_path(cli.book.as_deref()));
    output.verbose_ctx("store", &format!("Address book: {}", store.path().display()));

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let ctx = ActionContext {
        today,
        window_days: config.birthday_window_days,
    };
    output.verbose_ctx("birthdays", &format!("Today is {}, window {} days", today, ctx.window_days));

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Hello => output.success(GREETING_REPLY),
        Commands::Shell => {
            if output.is_json() {
                output.verbose("JSON output does not apply to the interactive shell");
            }
            shell::run(&store, ctx, &output)?
        }
        command => {
            if let Some(action) = command.into_action() {
                execute(&store, &action, &ctx, &output)?
            }
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Runs one action against the stored book, saving it if it changed
fn execute(store: &ContactStore, action: &Action, ctx: &ActionContext, output: &Output) -> Result<()> {
    let mut book = store.read_all()?;
    output.verbose_ctx(action.name(), &format!("Loaded {} contacts", book.len()));

    let reply = action.apply(&mut book, ctx)?;

    if action.mutates() {
        store.write_all(&book)?;
        output.verbose_ctx(action.name(), &format!("Saved {} contacts", book.len()));
    }

    output.reply(&reply);
    Ok(())
}
