//! # Command-Line Interface
//!
//! User-facing commands, the interactive shell, and output formatting.
//!
//! ## Commands
//!
//! | Command | Arguments | Effect |
//! |---------|-----------|--------|
//! | `add` | `<name> <phone>` | Create a contact or append a phone |
//! | `change` | `<name> <old> <new>` | Replace a phone in place |
//! | `phone` | `<name>` | Show phones |
//! | `all` | | List contacts |
//! | `add-birthday` | `<name> <DD.MM.YYYY>` | Set birthday |
//! | `show-birthday` | `<name>` | Show birthday |
//! | `birthdays` | | Congratulations due in the next week |
//! | `delete` | `<name>` | Delete a contact |
//! | `remove-phone` | `<name> <phone>` | Remove a phone |
//!
//! Running `contacts` with no command starts the interactive shell, which
//! accepts the same commands plus `hello`, `close` and `exit`.
//!
//! ## Output Formats
//!
//! One-shot commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! contacts --verbose birthdays
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod action;
mod shell;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use action::{Action, ActionContext, ContactSummary, ParseError, Reply};
pub use shell::{parse_input, Shell, Step};
