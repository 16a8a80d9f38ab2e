//! Interactive assistant shell
//!
//! Reads one command per line, replies on the same stream, and keeps going
//! after errors. The address book is saved when the session ends, whether
//! by `close`/`exit` or end of input.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use super::action::{Action, ActionContext};
use super::output::Output;
use crate::domain::AddressBook;
use crate::storage::ContactStore;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GREETING_REPLY: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";

/// What the shell does after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading, optionally printing a reply first
    Continue(Option<String>),
    /// Print the farewell and stop
    Exit(String),
}

/// Splits a line into a lowercased command word and its arguments
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    Some((command, words.collect()))
}

/// A shell session over a borrowed address book
pub struct Shell<'a> {
    book: &'a mut AddressBook,
    ctx: ActionContext,
    output: &'a Output,
}

impl<'a> Shell<'a> {
    pub fn new(book: &'a mut AddressBook, ctx: ActionContext, output: &'a Output) -> Self {
        Self { book, ctx, output }
    }

    /// Handles a single input line
    pub fn handle_line(&mut self, line: &str) -> Step {
        let Some((command, args)) = parse_input(line) else {
            return Step::Continue(None);
        };

        match command.as_str() {
            "close" | "exit" => return Step::Exit(FAREWELL.to_string()),
            "hello" => return Step::Continue(Some(GREETING_REPLY.to_string())),
            _ => {}
        }

        let action = match Action::parse(&command, &args) {
            Ok(action) => action,
            Err(e) => {
                self.output.verbose_ctx("shell", &format!("{:?}", e));
                return Step::Continue(Some(e.to_string()));
            }
        };

        let reply = match action.apply(self.book, &self.ctx) {
            Ok(reply) => reply.to_text(),
            Err(e) => {
                self.output
                    .verbose_ctx(action.name(), &format!("{:?} error: {}", e.kind(), e));
                e.to_string()
            }
        };

        Step::Continue(Some(reply))
    }

    /// Runs the read-reply loop until exit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", WELCOME)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                self.output.verbose_ctx("shell", "End of input");
                break;
            };
            let line = line.context("Failed to read command")?;

            match self.handle_line(&line) {
                Step::Continue(None) => {}
                Step::Continue(Some(reply)) => writeln!(out, "{}", reply)?,
                Step::Exit(farewell) => {
                    writeln!(out, "{}", farewell)?;
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Loads the book, runs a session on stdin/stdout, then saves the book
pub fn run(store: &ContactStore, ctx: ActionContext, output: &Output) -> Result<()> {
    let mut book = store.read_all()?;
    output.verbose_ctx("shell", &format!("Loaded {} contacts", book.len()));

    let session = {
        let stdin = io::stdin();
        let mut shell = Shell::new(&mut book, ctx, output);
        shell.run(stdin.lock(), io::stdout())
    };

    store.write_all(&book)?;
    output.verbose_ctx("shell", &format!("Saved {} contacts", book.len()));

    session
}
