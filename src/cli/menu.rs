//! The interactive command loop.

use std::io::{BufRead, Write};

use color_eyre::Result;

use crate::commands::{Command, Session};
use crate::constants;

/// What a menu token asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Command),
    Exit,
    Unknown,
}

impl MenuChoice {
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("x") {
            return Self::Exit;
        }
        Command::from_token(token).map_or(Self::Unknown, Self::Run)
    }
}

/// Prompt for commands and run them until `x` or end of input.
///
/// # Errors
///
/// Returns the first failure a command could not recover from.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    loop {
        let Some(token) = session.console.prompt(constants::PROMPT_COMMAND)? else {
            tracing::debug!("input closed, leaving menu");
            break;
        };

        match MenuChoice::parse(&token) {
            MenuChoice::Run(command) => session.execute(command)?,
            MenuChoice::Exit => break,
            MenuChoice::Unknown => writeln!(session.console, "{}", constants::MSG_UNKNOWN_COMMAND)?,
        }
    }
    Ok(())
}
