// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Command loop and dispatching.
//!
//! This module drives a [`Session`] from a stream of text commands, either an
//! interactive terminal or a script file.
//!
//! # Organization
//!
//! * [`commands`]: Executes one parsed command and renders its report lines.

pub mod commands;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::{commander, session::Session};

pub use commands::{Flow, handle_command};

/// Reads commands from `input` until it is exhausted or `EXIT` is entered.
///
/// When `prompt` is set it is written before each command is read.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Invalid
/// commands and failed session operations are reported on `out` and do not
/// end the loop.
pub fn run_commands<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
    prompt: Option<&str>,
) -> Result<()> {
    let mut line = String::new();

    loop {
        if let Some(prompt) = prompt {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line).context("Failed to read command")? == 0 {
            tracing::debug!("End of input");
            break;
        }

        let command = match commander::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(input = line.trim(), "Rejected command");
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        if handle_command(session, command, &mut input, &mut out)? == Flow::Exit {
            break;
        }
    }

    out.flush().context("Failed to flush output")
}
