//! Driver scripts: one vehicle operation per line.
//!
//! ```text
//! # warm up, then drive off
//! start
//! idle x2
//! accelerate 50 x5
//! brake 10
//! stop
//! ```
//!
//! Everything after `#` is a comment. Blank lines are ignored. A trailing
//! `x<N>` repeats the command `N` times.

use std::fmt;

use onboard_core::Vehicle;
use thiserror::Error;
use tracing::debug;

/// The script run when no script file is given.
pub const DEMO: &str = "\
start
accelerate 10
brake 10
stop
start
";

/// One driver operation on a [`Vehicle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Start,
    Stop,
    Accelerate(u32),
    Brake(u32),
    FreeWheel,
    Idle,
    Refuel(f64),
    TripReset,
    TotalReset,
}

impl Command {
    pub fn apply(self, vehicle: &mut Vehicle<'_>) {
        match self {
            Self::Start => vehicle.engine_start(),
            Self::Stop => vehicle.engine_stop(),
            Self::Accelerate(target) => vehicle.accelerate(target),
            Self::Brake(amount) => vehicle.brake_by(amount),
            Self::FreeWheel => vehicle.free_wheel(),
            Self::Idle => vehicle.running_idle(),
            Self::Refuel(litres) => vehicle.refuel(litres),
            Self::TripReset => vehicle.trip_reset(),
            Self::TotalReset => vehicle.total_reset(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Stop => write!(f, "stop"),
            Self::Accelerate(target) => write!(f, "accelerate {target}"),
            Self::Brake(amount) => write!(f, "brake {amount}"),
            Self::FreeWheel => write!(f, "freewheel"),
            Self::Idle => write!(f, "idle"),
            Self::Refuel(litres) => write!(f, "refuel {litres}"),
            Self::TripReset => write!(f, "trip-reset"),
            Self::TotalReset => write!(f, "total-reset"),
        }
    }
}

/// A parsed script line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// One-based line number in the script.
    pub line: usize,
    pub command: Command,
    pub repeat: u32,
}

impl Step {
    /// Applies the command `repeat` times.
    pub fn run(&self, vehicle: &mut Vehicle<'_>) {
        debug!(line = self.line, command = %self.command, repeat = self.repeat, "run step");
        for _ in 0..self.repeat {
            self.command.apply(vehicle);
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        if self.repeat != 1 {
            write!(f, " x{}", self.repeat)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a driver script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("line {line}: unknown command `{word}`")]
    UnknownCommand { line: usize, word: String },

    #[error("line {line}: `{command}` expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: `{value}` is not a valid {expected}")]
    InvalidArgument {
        line: usize,
        value: String,
        expected: &'static str,
    },

    #[error("line {line}: `{value}` is not a valid repeat count, use `x<N>` with N >= 1")]
    InvalidRepeat { line: usize, value: String },

    #[error("line {line}: unexpected `{token}`")]
    TrailingInput { line: usize, token: String },
}

/// Parses a whole script, skipping comments and blank lines.
///
/// # Errors
///
/// Returns the first [`CommandError`] found, tagged with its line number.
pub fn parse_script(text: &str) -> Result<Vec<Step>, CommandError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line).transpose())
        .collect()
}

/// Parses one line, returning `None` for blank and comment-only lines.
///
/// # Errors
///
/// Returns a [`CommandError`] if the line is not a valid command.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Step>, CommandError> {
    let code = text.split('#').next().unwrap_or_default();
    let mut tokens = code.split_whitespace();

    let Some(word) = tokens.next() else {
        return Ok(None);
    };

    let command = match word {
        "start" => Command::Start,
        "stop" => Command::Stop,
        "accelerate" => {
            Command::Accelerate(argument(line, "accelerate", "speed in km/h", tokens.next())?)
        }
        "brake" => Command::Brake(argument(line, "brake", "amount in km/h", tokens.next())?),
        "freewheel" => Command::FreeWheel,
        "idle" => Command::Idle,
        "refuel" => Command::Refuel(argument(line, "refuel", "number of litres", tokens.next())?),
        "trip-reset" => Command::TripReset,
        "total-reset" => Command::TotalReset,
        _ => {
            return Err(CommandError::UnknownCommand {
                line,
                word: word.to_owned(),
            });
        }
    };

    let repeat = match tokens.next() {
        Some(token) => parse_repeat(line, token)?,
        None => 1,
    };

    if let Some(token) = tokens.next() {
        return Err(CommandError::TrailingInput {
            line,
            token: token.to_owned(),
        });
    }

    Ok(Some(Step {
        line,
        command,
        repeat,
    }))
}

fn argument<T: std::str::FromStr>(
    line: usize,
    command: &'static str,
    expected: &'static str,
    token: Option<&str>,
) -> Result<T, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument {
        line,
        command,
        expected,
    })?;
    token.parse().map_err(|_| CommandError::InvalidArgument {
        line,
        value: token.to_owned(),
        expected,
    })
}

fn parse_repeat(line: usize, token: &str) -> Result<u32, CommandError> {
    token
        .strip_prefix('x')
        .and_then(|count| count.parse().ok())
        .filter(|&count| count > 0)
        .ok_or_else(|| CommandError::InvalidRepeat {
            line,
            value: token.to_owned(),
        })
}
