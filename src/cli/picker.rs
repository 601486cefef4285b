//! Interactive selection through an external fuzzy finder.
//!
//! Results are written to the picker's stdin as `file:line  text` records,
//! one per line. The picker prints the chosen record on stdout.

use std::io::{self, Write};
use std::process::{ChildStdin, Command, ExitStatus, Stdio};
use std::thread;

use thiserror::Error;

use crate::domain::Heading;

/// Picker command used when none is configured.
pub const DEFAULT_PICKER: &str = "fzf --ansi --reverse --border";

/// Errors from the interactive picker. None of these are fatal to a run.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("picker command is empty")]
    EmptyCommand,

    #[error("failed to launch picker '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("picker I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("picker exited with {status}")]
    Aborted { status: ExitStatus },

    #[error("selection did not match any result: {selection:?}")]
    NoMatch { selection: String },
}

/// Trait for choosing one line from newline-separated input (allows mocking in tests).
pub trait Picker {
    /// Returns the chosen line, trimmed.
    fn choose(&self, input: &str) -> Result<String, PickerError>;
}

/// A picker backed by an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPicker {
    program: String,
    args: Vec<String>,
}

impl CommandPicker {
    /// Parses a command line such as `fzf --reverse` into program and flags.
    pub fn from_command_line(command: &str) -> Result<Self, PickerError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(PickerError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for CommandPicker {
    fn default() -> Self {
        Self {
            program: "fzf".to_string(),
            args: vec![
                "--ansi".to_string(),
                "--reverse".to_string(),
                "--border".to_string(),
            ],
        }
    }
}

impl Picker for CommandPicker {
    fn choose(&self, input: &str) -> Result<String, PickerError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| PickerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdin = child.stdin.take();
        // stdin is fed from its own thread so a picker that writes before it
        // has read everything cannot block on a full stdout pipe.
        let output = thread::scope(|scope| {
            let writer = scope.spawn(move || feed_stdin(stdin, input));
            let output = child.wait_with_output();
            let fed = writer.join().unwrap_or(Ok(()));
            let output = output?;
            fed?;
            Ok::<_, io::Error>(output)
        })?;
        if !output.status.success() {
            return Err(PickerError::Aborted {
                status: output.status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Writes all input and closes the pipe.
///
/// A picker may exit before reading everything; its exit status says why, so a
/// broken pipe is not an error here.
fn feed_stdin(stdin: Option<ChildStdin>, input: &str) -> io::Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };
    match stdin.write_all(input.as_bytes()) {
        Err(err) if err.kind() != io::ErrorKind::BrokenPipe => Err(err),
        _ => Ok(()),
    }
}

/// Formats a heading as a picker record.
pub fn format_candidate(heading: &Heading) -> String {
    format!("{}  {}", heading.location(), heading.text())
}

/// Formats all results as newline-separated picker input.
pub fn candidates(results: &[Heading]) -> String {
    results
        .iter()
        .map(format_candidate)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Finds the result whose `file:line` occurs in the selected line.
///
/// The first match in result order wins. A location that is a prefix of
/// another (`a.md:1` and `a.md:12`) is not disambiguated.
pub fn select_heading<'a>(results: &'a [Heading], selection: &str) -> Option<&'a Heading> {
    results
        .iter()
        .find(|heading| selection.contains(&heading.location()))
}

/// Runs the picker over `results` and returns the chosen heading.
pub fn pick_heading<'a, P: Picker + ?Sized>(
    picker: &P,
    results: &'a [Heading],
) -> Result<&'a Heading, PickerError> {
    let selection = picker.choose(&candidates(results))?;
    select_heading(results, &selection).ok_or(PickerError::NoMatch { selection })
}
