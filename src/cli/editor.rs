//! Opening a file at a line in the user's editor.
//!
//! The editor is chosen from `$VISUAL`, then `$EDITOR`, then the config file,
//! then the platform's file opener. Editors are recognized by their base
//! executable name, which selects how the line number is passed.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors launching the editor or opener.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Operating system family, for choosing the default file opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    /// Returns the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Editor settings, captured once so the launcher never reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Value of `$VISUAL`
    pub visual: Option<String>,
    /// Value of `$EDITOR`
    pub editor: Option<String>,
    /// Editor from the config file
    pub fallback: Option<String>,
    pub platform: Platform,
}

impl EditorConfig {
    /// Captures `$VISUAL` and `$EDITOR` from the process environment.
    pub fn from_env(fallback: Option<String>) -> Self {
        Self {
            visual: std::env::var("VISUAL").ok(),
            editor: std::env::var("EDITOR").ok(),
            fallback,
            platform: Platform::current(),
        }
    }

    /// Returns the editor command to use, if any. Empty values count as unset.
    pub fn resolve(&self) -> Option<&str> {
        [&self.visual, &self.editor, &self.fallback]
            .into_iter()
            .filter_map(|value| value.as_deref())
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

/// Editors with a known line-number convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// `nvim`, `vim`: `+LINE FILE`
    Vim,
    /// `hx`: `FILE:LINE`
    Helix,
    /// `code`: `-g FILE:LINE`
    VsCode,
    /// `subl`: `FILE:LINE`
    Sublime,
    /// Anything else: `+LINE FILE`
    Generic,
}

impl EditorKind {
    /// Identifies an editor by the base name of its executable.
    pub fn from_program(program: &str) -> Self {
        let base = Path::new(program)
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let name = base.strip_suffix(".exe").unwrap_or(base.as_ref());
        match name {
            "nvim" | "vim" => EditorKind::Vim,
            "hx" => EditorKind::Helix,
            "code" => EditorKind::VsCode,
            "subl" => EditorKind::Sublime,
            _ => EditorKind::Generic,
        }
    }

    /// Returns the arguments that open `file` at `line`.
    pub fn line_args(self, file: &str, line: usize) -> Vec<String> {
        match self {
            EditorKind::Vim | EditorKind::Generic => vec![format!("+{line}"), file.to_string()],
            EditorKind::Helix | EditorKind::Sublime => vec![format!("{file}:{line}")],
            EditorKind::VsCode => vec!["-g".to_string(), format!("{file}:{line}")],
        }
    }
}

/// A fully resolved program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Builds the command that opens `file` at `line`.
    ///
    /// The editor value may carry its own flags (`"code --wait"`); those come
    /// before the line arguments. Without an editor the platform opener is
    /// used and the line is dropped.
    pub fn for_file(config: &EditorConfig, file: &str, line: usize) -> Self {
        let Some(editor) = config.resolve() else {
            return Self::platform_opener(config.platform, file);
        };
        // resolve() never yields a blank value, so there is always a program.
        let mut parts = editor.split_whitespace();
        let program = parts.next().unwrap_or(editor).to_string();
        let mut args: Vec<String> = parts.map(str::to_string).collect();
        args.extend(EditorKind::from_program(&program).line_args(file, line));
        Self { program, args }
    }

    fn platform_opener(platform: Platform, file: &str) -> Self {
        let (program, args): (&str, Vec<&str>) = match platform {
            Platform::Windows => ("cmd", vec!["/c", "start", "", file]),
            Platform::MacOs => ("open", vec![file]),
            Platform::Other => ("xdg-open", vec![file]),
        };
        Self {
            program: program.to_string(),
            args: args.into_iter().map(str::to_string).collect(),
        }
    }

    /// Starts the program without waiting for it to finish.
    pub fn spawn(&self) -> Result<(), LaunchError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map(drop)
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, file: &str, line: usize) -> Result<(), LaunchError>;
}

/// Launches real editor processes.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    config: EditorConfig,
}

impl SystemEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }
}

impl EditorLauncher for SystemEditor {
    fn open(&self, file: &str, line: usize) -> Result<(), LaunchError> {
        let command = LaunchCommand::for_file(&self.config, file, line);
        tracing::debug!(program = %command.program, args = ?command.args, "launching editor");
        command.spawn()
    }
}
