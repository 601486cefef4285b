//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `mdheads` binary.
///
/// The environment is scrubbed of `$VISUAL` and `$EDITOR` so results don't
/// depend on the developer's shell.
pub struct MdheadsCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl MdheadsCommand {
    /// Creates a new command for the `mdheads` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--path` option to specify the directory to search.
    pub fn path(mut self, path: &Path) -> Self {
        self.args.push("--path".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the process.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Points the config directory lookup at `dir`.
    pub fn config_home(self, dir: &Path) -> Self {
        let dir = dir.to_string_lossy().to_string();
        self.env("XDG_CONFIG_HOME", &dir).env("HOME", &dir)
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("mdheads").expect("Failed to find mdheads binary");
        cmd.env_remove("VISUAL").env_remove("EDITOR").env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Query Shortcuts
    // ===========================================

    /// Searches for a keyword.
    pub fn keyword(self, keyword: &str) -> Self {
        self.args([keyword])
    }

    /// Adds `--all`.
    pub fn all(self) -> Self {
        self.args(["--all"])
    }

    /// Adds `--no-pick`.
    pub fn no_pick(self) -> Self {
        self.args(["--no-pick"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for MdheadsCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        MdheadsCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_path() {
        let temp = TempDir::new().unwrap();
        let cmd = MdheadsCommand::new().path(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--path");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = MdheadsCommand::new().keyword("rust").format_json().no_pick();
        let args = cmd.get_args();
        assert!(args.contains(&"rust".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
        assert!(args.contains(&"--no-pick".to_string()));
    }
}
