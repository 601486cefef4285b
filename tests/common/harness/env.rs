//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use super::{MdheadsCommand, TestDoc};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop. It
/// holds the tree to search and a separate config home, so the binary never
/// picks up the developer's own config file.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the directory that gets searched
    root: PathBuf,
    /// Path used as `$XDG_CONFIG_HOME` and `$HOME`
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes tree.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("notes");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&root).expect("Failed to create notes directory");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            root,
            config_home,
        }
    }

    /// Returns the path to the notes directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a file below the notes directory, creating parent directories.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a markdown document below the notes directory.
    pub fn add_doc(&self, name: &str, doc: &TestDoc) -> PathBuf {
        self.write_file(name, &doc.render())
    }

    /// Writes the XDG config file read by the binary.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.join("mdheads");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> MdheadsCommand {
        MdheadsCommand::new()
            .config_home(&self.config_home)
            .path(&self.root)
    }

    /// Creates a command that uses this environment's config but no `--path`.
    pub fn cmd_without_path(&self) -> MdheadsCommand {
        MdheadsCommand::new().config_home(&self.config_home)
    }

    /// Returns the `file:line` location the binary prints for a heading.
    pub fn location(&self, name: &str, line: usize) -> String {
        format!("{}:{}", self.root.join(name).display(), line)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_notes_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "notes directory should exist");
    }

    #[test]
    fn test_env_write_file_creates_parents() {
        let env = TestEnv::new();
        let path = env.write_file("deep/nested/note.md", "# Hi");
        assert!(path.exists());
    }

    #[test]
    fn test_env_location_joins_root() {
        let env = TestEnv::new();
        assert!(env.location("a.md", 3).ends_with("a.md:3"));
    }
}
