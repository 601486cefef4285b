//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic markdown creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::MdheadsCommand;
#[allow(unused_imports)]
pub use document::TestDoc;
#[allow(unused_imports)]
pub use env::TestEnv;
