//! Command handlers, one per subcommand

pub mod build;
pub mod prompts;
pub mod publish;
pub mod upload;
