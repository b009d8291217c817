//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod records;
pub mod search;

pub use records::{
    handle_add_command, handle_list_command, handle_remove_command, AddCommands, KindFilter,
};
pub use search::{handle_parse_command, handle_search_command, OutputFormat};
