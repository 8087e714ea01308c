mod commands;

pub use commands::{CacheAction, Cli, Commands};
