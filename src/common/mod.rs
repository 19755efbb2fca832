pub mod config;
pub mod factory;
pub mod logging;

/// Catch-all result used at the edges of the program (stdin, stdout).
pub type MyResult<T> = core::result::Result<T, Box<dyn std::error::Error>>;
