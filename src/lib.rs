//! Rewindify Backend Library
//!
//! This library implements a small HTTP backend in front of the Spotify Web
//! API. It hands out the OAuth2 authorization URL, exchanges authorization
//! codes for tokens, collects a user's recently played tracks inside a time
//! window, and turns a list of track URIs into a new playlist.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and the bearer credential extractor
//! - `config` - Configuration loaded once from the environment
//! - `error` - Client-facing error type
//! - `server` - Router assembly and the HTTP listener
//! - `spotify` - Spotify Web API and accounts client
//! - `types` - Request, response and upstream data structures
//! - `utils` - Timestamp parsing and time-window helpers
//!
//! # Example
//!
//! ```
//! use rewindify::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> rewindify::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for startup and wiring code where any error simply ends the program.
/// Request handling uses [`error::ApiError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for startup failures. Never use it inside a request handler,
/// it terminates the whole server.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, such as an upstream page that could not be
/// fetched or a request that was rejected.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
