//! crewplan_cli - terminal front-end for the crewplan scheduling app.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use app::App;
pub use config::Config;
pub use error::{CliError, Result};
