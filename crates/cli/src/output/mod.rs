//! Output formatting functions.
//!
//! Every command renders through one of two formatters: `json` for machine
//! output and `pretty` for the terminal.

pub mod color;
pub mod json;
pub mod pretty;
