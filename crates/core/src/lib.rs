//! crewplan_core - functional core for the crewplan scheduling app.
//!
//! Everything in this crate is pure data and pure functions over that data.
//! The CLI crate owns all I/O.

pub mod calendar;
pub mod events;
pub mod hours;
pub mod mock_data;
pub mod notifications;
pub mod serde;
pub mod settings;
pub mod staff;
pub mod theme;
