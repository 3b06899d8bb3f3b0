//! Formatting helpers shared across components.

pub mod date;
