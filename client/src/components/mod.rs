//! Presentational components.

pub mod article;
