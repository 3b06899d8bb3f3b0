//! Typed article/author records and the read-only data accessor.
//!
//! This crate owns the data shapes shared by `server` and `client`: the
//! fixture loaded from JSON, the [`DataApi`] lookups over it, and the
//! [`InitialData`] payload that the server embeds into the page and the
//! browser decodes before hydration.
//!
//! Both sides must agree on this payload exactly, so validation happens once
//! at the boundary (fixture load on the server, payload decode in the
//! browser) and the render layer only ever sees resolved article/author pairs.

mod api;
mod model;
mod payload;

pub use api::{Authors, DataApi, DataError, Fixture};
pub use model::{Article, Author, format_iso_date, parse_calendar_date};
pub use payload::InitialData;
