//! WiFiQ presentation metadata as typed static data.
//!
//! This crate holds the read-only lookup tables the presentation layer
//! pairs with the calculation core: display labels for the eight derived
//! values, the seven classical planets and per-square color palettes, the
//! planetary-hour tables, and the angel source list. All data is
//! `&'static`; nothing here computes.
//!
//! # Example
//!
//! ```
//! use wifq::{Field, Square};
//! use wifq_tables::{day_column, palette, value_label};
//!
//! assert_eq!(value_label(Field::Key).meaning, "The Key");
//! assert_eq!(palette(Square::Murabba).light, "#2ecc71");
//! assert_eq!(day_column(Square::Murabba.day()), Some(3));
//! ```
//!
//! Enable the `serde` feature for `Serialize` derives on the plain data
//! records.

// Value and angel labels
mod labels;

// Planets and square palettes
mod planets;

// Planetary-hour tables
mod hours;

pub use hours::{day_column, HourRow, DAY_COLUMNS, DAY_HOURS, NIGHT_HOURS};
pub use labels::{value_label, AngelSource, ValueLabel, ANGEL_SOURCES, VALUE_LABELS};
pub use planets::{palette, planet_by_arabic, Planet, SquarePalette, CHALDEAN_ORDER, SQUARE_PALETTES};
