//! Data model for the nam_dict first-name dataset and its converted form.
//!
//! The source dataset encodes, for every first name, a gender code and a
//! rarity digit for each of 55 fixed origin columns. This crate defines those
//! codes, the column table, the `country:gender:rarity` origin entry, and a
//! reader for the simplified `name;origins;` record format the converter
//! writes.

pub mod error;
pub mod gender;
pub mod origin;
pub mod record;

pub use error::RecordError;
pub use gender::{Gender, GenderParseError};
pub use origin::{ORIGIN_COLUMNS, OriginColumn, OriginEntry, OriginParseError, Rarity};
pub use record::{NameRecord, parse_records};
