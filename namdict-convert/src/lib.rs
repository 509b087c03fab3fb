//! Conversion of the nam_dict first-name dataset into the `name;origins;`
//! list format.
//!
//! The pass runs in four stages over the whole file held in memory:
//! character normalization, fixed-width line parsing, aggregation by name,
//! and serialization behind a fixed header banner.

pub mod aggregate;
pub mod convert;
pub mod error;
pub mod line;
pub mod normalize;
pub mod options;
pub mod report;
pub mod serialize;

pub use aggregate::NameAggregate;
pub use convert::{Conversion, convert_bytes, convert_file, convert_text};
pub use error::ConvertError;
pub use line::{ParseOutcome, ParsedLine, SkipReason, parse_line, surface_forms};
pub use normalize::{decode_latin1, normalize_name};
pub use options::ConvertOptions;
pub use report::{ConversionReport, Warning};
pub use serialize::{render, render_record};
