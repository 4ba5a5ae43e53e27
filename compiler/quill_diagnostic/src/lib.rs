//! Diagnostics for the Quill parser generator.
//!
//! - Stable error codes, so tooling can match on failures without parsing text
//! - A message catalog per locale, passed explicitly wherever text is rendered
//! - Source-annotated reports rendered with `ariadne`
//!
//! Nothing here is global: two builds with different catalogs can run side
//! by side.

mod catalog;
pub mod emitter;
mod error_code;

pub use catalog::{Catalog, Locale, MessageId};
pub use error_code::{ErrorCode, ErrorLevel};
