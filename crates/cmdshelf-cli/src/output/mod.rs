//! # Output Formatting
//!
//! Listings are printed either as colored text for people or as JSON for
//! scripts.
//!
//! - [`formatter`]: format selection and dispatch
//! - [`text`]: colored text, picker labels and the details view
//! - [`json`]: machine-readable arrays
//!
//! ```bash
//! cmdshelf list --format json | jq '.[] | .command'
//! ```

mod formatter;
mod json;
mod text;

pub use formatter::{CollectionFormatter, CommandFormatter, OutputFormat};
pub use text::{format_details, picker_label};
