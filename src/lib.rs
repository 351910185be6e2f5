//! Locale- and template-aware display formatting for decimal numbers.
//!
//! `decfmt` turns a numeric input — a decimal string, a numeric literal, a
//! value in scientific notation, or a string using Persian/Arabic digits —
//! into a display string for English or Persian audiences. The pipeline is
//! string-based end to end: magnitudes are classified from digit counts and
//! rounding is carried digit by digit, so values anywhere between 10⁻³⁰ and
//! 10²¹ format exactly, far past where `f64` loses digits.
//!
//! ```
//! use decfmt::{format, Options};
//!
//! let result = format("7352.5266845", &Options::default());
//! assert_eq!(result.value.as_deref(), Some("7,352.52668"));
//! ```
//!
//! Precision is tiered (`high`, `medium`, `low`, or `auto`), and the
//! reduction adapts to the value's magnitude: large values compress into
//! scale units, tiny ones into a subscript zero-run notation.
//!
//! ```
//! use decfmt::{format, Language, Options, Precision, Template};
//!
//! let medium = Options::default().precision(Precision::Medium);
//! assert_eq!(format("7352.5266845", &medium).value.as_deref(), Some("7.35K"));
//! assert_eq!(
//!     format("0.0000000000000000000000000000002029697", &medium)
//!         .value
//!         .as_deref(),
//!     Some("0.0₂₉203")
//! );
//!
//! let toman = Options::new(Language::Fa)
//!     .template(Template::Usd)
//!     .precision(Precision::Auto);
//! assert_eq!(
//!     format("423000000000000000000", &toman).value.as_deref(),
//!     Some("۴۲۳ میلیون همت")
//! );
//! ```
//!
//! Scientific notation expands before reduction, and inputs still being
//! typed (`"19."`) pass through with their trailing separator intact:
//!
//! ```
//! use decfmt::{NumberFormatter, Options, Precision, Template};
//!
//! let formatter = NumberFormatter::new(Options::default());
//! assert_eq!(formatter.to_plain_string("1.23e-3"), "0.00123");
//!
//! let mut usd = NumberFormatter::new(Options::default());
//! usd.set_template(Template::Usd, Precision::High);
//! assert_eq!(usd.to_plain_string("19."), "$19.");
//! ```

mod constants;
mod error;
mod formatter;
mod normalize;
mod options;
mod plan;
mod reduce;
mod render;
mod units;

pub use error::Error;
pub use formatter::{format, try_format, NumberFormatter};
pub use options::{Language, LanguageOverrides, Options, OutputFormat, Precision, Template};
pub use render::FormattedObject;
