use core::fmt;

use crate::error::Error;
use crate::normalize::{expand_scientific, latinize_digits, normalize, split_scientific};
use crate::options::{Language, LanguageOverrides, Options, OutputFormat, Precision, Template};
use crate::plan::{magnitude, plan_for};
use crate::reduce::{reduce, tokenize};
use crate::render::{group_digits, render, to_persian_digits, FormattedObject};

/// Formats `input` with `options`, or reports why it cannot be formatted.
pub fn try_format(input: &str, options: &Options) -> Result<FormattedObject, Error> {
    format_as(input, options, options.output_format)
}

/// Formats `input` with `options`. Empty and unparseable inputs map to the
/// empty [`FormattedObject`]; this function never fails.
pub fn format(input: &str, options: &Options) -> FormattedObject {
    try_format(input, options).unwrap_or_default()
}

pub(crate) fn format_as(
    input: &str,
    options: &Options,
    output: OutputFormat,
) -> Result<FormattedObject, Error> {
    let source = normalize(input, options)?;
    let value = tokenize(&source.text)?;
    let plan = plan_for(
        options.precision,
        options.template,
        magnitude(&value),
        source.scientific,
    );
    let reduced = reduce(value, &plan, &source);
    Ok(render(&reduced, options, output))
}

/// Stateful convenience wrapper around [`format`]. Holds one [`Options`] and
/// accepts anything `Display` as input, so numeric types work directly:
///
/// ```
/// use decfmt::{NumberFormatter, Options};
///
/// let formatter = NumberFormatter::new(Options::default());
/// assert_eq!(formatter.to_plain_string(7352.5266845), "7,352.52668");
/// assert_eq!(formatter.to_plain_string("50000.50"), "50,000.50");
/// ```
///
/// The projection methods (`to_plain_string`, `to_html_string`,
/// `to_md_string`, `to_json`) pick their output shape per call without
/// touching the stored options, so a shared formatter stays read-only.
#[derive(Clone, Debug, Default)]
pub struct NumberFormatter {
    options: Options,
}

impl NumberFormatter {
    pub fn new(options: Options) -> NumberFormatter {
        NumberFormatter { options }
    }

    /// A formatter carrying the given language's default options.
    pub fn with_language(language: Language) -> NumberFormatter {
        NumberFormatter::new(Options::new(language))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Switches language, resetting separators and markers to the new
    /// language's defaults and then applying `overrides` on top.
    pub fn set_language(
        &mut self,
        language: Language,
        overrides: LanguageOverrides,
    ) -> &mut NumberFormatter {
        self.options.relocalize(language, overrides);
        self
    }

    pub fn set_template(&mut self, template: Template, precision: Precision) -> &mut NumberFormatter {
        self.options.template = template;
        self.options.precision = precision;
        self
    }

    /// Formats with the stored options, including their output format.
    pub fn format(&self, input: impl fmt::Display) -> FormattedObject {
        format(&input.to_string(), &self.options)
    }

    /// The rendered value in the stored output format, or `""` for inputs
    /// that do not format.
    pub fn to_string_value(&self, input: impl fmt::Display) -> String {
        self.value_as(&input.to_string(), self.options.output_format)
    }

    pub fn to_plain_string(&self, input: impl fmt::Display) -> String {
        self.value_as(&input.to_string(), OutputFormat::Plain)
    }

    pub fn to_html_string(&self, input: impl fmt::Display) -> String {
        self.value_as(&input.to_string(), OutputFormat::Html)
    }

    pub fn to_md_string(&self, input: impl fmt::Display) -> String {
        self.value_as(&input.to_string(), OutputFormat::Markdown)
    }

    /// The decomposed result without the assembled `value`, for callers that
    /// lay the segments out themselves.
    pub fn to_json(&self, input: impl fmt::Display) -> FormattedObject {
        let mut object = self.format(input);
        object.value = None;
        object
    }

    fn value_as(&self, input: &str, output: OutputFormat) -> String {
        format_as(input, &self.options, output)
            .ok()
            .and_then(|object| object.value)
            .unwrap_or_default()
    }

    /// As-you-type formatting: grouping, digit localization and separator
    /// echo only. No precision reduction, no template decoration, and
    /// partial inputs like `"19."` or `"-"` pass through cleanly.
    pub fn live_format(&self, input: impl fmt::Display) -> FormattedObject {
        let separator = self.options.decimal_separator.as_str();
        let persian = self.options.language == Language::Fa;

        let mut text = latinize_digits(&input.to_string());
        if separator != "." {
            text = text.replace(separator, ".");
        }

        if let Some((coefficient, exponent)) = split_scientific(&text) {
            let body = coefficient
                .strip_prefix(['-', '+'])
                .unwrap_or(coefficient);
            // "0.0e0" keeps its typed zero decimals instead of collapsing.
            let zeroish = body.contains('.') && body.bytes().all(|b| b == b'0' || b == b'.');
            if zeroish {
                text = coefficient.to_string();
            } else {
                text = expand_scientific(coefficient, exponent);
            }
        }

        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        let negative = cleaned.starts_with('-');
        let body: String = cleaned.chars().filter(|c| *c != '-').collect();
        if body.is_empty() {
            return FormattedObject {
                value: Some(String::new()),
                ..Default::default()
            };
        }

        let mut parts = body.splitn(2, '.');
        let integer_raw = parts.next().unwrap_or("");
        let fraction: Option<String> =
            parts.next().map(|f| f.chars().filter(|c| c.is_ascii_digit()).collect());

        let trimmed = integer_raw.trim_start_matches('0');
        let integer = if trimmed.is_empty() { "0" } else { trimmed };

        let mut whole = group_digits(integer, &self.options.thousand_separator);
        if let Some(ref digits) = fraction {
            whole.push_str(separator);
            whole.push_str(digits);
        }
        if persian {
            whole = to_persian_digits(&whole);
        }

        // "-0" alone drops its sign; "-0.0" is still being typed.
        let sign = if negative && !(integer == "0" && fraction.is_none()) {
            "-"
        } else {
            ""
        };
        let mut value = String::with_capacity(sign.len() + whole.len());
        value.push_str(sign);
        value.push_str(&whole);

        FormattedObject {
            value: Some(value),
            prefix: String::new(),
            postfix: String::new(),
            sign: sign.to_string(),
            whole_number: whole,
            full_postfix: None,
        }
    }
}
