use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Output locale. Controls digit glyphs, default separators and the wording
/// of template decorations and scale units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    En,
    Fa,
}

/// Decoration template applied around the reduced number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Template {
    #[default]
    Number,
    Usd,
    Irt,
    Irr,
    Percent,
}

/// Precision tier. `Auto` resolves per value: `High` while the magnitude sits
/// in `[1e-4, 1e11)`, `Medium` outside it, and always `Low` for the percent
/// template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Precision {
    Auto,
    #[default]
    High,
    Medium,
    Low,
}

/// Markup applied to the prefix and postfix segments of the rendered value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    #[default]
    Plain,
    Html,
    Markdown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Number => "number",
            Template::Usd => "usd",
            Template::Irt => "irt",
            Template::Irr => "irr",
            Template::Percent => "percent",
        }
    }

    /// Parses a template name, falling back to `Number` for anything
    /// unrecognized. Matching is case insensitive.
    pub fn parse(value: &str) -> Template {
        match value.to_ascii_lowercase().as_str() {
            "usd" => Template::Usd,
            "irt" => Template::Irt,
            "irr" => Template::Irr,
            "percent" => Template::Percent,
            _ => Template::Number,
        }
    }
}

impl Precision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Auto => "auto",
            Precision::High => "high",
            Precision::Medium => "medium",
            Precision::Low => "low",
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fa" => Ok(Language::Fa),
            _ => Err(Error::Unparseable(value.to_string())),
        }
    }
}

impl FromStr for Template {
    type Err = Error;

    /// Never fails: unrecognized names fall back to `Number`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Template::parse(value))
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Ok(Precision::Auto),
            "high" => Ok(Precision::High),
            "medium" => Ok(Precision::Medium),
            "low" => Ok(Precision::Low),
            _ => Err(Error::Unparseable(value.to_string())),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "html" => Ok(OutputFormat::Html),
            "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(Error::Unparseable(value.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Template {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Template {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TemplateVisitor;

        impl serde::de::Visitor<'_> for TemplateVisitor {
            type Value = Template;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a template name")
            }

            // Unknown names fall back to the plain number template.
            fn visit_str<E>(self, value: &str) -> Result<Template, E>
            where
                E: serde::de::Error,
            {
                Ok(Template::parse(value))
            }
        }

        deserializer.deserialize_str(TemplateVisitor)
    }
}

/// Formatting configuration. Immutable during a `format` call: the engine
/// only ever reads it, so one `Options` can be shared across threads.
///
/// Construct with [`Options::new`] to pick up the per-language separator and
/// marker defaults, then adjust with the builder methods:
///
/// ```
/// use decfmt::{Language, Options, Template};
///
/// let options = Options::new(Language::Fa).template(Template::Irt);
/// assert_eq!(options.thousand_separator, "\u{66c}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    pub language: Language,
    pub template: Template,
    pub precision: Precision,
    pub output_format: OutputFormat,
    /// Tag name (HTML) or literal wrapper (Markdown) around the prefix.
    pub prefix_marker: String,
    /// Tag name (HTML) or literal wrapper (Markdown) around the postfix.
    pub postfix_marker: String,
    /// Caller-supplied text prepended before any template decoration.
    pub prefix: String,
    /// Caller-supplied text appended after any template decoration.
    pub postfix: String,
    pub thousand_separator: String,
    pub decimal_separator: String,
}

/// Per-call overrides layered on top of a language's separator and marker
/// defaults by [`NumberFormatter::set_language`](crate::NumberFormatter::set_language).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageOverrides {
    pub prefix_marker: Option<String>,
    pub postfix_marker: Option<String>,
    pub prefix: Option<String>,
    pub postfix: Option<String>,
    pub thousand_separator: Option<String>,
    pub decimal_separator: Option<String>,
}

impl Options {
    /// Options with the given language's defaults: `","` / `"."` separators
    /// for English, `"٬"` (U+066C) / `"٫"` (U+066B) for Persian. Template
    /// `number`, precision `high`, plain output, `"i"` markers.
    pub fn new(language: Language) -> Options {
        let (thousand, decimal) = language.default_separators();
        Options {
            language,
            template: Template::Number,
            precision: Precision::High,
            output_format: OutputFormat::Plain,
            prefix_marker: "i".to_string(),
            postfix_marker: "i".to_string(),
            prefix: String::new(),
            postfix: String::new(),
            thousand_separator: thousand.to_string(),
            decimal_separator: decimal.to_string(),
        }
    }

    pub fn template(mut self, template: Template) -> Options {
        self.template = template;
        self
    }

    pub fn precision(mut self, precision: Precision) -> Options {
        self.precision = precision;
        self
    }

    pub fn output_format(mut self, output_format: OutputFormat) -> Options {
        self.output_format = output_format;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Options {
        self.prefix = prefix.into();
        self
    }

    pub fn postfix(mut self, postfix: impl Into<String>) -> Options {
        self.postfix = postfix.into();
        self
    }

    pub fn prefix_marker(mut self, marker: impl Into<String>) -> Options {
        self.prefix_marker = marker.into();
        self
    }

    pub fn postfix_marker(mut self, marker: impl Into<String>) -> Options {
        self.postfix_marker = marker.into();
        self
    }

    pub fn thousand_separator(mut self, separator: impl Into<String>) -> Options {
        self.thousand_separator = separator.into();
        self
    }

    pub fn decimal_separator(mut self, separator: impl Into<String>) -> Options {
        self.decimal_separator = separator.into();
        self
    }

    /// Switches language, resetting separators and markers to the new
    /// language's defaults before applying `overrides`.
    pub(crate) fn relocalize(&mut self, language: Language, overrides: LanguageOverrides) {
        let defaults = Options::new(language);
        self.language = language;
        self.prefix_marker = overrides.prefix_marker.unwrap_or(defaults.prefix_marker);
        self.postfix_marker = overrides.postfix_marker.unwrap_or(defaults.postfix_marker);
        self.prefix = overrides.prefix.unwrap_or_default();
        self.postfix = overrides.postfix.unwrap_or_default();
        self.thousand_separator = overrides
            .thousand_separator
            .unwrap_or(defaults.thousand_separator);
        self.decimal_separator = overrides
            .decimal_separator
            .unwrap_or(defaults.decimal_separator);
    }
}

impl Language {
    pub(crate) fn default_separators(&self) -> (&'static str, &'static str) {
        match self {
            Language::En => (",", "."),
            Language::Fa => ("\u{66c}", "\u{66b}"),
        }
    }
}

impl Default for Options {
    fn default() -> Options {
        Options::new(Language::En)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn language_defaults() {
        let en = Options::new(Language::En);
        assert_eq!(en.thousand_separator, ",");
        assert_eq!(en.decimal_separator, ".");

        let fa = Options::new(Language::Fa);
        assert_eq!(fa.thousand_separator, "٬");
        assert_eq!(fa.decimal_separator, "٫");
        assert_eq!(fa.prefix_marker, "i");
    }

    #[test]
    fn template_parse_falls_back_to_number() {
        assert_eq!(Template::parse("usd"), Template::Usd);
        assert_eq!(Template::parse("USD"), Template::Usd);
        assert_eq!(Template::parse("euro"), Template::Number);
        assert_eq!(Template::parse(""), Template::Number);
    }

    #[test]
    fn relocalize_layers_overrides_over_defaults() {
        let mut options = Options::new(Language::En).prefix("~");
        options.relocalize(
            Language::Fa,
            LanguageOverrides {
                decimal_separator: Some(".".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(options.language, Language::Fa);
        assert_eq!(options.thousand_separator, "٬");
        assert_eq!(options.decimal_separator, ".");
        // Overrides replace, not merge: the old prefix does not survive.
        assert_eq!(options.prefix, "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_template_deserializes_as_number() {
        let template: Template = serde_json::from_str("\"bitcoin\"").unwrap();
        assert_eq!(template, Template::Number);
        let template: Template = serde_json::from_str("\"irr\"").unwrap();
        assert_eq!(template, Template::Irr);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_deserialize_with_camel_case_keys() {
        let options: Options =
            serde_json::from_str(r#"{"language":"fa","template":"usd","outputFormat":"html"}"#).unwrap();
        assert_eq!(options.language, Language::Fa);
        assert_eq!(options.template, Template::Usd);
        assert_eq!(options.output_format, OutputFormat::Html);
        // Defaults fill the rest; separators stay English because `default`
        // fills missing fields without consulting `language`.
        assert_eq!(options.decimal_separator, ".");
    }
}
