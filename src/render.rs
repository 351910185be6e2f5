use crate::options::{Language, Options, OutputFormat, Template};
use crate::reduce::Reduced;
use crate::units::UnitFamily;

/// One formatted value, decomposed so callers can restyle the pieces.
///
/// `value` is the complete rendering; `sign`, `prefix`, `whole_number` and
/// `postfix` are its segments. `full_postfix` carries the long-form Persian
/// unit wording (`" همت"` → `" هزار میلیارد تومان"`) and is `None` for
/// English output. An empty or unparseable input produces the `Default`
/// object with every segment empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FormattedObject {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<String>,
    pub prefix: String,
    pub postfix: String,
    pub sign: String,
    pub whole_number: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub full_postfix: Option<String>,
}

pub(crate) fn render(reduced: &Reduced, options: &Options, output: OutputFormat) -> FormattedObject {
    let persian = options.language == Language::Fa;
    let family = UnitFamily::of(options.template);

    let mut whole = group_digits(&reduced.integer, &options.thousand_separator);
    if reduced.show_separator {
        whole.push_str(&options.decimal_separator);
        whole.push_str(&reduced.fraction);
    }

    let unit_short = if persian {
        reduced.unit.persian_short(family)
    } else {
        reduced.unit.symbol()
    };
    let unit_full = if persian {
        reduced.unit.persian_full(family)
    } else {
        reduced.unit.symbol()
    };
    let (template_prefix, short_postfix, full_postfix) =
        decorate(options.template, persian, unit_short, unit_full);

    let mut prefix = options.prefix.clone();
    prefix.push_str(&template_prefix);
    let mut postfix = short_postfix;
    postfix.push_str(&options.postfix);
    let mut full = full_postfix;
    full.push_str(&options.postfix);

    let prefix = wrap(&prefix, &options.prefix_marker, output);
    let mut postfix = wrap(&postfix, &options.postfix_marker, output);
    let mut full = wrap(&full, &options.postfix_marker, output);

    if persian {
        whole = to_persian_digits(&whole);
        postfix = to_persian_digits(&postfix);
        full = to_persian_digits(&full);
    }

    let sign = if reduced.negative { "-" } else { "" };
    let mut value = String::with_capacity(sign.len() + prefix.len() + whole.len() + postfix.len());
    value.push_str(sign);
    value.push_str(&prefix);
    value.push_str(&whole);
    value.push_str(&postfix);

    FormattedObject {
        value: Some(value),
        prefix,
        postfix,
        sign: sign.to_string(),
        whole_number: whole,
        full_postfix: persian.then_some(full),
    }
}

/// Template decoration around the scale unit. A selected unit takes the
/// postfix slot; the template wording only fills it when no unit did.
fn decorate(
    template: Template,
    persian: bool,
    unit_short: &str,
    unit_full: &str,
) -> (String, String, String) {
    let mut prefix = String::new();
    let mut short = unit_short.to_string();
    let mut full = unit_full.to_string();
    match template {
        Template::Number => {}
        Template::Usd => {
            if persian {
                if short.is_empty() {
                    short.push_str(" دلار");
                }
                if full.is_empty() {
                    full.push_str(" دلار");
                }
            } else {
                prefix.push('$');
            }
        }
        Template::Irt => {
            if short.is_empty() {
                short.push_str(if persian { " ت" } else { " T" });
            }
            if full.is_empty() {
                full.push_str(if persian { " ت" } else { " T" });
            }
        }
        Template::Irr => {
            if short.is_empty() {
                short.push_str(if persian { " ر" } else { " R" });
            }
            if full.is_empty() {
                full.push_str(if persian { " ر" } else { " R" });
            }
        }
        Template::Percent => {
            if persian {
                if short.is_empty() {
                    short.push('٪');
                } else {
                    short.push_str(" درصد");
                }
                if full.is_empty() {
                    full.push('٪');
                } else {
                    full.push_str(" درصد");
                }
            } else {
                short.push('%');
                full.push('%');
            }
        }
    }
    (prefix, short, full)
}

fn wrap(text: &str, marker: &str, output: OutputFormat) -> String {
    if text.is_empty() {
        return String::new();
    }
    match output {
        OutputFormat::Plain => text.to_string(),
        OutputFormat::Html => {
            if marker.is_empty() {
                text.to_string()
            } else {
                format!("<{marker}>{text}</{marker}>")
            }
        }
        OutputFormat::Markdown => format!("{marker}{text}{marker}"),
    }
}

/// Groups ASCII integer digits in threes from the right.
pub(crate) fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// ASCII digits to Extended Arabic-Indic (U+06F0..U+06F9), a fixed code
/// point offset of 1728.
pub(crate) fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                char::from_u32(c as u32 + 1728).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
