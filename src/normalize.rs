use crate::constants::MAX_SCI_FRACTION;
use crate::error::Error;
use crate::options::Options;

/// A canonicalized input string: ASCII digits, at most one leading `-`, at
/// most one `.` as the decimal separator, no redundant leading zeros.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Normalized {
    pub text: String,
    /// Input arrived in scientific notation and was expanded.
    pub scientific: bool,
    /// Input carried a decimal separator.
    pub has_separator: bool,
    /// Input carried a trailing decimal separator with no fraction digits,
    /// e.g. `"19."` while typing.
    pub ends_with_separator: bool,
}

/// Maps Arabic-Indic (U+0660..U+0669) and Extended Arabic-Indic
/// (U+06F0..U+06F9) digits onto ASCII. Both blocks keep the digit value in
/// the low nibble of the code point.
pub(crate) fn latinize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{660}'..='\u{669}' | '\u{6f0}'..='\u{6f9}' => char::from(b'0' + (c as u8 & 0xf)),
            c => c,
        })
        .collect()
}

/// Canonicalizes `input` for the reduction engine. The configured decimal
/// separator is folded to `.`; an ASCII `.` is always accepted as well.
pub(crate) fn normalize(input: &str, options: &Options) -> Result<Normalized, Error> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut text = latinize_digits(input);
    if options.decimal_separator != "." {
        text = text.replace(&options.decimal_separator, ".");
    }

    let mut scientific = false;
    if let Some((coefficient, exponent)) = split_scientific(&text) {
        text = expand_scientific(coefficient, exponent);
        scientific = true;
    }

    // Decorations are noise, not errors: grouping separators, currency
    // symbols, whitespace and stray text drop out before parsing.
    text.retain(|c| c.is_ascii_digit() || c == '.' || c == '-');

    let text = strip_leading_zeros(&text);
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    // A literal negative zero loses its sign; "-0.001" keeps it.
    let text = match text.as_str() {
        "-0" | "-0.0" => text[1..].to_string(),
        _ => text,
    };

    let has_separator = text.contains('.');
    let ends_with_separator = text.ends_with('.');
    Ok(Normalized {
        text,
        scientific,
        has_separator,
        ends_with_separator,
    })
}

/// Splits `text` into coefficient and exponent when the whole string is
/// scientific notation: an optionally signed decimal coefficient ending in a
/// digit, then `e`/`E`, then an optionally signed integer exponent.
pub(crate) fn split_scientific(text: &str) -> Option<(&str, i32)> {
    let at = text.find(['e', 'E'])?;
    let coefficient = &text[..at];
    let exponent = &text[at + 1..];
    if !is_coefficient(coefficient) {
        return None;
    }
    Some((coefficient, parse_exponent(exponent)?))
}

fn is_coefficient(text: &str) -> bool {
    let body = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    let mut parts = body.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    match parts.next() {
        // "1.5", ".5" — the fractional run must be nonempty.
        Some(fraction) => {
            !fraction.is_empty()
                && fraction.bytes().all(|b| b.is_ascii_digit())
                && whole.bytes().all(|b| b.is_ascii_digit())
        }
        None => !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit()),
    }
}

fn parse_exponent(text: &str) -> Option<i32> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Anything this long is far past the expansion caps; saturate so the
    // arithmetic downstream has no overflow concerns.
    if digits.len() > 9 {
        return Some(if negative { i32::MIN } else { i32::MAX });
    }
    let value = digits.parse::<i32>().ok()?;
    Some(if negative { -value } else { value })
}

/// Expands scientific notation into fixed notation by shifting the decimal
/// point through the coefficient's digit string. Negative exponents keep
/// exactly `|exponent|` plus the coefficient's fractional length in digits,
/// capped at [`MAX_SCI_FRACTION`]. Zero-padding on either side is capped the
/// same way: digits past the cap are already beyond what the reduction
/// engine can represent, so an absurd exponent clamps instead of allocating.
pub(crate) fn expand_scientific(coefficient: &str, exponent: i32) -> String {
    let (sign, body) = match coefficient.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", coefficient.strip_prefix('+').unwrap_or(coefficient)),
    };
    let mut parts = body.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");

    let mut out = String::from(sign);
    if exponent >= 0 {
        let shift = exponent as usize;
        out.push_str(whole);
        if fraction.len() <= shift {
            out.push_str(fraction);
            let pad = (shift - fraction.len()).min(MAX_SCI_FRACTION);
            out.extend(core::iter::repeat('0').take(pad));
        } else {
            out.push_str(&fraction[..shift]);
            out.push('.');
            out.push_str(&fraction[shift..]);
        }
    } else {
        let shift = exponent.unsigned_abs() as usize;
        if shift >= whole.len() {
            out.push_str("0.");
            let pad = (shift - whole.len()).min(MAX_SCI_FRACTION);
            out.extend(core::iter::repeat('0').take(pad));
            out.push_str(whole);
            out.push_str(fraction);
        } else {
            out.push_str(&whole[..whole.len() - shift]);
            out.push('.');
            out.push_str(&whole[whole.len() - shift..]);
            out.push_str(fraction);
        }
        if let Some(at) = out.find('.') {
            out.truncate((at + 1 + MAX_SCI_FRACTION).min(out.len()));
        }
    }
    out
}

/// Removes leading zeros ahead of another digit, keeping the sign: `007` →
/// `7`, `000.1` → `0.1`, `-05` → `-5`. `0.5` is untouched.
fn strip_leading_zeros(text: &str) -> String {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let bytes = body.as_bytes();
    let mut start = 0;
    while start + 1 < bytes.len() && bytes[start] == b'0' && bytes[start + 1].is_ascii_digit() {
        start += 1;
    }
    let mut out = String::with_capacity(text.len());
    out.push_str(sign);
    out.push_str(&body[start..]);
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::options::{Language, Options};

    fn en(input: &str) -> Result<Normalized, Error> {
        normalize(input, &Options::new(Language::En))
    }

    #[test]
    fn latinizes_both_arabic_digit_blocks() {
        assert_eq!(latinize_digits("۱۲۳۴۵۶۷۸۹۰"), "1234567890");
        assert_eq!(latinize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
        assert_eq!(latinize_digits("۱٫۵"), "1٫5");
    }

    #[test]
    fn folds_persian_separator_to_ascii() {
        let fa = Options::new(Language::Fa);
        let normalized = normalize("۱۲۳۴٫۵", &fa).unwrap();
        assert_eq!(normalized.text, "1234.5");
        assert!(normalized.has_separator);
        assert!(!normalized.ends_with_separator);
    }

    #[test]
    fn strips_redundant_leading_zeros_but_not_the_integer_zero() {
        assert_eq!(en("007").unwrap().text, "7");
        assert_eq!(en("000.1").unwrap().text, "0.1");
        assert_eq!(en("-05").unwrap().text, "-5");
        assert_eq!(en("0.5").unwrap().text, "0.5");
        assert_eq!(en("0").unwrap().text, "0");
    }

    #[test]
    fn negative_zero_literals_lose_the_sign() {
        assert_eq!(en("-0").unwrap().text, "0");
        assert_eq!(en("-0.0").unwrap().text, "0.0");
        // Not a literal zero: the sign survives until rendering.
        assert_eq!(en("-0.001").unwrap().text, "-0.001");
        assert_eq!(en("-0.").unwrap().text, "-0.");
    }

    #[test]
    fn trailing_separator_is_flagged() {
        let normalized = en("19.").unwrap();
        assert_eq!(normalized.text, "19.");
        assert!(normalized.ends_with_separator);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(en(""), Err(Error::EmptyInput));
    }

    #[test]
    fn scientific_detection() {
        assert_eq!(split_scientific("1.23e-3"), Some(("1.23", -3)));
        assert_eq!(split_scientific("-12E+4"), Some(("-12", 4)));
        assert_eq!(split_scientific(".5e1"), Some((".5", 1)));
        // The coefficient must end in a digit.
        assert_eq!(split_scientific("1.e5"), None);
        assert_eq!(split_scientific("e5"), None);
        assert_eq!(split_scientific("1.5e"), None);
        assert_eq!(split_scientific("1.5e3a"), None);
    }

    #[test]
    fn expands_negative_exponents_with_exact_fraction_length() {
        assert_eq!(expand_scientific("1.23", -3), "0.00123");
        assert_eq!(expand_scientific("12", -3), "0.012");
        assert_eq!(expand_scientific("-4.2", -1), "-0.42");
        assert_eq!(expand_scientific("1234", -2), "12.34");
    }

    #[test]
    fn expands_positive_exponents() {
        assert_eq!(expand_scientific("1.5", 3), "1500");
        assert_eq!(expand_scientific("-1.5", 3), "-1500");
        assert_eq!(expand_scientific("0.123", 2), "012.3");
        assert_eq!(expand_scientific("2.5", 1), "25");
    }

    #[test]
    fn expansion_flows_through_normalize() {
        let normalized = en("1.23e-3").unwrap();
        assert_eq!(normalized.text, "0.00123");
        assert!(normalized.scientific);
        assert!(normalized.has_separator);

        assert_eq!(en("0.123e2").unwrap().text, "12.3");
    }

    #[test]
    fn strips_decoration_characters_before_parsing() {
        assert_eq!(en("1,234").unwrap().text, "1234");
        assert_eq!(en(" 42 ").unwrap().text, "42");
        assert_eq!(en("$5").unwrap().text, "5");
        assert_eq!(en("12a").unwrap().text, "12");
        // Nothing parseable survives the strip.
        assert_eq!(en("abc"), Err(Error::EmptyInput));
        assert_eq!(en("∞"), Err(Error::EmptyInput));
        // Persian grouping separators vanish along with the rest.
        let fa = Options::new(Language::Fa);
        assert_eq!(normalize("۱٬۲۳۴", &fa).unwrap().text, "1234");
    }

    #[test]
    fn oversized_exponents_cap_instead_of_failing() {
        assert_eq!(en("1e100").unwrap().text.len(), 101);
        // Padding caps at 100 zeros; the oversized integer clamps downstream.
        assert_eq!(en("1e101").unwrap().text.len(), 101);
        assert_eq!(
            en("1e-150").unwrap().text,
            format!("0.{}", "0".repeat(100))
        );
        assert!(en("1e-9999999999").unwrap().text.starts_with("0.00"));
        assert_eq!(en("0e9999999999").unwrap().text, "0");
    }
}
