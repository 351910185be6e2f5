use arrayvec::ArrayString;

use crate::constants::{DIGIT_BUFFER_SIZE, MAX_INTEGER_DIGITS, MAX_LEADING_ZEROS, SCALE_STEP_FRACTION};
use crate::error::Error;
use crate::normalize::Normalized;
use crate::plan::{PrecisionPlan, Tier};
use crate::units::{ScaleUnit, SCALE_UNITS};

/// A decimal string split into its reduction-relevant runs. The fractional
/// part is held as the leading zero run plus the digits from the first
/// nonzero onward, so precision decisions can count significant digits
/// without rescanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DecimalValue {
    pub negative: bool,
    /// Integer digits without sign or leading zeros; `"0"` when none.
    pub integer: String,
    /// Leading `0` run of the fractional part.
    pub zeros: String,
    /// Fractional digits from the first nonzero digit onward.
    pub significant: String,
}

/// Reduction output, ready for locale rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Reduced {
    pub negative: bool,
    pub integer: String,
    /// Final fractional rendering: plain digits, or the subscript zero-run
    /// form. Empty when nothing follows the separator.
    pub fraction: String,
    pub unit: ScaleUnit,
    /// Emit the decimal separator. True with an empty fraction only while
    /// echoing a trailing separator the caller typed.
    pub show_separator: bool,
}

/// Splits canonical text (ASCII digits, optional leading `-`, at most one
/// `.`) into a [`DecimalValue`].
pub(crate) fn tokenize(text: &str) -> Result<DecimalValue, Error> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return Err(Error::Unparseable(text.to_string()));
    }
    let mut parts = body.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();
    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Unparseable(text.to_string()));
    }
    let fraction = match fraction {
        Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) => digits,
        Some(_) => return Err(Error::Unparseable(text.to_string())),
        None if whole.is_empty() => return Err(Error::Unparseable(text.to_string())),
        None => "",
    };

    let significant = fraction.trim_start_matches('0');
    let zeros = &fraction[..fraction.len() - significant.len()];
    Ok(DecimalValue {
        negative,
        integer: if whole.is_empty() { "0".to_string() } else { whole.to_string() },
        zeros: zeros.to_string(),
        significant: significant.to_string(),
    })
}

/// Applies one precision plan to a tokenized value: magnitude clamps, unit
/// compression, significant-digit rounding, and fraction assembly.
pub(crate) fn reduce(mut value: DecimalValue, plan: &PrecisionPlan, source: &Normalized) -> Reduced {
    let mut epsilon_floor = false;

    if value.integer.len() > MAX_INTEGER_DIGITS {
        // Out of representable range; the whole value collapses to zero.
        value.negative = false;
        value.integer = "0".to_string();
        value.zeros.clear();
        value.significant.clear();
    } else if plan.tier == Tier::High
        && value.integer == "0"
        && value.zeros.len() >= MAX_LEADING_ZEROS
        && (all_zero(&value.significant) || value.significant == "1")
    {
        // Canonical just-below-epsilon rendering for the high tier.
        value.zeros = "0".repeat(MAX_LEADING_ZEROS);
        value.significant = "1".to_string();
        epsilon_floor = true;
    } else if value.zeros.len() >= MAX_LEADING_ZEROS {
        value.zeros.truncate(MAX_LEADING_ZEROS - 1);
        if all_zero(&value.significant) {
            value.significant = "1".to_string();
        }
    }

    let mut sig_digits = plan.sig_digits;
    if value.zeros.len() + sig_digits > plan.max_fraction {
        sig_digits = plan.max_fraction.saturating_sub(value.zeros.len()).max(1);
    }

    let mut unit = ScaleUnit::None;
    if plan.compress && value.integer.len() > 3 {
        let (whole, fraction, selected) = scale_down(&value.integer);
        let significant = fraction.trim_start_matches('0');
        value.zeros = fraction[..fraction.len() - significant.len()].to_string();
        value.significant = significant.to_string();
        value.integer = whole;
        unit = selected;
    }

    // Subscript zero-run notation applies to compressing plans that selected
    // no unit: the value is small, not large.
    let dex = plan.compress && unit == ScaleUnit::None && !value.zeros.is_empty();
    let rounding = plan.round || dex;

    if !epsilon_floor {
        if sig_digits == 0 {
            // Decision at the integer boundary rides on the first fractional
            // digit, which is a zero whenever the zero run is nonempty.
            let first = value.zeros.bytes().chain(value.significant.bytes()).next();
            if rounding && matches!(first, Some(b) if b >= b'5') {
                value.integer = increment(&value.integer);
            }
            value.zeros.clear();
            value.significant.clear();
        } else if value.significant.len() > sig_digits {
            let next = value.significant.as_bytes()[sig_digits];
            value.significant.truncate(sig_digits);
            if rounding && next >= b'5' {
                let bumped = increment(&value.significant);
                if bumped.len() > sig_digits {
                    // The carry escaped the significant run. Absorbing a zero
                    // from the run keeps the extra digit; otherwise the
                    // integer takes it.
                    if value.zeros.pop().is_some() {
                        value.significant = bumped;
                    } else {
                        value.integer = increment(&value.integer);
                        value.significant = bumped[1..].to_string();
                    }
                } else {
                    value.significant = bumped;
                }
            }
        }
    }

    let fraction = if plan.fixed > 0 {
        let mut base = String::with_capacity(value.zeros.len() + value.significant.len());
        base.push_str(&value.zeros);
        base.push_str(&value.significant);
        fit_fixed(&base, plan.fixed, &mut value.integer)
    } else if dex {
        while value.significant.ends_with('0') {
            value.significant.pop();
        }
        format!("0{}{}", subscript(value.zeros.len()), value.significant)
    } else {
        format!("{}{}", value.zeros, value.significant)
    };
    let fraction = truncate_chars(fraction, plan.max_fraction);

    let show_separator = !fraction.is_empty() || (source.has_separator && source.ends_with_separator);
    Reduced {
        negative: value.negative,
        integer: value.integer,
        fraction,
        unit,
        show_separator,
    }
}

/// Divides an integer digit string by 1000 per step, keeping two rounded
/// fractional digits, until it fits in three digits or units run out.
fn scale_down(integer: &str) -> (String, String, ScaleUnit) {
    let mut whole = integer.to_string();
    let mut fraction = String::new();
    let mut unit = ScaleUnit::None;
    for step in SCALE_UNITS {
        if whole.len() <= 3 {
            break;
        }
        let cut = whole.len() - 3;
        // Digits shifted below the point this step, then the fraction kept
        // from the previous step. Only the first dropped digit can round.
        let mut tail = ArrayString::<DIGIT_BUFFER_SIZE>::new();
        tail.push_str(&whole[cut..]);
        tail.push_str(&fraction);
        let head = whole[..cut].to_string();
        let keep = &tail[..SCALE_STEP_FRACTION];
        if tail.as_bytes()[SCALE_STEP_FRACTION] >= b'5' {
            let bumped = increment(keep);
            if bumped.len() > SCALE_STEP_FRACTION {
                whole = increment(&head);
                fraction = bumped[1..].to_string();
            } else {
                whole = head;
                fraction = bumped;
            }
        } else {
            whole = head;
            fraction = keep.to_string();
        }
        unit = step;
    }
    (whole, fraction, unit)
}

/// Pads or shortens `digits` to exactly `width`, rounding half-up at the cut
/// and carrying into `integer` when the fraction overflows.
fn fit_fixed(digits: &str, width: usize, integer: &mut String) -> String {
    if digits.len() <= width {
        let mut out = String::with_capacity(width);
        out.push_str(digits);
        out.extend(core::iter::repeat('0').take(width - digits.len()));
        return out;
    }
    let next = digits.as_bytes()[width];
    let kept = &digits[..width];
    if next < b'5' {
        return kept.to_string();
    }
    let bumped = increment(kept);
    if bumped.len() > width {
        *integer = increment(integer);
        bumped[1..].to_string()
    } else {
        bumped
    }
}

/// Adds one to a decimal digit string. The result grows by one digit when
/// the carry runs off the left edge.
fn increment(digits: &str) -> String {
    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return ascii_string(&out);
        }
    }
    out.insert(0, b'1');
    ascii_string(&out)
}

fn ascii_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn all_zero(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Renders a zero-run length in Unicode subscript digits (U+2080..U+2089).
fn subscript(run: usize) -> String {
    let mut out = String::new();
    let mut digits = ArrayString::<20>::new();
    let mut n = run;
    loop {
        digits.push(char::from(b'0' + (n % 10) as u8));
        n /= 10;
        if n == 0 {
            break;
        }
    }
    for c in digits.chars().rev() {
        out.push(SUBSCRIPT_DIGITS[(c as u8 - b'0') as usize]);
    }
    out
}

/// Hard ceiling on fraction length, counted in characters so the subscript
/// form is measured as displayed.
fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((at, _)) = text.char_indices().nth(max) {
        text.truncate(at);
    }
    text
}
