use crate::constants::SCI_FRACTION_FLOOR;
use crate::options::{Precision, Template};
use crate::reduce::DecimalValue;

/// Decade magnitude of a tokenized value, taken straight from the digit
/// string so values outside f64 range classify exactly. `Exp(e)` means the
/// value's absolute magnitude sits in `[10^e, 10^(e+1))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Magnitude {
    Zero,
    Exp(i32),
}

/// Resolved precision tier after `Auto` has been settled per value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tier {
    High,
    Medium,
    Low,
}

/// Reduction parameters for one magnitude decade within one tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PrecisionPlan {
    /// Hard ceiling on rendered fractional length, in characters.
    pub max_fraction: usize,
    /// Significant fractional digits to keep.
    pub sig_digits: usize,
    /// Round half-up when shortening significant digits; otherwise truncate.
    pub round: bool,
    /// Compress large integers into scale units, and small fractions into
    /// subscript zero-run notation.
    pub compress: bool,
    /// When nonzero, pad or shorten the fraction to exactly this length.
    pub fixed: usize,
    pub tier: Tier,
}

pub(crate) fn magnitude(value: &DecimalValue) -> Magnitude {
    if value.integer != "0" {
        Magnitude::Exp(value.integer.len() as i32 - 1)
    } else if value.significant.is_empty() {
        Magnitude::Zero
    } else {
        Magnitude::Exp(-(value.zeros.len() as i32) - 1)
    }
}

pub(crate) fn plan_for(
    precision: Precision,
    template: Template,
    magnitude: Magnitude,
    scientific: bool,
) -> PrecisionPlan {
    let tier = resolve_tier(precision, template, magnitude);
    let mut plan = match tier {
        Tier::High => high_plan(magnitude),
        Tier::Medium => medium_plan(magnitude),
        Tier::Low => low_plan(magnitude),
    };
    if scientific {
        // Expanded e-notation values carry long exact fractions; keep them
        // verbatim rather than rounding digits the caller spelled out.
        plan.max_fraction = plan.max_fraction.max(SCI_FRACTION_FLOOR);
        plan.round = false;
    }
    plan
}

fn resolve_tier(precision: Precision, template: Template, magnitude: Magnitude) -> Tier {
    match precision {
        Precision::High => Tier::High,
        Precision::Medium => Tier::Medium,
        Precision::Low => Tier::Low,
        Precision::Auto => match template {
            Template::Percent => Tier::Low,
            _ => match magnitude {
                // Full detail while the magnitude stays in [1e-4, 1e11).
                Magnitude::Exp(e) if (-4..=10).contains(&e) => Tier::High,
                _ => Tier::Medium,
            },
        },
    }
}

fn high_plan(magnitude: Magnitude) -> PrecisionPlan {
    let (max_fraction, sig_digits, round) = match magnitude {
        Magnitude::Zero => (40, 4, false),
        Magnitude::Exp(e) if e <= -5 => (40, 4, false),
        Magnitude::Exp(e) if e < 0 => (7, 7, true),
        Magnitude::Exp(e) if e <= 5 => (5, 5, true),
        Magnitude::Exp(_) => (15, 15, true),
    };
    PrecisionPlan {
        max_fraction,
        sig_digits,
        round,
        compress: false,
        fixed: 0,
        tier: Tier::High,
    }
}

fn medium_plan(magnitude: Magnitude) -> PrecisionPlan {
    let (max_fraction, sig_digits, round, compress) = match magnitude {
        Magnitude::Zero => (33, 4, false, true),
        Magnitude::Exp(e) if e <= -5 => (33, 4, false, true),
        Magnitude::Exp(-4) => (7, 4, false, false),
        Magnitude::Exp(-3) => (5, 3, false, false),
        Magnitude::Exp(-2) => (3, 2, false, false),
        Magnitude::Exp(-1) => (1, 1, false, false),
        Magnitude::Exp(0) => (3, 3, false, false),
        Magnitude::Exp(1) => (2, 2, false, false),
        Magnitude::Exp(2) => (1, 1, false, false),
        Magnitude::Exp(e) => {
            // e >= 3: precision narrows as the value moves up its unit band.
            let within_band = (e % 3) as usize;
            let digits = 2 - within_band;
            (digits, digits, true, true)
        }
    };
    PrecisionPlan {
        max_fraction,
        sig_digits,
        round,
        compress,
        fixed: 0,
        tier: Tier::Medium,
    }
}

fn low_plan(magnitude: Magnitude) -> PrecisionPlan {
    let (max_fraction, sig_digits, compress, fixed) = match magnitude {
        Magnitude::Zero => (4, 2, false, 2),
        Magnitude::Exp(e) if e <= -3 => (4, 2, false, 2),
        Magnitude::Exp(-2) => (2, 1, false, 0),
        Magnitude::Exp(-1) => (2, 2, false, 0),
        Magnitude::Exp(0) => (2, 2, false, 2),
        Magnitude::Exp(1) => (1, 1, false, 1),
        Magnitude::Exp(2) => (0, 0, false, 0),
        Magnitude::Exp(e) => {
            let within_band = (e % 3) as usize;
            let digits = 1usize.saturating_sub(within_band);
            (digits, digits, true, 0)
        }
    };
    PrecisionPlan {
        max_fraction,
        sig_digits,
        round: true,
        compress,
        fixed,
        tier: Tier::Low,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reduce::tokenize;

    fn mag(text: &str) -> Magnitude {
        magnitude(&tokenize(text).unwrap())
    }

    #[test]
    fn magnitude_from_digit_strings() {
        assert_eq!(mag("0"), Magnitude::Zero);
        assert_eq!(mag("0.000"), Magnitude::Zero);
        assert_eq!(mag("5"), Magnitude::Exp(0));
        assert_eq!(mag("7352.5"), Magnitude::Exp(3));
        assert_eq!(mag("-7352.5"), Magnitude::Exp(3));
        assert_eq!(mag("0.5"), Magnitude::Exp(-1));
        assert_eq!(mag("0.0005"), Magnitude::Exp(-4));
        assert_eq!(mag("423000000000000000000"), Magnitude::Exp(20));
        // 31 leading fractional zeros, far outside f64's subnormal comfort.
        assert_eq!(
            mag("0.0000000000000000000000000000002029697"),
            Magnitude::Exp(-31)
        );
    }

    #[test]
    fn auto_resolves_high_inside_the_detail_window() {
        let plan = plan_for(Precision::Auto, Template::Number, Magnitude::Exp(3), false);
        assert_eq!(plan.tier, Tier::High);
        let plan = plan_for(Precision::Auto, Template::Number, Magnitude::Exp(-5), false);
        assert_eq!(plan.tier, Tier::Medium);
        let plan = plan_for(Precision::Auto, Template::Number, Magnitude::Exp(11), false);
        assert_eq!(plan.tier, Tier::Medium);
        let plan = plan_for(Precision::Auto, Template::Usd, Magnitude::Exp(20), false);
        assert_eq!(plan.tier, Tier::Medium);
    }

    #[test]
    fn percent_always_resolves_low_under_auto() {
        let plan = plan_for(Precision::Auto, Template::Percent, Magnitude::Exp(0), false);
        assert_eq!(plan.tier, Tier::Low);
    }

    #[test]
    fn medium_band_precision_narrows_with_position() {
        for (e, digits) in [(3, 2), (4, 1), (5, 0), (6, 2), (20, 0)] {
            let plan = plan_for(Precision::Medium, Template::Number, Magnitude::Exp(e), false);
            assert_eq!(plan.sig_digits, digits, "e={e}");
            assert!(plan.compress);
        }
    }

    #[test]
    fn medium_small_fraction_boundaries_do_not_overlap() {
        let plan = plan_for(Precision::Medium, Template::Number, Magnitude::Exp(-3), false);
        assert_eq!((plan.max_fraction, plan.sig_digits), (5, 3));
        let plan = plan_for(Precision::Medium, Template::Number, Magnitude::Exp(-2), false);
        assert_eq!((plan.max_fraction, plan.sig_digits), (3, 2));
    }

    #[test]
    fn scientific_inputs_keep_their_spelled_out_digits() {
        let plan = plan_for(Precision::High, Template::Number, Magnitude::Exp(-3), true);
        assert_eq!(plan.max_fraction, 20);
        assert!(!plan.round);
        // An already-large ceiling is not lowered.
        let plan = plan_for(Precision::High, Template::Number, Magnitude::Exp(-6), true);
        assert_eq!(plan.max_fraction, 40);
    }
}
