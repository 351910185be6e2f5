use crate::options::Template;

/// Scale unit selected by repeated divide-by-1000 compression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ScaleUnit {
    #[default]
    None,
    Thousand,
    Million,
    Billion,
    Trillion,
    Quadrillion,
    Quintillion,
}

/// Which wording table a template draws its Persian unit names from.
/// Currency templates read units in tomans (`همت` is shorthand for a
/// thousand billion tomans); everything else uses plain scale words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UnitFamily {
    Generic,
    Currency,
}

/// Units ordered by compression step; step `n` divides by `1000^n`.
pub(crate) const SCALE_UNITS: [ScaleUnit; 6] = [
    ScaleUnit::Thousand,
    ScaleUnit::Million,
    ScaleUnit::Billion,
    ScaleUnit::Trillion,
    ScaleUnit::Quadrillion,
    ScaleUnit::Quintillion,
];

impl UnitFamily {
    pub(crate) fn of(template: Template) -> UnitFamily {
        match template {
            Template::Usd | Template::Irt | Template::Irr => UnitFamily::Currency,
            Template::Number | Template::Percent => UnitFamily::Generic,
        }
    }
}

impl ScaleUnit {
    /// English symbol, appended directly after the digits.
    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            ScaleUnit::None => "",
            ScaleUnit::Thousand => "K",
            ScaleUnit::Million => "M",
            ScaleUnit::Billion => "B",
            ScaleUnit::Trillion => "T",
            ScaleUnit::Quadrillion => "Qd",
            ScaleUnit::Quintillion => "Qt",
        }
    }

    /// Persian short form, leading space included.
    pub(crate) fn persian_short(&self, family: UnitFamily) -> &'static str {
        match family {
            UnitFamily::Generic => self.persian_generic(),
            UnitFamily::Currency => match self {
                ScaleUnit::None => "",
                ScaleUnit::Thousand => " هزار ت",
                ScaleUnit::Million => " میلیون ت",
                ScaleUnit::Billion => " میلیارد ت",
                ScaleUnit::Trillion => " همت",
                ScaleUnit::Quadrillion => " هزار همت",
                ScaleUnit::Quintillion => " میلیون همت",
            },
        }
    }

    /// Persian full form, used for the `full_postfix` projection.
    pub(crate) fn persian_full(&self, family: UnitFamily) -> &'static str {
        match family {
            UnitFamily::Generic => self.persian_generic(),
            UnitFamily::Currency => match self {
                ScaleUnit::None => "",
                ScaleUnit::Thousand => " هزار تومان",
                ScaleUnit::Million => " میلیون تومان",
                ScaleUnit::Billion => " میلیارد تومان",
                ScaleUnit::Trillion => " هزار میلیارد تومان",
                ScaleUnit::Quadrillion => " کادریلیون تومان",
                ScaleUnit::Quintillion => " کنتیلیون تومان",
            },
        }
    }

    fn persian_generic(&self) -> &'static str {
        match self {
            ScaleUnit::None => "",
            ScaleUnit::Thousand => " هزار",
            ScaleUnit::Million => " میلیون",
            ScaleUnit::Billion => " میلیارد",
            ScaleUnit::Trillion => " تریلیون",
            ScaleUnit::Quadrillion => " کادریلیون",
            ScaleUnit::Quintillion => " کنتیلیون",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn currency_and_generic_families_differ_from_trillion_down() {
        assert_eq!(ScaleUnit::Thousand.persian_short(UnitFamily::Generic), " هزار");
        assert_eq!(ScaleUnit::Thousand.persian_short(UnitFamily::Currency), " هزار ت");
        assert_eq!(ScaleUnit::Trillion.persian_short(UnitFamily::Currency), " همت");
        assert_eq!(
            ScaleUnit::Trillion.persian_full(UnitFamily::Currency),
            " هزار میلیارد تومان"
        );
    }

    #[test]
    fn template_family() {
        assert_eq!(UnitFamily::of(Template::Number), UnitFamily::Generic);
        assert_eq!(UnitFamily::of(Template::Percent), UnitFamily::Generic);
        assert_eq!(UnitFamily::of(Template::Usd), UnitFamily::Currency);
        assert_eq!(UnitFamily::of(Template::Irt), UnitFamily::Currency);
        assert_eq!(UnitFamily::of(Template::Irr), UnitFamily::Currency);
    }
}
