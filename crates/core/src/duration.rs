//! Human-readable duration formatting
//!
//! Decomposes a seconds value against a fixed ladder of time units and renders
//! the first two non-zero units as a localized string (e.g. "3 years, 2 months").
//! Localization happens through an injected translator function; without one,
//! English fallback labels are used verbatim.

/// One rung of the unit ladder
struct Unit {
    key: &'static str,
    plural_key: &'static str,
    singular: &'static str,
    plural: &'static str,
    seconds: f64,
}

/// Unit ladder, largest first. Quantities are consumed greedily and the
/// remainder carries forward to the next rung.
const UNITS: [Unit; 10] = [
    Unit {
        key: "duration.millennium",
        plural_key: "duration.millennia",
        singular: "millennium",
        plural: "millennia",
        seconds: 31_536_000_000.0,
    },
    Unit {
        key: "duration.century",
        plural_key: "duration.centuries",
        singular: "century",
        plural: "centuries",
        seconds: 3_153_600_000.0,
    },
    Unit {
        key: "duration.decade",
        plural_key: "duration.decades",
        singular: "decade",
        plural: "decades",
        seconds: 315_360_000.0,
    },
    Unit {
        key: "duration.year",
        plural_key: "duration.years",
        singular: "year",
        plural: "years",
        seconds: 31_536_000.0,
    },
    Unit {
        key: "duration.month",
        plural_key: "duration.months",
        singular: "month",
        plural: "months",
        seconds: 2_592_000.0,
    },
    Unit {
        key: "duration.week",
        plural_key: "duration.weeks",
        singular: "week",
        plural: "weeks",
        seconds: 604_800.0,
    },
    Unit {
        key: "duration.day",
        plural_key: "duration.days",
        singular: "day",
        plural: "days",
        seconds: 86_400.0,
    },
    Unit {
        key: "duration.hour",
        plural_key: "duration.hours",
        singular: "hour",
        plural: "hours",
        seconds: 3_600.0,
    },
    Unit {
        key: "duration.minute",
        plural_key: "duration.minutes",
        singular: "minute",
        plural: "minutes",
        seconds: 60.0,
    },
    Unit {
        key: "duration.second",
        plural_key: "duration.seconds",
        singular: "second",
        plural: "seconds",
        seconds: 1.0,
    },
];

/// Format a duration in seconds using the English fallback labels
pub fn format_duration(seconds: f64) -> String {
    format_duration_with(seconds, |_key, fallback| fallback.to_string())
}

/// Format a duration in seconds, resolving unit labels through `translate`
///
/// `translate` receives a dotted lookup key plus the English fallback label
/// and returns the localized label. This is the only seam to the i18n
/// subsystem; the function itself performs no lookups.
///
/// Durations at or below 1ms render as "Instantly", durations at or below one
/// second as "Less than a second". Everything else is decomposed greedily
/// against the unit ladder and rendered as the first two non-zero units,
/// joined by ", ". Labels pluralize when the quantity exceeds one.
pub fn format_duration_with<F>(seconds: f64, translate: F) -> String
where
    F: Fn(&str, &str) -> String,
{
    // NaN fails every comparison below; floor it like any other degenerate input
    if seconds.is_nan() || seconds <= 0.001 {
        return translate("duration.instantly", "Instantly");
    }
    if seconds <= 1.0 {
        return translate("duration.lessThanASecond", "Less than a second");
    }

    let mut remaining = seconds;
    let mut parts: Vec<String> = Vec::with_capacity(2);

    for (index, unit) in UNITS.iter().enumerate() {
        let quantity = (remaining / unit.seconds).floor();

        // Infinite seconds leave the remainder as inf - inf, so quantities on
        // lower rungs go NaN; skip those instead of rendering them as 0
        if quantity.is_nan() || quantity < 1.0 {
            continue;
        }

        remaining -= quantity * unit.seconds;

        let label = if quantity > 1.0 {
            translate(unit.plural_key, unit.plural)
        } else {
            translate(unit.key, unit.singular)
        };

        // Only the millennium quantity is unbounded; every lower rung is
        // capped by the rung above it.
        let rendered = if index == 0 {
            format_quantity(quantity)
        } else {
            format!("{}", quantity as u64)
        };

        parts.push(format!("{rendered} {label}"));
        if parts.len() == 2 {
            break;
        }
    }

    parts.join(", ")
}

/// Pretty-print a numeric quantity
///
/// Values of 1e21 and above are rendered in exponential notation: the string
/// is split on 'e', the mantissa is localized, and the exponent suffix is
/// reattached. Whole values get grouped-integer formatting; everything else
/// gets a fixed two decimals.
fn format_quantity(value: f64) -> String {
    if value >= 1e21 {
        let exponential = format!("{value:e}");
        if let Some((mantissa, exponent)) = exponential.split_once('e') {
            let mantissa: f64 = mantissa.parse().unwrap_or(value);
            return format!("{}e{exponent}", localize_number(mantissa));
        }
        return exponential;
    }
    localize_number(value)
}

fn localize_number(value: f64) -> String {
    if value % 1.0 == 0.0 {
        group_digits(value)
    } else {
        format!("{value:.2}")
    }
}

/// Render a whole value with ',' thousands separators
fn group_digits(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, c) in digits.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0.0 {
        grouped.push('-');
    }

    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // format_duration threshold tests
    // ============================================================================

    #[test]
    fn test_format_duration_zero_is_instant() {
        assert_eq!(format_duration(0.0), "Instantly");
    }

    #[test]
    fn test_format_duration_negative_is_instant() {
        assert_eq!(format_duration(-5.0), "Instantly");
    }

    #[test]
    fn test_format_duration_instant_boundary_inclusive() {
        assert_eq!(format_duration(0.001), "Instantly");
    }

    #[test]
    fn test_format_duration_just_above_instant_boundary() {
        assert_eq!(format_duration(0.0011), "Less than a second");
    }

    #[test]
    fn test_format_duration_one_second_boundary_inclusive() {
        assert_eq!(format_duration(1.0), "Less than a second");
    }

    #[test]
    fn test_format_duration_just_above_one_second() {
        assert_eq!(format_duration(1.5), "1 second");
    }

    // ============================================================================
    // format_duration ladder tests
    // ============================================================================

    #[test]
    fn test_format_duration_singular_units() {
        assert_eq!(format_duration(60.0), "1 minute");
        assert_eq!(format_duration(3_600.0), "1 hour");
        assert_eq!(format_duration(86_400.0), "1 day");
        assert_eq!(format_duration(604_800.0), "1 week");
        assert_eq!(format_duration(2_592_000.0), "1 month");
        assert_eq!(format_duration(31_536_000.0), "1 year");
        assert_eq!(format_duration(315_360_000.0), "1 decade");
        assert_eq!(format_duration(3_153_600_000.0), "1 century");
        assert_eq!(format_duration(31_536_000_000.0), "1 millennium");
    }

    #[test]
    fn test_format_duration_plural_units() {
        assert_eq!(format_duration(120.0), "2 minutes");
        assert_eq!(format_duration(63_072_000_000.0), "2 millennia");
        assert_eq!(format_duration(6_307_200_000.0), "2 centuries");
    }

    #[test]
    fn test_format_duration_two_units_descending() {
        // 1 year + 2 months
        let seconds = 31_536_000.0 + 2.0 * 2_592_000.0;
        assert_eq!(format_duration(seconds), "1 year, 2 months");
    }

    #[test]
    fn test_format_duration_caps_at_two_units() {
        // 1 year + 1 month + 1 day: the day never shows
        let seconds = 31_536_000.0 + 2_592_000.0 + 86_400.0;
        assert_eq!(format_duration(seconds), "1 year, 1 month");
    }

    #[test]
    fn test_format_duration_skips_zero_units() {
        // 1 day + 30 seconds: hours and minutes are zero and skipped
        let seconds = 86_400.0 + 30.0;
        assert_eq!(format_duration(seconds), "1 day, 30 seconds");
    }

    #[test]
    fn test_format_duration_minutes_and_seconds() {
        assert_eq!(format_duration(90.0), "1 minute, 30 seconds");
    }

    #[test]
    fn test_format_duration_groups_large_millennium_quantities() {
        assert_eq!(
            format_duration(31_536_000_000.0 * 1234.0),
            "1,234 millennia"
        );
    }

    #[test]
    fn test_format_duration_infinite_seconds_renders_one_unit() {
        // The millennium rung absorbs the infinity; lower rungs see a NaN
        // remainder and must all be skipped
        assert_eq!(format_duration(f64::INFINITY), "inf millennia");
    }

    #[test]
    fn test_format_duration_nan_floors_to_instant() {
        assert_eq!(format_duration(f64::NAN), "Instantly");
    }

    #[test]
    fn test_format_duration_is_idempotent() {
        let seconds = 36_720_000.0;
        assert_eq!(format_duration(seconds), format_duration(seconds));
    }

    // ============================================================================
    // format_duration_with translator tests
    // ============================================================================

    #[test]
    fn test_format_duration_with_translator_override() {
        let translate = |key: &str, fallback: &str| match key {
            "duration.year" => "an".to_string(),
            "duration.months" => "mois".to_string(),
            _ => fallback.to_string(),
        };
        let seconds = 31_536_000.0 + 2.0 * 2_592_000.0;
        assert_eq!(format_duration_with(seconds, translate), "1 an, 2 mois");
    }

    #[test]
    fn test_format_duration_with_translator_receives_dotted_keys() {
        let translate = |key: &str, _fallback: &str| format!("<{key}>");
        assert_eq!(
            format_duration_with(0.0, translate),
            "<duration.instantly>"
        );
        assert_eq!(
            format_duration_with(0.5, translate),
            "<duration.lessThanASecond>"
        );
        assert_eq!(
            format_duration_with(63_072_000_000.0, translate),
            "2 <duration.millennia>"
        );
    }

    #[test]
    fn test_format_duration_with_fallback_when_translator_passes_through() {
        let passthrough = |_key: &str, fallback: &str| fallback.to_string();
        assert_eq!(format_duration_with(120.0, passthrough), "2 minutes");
    }

    // ============================================================================
    // format_quantity tests
    // ============================================================================

    #[test]
    fn test_format_quantity_small_whole() {
        assert_eq!(format_quantity(7.0), "7");
    }

    #[test]
    fn test_format_quantity_grouping() {
        assert_eq!(format_quantity(1_234.0), "1,234");
        assert_eq!(format_quantity(1_234_567.0), "1,234,567");
        assert_eq!(format_quantity(1_000_000_000.0), "1,000,000,000");
    }

    #[test]
    fn test_format_quantity_fractional_gets_two_decimals() {
        assert_eq!(format_quantity(2.5), "2.50");
        assert_eq!(format_quantity(3.14159), "3.14");
    }

    #[test]
    fn test_format_quantity_exponential_whole_mantissa() {
        assert_eq!(format_quantity(1e30), "1e30");
    }

    #[test]
    fn test_format_quantity_exponential_fractional_mantissa() {
        assert_eq!(format_quantity(1.2345e25), "1.23e25");
        assert_eq!(format_quantity(2.5e21), "2.50e21");
    }

    #[test]
    fn test_format_quantity_below_exponential_threshold_stays_plain() {
        // Just under 1e21 still renders as a grouped integer
        let formatted = format_quantity(9.5e20);
        assert!(!formatted.contains('e'));
        assert!(formatted.contains(','));
    }

    // ============================================================================
    // group_digits tests
    // ============================================================================

    #[test]
    fn test_group_digits_short_values_unchanged() {
        assert_eq!(group_digits(0.0), "0");
        assert_eq!(group_digits(999.0), "999");
    }

    #[test]
    fn test_group_digits_boundary() {
        assert_eq!(group_digits(1_000.0), "1,000");
    }
}
