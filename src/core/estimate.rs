//! Name-based impact factor estimation, the last resort before the
//! caller-supplied default.

/// Name fragments associated with prestigious publishers and societies.
const PRESTIGE_INDICATORS: &[&str] = &[
    "nature",
    "cell",
    "lancet",
    "jama",
    "nejm",
    "bmj",
    "science",
    "elsevier",
    "wiley",
    "oxford",
    "cambridge",
    "american",
    "european",
    "international",
    "world",
    "royal",
    "society",
];

/// Publication types that generally carry higher impact.
const HIGHER_IMPACT_TYPES: &[&str] = &["review", "advances", "trends", "progress", "annual", "current"];

const MAX_ESTIMATED_IMPACT: f64 = 15.0;

/// Estimate an impact factor from the characteristics of a journal
/// name. Both arguments must already be lower-cased.
///
/// Starts at 1.0 and applies each multiplier at most once: 1.5 for a
/// prestige indicator, 1.3 for a higher-impact publication type, 1.2
/// when the specialty itself appears in the name. The result is capped
/// at 15.0 and rounded to one decimal place.
pub(crate) fn estimate_impact_from_name(journal_name: &str, specialty: &str) -> f64 {
    let mut base_impact = 1.0;

    for indicator in PRESTIGE_INDICATORS {
        if journal_name.contains(indicator) {
            base_impact *= 1.5;
            break;
        }
    }

    for pub_type in HIGHER_IMPACT_TYPES {
        if journal_name.contains(pub_type) {
            base_impact *= 1.3;
            break;
        }
    }

    if journal_name.contains(specialty) {
        base_impact *= 1.2;
    }

    if base_impact > MAX_ESTIMATED_IMPACT {
        base_impact = MAX_ESTIMATED_IMPACT;
    }

    round_to_one_decimal(base_impact)
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
