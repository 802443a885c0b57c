//! Impact factor resolution for a (specialty, journal name) pair.
//!
//! The resolver is a pure function over the built-in tables: no I/O,
//! no shared mutable state, safe to call from any thread. Absence of
//! data never surfaces as an error; every miss degrades to the next
//! stage of the fallback chain and finally to the caller's default.

use crate::core::estimate::estimate_impact_from_name;
use crate::core::tables::{compiled_patterns, specialty_table, HIGH_IMPACT_JOURNALS};

/// Returned when no lookup, pattern, or heuristic stage produces a
/// value and the caller did not supply a default.
pub const DEFAULT_IMPACT_FACTOR: f64 = 1.0;

/// Resolve the impact factor for `journal_name` within `specialty`,
/// falling back to [`DEFAULT_IMPACT_FACTOR`].
pub fn resolve(specialty: &str, journal_name: &str) -> f64 {
    resolve_with_default(specialty, journal_name, DEFAULT_IMPACT_FACTOR)
}

/// Resolve the impact factor for `journal_name` within `specialty`.
///
/// Stages, in order, first success wins:
/// 1. high-impact override list (equality or containment, any specialty)
/// 2. exact key in the specialty table
/// 3. case-insensitive key in the specialty table
/// 4. fuzzy mutual-substring scan of the specialty table
/// 5. generic name patterns, with a 1.2 boost when the specialty
///    appears in the name
/// 6. heuristic estimate from the name itself
///
/// `default` is returned for blank names or when every stage misses.
pub fn resolve_with_default(specialty: &str, journal_name: &str, default: f64) -> f64 {
    let journal_name_cleaned = journal_name.trim();
    if journal_name_cleaned.is_empty() {
        return default;
    }
    let journal_name_lower = journal_name_cleaned.to_lowercase();
    let specialty_lower = specialty.to_lowercase();

    // High-impact general journals beat any specialty table.
    for (known_journal, impact) in HIGH_IMPACT_JOURNALS {
        let known_lower = known_journal.to_lowercase();
        if known_lower == journal_name_lower || journal_name_lower.contains(&known_lower) {
            return *impact;
        }
    }

    let table = specialty_table(specialty);

    // Exact match on the trimmed, original-case name.
    if let Some((_, impact)) = table.iter().find(|(key, _)| *key == journal_name_cleaned) {
        return *impact;
    }

    // Case-insensitive match.
    for (key, impact) in table {
        if key.to_lowercase() == journal_name_lower {
            return *impact;
        }
    }

    // Partial match: name contains key or key contains name, accepted
    // only when the overlap covers enough of the shorter string. The
    // overlap test counts literal substring occurrences, so once the
    // shorter side exceeds 5 characters the 0.7 ratio cannot be met and
    // this scan always falls through. Kept as-is to match the
    // production scoring behavior; see DESIGN.md.
    for (key, impact) in table {
        let key_lower = key.to_lowercase();
        if journal_name_lower.contains(&key_lower) || key_lower.contains(&journal_name_lower) {
            let shorter = journal_name_lower.chars().count().min(key_lower.chars().count());
            let occurrences = journal_name_lower
                .matches(&key_lower)
                .count()
                .max(key_lower.matches(&journal_name_lower).count());
            if shorter > 5 && occurrences as f64 / shorter as f64 > 0.7 {
                return *impact;
            }
        }
    }

    // Generic patterns over the lower-cased name, in table order.
    for (pattern, impact) in compiled_patterns() {
        if pattern.is_match(&journal_name_lower) {
            // Journals focused on the specialty itself tend to sit
            // higher within these generic shapes.
            if journal_name_lower.contains(&specialty_lower) {
                return impact * 1.2;
            }
            return *impact;
        }
    }

    let estimated_impact = estimate_impact_from_name(&journal_name_lower, &specialty_lower);
    if estimated_impact > 0.0 {
        return estimated_impact;
    }

    default
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_exact_table_match() {
        assert_eq!(resolve("Ophthalmology", "Ophthalmology"), 9.2);
        assert_eq!(resolve("Allergy", "Allergy"), 12.6);
        assert_eq!(resolve("Dermatology", "Burns"), 3.2);
    }

    #[test]
    fn test_case_insensitive_table_match() {
        assert_eq!(resolve("Ophthalmology", "ophthalmology"), 9.2);
        assert_eq!(resolve("Allergy", "CONTACT DERMATITIS"), 4.8);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(resolve("Ophthalmology", "  Ophthalmology  "), 9.2);
    }

    #[test]
    fn test_high_impact_override_beats_specialty_table() {
        assert_eq!(resolve("Ophthalmology", "Science"), 47.7);
        assert_eq!(resolve("Allergy", "Science"), 47.7);
    }

    #[test]
    fn test_high_impact_override_matches_substring() {
        // "Lancet" is contained in the queried name.
        assert_eq!(resolve("Oncology", "The Lancet"), 79.3);
    }

    #[test]
    fn test_high_impact_override_containment() {
        // Not an override entry itself, but contains "Nature".
        assert_eq!(resolve("Oncology", "Nature Genetics"), 49.9);
    }

    #[test]
    fn test_blank_name_returns_default() {
        assert_eq!(resolve_with_default("Allergy", "", 0.0), 0.0);
        assert_eq!(resolve_with_default("Allergy", "   ", 2.5), 2.5);
        assert_eq!(resolve("Allergy", ""), DEFAULT_IMPACT_FACTOR);
    }

    #[test]
    fn test_unknown_specialty_falls_through_without_error() {
        let impact = resolve("UnknownSpecialty", "Some Journal Name");
        assert!(impact > 0.0);
    }

    #[test]
    fn test_generic_pattern_match() {
        // "^(journal of \w+)$" -> 6.0, no specialty overlap.
        assert_eq!(resolve("Cardiology", "Journal of Arrhythmia"), 6.0);
        // First pattern in the table.
        assert_eq!(resolve("Oncology", "New England Journal of Medicine"), 91.2);
    }

    #[test]
    fn test_generic_pattern_specialty_boost() {
        // "^(journal of \w+)$" -> 6.0, boosted by 1.2 because the name
        // contains the specialty.
        assert_close(resolve("Oncology", "Journal of Oncology"), 7.2);
        // "^(current \w+)$" -> 4.0 * 1.2
        assert_close(resolve("Allergy", "Current Allergy"), 4.8);
    }

    #[test]
    fn test_pattern_order_prefers_more_specific_shape() {
        // Matches "journal of \w+ and \w+" (8.5) before "journal of \w+"
        // could ever be tried.
        assert_eq!(resolve("Cardiology", "Journal of Heart and Vessels"), 8.5);
    }

    #[test]
    fn test_heuristic_estimation_is_deterministic() {
        let first = resolve("Allergy", "Some Totally Unknown Gazette");
        let second = resolve("Allergy", "Some Totally Unknown Gazette");
        assert_eq!(first, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_heuristic_multiplier_chain() {
        // 1.5 (royal) * 1.3 (advances) * 1.2 (specialty) = 2.34 -> 2.3
        assert_eq!(resolve("Allergy", "Royal Advances in Allergy"), 2.3);
    }

    // The acceptance ratio in the partial-match scan divides a
    // substring occurrence count (almost always 1) by the shorter
    // length, which the `shorter > 5` guard forces below 0.7. The scan
    // therefore never returns; names that only partially overlap a
    // table key fall through to patterns and heuristics. Pending
    // product clarification -- see DESIGN.md.
    #[test]
    fn test_partial_match_guard_never_fires() {
        // "Eye" (3 chars) is contained in the name but is too short for
        // the guard; the name then matches "^(\w+ research)$" -> 3.0.
        assert_eq!(resolve("Ophthalmology", "Eyeball Research"), 3.0);
        // Contains the 7-char key "allergy"; 1/7 < 0.7, so the table
        // value 12.6 is unreachable and the heuristic answers instead.
        let impact = resolve("Allergy", "Allergy Horizons Digest");
        assert_ne!(impact, 12.6);
        assert_eq!(impact, 1.2);
    }
}
