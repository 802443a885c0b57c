//! Built-in impact factor data: per-specialty journal tables, the
//! cross-specialty high-impact override list, and the generic name
//! patterns used when no table has an answer.
//!
//! Every table is an ordered slice rather than a map. Lookups scan in
//! source order, so first-match tie-breaks stay deterministic across
//! runs and platforms.

use regex::Regex;
use std::sync::OnceLock;

/// Known high-impact journals checked before any specialty table,
/// regardless of the specialty argument. Order matters: the first
/// entry whose name equals or is contained in the queried name wins.
pub(crate) static HIGH_IMPACT_JOURNALS: &[(&str, f64)] = &[
    ("Science", 47.7),
    ("Nature", 49.9),
    ("Cell", 38.6),
    ("PNAS", 11.2),
    ("PLoS Medicine", 10.5),
    ("JAMA Internal Medicine", 18.7),
    ("BMJ", 39.9),
    ("NEJM", 91.2),
    ("Nature Medicine", 53.4),
    ("Lancet", 79.3),
];

/// Generic journal name patterns with estimated impact factors, applied
/// to the lower-cased name when no table entry matched. Anchored to the
/// full string; tried in order, first match wins.
pub(crate) static GENERIC_PATTERNS: &[(&str, f64)] = &[
    (r"^(new england journal of medicine|nejm)$", 91.2),
    (r"^(lancet|the lancet)$", 79.3),
    (r"^(journal of the american medical association|jama)$", 56.3),
    (r"^(nature medicine)$", 53.4),
    (r"^(bmj|british medical journal)$", 39.9),
    (r"^(nature reviews \w+)$", 30.0),
    (r"^(annual review of \w+)$", 20.0),
    (r"^(cell \w+)$", 15.0),
    (r"^(advances in \w+)$", 10.0),
    (r"^(journal of \w+ and \w+)$", 8.5),
    (r"^(international journal of \w+)$", 7.0),
    (r"^(journal of \w+)$", 6.0),
    (r"^(european journal of \w+)$", 5.5),
    (r"^(american journal of \w+)$", 5.0),
    (r"^(british journal of \w+)$", 4.5),
    (r"^(current \w+)$", 4.0),
    (r"^(\w+ journal)$", 3.5),
    (r"^(\w+ research)$", 3.0),
    (r"^(\w+ reviews)$", 2.5),
    (r"^(\w+ practice)$", 2.0),
    (r"^(\w+ proceedings)$", 1.5),
    (r"^(\w+ communications)$", 1.0),
];

static ALLERGY: &[(&str, f64)] = &[
    ("Allergy", 12.6),
    ("Journal of Allergy and Clinical Immunology", 11.4),
    ("Clinical Reviews in Allergy & Immunology", 8.4),
    ("Journal of Allergy and Clinical Immunology-In Practice", 8.2),
    ("Clinical and Experimental Allergy", 6.3),
    ("Allergology International", 6.2),
    ("Journal of Investigational Allergology and Clinical Immunology", 6.1),
    ("Annals of Allergy Asthma & Immunology", 5.8),
    ("Current Allergy and Asthma Reports", 5.4),
    ("Contact Dermatitis", 4.8),
    ("Clinical and Translational Allergy", 4.6),
    ("Pediatric Allergy and Immunology", 4.3),
    ("Allergy Asthma & Immunology Research", 4.1),
    ("World Allergy Organization Journal", 3.9),
    ("Journal of Asthma and Allergy", 3.7),
    ("Current Opinion in Allergy and Clinical Immunology", 3.0),
    ("Immunology and Allergy Clinics of North America", 2.7),
    ("Allergy Asthma and Clinical Immunology", 2.6),
    ("Allergy and Asthma Proceedings", 2.6),
    ("Allergologia et Immunopathologia", 2.5),
    ("International Archives of Allergy and Immunology", 2.5),
    ("Asian Pacific Journal of Allergy and Immunology", 2.3),
    ("Journal of Asthma", 1.7),
    ("Allergologie", 1.4),
    ("Postepy Dermatologii i Alergologii", 1.4),
    ("Iranian Journal of Allergy Asthma and Immunology", 1.2),
    ("Pediatric Allergy Immunology and Pulmonology", 1.1),
    ("Revue Francaise d'Allergologie", 0.5),
];

static OPHTHALMOLOGY: &[(&str, f64)] = &[
    ("Progress in Retinal and Eye Research", 14.7),
    ("Ophthalmology", 9.2),
    ("JAMA Ophthalmology", 7.9),
    ("Ocular Surface", 7.5),
    ("Survey of Ophthalmology", 5.9),
    ("Annual Review of Vision Science", 5.5),
    ("Clinical and Experimental Ophthalmology", 3.8),
    ("American Journal of Ophthalmology", 5.6),
    ("Contact Lens & Anterior Eye", 3.2),
    ("British Journal of Ophthalmology", 4.6),
    ("Asia-Pacific Journal of Ophthalmology", 2.8),
    ("Canadian Journal of Ophthalmology-Journal Canadien d'Ophtalmologie", 2.5),
    ("Acta Ophthalmologica", 3.5),
    ("Experimental Eye Research", 3.5),
    ("Current Opinion in Ophthalmology", 3.1),
    ("Journal of Refractive Surgery", 2.9),
    ("Eye", 2.8),
    ("Ophthalmic and Physiological Optics", 2.7),
    ("Translational Vision Science & Technology", 2.5),
    ("Ophthalmology and Therapy", 2.4),
    ("Journal of Cataract and Refractive Surgery", 4.1),
    ("Documenta Ophthalmologica", 2.0),
    ("Ocular Immunology and Inflammation", 2.2),
    ("Graefes Archive for Clinical and Experimental Ophthalmology", 3.3),
    ("Retina-The Journal of Retinal and Vitreous Diseases", 4.3),
    ("Indian Journal of Ophthalmology", 1.8),
    ("Ophthalmologica", 2.2),
    ("Japanese Journal of Ophthalmology", 1.9),
    ("Eye & Contact Lens-Science and Clinical Practice", 2.3),
    ("Journal of Vision", 2.1),
    ("Ophthalmic Research", 2.0),
    ("Journal of Glaucoma", 2.4),
    ("Journal of Neuro-Ophthalmology", 2.2),
    ("Cornea", 2.6),
    ("International Journal of Ophthalmology", 1.6),
    ("Journal of Ocular Pharmacology and Therapeutics", 1.9),
    ("Seminars in Ophthalmology", 1.5),
    ("Journal of Ophthalmology", 1.7),
    ("BMC Ophthalmology", 1.8),
    ("Ophthalmic Epidemiology", 1.9),
    ("Current Eye Research", 2.0),
];

static DERMATOLOGY: &[(&str, f64)] = &[
    ("Journal of Dermatological Science", 3.8),
    ("Dermatologic Therapy", 3.7),
    ("Clinical and Experimental Dermatology", 3.7),
    ("Experimental Dermatology", 3.5),
    ("Acta Dermato-Venereologica", 3.5),
    ("Dermatology and Therapy", 3.5),
    ("International Journal of Dermatology", 3.5),
    ("Burns", 3.2),
    ("Indian Journal of Dermatology Venereology & Leprology", 3.2),
    ("Journal of Cutaneous Medicine and Surgery", 3.1),
    ("Annales de Dermatologie et de Venereologie", 3.1),
    ("Dermatology", 3.0),
    ("Journal of Dermatology", 2.9),
    ("Journal of Dermatological Treatment", 2.9),
    ("Skin Pharmacology and Physiology", 2.8),
    ("International Journal of Cosmetic Science", 2.7),
    ("International Wound Journal", 2.6),
    ("Anais Brasileiros de Dermatologia", 2.6),
    ("Dermatologic Surgery", 2.5),
    ("Dermatology Practical & Conceptual", 2.5),
    ("Photodermatology Photoimmunology & Photomedicine", 2.5),
    ("Journal of Tissue Viability", 2.4),
    ("Journal of Cosmetic Dermatology", 2.3),
    ("Clinics in Dermatology", 2.3),
    ("Dermatologica Sinica", 2.3),
    ("Lasers in Surgery and Medicine", 2.2),
    ("Australasian Journal of Dermatology", 2.2),
    ("Dermatologica Clinica", 2.2),
    ("European Journal of Dermatology", 2.0),
    ("Skin Research and Technology", 2.0),
    ("Veterinary Dermatology", 1.9),
    ("Clinical Cosmetic and Investigational Dermatology", 1.9),
    ("Archives of Dermatological Research", 1.8),
    ("Advances in Skin & Wound Care", 1.7),
    ("Journal of Cutaneous Pathology", 1.6),
    ("International Journal of Lower Extremity Wounds", 1.5),
    ("Annals of Dermatology", 1.5),
    ("Melanoma Research", 1.5),
    ("Journal of Wound Care", 1.5),
    ("Journal of Burn Care & Research", 1.5),
    ("Postepy Dermatologii (Alergologii)", 1.4),
    ("Journal of Cosmetic and Laser Therapy", 1.2),
    ("Journal of Investigative Dermatology", 8.6),
    ("JAMA Dermatology", 9.3),
    ("British Journal of Dermatology", 9.0),
];

/// Journal table for a specialty. Specialties without curated data get
/// an empty table and resolution falls through to patterns/heuristics.
pub(crate) fn specialty_table(specialty: &str) -> &'static [(&'static str, f64)] {
    match specialty {
        "Allergy" => ALLERGY,
        "Ophthalmology" => OPHTHALMOLOGY,
        "Dermatology" => DERMATOLOGY,
        _ => &[],
    }
}

/// Compiled generic patterns, built once per process. The pattern set
/// is hard-coded so compilation cannot fail at runtime; a unit test
/// covers every entry.
pub(crate) fn compiled_patterns() -> &'static [(Regex, f64)] {
    static PATTERNS: OnceLock<Vec<(Regex, f64)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        GENERIC_PATTERNS
            .iter()
            .map(|(pattern, factor)| {
                let re = Regex::new(pattern).expect("built-in pattern must compile");
                (re, *factor)
            })
            .collect()
    })
}

/// The full catalogue of medical specialties the surrounding product
/// can query, including ones without curated journal tables.
pub fn all_specialties() -> &'static [&'static str] {
    &[
        "Allergy",
        "Andrology",
        "Anesthesiology",
        "Audiology & Speech-Language Pathology",
        "Behavioral Sciences",
        "Cardiac & Cardiovascular Systems",
        "Clinical Neurology",
        "Critical Care Medicine",
        "Dentistry, Oral Surgery & Medicine",
        "Dermatology",
        "Emergency Medicine",
        "Endocrinology & Metabolism",
        "Engineering, Biomedical",
        "Gastroenterology & Hepatology",
        "Genetics & Heredity",
        "Geriatrics & Gerontology",
        "Health Care Sciences & Services",
        "Health Policy & Services",
        "Hematology",
        "Immunology",
        "Infectious Diseases",
        "Integrative & Complementary Medicine",
        "Materials Science, Biomaterials",
        "Medical Ethics",
        "Medical Informatics",
        "Medical Laboratory Technology",
        "Medicine, General & Internal",
        "Medicine, Legal",
        "Medicine, Research & Experimental",
        "Neuroimaging",
        "Neurosciences",
        "Nursing",
        "Nutrition & Dietetics",
        "Obstetrics & Gynecology",
        "Oncology",
        "Ophthalmology",
        "Orthopedics",
        "Otorhinolaryngology",
        "Pathology",
        "Pediatrics",
        "Peripheral Vascular Disease",
        "Pharmacology & Pharmacy",
        "Primary Health Care",
        "Psychiatry",
        "Psychology, Clinical",
        "Public, Environmental & Occupational Health",
        "Radiology, Nuclear Medicine & Medical Imaging",
        "Rehabilitation",
        "Reproductive Biology",
        "Respiratory System",
        "Rheumatology",
        "Sport Sciences",
        "Substance Abuse",
        "Surgery",
        "Toxicology",
        "Transplantation",
        "Tropical Medicine",
        "Urology & Nephrology",
        "Virology",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_generic_patterns_compile() {
        for (pattern, _) in GENERIC_PATTERNS {
            assert!(
                Regex::new(pattern).is_ok(),
                "pattern failed to compile: {}",
                pattern
            );
        }
        assert_eq!(compiled_patterns().len(), GENERIC_PATTERNS.len());
    }

    #[test]
    fn test_curated_specialties_have_tables() {
        assert!(!specialty_table("Allergy").is_empty());
        assert!(!specialty_table("Ophthalmology").is_empty());
        assert!(!specialty_table("Dermatology").is_empty());
        assert!(specialty_table("Oncology").is_empty());
    }

    #[test]
    fn test_specialty_catalogue_includes_curated_entries() {
        let all = all_specialties();
        for specialty in ["Allergy", "Ophthalmology", "Dermatology"] {
            assert!(all.contains(&specialty));
        }
        assert_eq!(all.len(), 59);
    }
}
