use crate::core::resolver::DEFAULT_IMPACT_FACTOR;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "journal-impact")]
#[command(about = "Resolve impact factor estimates for medical journals by specialty")]
pub struct CliConfig {
    /// Medical specialty selecting the journal table to consult first
    #[arg(long, default_value = "Medicine, General & Internal")]
    pub specialty: String,

    /// Journal name to resolve
    #[arg(long)]
    pub journal: Option<String>,

    /// Value returned when no lookup or estimate applies
    #[arg(long, default_value_t = DEFAULT_IMPACT_FACTOR)]
    pub default_factor: f64,

    /// Print the result as a JSON object instead of plain text
    #[arg(long)]
    pub json: bool,

    /// List the supported specialties and exit
    #[arg(long)]
    pub list_specialties: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_non_empty_string("specialty", &self.specialty)?;
        validate_range("default_factor", self.default_factor, 0.0, 100.0)?;
        if !self.list_specialties {
            let journal = self.journal.as_deref().unwrap_or("");
            validate_non_empty_string("journal", journal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            specialty: "Allergy".to_string(),
            journal: Some("Allergy".to_string()),
            default_factor: DEFAULT_IMPACT_FACTOR,
            json: false,
            list_specialties: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_missing_journal_rejected() {
        let mut config = base_config();
        config.journal = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_list_specialties_needs_no_journal() {
        let mut config = base_config();
        config.journal = None;
        config.list_specialties = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_factor_out_of_range_rejected() {
        let mut config = base_config();
        config.default_factor = -1.0;
        assert!(config.validate().is_err());
    }
}
