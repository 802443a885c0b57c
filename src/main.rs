use clap::Parser;
use journal_impact::utils::{logger, validation::Validate};
use journal_impact::{all_specialties, resolve_with_default, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.list_specialties {
        for specialty in all_specialties() {
            println!("{}", specialty);
        }
        return Ok(());
    }

    // Validation guarantees a journal name is present past this point.
    let journal = config.journal.as_deref().unwrap_or_default();
    let impact_factor = resolve_with_default(&config.specialty, journal, config.default_factor);

    tracing::info!(
        "Resolved '{}' in {} to {}",
        journal,
        config.specialty,
        impact_factor
    );

    if config.json {
        let output = serde_json::json!({
            "specialty": config.specialty,
            "journal": journal,
            "impact_factor": impact_factor,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", impact_factor);
    }

    Ok(())
}
