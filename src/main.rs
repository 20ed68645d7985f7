use clap::Parser;
use event_docgen::utils::{logger, validation::Validate};
use event_docgen::{generate, CliArgs, DocgenError};

fn main() {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI args: {:?}", args);

    let config = match args.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    tracing::info!(
        "Generating event documentation from {} into {}",
        config.catalog_path.display(),
        config.output_dir.display()
    );

    match generate(&config) {
        Ok(summary) => {
            tracing::info!(
                "Done: {} documents in {} domains",
                summary.documents,
                summary.domains.len()
            );
        }
        Err(e) => fail(e),
    }
}

fn fail(e: DocgenError) -> ! {
    tracing::error!(
        "Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
