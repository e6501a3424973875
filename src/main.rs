use clap::Parser;
use hospital_registry::app::{run, seed::Seed};
use hospital_registry::utils::error::ErrorSeverity;
use hospital_registry::utils::logger;
use hospital_registry::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting hospital-registry");
    tracing::debug!("CLI config: {:?}", config);

    match run(&Seed::demo(), config.format) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
