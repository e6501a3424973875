use crate::app::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hospital-registry")]
#[command(about = "In-memory registry of patients, doctors and appointments")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
