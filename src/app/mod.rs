pub mod report;
pub mod seed;

use crate::app::report::{JsonReport, TextReport};
use crate::app::seed::Seed;
use crate::core::registry::Registry;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Loads `seed` into a fresh registry and renders every appointment.
///
/// An appointment naming an unknown patient or doctor fails the whole run.
pub fn run(seed: &Seed, format: OutputFormat) -> Result<String> {
    let mut registry = Registry::new();
    seed.apply(&mut registry)?;

    match format {
        OutputFormat::Text => {
            let mut report = TextReport::new();
            registry.display_appointments_to(&mut report)?;
            Ok(report.render())
        }
        OutputFormat::Json => {
            let mut report = JsonReport::new();
            registry.display_appointments_to(&mut report)?;
            Ok(format!("{}\n", report.render()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::seed::AppointmentSeed;

    #[test]
    fn test_run_demo_text() {
        let output = run(&Seed::demo(), OutputFormat::Text).unwrap();
        assert_eq!(output.lines().count(), 6);
        assert!(output.starts_with("Appointment Date: 2023-07-20\n"));
    }

    #[test]
    fn test_run_demo_json() {
        let output = run(&Seed::demo(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_run_fails_on_unknown_party() {
        let mut seed = Seed::demo();
        seed.appointments = vec![AppointmentSeed::new(
            "Unknown Person",
            "Dr. Brown",
            "2023-01-01",
        )];

        let err = run(&seed, OutputFormat::Text).unwrap_err();
        assert!(err.is_not_found());
    }
}
