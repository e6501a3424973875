pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::report::{JsonReport, TextReport};
pub use app::seed::{Seed, SeedSummary};
pub use app::{run, OutputFormat};
pub use core::{registry::find_person_by_name, registry::Registry, shared::SharedRegistry};
pub use domain::model::{Appointment, AppointmentRecord, Doctor, DoctorId, Patient, PatientId};
pub use domain::ports::{AppointmentSink, Describe, Named};
pub use utils::error::{MissingParty, RegistryError, Result};
