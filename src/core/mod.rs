pub mod registry;
pub mod shared;

pub use crate::domain::model::{Appointment, AppointmentRecord, Doctor, Patient};
pub use crate::domain::ports::{AppointmentSink, Describe, Named};
pub use crate::utils::error::Result;
