use crate::domain::model::AppointmentRecord;
use crate::utils::error::Result;

/// Anything that can be looked up by name.
pub trait Named {
    fn name(&self) -> &str;
}

/// One-line human readable rendering of a record.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Receives appointment records from the registry for presentation.
pub trait AppointmentSink {
    fn accept(&mut self, record: &AppointmentRecord) -> Result<()>;
}
