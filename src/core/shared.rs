use crate::core::registry::Registry;
use crate::domain::model::{AppointmentRecord, Doctor, DoctorId, Patient, PatientId};
use crate::utils::error::{RegistryError, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// A [`Registry`] behind a single lock, for callers on several threads.
///
/// Clones share the same registry. Each operation holds the lock for its
/// whole duration, so an appointment's lookups and append happen atomically.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Registry>> {
        self.inner.lock().map_err(|_| RegistryError::LockPoisoned)
    }

    pub fn add_patient(&self, name: &str, age: i32, disease: &str) -> Result<PatientId> {
        Ok(self.lock()?.add_patient(name, age, disease))
    }

    pub fn add_doctor(&self, name: &str, age: i32, specialization: &str) -> Result<DoctorId> {
        Ok(self.lock()?.add_doctor(name, age, specialization))
    }

    pub fn add_appointment(&self, patient_name: &str, doctor_name: &str, date: &str) -> Result<usize> {
        self.lock()?.add_appointment(patient_name, doctor_name, date)
    }

    pub fn display_all_appointments(&self) -> Result<Vec<AppointmentRecord>> {
        Ok(self.lock()?.display_all_appointments())
    }

    pub fn find_patient(&self, name: &str) -> Result<Option<Patient>> {
        Ok(self.lock()?.find_patient(name).cloned())
    }

    pub fn find_doctor(&self, name: &str) -> Result<Option<Doctor>> {
        Ok(self.lock()?.find_doctor(name).cloned())
    }

    pub fn appointment_count(&self) -> Result<usize> {
        Ok(self.lock()?.appointment_count())
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Result<Registry> {
        Ok(self.lock()?.clone())
    }

    /// Runs `f` with exclusive access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> Result<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }
}
