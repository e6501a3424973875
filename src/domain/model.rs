use crate::domain::ports::{Describe, Named};
use serde::{Deserialize, Serialize};

/// Index of a patient inside the registry that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatientId(pub(crate) usize);

/// Index of a doctor inside the registry that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoctorId(pub(crate) usize);

impl PatientId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl DoctorId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub age: i32,
    pub disease: String,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: i32, disease: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            disease: disease.into(),
        }
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Describe for Patient {
    fn describe(&self) -> String {
        format!(
            "Patient Name: {}, Age: {}, Disease: {}",
            self.name, self.age, self.disease
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub age: i32,
    pub specialization: String,
}

impl Doctor {
    pub fn new(name: impl Into<String>, age: i32, specialization: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            specialization: specialization.into(),
        }
    }
}

impl Named for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Describe for Doctor {
    fn describe(&self) -> String {
        format!(
            "Doctor Name: {}, Age: {}, Specialization: {}",
            self.name, self.age, self.specialization
        )
    }
}

/// Links a patient and a doctor held by the same registry. Does not own either.
/// Serialize an [`AppointmentRecord`] instead; handles mean nothing outside their registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub patient: PatientId,
    pub doctor: DoctorId,
    pub date: String,
}

/// An appointment with both parties resolved, as produced for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRecord {
    pub date: String,
    pub patient: Patient,
    pub doctor: Doctor,
}

impl AppointmentRecord {
    /// Date line, then patient line, then doctor line.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Appointment Date: {}", self.date),
            self.patient.describe(),
            self.doctor.describe(),
        ]
    }
}
