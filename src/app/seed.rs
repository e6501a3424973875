use crate::core::registry::Registry;
use crate::utils::error::Result;

/// Entities to add to a registry, in the order they are added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seed {
    pub patients: Vec<PatientSeed>,
    pub doctors: Vec<DoctorSeed>,
    pub appointments: Vec<AppointmentSeed>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientSeed {
    pub name: String,
    pub age: i32,
    pub disease: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorSeed {
    pub name: String,
    pub age: i32,
    pub specialization: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentSeed {
    pub patient: String,
    pub doctor: String,
    pub date: String,
}

/// Counts from a successful [`Seed::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
}

impl PatientSeed {
    pub fn new(name: &str, age: i32, disease: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            disease: disease.to_string(),
        }
    }
}

impl DoctorSeed {
    pub fn new(name: &str, age: i32, specialization: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            specialization: specialization.to_string(),
        }
    }
}

impl AppointmentSeed {
    pub fn new(patient: &str, doctor: &str, date: &str) -> Self {
        Self {
            patient: patient.to_string(),
            doctor: doctor.to_string(),
            date: date.to_string(),
        }
    }
}

impl Seed {
    /// Two patients, two doctors, and one appointment for each pair.
    pub fn demo() -> Self {
        Self {
            patients: vec![
                PatientSeed::new("John Doe", 30, "Flu"),
                PatientSeed::new("Jane Smith", 25, "Cold"),
            ],
            doctors: vec![
                DoctorSeed::new("Dr. Brown", 45, "Cardiology"),
                DoctorSeed::new("Dr. Green", 50, "Neurology"),
            ],
            appointments: vec![
                AppointmentSeed::new("John Doe", "Dr. Brown", "2023-07-20"),
                AppointmentSeed::new("Jane Smith", "Dr. Green", "2023-07-21"),
            ],
        }
    }

    /// Adds patients, then doctors, then appointments.
    ///
    /// Stops at the first appointment that names an unknown patient or
    /// doctor and returns its `NotFound`. Earlier entries stay in `registry`.
    pub fn apply(&self, registry: &mut Registry) -> Result<SeedSummary> {
        let mut summary = SeedSummary::default();

        for p in &self.patients {
            registry.add_patient(p.name.as_str(), p.age, p.disease.as_str());
            summary.patients += 1;
        }

        for d in &self.doctors {
            registry.add_doctor(d.name.as_str(), d.age, d.specialization.as_str());
            summary.doctors += 1;
        }

        for a in &self.appointments {
            registry.add_appointment(&a.patient, &a.doctor, a.date.as_str())?;
            summary.appointments += 1;
        }

        tracing::debug!(
            "Seeded {} patients, {} doctors, {} appointments",
            summary.patients,
            summary.doctors,
            summary.appointments
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{MissingParty, RegistryError};

    #[test]
    fn test_demo_applies_cleanly() {
        let mut registry = Registry::new();
        let summary = Seed::demo().apply(&mut registry).unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                patients: 2,
                doctors: 2,
                appointments: 2,
            }
        );
        assert_eq!(registry.display_all_appointments()[1].date, "2023-07-21");
    }

    #[test]
    fn test_unknown_appointment_stops_apply() {
        let mut seed = Seed::demo();
        seed.appointments
            .insert(1, AppointmentSeed::new("Unknown Person", "Dr. Brown", "2023-01-01"));

        let mut registry = Registry::new();
        match seed.apply(&mut registry) {
            Err(RegistryError::NotFound { missing, patient, .. }) => {
                assert_eq!(missing, MissingParty::Patient);
                assert_eq!(patient, "Unknown Person");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(registry.appointment_count(), 1);
    }

    #[test]
    fn test_empty_seed() {
        let mut registry = Registry::new();
        assert_eq!(
            Seed::default().apply(&mut registry).unwrap(),
            SeedSummary::default()
        );
    }
}
