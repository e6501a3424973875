use crate::domain::model::{
    Appointment, AppointmentRecord, Doctor, DoctorId, Patient, PatientId,
};
use crate::domain::ports::{AppointmentSink, Named};
use crate::utils::error::{MissingParty, RegistryError, Result};

/// Returns the first element of `people` whose name equals `name`.
///
/// Names are not unique. When several entries share a name the one that was
/// added first wins, so lookups are deterministic in insertion order.
pub fn find_person_by_name<'a, T: Named>(people: &'a [T], name: &str) -> Option<&'a T> {
    position_by_name(people, name).map(|i| &people[i])
}

fn position_by_name<T: Named>(people: &[T], name: &str) -> Option<usize> {
    people.iter().position(|person| person.name() == name)
}

/// In-memory store of patients, doctors and the appointments linking them.
///
/// All three sequences are append-only. Handles returned by the add methods
/// therefore stay valid for as long as the registry lives.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(
        &mut self,
        name: impl Into<String>,
        age: i32,
        disease: impl Into<String>,
    ) -> PatientId {
        let patient = Patient::new(name, age, disease);
        tracing::debug!("Adding patient: {}", patient.name);
        self.patients.push(patient);
        PatientId(self.patients.len() - 1)
    }

    pub fn add_doctor(
        &mut self,
        name: impl Into<String>,
        age: i32,
        specialization: impl Into<String>,
    ) -> DoctorId {
        let doctor = Doctor::new(name, age, specialization);
        tracing::debug!("Adding doctor: {}", doctor.name);
        self.doctors.push(doctor);
        DoctorId(self.doctors.len() - 1)
    }

    /// Books an appointment between the first patient and the first doctor
    /// with the given names. Returns the index of the new appointment.
    ///
    /// Fails with [`RegistryError::NotFound`] if either name is unknown; the
    /// registry is left untouched in that case.
    pub fn add_appointment(
        &mut self,
        patient_name: &str,
        doctor_name: &str,
        date: impl Into<String>,
    ) -> Result<usize> {
        let patient = position_by_name(&self.patients, patient_name);
        let doctor = position_by_name(&self.doctors, doctor_name);

        let (patient, doctor) = match (patient, doctor) {
            (Some(p), Some(d)) => (PatientId(p), DoctorId(d)),
            (p, d) => {
                let missing = match (p, d) {
                    (None, None) => MissingParty::Both,
                    (None, Some(_)) => MissingParty::Patient,
                    _ => MissingParty::Doctor,
                };
                tracing::debug!(
                    "Appointment rejected, {} not found (patient: {}, doctor: {})",
                    missing,
                    patient_name,
                    doctor_name
                );
                return Err(RegistryError::NotFound {
                    missing,
                    patient: patient_name.to_string(),
                    doctor: doctor_name.to_string(),
                });
            }
        };

        let date = date.into();
        tracing::debug!(
            "Adding appointment on {}: {} with {}",
            date,
            patient_name,
            doctor_name
        );
        self.appointments.push(Appointment {
            patient,
            doctor,
            date,
        });
        Ok(self.appointments.len() - 1)
    }

    /// Every appointment resolved against its patient and doctor, in insertion order.
    pub fn display_all_appointments(&self) -> Vec<AppointmentRecord> {
        self.appointments
            .iter()
            .map(|appointment| self.resolve(appointment))
            .collect()
    }

    /// Pushes every appointment record into `sink`, stopping at the first sink error.
    pub fn display_appointments_to<S: AppointmentSink>(&self, sink: &mut S) -> Result<()> {
        for appointment in &self.appointments {
            sink.accept(&self.resolve(appointment))?;
        }
        Ok(())
    }

    pub fn appointments_for_patient(&self, name: &str) -> Vec<AppointmentRecord> {
        self.appointments
            .iter()
            .filter(|a| self.patients[a.patient.0].name == name)
            .map(|a| self.resolve(a))
            .collect()
    }

    pub fn appointments_for_doctor(&self, name: &str) -> Vec<AppointmentRecord> {
        self.appointments
            .iter()
            .filter(|a| self.doctors[a.doctor.0].name == name)
            .map(|a| self.resolve(a))
            .collect()
    }

    pub fn find_patient(&self, name: &str) -> Option<&Patient> {
        find_person_by_name(&self.patients, name)
    }

    pub fn find_doctor(&self, name: &str) -> Option<&Doctor> {
        find_person_by_name(&self.doctors, name)
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(id.0)
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.get(id.0)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    // Handles are only minted by this registry and nothing is ever removed,
    // so indexing cannot go out of bounds.
    fn resolve(&self, appointment: &Appointment) -> AppointmentRecord {
        AppointmentRecord {
            date: appointment.date.clone(),
            patient: self.patients[appointment.patient.0].clone(),
            doctor: self.doctors[appointment.doctor.0].clone(),
        }
    }
}
