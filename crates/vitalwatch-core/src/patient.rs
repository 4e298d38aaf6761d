//! Patient record and mocked repository
//!
//! There is no backend: [`PatientRepository`] hands out a single fixed
//! patient so every screen has something to show.

extern crate alloc;
use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Everything the watch displays about the patient in need
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub blood_type: String,
    pub known_diseases: Vec<String>,
    pub suspected_emergency: String,
    pub medications: Vec<String>,
    /// Heart-rate readings in bpm, oldest first
    pub heart_rate_history: Vec<i32>,
}

impl Patient {
    /// The last `count` heart-rate samples in chronological order.
    ///
    /// Returns the whole history when it holds fewer than `count` samples.
    pub fn recent_heart_rate(&self, count: usize) -> &[i32] {
        let start = self.heart_rate_history.len().saturating_sub(count);
        &self.heart_rate_history[start..]
    }

    /// Most recent heart-rate reading
    pub fn latest_heart_rate(&self) -> Option<i32> {
        self.heart_rate_history.last().copied()
    }

    /// Highest heart-rate reading in the history
    pub fn highest_heart_rate(&self) -> Option<i32> {
        self.heart_rate_history.iter().copied().max()
    }

    /// Known diseases as a single comma separated line
    pub fn known_diseases_joined(&self) -> String {
        self.known_diseases.join(", ")
    }

    /// Medications as a single comma separated line
    pub fn medications_joined(&self) -> String {
        self.medications.join(", ")
    }
}

/// Source of patient records (mocked)
pub struct PatientRepository;

impl PatientRepository {
    /// The simulated patient shown by the mock-up
    pub fn mock_patient() -> Patient {
        Patient {
            id: "1".to_owned(),
            name: "Max Mustermann".to_owned(),
            age: 65,
            blood_type: "AB-".to_owned(),
            known_diseases: vec!["Hypertonie".to_owned(), "Diabetes Typ 2".to_owned()],
            suspected_emergency: "Herzrhythmusstörung".to_owned(),
            medications: vec![
                "Metoprolol".to_owned(),
                "Aspirin".to_owned(),
                "Insulin".to_owned(),
            ],
            heart_rate_history: vec![70, 72, 110, 130, 90, 85, 180, 160, 110],
        }
    }
}
