//! Request and response bodies for the clinic administration API.
//!
//! Field names follow the stored document shape (camelCase), so a request
//! body serialises directly into the document that ends up in the store and
//! a listed document serialises directly back out to clients.

use clinic_types::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Registration and scheduling requests
// ---------------------------------------------------------------------------

/// Emergency contact block of a patient registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relation: String,
    #[serde(default)]
    pub phone: String,
}

/// Medical history block of a patient registration.
///
/// All fields are optional on input; the defaults mirror the blank form
/// (no list entries, smoking status "never", alcohol consumption "none").
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalHistory {
    pub conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub surgeries: Vec<String>,
    pub family_history: Vec<String>,
    pub blood_type: String,
    pub height: String,
    pub weight: String,
    pub smoking_status: String,
    pub alcohol_consumption: String,
}

impl Default for MedicalHistory {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            allergies: Vec::new(),
            medications: Vec::new(),
            surgeries: Vec::new(),
            family_history: Vec::new(),
            blood_type: String::new(),
            height: String::new(),
            weight: String::new(),
            smoking_status: "never".into(),
            alcohol_consumption: "none".into(),
        }
    }
}

/// Request body for registering a patient.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPatientReq {
    /// Full name; required, must be non-empty.
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
    #[serde(default)]
    pub medical_history: MedicalHistory,
}

/// Request body for registering a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDoctorReq {
    /// Full name; required, must be non-empty.
    pub name: String,
    /// Medical specialization; required, must be non-empty.
    pub specialization: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Request body for scheduling an appointment.
///
/// `status` is intentionally optional and omitted from the stored document
/// when not provided: the scheduling form never sets it, and downstream
/// aggregation defines what an absent status means.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAppointmentReq {
    /// Canonical id of an existing patient record.
    pub patient_id: String,
    /// Canonical id of an existing doctor record.
    pub doctor_id: String,
    /// Appointment date, `YYYY-MM-DD`.
    pub appointment_date: String,
    #[serde(default)]
    pub appointment_time: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One medication line of a prescription.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEntry {
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub instructions: String,
}

/// Request body for creating a prescription.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionReq {
    #[serde(default)]
    pub patient_name: String,
    /// Canonical id of an existing patient record.
    pub patient_id: String,
    #[serde(default)]
    pub doctor_name: String,
    /// Canonical id of an existing doctor record.
    pub doctor_id: String,
    /// Prescribed medications; at least one entry is required.
    pub medications: Vec<MedicationEntry>,
    #[serde(default)]
    pub general_instructions: String,
}

// ---------------------------------------------------------------------------
// Generic responses
// ---------------------------------------------------------------------------

/// Response returned after a record has been created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecordRes {
    /// Canonical id of the new record.
    pub id: String,
}

/// Response body for `GET /patients`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListPatientsRes {
    #[schema(value_type = Vec<Object>)]
    pub patients: Vec<Document>,
}

/// Response body for `GET /doctors`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListDoctorsRes {
    #[schema(value_type = Vec<Object>)]
    pub doctors: Vec<Document>,
}

/// Response body for `GET /appointments`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListAppointmentsRes {
    #[schema(value_type = Vec<Object>)]
    pub appointments: Vec<Document>,
}

/// Response body for `GET /prescriptions`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListPrescriptionsRes {
    #[schema(value_type = Vec<Object>)]
    pub prescriptions: Vec<Document>,
}

/// Response body for the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogRes {
    pub entries: Vec<String>,
}

// ---------------------------------------------------------------------------
// Dashboard outputs
// ---------------------------------------------------------------------------

/// Global record counts shown in the stats tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_patients: u64,
    pub total_doctors: u64,
    pub total_appointments: u64,
    pub total_prescriptions: u64,
}

/// One slice of the doctor specialization pie chart.
///
/// `name` is the exact stored specialization value; a doctor record with no
/// usable specialization falls into a bucket whose `name` serialises as
/// `null` rather than a substituted label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyCount {
    pub name: Option<String>,
    pub value: u64,
}

/// One bar of the monthly appointments breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyBucket {
    /// Short month name ("Jan".."Dec"), or "Invalid Date" for unparsable
    /// appointment dates.
    pub month: String,
    pub completed: u64,
    pub cancelled: u64,
    pub pending: u64,
    pub total: u64,
}

/// One slice of the appointment status pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    pub name: String,
    pub value: u64,
}

/// Everything the dashboard page renders, computed in one pass over the
/// four collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: Stats,
    pub specialty_distribution: Vec<SpecialtyCount>,
    pub monthly_appointments: Vec<MonthlyBucket>,
    pub appointment_status: Vec<StatusCount>,
}
