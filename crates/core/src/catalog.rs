//! Static suggestion catalogs backing the registration and scheduling forms.
//!
//! These lists are fixed reference data, not stored records: the UI offers
//! them as suggestions while still accepting free text, so nothing here
//! constrains what ends up in a document.

/// Medical specializations offered when registering a doctor (sorted).
pub const SPECIALIZATIONS: &[&str] = &[
    "Cardiology",
    "Dermatology",
    "Endocrinology",
    "Family Medicine",
    "Gastroenterology",
    "General Surgery",
    "Internal Medicine",
    "Neurology",
    "Obstetrics & Gynecology",
    "Oncology",
    "Ophthalmology",
    "Orthopedics",
    "Pediatrics",
    "Psychiatry",
    "Pulmonology",
    "Radiology",
    "Rheumatology",
    "Urology",
];

/// Common visit reasons offered when scheduling an appointment.
pub const APPOINTMENT_REASONS: &[&str] = &[
    "Annual Check-up",
    "Follow-up Appointment",
    "Vaccination",
    "Illness or Infection",
    "Prescription Renewal",
    "Specialist Consultation",
    "Physical Therapy",
    "Review Lab Results",
    "Health Screening",
    "Other (Please Specify)",
];

/// Common medications offered while composing a prescription.
pub const COMMON_MEDICATIONS: &[&str] = &[
    "Amoxicillin",
    "Ibuprofen",
    "Paracetamol",
    "Omeprazole",
    "Metformin",
    "Amlodipine",
    "Lisinopril",
    "Metoprolol",
    "Sertraline",
    "Gabapentin",
];

/// Dosage units offered while composing a prescription.
pub const DOSAGE_UNITS: &[&str] = &[
    "mg", "mcg", "g", "ml", "tablets", "capsules", "drops", "puffs",
];

/// Dosage frequency options offered while composing a prescription.
pub const DOSAGE_FREQUENCIES: &[&str] = &[
    "Once daily",
    "Twice daily",
    "Three times daily",
    "Four times daily",
    "Every 4 hours",
    "Every 6 hours",
    "Every 8 hours",
    "Every 12 hours",
    "As needed",
    "Before meals",
    "After meals",
    "At bedtime",
];

/// Common medical conditions suggested in the patient history form.
pub const COMMON_CONDITIONS: &[&str] = &[
    "Hypertension",
    "Diabetes Type 2",
    "Diabetes Type 1",
    "Asthma",
    "Arthritis",
    "Depression",
    "Anxiety",
    "Heart Disease",
    "High Cholesterol",
    "Thyroid Disorder",
];

/// Common allergies suggested in the patient history form.
pub const COMMON_ALLERGIES: &[&str] = &[
    "Penicillin", "Peanuts", "Latex", "Dust", "Pollen", "Milk", "Eggs", "Shellfish", "Soy",
    "Wheat",
];

/// Blood types offered in the patient history form.
pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Filters `entries` to those containing `term`, case-insensitively.
///
/// An empty (or all-whitespace) term keeps every entry, matching the
/// behaviour of a dropdown with an empty search box. Entry order is
/// preserved.
pub fn search<'a>(entries: &'a [&'a str], term: &str) -> Vec<&'a str> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .copied()
        .collect()
}
