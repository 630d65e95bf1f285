//! Dashboard aggregation engine.
//!
//! Turns the four raw record collections into the structures the dashboard
//! page renders: global counts, the doctor specialization distribution, the
//! monthly appointment breakdown, and the appointment status distribution.
//!
//! Every function here is a pure, total transformation over
//! already-materialised documents: no I/O, no state between calls, and no
//! errors. Absent or malformed fields degrade to per-field defaults
//! instead. Each invocation recomputes everything from scratch.
//!
//! Two behaviours are deliberate and pinned by tests:
//!
//! - Grouping buckets ([`specialty_distribution`], [`monthly_appointments`])
//!   are emitted in first-occurrence order over the input sequence, never
//!   sorted.
//! - The monthly breakdown matches `status` case-insensitively, while
//!   [`appointment_status_distribution`] matches it case-sensitively and
//!   silently drops values outside its three known keys. Existing dashboard
//!   consumers rely on the asymmetry; changing one side without the other
//!   corrupts the displayed analytics.

use crate::constants::INVALID_DATE_LABEL;
use crate::error::ClinicResult;
use crate::store::{Collection, DocumentStore};
use api_shared::{DashboardData, MonthlyBucket, SpecialtyCount, Stats, StatusCount};
use chrono::{DateTime, NaiveDate};
use clinic_types::Document;
use serde_json::Value;

/// Reads a string field from a document; any non-string value counts as absent.
fn string_field<'a>(document: &'a Document, key: &str) -> Option<&'a str> {
    match document.get(key) {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

/// Derives the month bucket label for an appointment.
///
/// Parses `appointmentDate` as `YYYY-MM-DD`, falling back to RFC 3339 for
/// full timestamps, and formats the short English month name ("Jan".."Dec").
/// A missing, non-string, or unparsable date yields the fixed label
/// `"Invalid Date"`, which participates in bucketing like any other key.
fn month_label(document: &Document) -> String {
    let Some(raw) = string_field(document, "appointmentDate") else {
        return INVALID_DATE_LABEL.to_string();
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%b").to_string();
    }

    INVALID_DATE_LABEL.to_string()
}

/// Global counts: one total per collection, equal to its length.
pub fn compute_stats(
    patients: &[Document],
    doctors: &[Document],
    appointments: &[Document],
    prescriptions: &[Document],
) -> Stats {
    Stats {
        total_patients: patients.len() as u64,
        total_doctors: doctors.len() as u64,
        total_appointments: appointments.len() as u64,
        total_prescriptions: prescriptions.len() as u64,
    }
}

/// Groups doctors by the exact value of their `specialization` field.
///
/// Buckets are keyed by the stored value itself: an absent or non-string
/// specialization forms its own bucket (`name: None`), distinct from an
/// empty string. Entries are emitted in first-occurrence order; no sorting
/// is applied.
pub fn specialty_distribution(doctors: &[Document]) -> Vec<SpecialtyCount> {
    let mut buckets: Vec<SpecialtyCount> = Vec::new();

    for document in doctors {
        let name = string_field(document, "specialization").map(str::to_owned);
        match buckets.iter_mut().find(|bucket| bucket.name == name) {
            Some(bucket) => bucket.value += 1,
            None => buckets.push(SpecialtyCount { name, value: 1 }),
        }
    }

    buckets
}

/// Buckets appointments by calendar month with a per-status breakdown.
///
/// The bucket key is the short month name derived from `appointmentDate`
/// (see [`month_label`]); buckets are emitted in first-occurrence order
/// across the input, NOT calendar order. Within a bucket, `status` is
/// lower-cased (absent → empty string) and matched against `"completed"`
/// and `"cancelled"`; every other value, including empty, increments
/// `pending`. `total` increments once per appointment unconditionally, so
/// `completed + cancelled + pending == total` holds per bucket.
pub fn monthly_appointments(appointments: &[Document]) -> Vec<MonthlyBucket> {
    let mut buckets: Vec<MonthlyBucket> = Vec::new();

    for document in appointments {
        let month = month_label(document);
        let pos = match buckets.iter().position(|bucket| bucket.month == month) {
            Some(pos) => pos,
            None => {
                buckets.push(MonthlyBucket {
                    month,
                    completed: 0,
                    cancelled: 0,
                    pending: 0,
                    total: 0,
                });
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[pos];
        let status = string_field(document, "status")
            .unwrap_or("")
            .to_lowercase();
        match status.as_str() {
            "completed" => bucket.completed += 1,
            "cancelled" => bucket.cancelled += 1,
            _ => bucket.pending += 1,
        }
        bucket.total += 1;
    }

    buckets
}

/// Counts appointments by status into exactly three fixed slices:
/// `Completed`, `Cancelled`, `Pending`, in that order.
///
/// An absent, non-string, or empty `status` counts as the literal
/// `"Pending"`. Matching is **case-sensitive**, unlike the monthly
/// breakdown, and a status outside the three known values increments
/// nothing, so the summed values can undercount the appointment total.
/// Such values are logged at `debug` and otherwise left uncounted.
pub fn appointment_status_distribution(appointments: &[Document]) -> Vec<StatusCount> {
    let mut completed = 0u64;
    let mut cancelled = 0u64;
    let mut pending = 0u64;

    for document in appointments {
        let status = match string_field(document, "status") {
            Some(s) if !s.is_empty() => s,
            _ => "Pending",
        };
        match status {
            "Completed" => completed += 1,
            "Cancelled" => cancelled += 1,
            "Pending" => pending += 1,
            other => {
                tracing::debug!(status = other, "status outside the known set, not counted");
            }
        }
    }

    vec![
        StatusCount {
            name: "Completed".into(),
            value: completed,
        },
        StatusCount {
            name: "Cancelled".into(),
            value: cancelled,
        },
        StatusCount {
            name: "Pending".into(),
            value: pending,
        },
    ]
}

/// Computes all four dashboard outputs from the raw collections.
pub fn assemble(
    patients: &[Document],
    doctors: &[Document],
    appointments: &[Document],
    prescriptions: &[Document],
) -> DashboardData {
    DashboardData {
        stats: compute_stats(patients, doctors, appointments, prescriptions),
        specialty_distribution: specialty_distribution(doctors),
        monthly_appointments: monthly_appointments(appointments),
        appointment_status: appointment_status_distribution(appointments),
    }
}

/// Service wrapping the store for dashboard reads.
#[derive(Clone, Debug)]
pub struct DashboardService {
    store: DocumentStore,
}

impl DashboardService {
    /// Creates a dashboard service over the given store.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Lists the four collections and aggregates them.
    ///
    /// Aggregates are never cached or persisted; every call re-reads the
    /// store and re-derives the outputs in full.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ClinicError`] only if a collection cannot be
    /// listed; the aggregation itself cannot fail.
    pub fn snapshot(&self) -> ClinicResult<DashboardData> {
        let patients = self.store.list_all(Collection::Patients)?;
        let doctors = self.store.list_all(Collection::Doctors)?;
        let appointments = self.store.list_all(Collection::Appointments)?;
        let prescriptions = self.store.list_all(Collection::Prescriptions)?;

        Ok(assemble(&patients, &doctors, &appointments, &prescriptions))
    }
}
