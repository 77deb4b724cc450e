//! Request types for the billing API.
//!
//! This module defines the JSON request structures for the `/calculate`,
//! `/calculate/month` and `/forecast` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, ServiceCategory};

/// An attendance mark supplied with a calculation request.
///
/// The child is implied by the request. `present` defaults to `false`, since
/// explicit records exist mainly to record absences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The day of the mark.
    pub date: NaiveDate,
    /// The service slot of the mark.
    pub category: ServiceCategory,
    /// Whether the child was present.
    #[serde(default)]
    pub present: bool,
}

impl AttendanceEntry {
    /// Converts the entry into a record for the given child.
    pub fn into_record(self, child_id: &str) -> AttendanceRecord {
        AttendanceRecord {
            child_id: child_id.to_string(),
            date: self.date,
            category: self.category,
            present: self.present,
        }
    }
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The child to bill. The group is resolved from the configuration.
    pub child_id: String,
    /// First billed day (inclusive).
    pub period_from: NaiveDate,
    /// Last billed day (inclusive).
    pub period_to: NaiveDate,
    /// Attendance marks merged over the stored records for this call.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

impl CalculationRequest {
    /// Returns the attendance marks as records of the requested child.
    pub fn attendance_records(&self) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .cloned()
            .map(|entry| entry.into_record(&self.child_id))
            .collect()
    }
}

/// Request body for the `/calculate/month` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalculationRequest {
    /// The child to bill.
    pub child_id: String,
    /// The billed year.
    pub year: i32,
    /// The billed month (1-12).
    pub month: u32,
    /// Attendance marks merged over the stored records for this call.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

impl MonthCalculationRequest {
    /// Returns the attendance marks as records of the requested child.
    pub fn attendance_records(&self) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .cloned()
            .map(|entry| entry.into_record(&self.child_id))
            .collect()
    }
}

/// Request body for the `/forecast` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// The group to forecast.
    pub group_id: String,
    /// The forecast year.
    pub year: i32,
    /// The forecast month (1-12).
    pub month: u32,
    /// Attendance records of any children in the group.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}
