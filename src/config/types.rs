//! Configuration types for a facility.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the assembled
//! [`FacilityConfig`] built from them.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{Child, Group, HolidayKind, HolidayPeriod, RateSchedule};

/// Metadata about the facility.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityMetadata {
    /// The facility identifier used by groups and holiday periods.
    pub id: String,
    /// The human-readable name of the facility.
    pub name: String,
    /// Currency label applied to rate schedules that carry none.
    pub currency: String,
}

/// A group entry in `groups.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    /// The group identifier.
    pub id: String,
    /// The display name.
    pub name: String,
}

/// A child entry in `groups.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildConfig {
    /// The child identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// The group the child is enrolled in.
    pub group_id: String,
}

/// Enrollment configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentConfig {
    /// The facility's groups.
    pub groups: Vec<GroupConfig>,
    /// The enrolled children.
    #[serde(default)]
    pub children: Vec<ChildConfig>,
}

/// A holiday entry in `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayConfig {
    /// The period identifier.
    pub id: String,
    /// The display name.
    pub name: String,
    /// First closed day.
    pub start: NaiveDate,
    /// Last closed day.
    pub end: NaiveDate,
    /// Holiday or generic day off.
    pub kind: HolidayKind,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Holiday configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// The facility's holiday periods.
    #[serde(default)]
    pub holidays: Vec<HolidayConfig>,
}

/// Rate file structure. Any number of rate files may be present.
#[derive(Debug, Clone, Deserialize)]
pub struct RateFileConfig {
    /// The schedules defined in this file.
    pub schedules: Vec<RateSchedule>,
}

/// The complete configuration of one facility.
#[derive(Debug, Clone)]
pub struct FacilityConfig {
    metadata: FacilityMetadata,
    groups: Vec<Group>,
    children: Vec<Child>,
    holidays: Vec<HolidayPeriod>,
    rates: Vec<RateSchedule>,
}

impl FacilityConfig {
    /// Creates a new FacilityConfig from its component parts.
    ///
    /// Groups and holidays are scoped to the facility, and schedules without
    /// a currency inherit the facility currency.
    pub fn new(
        metadata: FacilityMetadata,
        enrollment: EnrollmentConfig,
        holidays: HolidaysConfig,
        rates: Vec<RateSchedule>,
    ) -> Self {
        let groups = enrollment
            .groups
            .into_iter()
            .map(|g| Group {
                id: g.id,
                name: g.name,
                facility_id: metadata.id.clone(),
            })
            .collect();

        let children = enrollment
            .children
            .into_iter()
            .map(|c| Child {
                id: c.id,
                first_name: c.first_name,
                last_name: c.last_name,
                group_id: c.group_id,
            })
            .collect();

        let mut holidays: Vec<HolidayPeriod> = holidays
            .holidays
            .into_iter()
            .map(|h| HolidayPeriod {
                id: h.id,
                facility_id: metadata.id.clone(),
                name: h.name,
                start: h.start,
                end: h.end,
                kind: h.kind,
                description: h.description,
            })
            .collect();
        holidays.sort_by(|a, b| a.start.cmp(&b.start));

        let rates = rates
            .into_iter()
            .map(|mut schedule| {
                if schedule.currency.is_none() {
                    schedule.currency = Some(metadata.currency.clone());
                }
                schedule
            })
            .collect();

        Self {
            metadata,
            groups,
            children,
            holidays,
            rates,
        }
    }

    /// Returns the facility metadata.
    pub fn facility(&self) -> &FacilityMetadata {
        &self.metadata
    }

    /// Returns all groups.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns all children.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Returns all holiday periods, ordered by start date.
    pub fn holidays(&self) -> &[HolidayPeriod] {
        &self.holidays
    }

    /// Returns all rate schedules.
    pub fn rates(&self) -> &[RateSchedule] {
        &self.rates
    }
}
