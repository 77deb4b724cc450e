//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading facility
//! configurations from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::{Child, Group, HolidayPeriod, RateSchedule};
use crate::service::BillingService;
use crate::store::{ChildStore, InMemoryStore};

use super::types::{
    EnrollmentConfig, FacilityConfig, FacilityMetadata, HolidaysConfig, RateFileConfig,
};

/// Loads and provides access to a facility configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them, and exposes the result as an [`InMemoryStore`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/sunny_days/
/// ├── facility.yaml   # Facility metadata
/// ├── groups.yaml     # Groups and enrolled children
/// ├── holidays.yaml   # Holiday periods
/// └── rates/
///     └── 2026-01-01.yaml  # Rate schedules (any number of files)
/// ```
///
/// # Example
///
/// ```no_run
/// use daycare_billing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sunny_days").unwrap();
/// println!("Loaded facility: {}", loader.facility().name);
///
/// let result = loader.service().calculate_month("child_001", 2026, 3).unwrap();
/// println!("March total: {}", result.total);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FacilityConfig,
    store: InMemoryStore,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/sunny_days")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The content is inconsistent (`ConfigParseError`): duplicate ids,
    ///   inverted date intervals, or references to unknown groups
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let facility_path = path.join("facility.yaml");
        let metadata = Self::load_yaml::<FacilityMetadata>(&facility_path)?;

        let groups_path = path.join("groups.yaml");
        let enrollment = Self::load_yaml::<EnrollmentConfig>(&groups_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;

        let rates_dir = path.join("rates");
        let rate_files = Self::load_rates(&rates_dir)?;

        let group_ids = Self::validate_enrollment(&groups_path, &enrollment)?;
        Self::validate_holidays(&holidays_path, &holidays)?;
        let mut seen_schedules = HashSet::new();
        let mut rates = Vec::new();
        for (file, schedules) in rate_files {
            Self::validate_rates(&file, &schedules, &group_ids, &mut seen_schedules)?;
            rates.extend(schedules);
        }

        let config = FacilityConfig::new(metadata, enrollment, holidays, rates);
        let store = InMemoryStore::default()
            .with_groups(config.groups().to_vec())
            .with_children(config.children().to_vec())
            .with_holidays(config.holidays().to_vec())
            .with_rates(config.rates().to_vec());

        Ok(Self { config, store })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory, in file name order.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<(PathBuf, Vec<RateSchedule>)>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        paths
            .into_iter()
            .map(|path| {
                let file = Self::load_yaml::<RateFileConfig>(&path)?;
                Ok::<_, EngineError>((path, file.schedules))
            })
            .collect()
    }

    fn invalid(path: &Path, message: String) -> EngineError {
        EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        }
    }

    /// Checks group and child ids, returning the set of group ids.
    fn validate_enrollment(path: &Path, enrollment: &EnrollmentConfig) -> EngineResult<HashSet<String>> {
        let mut group_ids = HashSet::new();
        for group in &enrollment.groups {
            if !group_ids.insert(group.id.clone()) {
                return Err(Self::invalid(path, format!("duplicate group id '{}'", group.id)));
            }
        }

        let mut child_ids = HashSet::new();
        for child in &enrollment.children {
            if !child_ids.insert(child.id.as_str()) {
                return Err(Self::invalid(path, format!("duplicate child id '{}'", child.id)));
            }
            if !group_ids.contains(&child.group_id) {
                return Err(Self::invalid(
                    path,
                    format!("child '{}' references unknown group '{}'", child.id, child.group_id),
                ));
            }
        }

        Ok(group_ids)
    }

    fn validate_holidays(path: &Path, holidays: &HolidaysConfig) -> EngineResult<()> {
        let mut ids = HashSet::new();
        for holiday in &holidays.holidays {
            if !ids.insert(holiday.id.as_str()) {
                return Err(Self::invalid(path, format!("duplicate holiday id '{}'", holiday.id)));
            }
            if holiday.start > holiday.end {
                return Err(Self::invalid(
                    path,
                    format!(
                        "holiday '{}' starts on {} after it ends on {}",
                        holiday.id, holiday.start, holiday.end
                    ),
                ));
            }
        }
        Ok(())
    }

    fn validate_rates(
        path: &Path,
        schedules: &[RateSchedule],
        group_ids: &HashSet<String>,
        seen: &mut HashSet<String>,
    ) -> EngineResult<()> {
        for schedule in schedules {
            if !seen.insert(schedule.id.clone()) {
                return Err(Self::invalid(
                    path,
                    format!("duplicate rate schedule id '{}'", schedule.id),
                ));
            }
            if !schedule.is_well_formed() {
                return Err(Self::invalid(
                    path,
                    format!("rate schedule '{}' is valid from after valid to", schedule.id),
                ));
            }
            if !group_ids.contains(&schedule.group_id) {
                return Err(Self::invalid(
                    path,
                    format!(
                        "rate schedule '{}' references unknown group '{}'",
                        schedule.id, schedule.group_id
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Returns the underlying facility configuration.
    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    /// Returns the facility metadata.
    pub fn facility(&self) -> &FacilityMetadata {
        self.config.facility()
    }

    /// Returns the loaded data as a store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Returns a billing service over the loaded data.
    pub fn service(&self) -> BillingService<'_> {
        BillingService::from_store(&self.config.facility().id, &self.store)
    }

    /// Gets a child by id.
    pub fn get_child(&self, child_id: &str) -> EngineResult<Child> {
        self.store.get_child(child_id)
    }

    /// Gets a group by id.
    pub fn get_group(&self, group_id: &str) -> EngineResult<Group> {
        self.store.get_group(group_id)
    }

    /// Returns the holiday periods of the facility.
    pub fn holidays(&self) -> &[HolidayPeriod] {
        self.config.holidays()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceCategory;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/sunny_days"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Writes a configuration directory under the system temp dir.
    fn write_config(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "daycare_billing_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("rates")).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
        dir
    }

    const FACILITY: &str = "id: test\nname: Test Nursery\ncurrency: PLN\n";
    const GROUPS: &str = "groups:\n  - id: owls\n    name: Owls\nchildren:\n  - id: c1\n    first_name: A\n    last_name: B\n    group_id: owls\n";
    const HOLIDAYS: &str = "holidays: []\n";
    const RATES: &str = "schedules:\n  - id: owls_lunch\n    group_id: owls\n    category: lunch\n    amount: \"9.00\"\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.facility().id, "sunny_days");
        assert_eq!(loader.facility().name, "Sunny Days Nursery");
        assert!(!loader.config().groups().is_empty());
        assert!(!loader.holidays().is_empty());
    }

    #[test]
    fn test_groups_are_scoped_to_facility() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let group = loader.get_group("ladybirds").unwrap();
        assert_eq!(group.facility_id, "sunny_days");
        assert!(
            loader
                .holidays()
                .iter()
                .all(|h| h.facility_id == "sunny_days")
        );
    }

    #[test]
    fn test_get_child_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_child("unknown") {
            Err(EngineError::NotFound { entity, id }) => {
                assert_eq!(entity, "child");
                assert_eq!(id, "unknown");
            }
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_rates_inherit_facility_currency() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(
            loader
                .config()
                .rates()
                .iter()
                .all(|r| r.currency.as_deref() == Some("PLN"))
        );
    }

    #[test]
    fn test_ladybirds_lunch_rate() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let lunch = loader
            .config()
            .rates()
            .iter()
            .find(|r| r.group_id == "ladybirds" && r.category == ServiceCategory::Lunch)
            .unwrap();
        assert_eq!(lunch.amount, dec("10.00"));
    }

    #[test]
    fn test_load_missing_directory() {
        let result = ConfigLoader::load("./nonexistent/path");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_minimal_configuration_from_temp_dir() {
        let dir = write_config(
            "minimal",
            &[
                ("facility.yaml", FACILITY),
                ("groups.yaml", GROUPS),
                ("holidays.yaml", HOLIDAYS),
                ("rates/2026.yaml", RATES),
            ],
        );
        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.config().rates().len(), 1);
        assert_eq!(loader.get_child("c1").unwrap().group_id, "owls");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_rate_files() {
        let dir = write_config(
            "no_rates",
            &[
                ("facility.yaml", FACILITY),
                ("groups.yaml", GROUPS),
                ("holidays.yaml", HOLIDAYS),
            ],
        );
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no rate files found"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_child_with_unknown_group_is_rejected() {
        let groups = "groups:\n  - id: owls\n    name: Owls\nchildren:\n  - id: c1\n    first_name: A\n    last_name: B\n    group_id: foxes\n";
        let dir = write_config(
            "unknown_group",
            &[
                ("facility.yaml", FACILITY),
                ("groups.yaml", groups),
                ("holidays.yaml", HOLIDAYS),
                ("rates/2026.yaml", RATES),
            ],
        );
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.ends_with("groups.yaml"));
                assert!(message.contains("unknown group 'foxes'"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_inverted_holiday_is_rejected() {
        let holidays = "holidays:\n  - id: bad\n    name: Bad\n    start: 2026-05-02\n    end: 2026-05-01\n    kind: day_off\n";
        let dir = write_config(
            "inverted_holiday",
            &[
                ("facility.yaml", FACILITY),
                ("groups.yaml", GROUPS),
                ("holidays.yaml", holidays),
                ("rates/2026.yaml", RATES),
            ],
        );
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_inverted_rate_schedule_is_rejected() {
        let rates = "schedules:\n  - id: owls_lunch\n    group_id: owls\n    category: lunch\n    amount: \"9.00\"\n    valid_from: 2026-06-01\n    valid_to: 2026-01-01\n";
        let dir = write_config(
            "inverted_rate",
            &[
                ("facility.yaml", FACILITY),
                ("groups.yaml", GROUPS),
                ("holidays.yaml", HOLIDAYS),
                ("rates/2026.yaml", rates),
            ],
        );
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("owls_lunch"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_duplicate_schedule_ids_across_files_are_rejected() {
        let dir = write_config(
            "duplicate_rates",
            &[
                ("facility.yaml", FACILITY),
                ("groups.yaml", GROUPS),
                ("holidays.yaml", HOLIDAYS),
                ("rates/2026.yaml", RATES),
                ("rates/2027.yaml", RATES),
            ],
        );
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.ends_with("2027.yaml"));
                assert!(message.contains("duplicate rate schedule id"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = write_config(
            "bad_yaml",
            &[
                ("facility.yaml", "id: [unterminated\n"),
                ("groups.yaml", GROUPS),
                ("holidays.yaml", HOLIDAYS),
                ("rates/2026.yaml", RATES),
            ],
        );
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }
}
