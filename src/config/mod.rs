//! Configuration loading and management for the billing engine.
//!
//! This module provides functionality to load a facility configuration from
//! YAML files: facility metadata, groups and enrolled children, the holiday
//! calendar, and rate schedules.
//!
//! # Example
//!
//! ```no_run
//! use daycare_billing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sunny_days").unwrap();
//! println!("Loaded facility: {}", config.facility().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ChildConfig, EnrollmentConfig, FacilityConfig, FacilityMetadata, GroupConfig, HolidayConfig,
    HolidaysConfig, RateFileConfig,
};
