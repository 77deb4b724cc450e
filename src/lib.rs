//! Attendance-driven tuition billing engine for daycare facilities.
//!
//! This crate computes how much is owed for a child over a billing period,
//! given the group's rate schedules, the facility's holiday calendar, and the
//! child's explicit attendance records. Charges accrue per service category on
//! working days only, and a child is assumed present unless marked absent.
//!
//! The pure engine lives in [`calculation`]; [`service`] reads consistent
//! snapshots from the [`store`] traits before running it; [`config`] and
//! [`api`] expose a facility over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
