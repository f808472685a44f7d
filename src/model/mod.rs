//! Domain types mirrored from the HR backend's JSON contracts

pub mod attendance;
pub mod employee;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, display_name};
