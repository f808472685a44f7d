//! Dashboard aggregates derived from the last-loaded snapshot
//!
//! Pure functions over the raw collections. Nothing here is cached; the
//! dashboard recomputes from its snapshot on every frame.

use crate::model::{AttendanceRecord, AttendanceStatus, Employee};

/// Number of rows shown in the recent-attendance table.
pub const RECENT_LIMIT: usize = 5;

/// Headline numbers plus the department list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_present: usize,
    pub total_absent: usize,
    pub departments: Vec<String>,
}

impl DashboardStats {
    pub fn from_snapshot(employees: &[Employee], records: &[AttendanceRecord]) -> Self {
        Self {
            total_employees: employees.len(),
            total_present: records
                .iter()
                .filter(|r| r.status == AttendanceStatus::Present)
                .count(),
            total_absent: records
                .iter()
                .filter(|r| r.status == AttendanceStatus::Absent)
                .count(),
            departments: departments(employees),
        }
    }
}

/// Distinct departments in order of first appearance.
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for employee in employees {
        if !seen.contains(&employee.department) {
            seen.push(employee.department.clone());
        }
    }
    seen
}

/// Employees belonging to one department.
pub fn department_count(employees: &[Employee], department: &str) -> usize {
    employees
        .iter()
        .filter(|e| e.department == department)
        .count()
}

/// The leading slice of the snapshot in whatever order the API returned
/// it; deliberately not re-sorted by date.
pub fn recent(records: &[AttendanceRecord]) -> &[AttendanceRecord] {
    &records[..records.len().min(RECENT_LIMIT)]
}
