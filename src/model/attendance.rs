use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Daily attendance status. The backend stores the variant name verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One attendance entry for an employee on a calendar day.
/// Create-only: the backend offers no update or delete for these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"Present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Absent).unwrap(),
            "\"Absent\""
        );
    }

    #[test]
    fn record_round_trips_backend_json() {
        let json = r#"{"employee_id":"E1","date":"2024-01-01","status":"Present"}"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "E1");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.status, AttendanceStatus::Present);
    }
}
