//! Attendance endpoints

use chrono::NaiveDate;
use serde_json::Value;

use super::{ApiClient, ApiError};
use crate::constants::api::ATTENDANCE_PATH;
use crate::model::AttendanceRecord;

impl ApiClient {
    /// Record one attendance entry. Echo passed through untyped.
    pub async fn mark_attendance(&self, record: &AttendanceRecord) -> Result<Value, ApiError> {
        self.execute(self.post(&format!("{ATTENDANCE_PATH}/")).json(record))
            .await
    }

    /// All attendance records for one employee.
    pub async fn attendance_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.execute(self.get(&format!("{ATTENDANCE_PATH}/{employee_id}")))
            .await
    }

    /// All attendance records, optionally filtered to one calendar day.
    pub async fn list_attendance(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut request = self.get(ATTENDANCE_PATH);
        if let Some(date) = date {
            request = request.query(&[("date", date.to_string())]);
        }
        self.execute(request).await
    }
}
