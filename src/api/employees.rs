//! Employee endpoints

use serde_json::Value;

use super::{ApiClient, ApiError};
use crate::constants::api::EMPLOYEES_PATH;
use crate::model::Employee;

impl ApiClient {
    /// List the full employee collection.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.execute(self.get(EMPLOYEES_PATH)).await
    }

    /// Create an employee. The backend routes creation under the trailing
    /// slash and echoes the created entity; the echo is passed through
    /// untyped because callers discard it.
    pub async fn add_employee(&self, employee: &Employee) -> Result<Value, ApiError> {
        self.execute(self.post(&format!("{EMPLOYEES_PATH}/")).json(employee))
            .await
    }

    /// Delete an employee by id. Status-only response.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        self.execute_status(self.delete(&format!("{EMPLOYEES_PATH}/{employee_id}")))
            .await
    }
}
