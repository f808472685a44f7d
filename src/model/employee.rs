use serde::{Deserialize, Serialize};

/// Employee record as stored by the backend. The id is caller-supplied,
/// so the create payload has the same shape as the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Resolve an employee id to its display name by scanning the loaded
/// collection. Unresolved ids fall back to the raw id.
pub fn display_name<'a>(employees: &'a [Employee], employee_id: &'a str) -> &'a str {
    employees
        .iter()
        .find(|emp| emp.employee_id == employee_id)
        .map(|emp| emp.full_name.as_str())
        .unwrap_or(employee_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, name: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            full_name: name.to_string(),
            email: format!("{id}@example.com"),
            department: "Eng".to_string(),
        }
    }

    #[test]
    fn display_name_resolves_known_id() {
        let employees = vec![sample("E1", "Ann"), sample("E2", "Bob")];
        assert_eq!(display_name(&employees, "E2"), "Bob");
    }

    #[test]
    fn display_name_falls_back_to_raw_id() {
        let employees = vec![sample("E1", "Ann")];
        assert_eq!(display_name(&employees, "E9"), "E9");
    }
}
