use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored employee row. `id` and both timestamps are assigned by the
/// database, never by the client.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_title: String,
    pub hire_date: String,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for a create request. Every field defaults so
/// that any JSON object decodes; no field-level validation is performed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_title: String,
    pub hire_date: String,
    pub salary: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_decodes_full_payload() {
        let emp: NewEmployee = serde_json::from_str(
            r#"{"first_name":"Ann","last_name":"Lee","email":"a@x.com",
                "department":"Eng","job_title":"SWE","hire_date":"2023-01-01",
                "salary":90000}"#,
        )
        .unwrap();
        assert_eq!(emp.first_name, "Ann");
        assert_eq!(emp.salary, 90000.0);
        // phone omitted in payload, defaults to empty
        assert_eq!(emp.phone, "");
    }

    #[test]
    fn test_new_employee_decodes_empty_object() {
        let emp: NewEmployee = serde_json::from_str("{}").unwrap();
        assert_eq!(emp.first_name, "");
        assert_eq!(emp.salary, 0.0);
    }

    #[test]
    fn test_new_employee_ignores_unknown_fields() {
        let emp: NewEmployee =
            serde_json::from_str(r#"{"first_name":"Bo","badge_color":"red"}"#).unwrap();
        assert_eq!(emp.first_name, "Bo");
    }
}
