//! Employee storage

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use tracing::{error, warn};

use super::models::{Employee, NewEmployee};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage port for employee rows. Each operation is a single independent
/// statement; no transaction spans more than one of them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, StoreError>;
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
    async fn count(&self) -> Result<i64, StoreError>;
}

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, StoreError> {
        let row: Employee = sqlx::query_as(
            r#"
            INSERT INTO employees (
                first_name, last_name, email, phone,
                department, job_title, hire_date, salary
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, first_name, last_name, email, phone,
                department, job_title, hire_date, salary,
                created_at, updated_at
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(&employee.department)
        .bind(&employee.job_title)
        .bind(&employee.hire_date)
        .bind(employee.salary)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating employee: {}", e);
            StoreError::Database(e)
        })?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT
                id, first_name, last_name, email, phone,
                department, job_title, hire_date, salary,
                created_at, updated_at
            FROM employees
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing employees: {}", e);
            StoreError::Database(e)
        })?;

        // A row that fails to decode is skipped, not fatal for the listing.
        let employees = rows
            .iter()
            .filter_map(|row| match Employee::from_row(row) {
                Ok(employee) => Some(employee),
                Err(e) => {
                    warn!("Skipping undecodable employee row: {}", e);
                    None
                }
            })
            .collect();

        Ok(employees)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        // The id arrives as an opaque path segment; the cast happens in the
        // database, so a non-numeric id surfaces as a storage error. Deleting
        // a missing id succeeds the same way as deleting an existing one.
        sqlx::query("DELETE FROM employees WHERE id = CAST($1 AS BIGINT)")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting employee: {}", e);
                StoreError::Database(e)
            })?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error counting employees: {}", e);
                StoreError::Database(e)
            })?;

        Ok(count)
    }
}
