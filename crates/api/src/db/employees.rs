//! Employee repository for database operations.
//!
//! The repository borrows a single connection rather than the pool, so each
//! method runs exactly one statement on the connection the caller checked out
//! for its request.

use sqlx::PgConnection;

use employee_registry_core::EmployeeId;

use super::RepositoryError;
use crate::models::{Employee, EmployeeFields};

/// Message carried by the conflict raised on a duplicate email.
pub const DUPLICATE_EMAIL: &str = "Employee with this email already exists";

/// Storage representation of an `employees` row.
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: EmployeeId,
    name: String,
    email: String,
    department: String,
    age: i32,
    salary: f64,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            fields: EmployeeFields {
                name: row.name,
                email: row.email,
                department: row.department,
                age: row.age,
                salary: row.salary,
            },
        }
    }
}

/// Repository for employee database operations.
pub struct EmployeeRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> EmployeeRepository<'c> {
    /// Create a new employee repository over a checked-out connection.
    #[must_use]
    pub const fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a new employee and return it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&mut self, fields: &EmployeeFields) -> Result<Employee, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r"
            INSERT INTO employees (name, email, department, age, salary)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, department, age, salary
            ",
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.department)
        .bind(fields.age)
        .bind(fields.salary)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| RepositoryError::from_write(e, DUPLICATE_EMAIL))?;

        Ok(row.into())
    }

    /// Get every employee.
    ///
    /// Rows come back ordered by id; callers should not depend on it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&mut self) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r"
            SELECT id, name, email, department, age, salary
            FROM employees
            ORDER BY id
            ",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    /// Get an employee by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&mut self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r"
            SELECT id, name, email, department, age, salary
            FROM employees
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row.map(Employee::from))
    }

    /// Overwrite every mutable column of an employee.
    ///
    /// Returns `None` if no employee has this id. The lookup and the write
    /// are one `UPDATE ... RETURNING`, so a concurrent delete either happens
    /// before (and this returns `None`) or after.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the new email belongs to another employee.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn replace_by_id(
        &mut self,
        id: EmployeeId,
        fields: &EmployeeFields,
    ) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r"
            UPDATE employees
            SET name = $2,
                email = $3,
                department = $4,
                age = $5,
                salary = $6
            WHERE id = $1
            RETURNING id, name, email, department, age, salary
            ",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.department)
        .bind(fields.age)
        .bind(fields.salary)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| RepositoryError::from_write(e, DUPLICATE_EMAIL))?;

        Ok(row.map(Employee::from))
    }

    /// Delete an employee by id.
    ///
    /// # Returns
    ///
    /// Returns `true` if the employee was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_by_id(&mut self, id: EmployeeId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM employees
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
