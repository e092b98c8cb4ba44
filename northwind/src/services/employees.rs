//! Employee management service.

use super::{found, require_id};
use crate::db::factory::DataAccessFactory;
use crate::db::handlers::{Page, Repository};
use crate::db::models::employees::EmployeeDBRecord;
use crate::errors::Result;
use crate::models::employees::Employee;
use crate::types::EmployeeId;
use sqlx::PgPool;
use tracing::instrument;

pub struct EmployeeManagementService {
    factory: DataAccessFactory,
}

impl EmployeeManagementService {
    pub fn new(factory: DataAccessFactory) -> Self {
        Self { factory }
    }

    /// Create a service over a fresh connection from `pool`
    pub async fn connect(pool: &PgPool) -> Result<Self> {
        Ok(Self::new(DataAccessFactory::acquire(pool).await?))
    }

    /// Create an employee, returning the identifier the store assigned
    #[instrument(skip(self, employee), fields(last_name = %employee.last_name), err)]
    pub async fn create_employee(&mut self, employee: Employee) -> Result<EmployeeId> {
        let id = self.factory.employees().insert(&EmployeeDBRecord::from(employee)).await?;
        Ok(id)
    }

    #[instrument(skip(self), err)]
    pub async fn destroy_employee(&mut self, employee_id: EmployeeId) -> Result<bool> {
        require_id("employee_id", employee_id)?;
        Ok(self.factory.employees().delete(employee_id).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn show_employees(&mut self, offset: i64, limit: i64) -> Result<Vec<Employee>> {
        let records = self.factory.employees().list(&Page::new(offset, limit)).await?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    /// Look up an employee; `None` if there is no such employee
    #[instrument(skip(self), err)]
    pub async fn try_show_employee(&mut self, employee_id: EmployeeId) -> Result<Option<Employee>> {
        require_id("employee_id", employee_id)?;
        let record = found(self.factory.employees().find(employee_id).await)?;
        Ok(record.map(Employee::from))
    }

    /// Overwrite an employee; `false` if the identifiers disagree or no row was affected
    #[instrument(skip(self, employee), err)]
    pub async fn update_employee(&mut self, employee_id: EmployeeId, employee: Employee) -> Result<bool> {
        require_id("employee_id", employee_id)?;
        if employee_id != employee.employee_id {
            return Ok(false);
        }
        Ok(self.factory.employees().update(&EmployeeDBRecord::from(employee)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::sample_employee;

    fn employee(last_name: &str, first_name: &str) -> Employee {
        Employee::from(sample_employee(last_name, first_name))
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_then_show(pool: PgPool) {
        let mut service = EmployeeManagementService::connect(&pool).await.unwrap();

        let mut nancy = employee("Davolio", "Nancy");
        let id = service.create_employee(nancy.clone()).await.unwrap();
        nancy.employee_id = id;

        assert_eq!(service.try_show_employee(id).await.unwrap(), Some(nancy));
        assert_eq!(service.try_show_employee(id + 1).await.unwrap(), None);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_non_positive_ids_are_rejected(pool: PgPool) {
        let mut service = EmployeeManagementService::connect(&pool).await.unwrap();

        for id in [0, -1] {
            assert!(service.try_show_employee(id).await.unwrap_err().is_invalid_argument());
            assert!(service.destroy_employee(id).await.unwrap_err().is_invalid_argument());

            let mut model = employee("Fuller", "Andrew");
            model.employee_id = id;
            assert!(service.update_employee(id, model).await.unwrap_err().is_invalid_argument());
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update(pool: PgPool) {
        let mut service = EmployeeManagementService::connect(&pool).await.unwrap();

        let id = service.create_employee(employee("Leverling", "Janet")).await.unwrap();
        let mut janet = service.try_show_employee(id).await.unwrap().unwrap();
        janet.city = Some("Kirkland".to_string());

        // Mismatched identifiers never reach the store
        assert!(!service.update_employee(id + 1, janet.clone()).await.unwrap());
        assert_eq!(service.try_show_employee(id).await.unwrap().unwrap().city, Some("Seattle".to_string()));

        assert!(service.update_employee(id, janet.clone()).await.unwrap());
        assert_eq!(service.try_show_employee(id).await.unwrap(), Some(janet.clone()));

        // Nothing to update once the row is gone
        assert!(service.destroy_employee(id).await.unwrap());
        assert!(!service.update_employee(id, janet).await.unwrap());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_destroy_is_idempotent_in_effect(pool: PgPool) {
        let mut service = EmployeeManagementService::connect(&pool).await.unwrap();

        let id = service.create_employee(employee("Peacock", "Margaret")).await.unwrap();
        assert!(service.destroy_employee(id).await.unwrap());
        assert!(!service.destroy_employee(id).await.unwrap());
        assert_eq!(service.try_show_employee(id).await.unwrap(), None);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_show_employees_pages(pool: PgPool) {
        let mut service = EmployeeManagementService::connect(&pool).await.unwrap();

        for (last, first) in [("Buchanan", "Steven"), ("Suyama", "Michael"), ("King", "Robert")] {
            service.create_employee(employee(last, first)).await.unwrap();
        }

        let page = service.show_employees(0, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert!(page[0].employee_id < page[1].employee_id);
        assert_eq!(page[0].last_name, "Buchanan");

        assert!(service.show_employees(3, 2).await.unwrap().is_empty());
        assert!(matches!(service.show_employees(-1, 2).await, Err(Error::InvalidArgument { argument: "offset", .. })));
        assert!(matches!(service.show_employees(0, 0).await, Err(Error::InvalidArgument { argument: "limit", .. })));
    }
}
