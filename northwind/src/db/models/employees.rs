//! Database models for employees.

use crate::models::employees::Employee;
use crate::types::EmployeeId;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// Transfer record for a row of the `employees` table.
///
/// `id` is ignored on insert (the store assigns it) and selects the row on update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeDBRecord {
    pub id: EmployeeId,
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    pub title_of_courtesy: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub home_phone: Option<String>,
    pub extension: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub notes: Option<String>,
    pub reports_to: Option<EmployeeId>,
    pub photo_path: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for EmployeeDBRecord {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("employee_id")?,
            last_name: row.try_get("last_name")?,
            first_name: row.try_get("first_name")?,
            title: row.try_get("title")?,
            title_of_courtesy: row.try_get("title_of_courtesy")?,
            birth_date: row.try_get("birth_date")?,
            hire_date: row.try_get("hire_date")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            region: row.try_get("region")?,
            postal_code: row.try_get("postal_code")?,
            country: row.try_get("country")?,
            home_phone: row.try_get("home_phone")?,
            extension: row.try_get("extension")?,
            photo: row.try_get("photo")?,
            notes: row.try_get("notes")?,
            reports_to: row.try_get("reports_to")?,
            photo_path: row.try_get("photo_path")?,
        })
    }
}

impl From<Employee> for EmployeeDBRecord {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.employee_id,
            last_name: employee.last_name,
            first_name: employee.first_name,
            title: employee.title,
            title_of_courtesy: employee.title_of_courtesy,
            birth_date: employee.birth_date,
            hire_date: employee.hire_date,
            address: employee.address,
            city: employee.city,
            region: employee.region,
            postal_code: employee.postal_code,
            country: employee.country,
            home_phone: employee.home_phone,
            extension: employee.extension,
            photo: employee.photo,
            notes: employee.notes,
            reports_to: employee.reports_to,
            photo_path: employee.photo_path,
        }
    }
}

impl From<EmployeeDBRecord> for Employee {
    fn from(db: EmployeeDBRecord) -> Self {
        Self {
            employee_id: db.id,
            last_name: db.last_name,
            first_name: db.first_name,
            title: db.title,
            title_of_courtesy: db.title_of_courtesy,
            birth_date: db.birth_date,
            hire_date: db.hire_date,
            address: db.address,
            city: db.city,
            region: db.region,
            postal_code: db.postal_code,
            country: db.country,
            home_phone: db.home_phone,
            extension: db.extension,
            photo: db.photo,
            notes: db.notes,
            reports_to: db.reports_to,
            photo_path: db.photo_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_copies_every_field() {
        let employee = Employee {
            employee_id: 9,
            last_name: "Dodsworth".to_string(),
            first_name: "Anne".to_string(),
            title: Some("Sales Representative".to_string()),
            title_of_courtesy: Some("Ms.".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1966, 1, 27),
            hire_date: NaiveDate::from_ymd_opt(1994, 11, 15),
            address: Some("7 Houndstooth Rd.".to_string()),
            city: Some("London".to_string()),
            region: None,
            postal_code: Some("WG2 7LT".to_string()),
            country: Some("UK".to_string()),
            home_phone: Some("(71) 555-4444".to_string()),
            extension: Some("452".to_string()),
            photo: Some(vec![0x15, 0x1c, 0x2f]),
            notes: Some("Anne has a BA degree in English from St. Lawrence College.".to_string()),
            reports_to: Some(5),
            photo_path: Some("http://accweb/emmployees/davolio.bmp".to_string()),
        };

        let record = EmployeeDBRecord::from(employee.clone());
        assert_eq!(record.id, 9);
        assert_eq!(record.reports_to, Some(5));
        assert_eq!(record.photo.as_deref(), Some(&[0x15, 0x1c, 0x2f][..]));

        let back = Employee::from(record);
        assert_eq!(back, employee);
    }
}
