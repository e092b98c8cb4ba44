//! Employee domain model.

use crate::types::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A Northwind employee.
///
/// `last_name` and `first_name` are required; every other field mirrors a nullable column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
    pub notes: Option<String>,
    /// The employee's manager
    pub reports_to: Option<EmployeeId>,
    pub photo_path: Option<String>,
}
