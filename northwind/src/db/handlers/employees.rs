//! Database repository for employees.

use crate::db::{
    columns::{TextColumn, require_positive_id, require_positive_ref},
    errors::{DbError, Result},
    handlers::repository::{Page, Repository},
    models::employees::EmployeeDBRecord,
};
use crate::types::EmployeeId;
use sqlx::PgConnection;
use tracing::instrument;

const LAST_NAME: TextColumn = TextColumn::required("last_name", 20);
const FIRST_NAME: TextColumn = TextColumn::required("first_name", 10);
const TITLE: TextColumn = TextColumn::nullable("title", 30);
const TITLE_OF_COURTESY: TextColumn = TextColumn::nullable("title_of_courtesy", 25);
const ADDRESS: TextColumn = TextColumn::nullable("address", 60);
const CITY: TextColumn = TextColumn::nullable("city", 15);
const REGION: TextColumn = TextColumn::nullable("region", 15);
const POSTAL_CODE: TextColumn = TextColumn::nullable("postal_code", 10);
const COUNTRY: TextColumn = TextColumn::nullable("country", 15);
const HOME_PHONE: TextColumn = TextColumn::nullable("home_phone", 24);
const EXTENSION: TextColumn = TextColumn::nullable("extension", 4);
const NOTES: TextColumn = TextColumn::unbounded("notes");
const PHOTO_PATH: TextColumn = TextColumn::nullable("photo_path", 255);

const SELECT_EMPLOYEES: &str = r#"
    SELECT e.employee_id, e.last_name, e.first_name, e.title, e.title_of_courtesy, e.birth_date, e.hire_date,
           e.address, e.city, e.region, e.postal_code, e.country, e.home_phone, e.extension, e.photo, e.notes,
           e.reports_to, e.photo_path
    FROM employees AS e
"#;

pub struct Employees<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Employees<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    fn check_columns(record: &EmployeeDBRecord) -> Result<()> {
        LAST_NAME.check(Some(&record.last_name))?;
        FIRST_NAME.check(Some(&record.first_name))?;
        TITLE.check(record.title.as_deref())?;
        TITLE_OF_COURTESY.check(record.title_of_courtesy.as_deref())?;
        ADDRESS.check(record.address.as_deref())?;
        CITY.check(record.city.as_deref())?;
        REGION.check(record.region.as_deref())?;
        POSTAL_CODE.check(record.postal_code.as_deref())?;
        COUNTRY.check(record.country.as_deref())?;
        HOME_PHONE.check(record.home_phone.as_deref())?;
        EXTENSION.check(record.extension.as_deref())?;
        NOTES.check(record.notes.as_deref())?;
        PHOTO_PATH.check(record.photo_path.as_deref())?;
        require_positive_ref("reports_to", record.reports_to)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Employees<'c> {
    type Record = EmployeeDBRecord;
    type Id = EmployeeId;
    type Filter = Page;

    #[instrument(skip(self, record), fields(last_name = %record.last_name), err)]
    async fn insert(&mut self, record: &Self::Record) -> Result<Self::Id> {
        Self::check_columns(record)?;

        let id = sqlx::query_scalar::<_, EmployeeId>(
            r#"
            INSERT INTO employees (
                last_name, first_name, title, title_of_courtesy, birth_date, hire_date, address, city, region,
                postal_code, country, home_phone, extension, photo, notes, reports_to, photo_path
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING employee_id
            "#,
        )
        .bind(&record.last_name)
        .bind(&record.first_name)
        .bind(record.title.as_deref())
        .bind(record.title_of_courtesy.as_deref())
        .bind(record.birth_date)
        .bind(record.hire_date)
        .bind(record.address.as_deref())
        .bind(record.city.as_deref())
        .bind(record.region.as_deref())
        .bind(record.postal_code.as_deref())
        .bind(record.country.as_deref())
        .bind(record.home_phone.as_deref())
        .bind(record.extension.as_deref())
        .bind(record.photo.as_deref())
        .bind(record.notes.as_deref())
        .bind(record.reports_to)
        .bind(record.photo_path.as_deref())
        .fetch_one(&mut *self.db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn find(&mut self, id: Self::Id) -> Result<Self::Record> {
        require_positive_id("employee_id", id)?;

        let employee = sqlx::query_as::<_, EmployeeDBRecord>(&format!("{SELECT_EMPLOYEES} WHERE e.employee_id = $1"))
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?
            .ok_or(DbError::NotFound)?;

        Ok(employee)
    }

    #[instrument(skip(self, page), fields(offset = page.offset, limit = page.limit), err)]
    async fn list(&mut self, page: &Self::Filter) -> Result<Vec<Self::Record>> {
        page.validate()?;

        let employees = sqlx::query_as::<_, EmployeeDBRecord>(&format!("{SELECT_EMPLOYEES} ORDER BY e.employee_id OFFSET $1 LIMIT $2"))
            .bind(page.offset)
            .bind(page.limit)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(employees)
    }

    #[instrument(skip(self, record), fields(employee_id = record.id), err)]
    async fn update(&mut self, record: &Self::Record) -> Result<bool> {
        require_positive_id("employee_id", record.id)?;
        Self::check_columns(record)?;

        let result = sqlx::query(
            r#"
            UPDATE employees SET
                last_name = $2, first_name = $3, title = $4, title_of_courtesy = $5, birth_date = $6,
                hire_date = $7, address = $8, city = $9, region = $10, postal_code = $11, country = $12,
                home_phone = $13, extension = $14, photo = $15, notes = $16, reports_to = $17, photo_path = $18
            WHERE employee_id = $1
            "#,
        )
        .bind(record.id)
        .bind(&record.last_name)
        .bind(&record.first_name)
        .bind(record.title.as_deref())
        .bind(record.title_of_courtesy.as_deref())
        .bind(record.birth_date)
        .bind(record.hire_date)
        .bind(record.address.as_deref())
        .bind(record.city.as_deref())
        .bind(record.region.as_deref())
        .bind(record.postal_code.as_deref())
        .bind(record.country.as_deref())
        .bind(record.home_phone.as_deref())
        .bind(record.extension.as_deref())
        .bind(record.photo.as_deref())
        .bind(record.notes.as_deref())
        .bind(record.reports_to)
        .bind(record.photo_path.as_deref())
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        require_positive_id("employee_id", id)?;

        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
