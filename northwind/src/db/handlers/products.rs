//! Database repository for products.

use crate::db::{
    columns::{TextColumn, require_positive_id, require_positive_ref},
    errors::{DbError, Result},
    handlers::repository::{Page, Repository},
    models::products::ProductDBRecord,
};
use crate::types::{CategoryId, ProductId};
use sqlx::PgConnection;
use tracing::instrument;

const PRODUCT_NAME: TextColumn = TextColumn::required("product_name", 40);
const QUANTITY_PER_UNIT: TextColumn = TextColumn::nullable("quantity_per_unit", 20);

const SELECT_PRODUCTS: &str = r#"
    SELECT p.product_id, p.product_name, p.supplier_id, p.category_id, p.quantity_per_unit, p.unit_price,
           p.units_in_stock, p.units_on_order, p.reorder_level, p.discontinued
    FROM products AS p
"#;

pub struct Products<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Products<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    fn check_columns(record: &ProductDBRecord) -> Result<()> {
        PRODUCT_NAME.check(Some(&record.product_name))?;
        QUANTITY_PER_UNIT.check(record.quantity_per_unit.as_deref())?;
        require_positive_ref("supplier_id", record.supplier_id)?;
        require_positive_ref("category_id", record.category_id)
    }

    /// Products whose name exactly matches one of `names`, in identifier order
    #[instrument(skip(self, names), fields(count = names.len()), err)]
    pub async fn list_by_names(&mut self, names: &[String]) -> Result<Vec<ProductDBRecord>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let products = sqlx::query_as::<_, ProductDBRecord>(&format!("{SELECT_PRODUCTS} WHERE p.product_name = ANY($1) ORDER BY p.product_id"))
            .bind(names)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(products)
    }

    /// Products belonging to a category, in identifier order
    #[instrument(skip(self), err)]
    pub async fn list_by_category(&mut self, category_id: CategoryId) -> Result<Vec<ProductDBRecord>> {
        require_positive_id("category_id", category_id)?;

        let products = sqlx::query_as::<_, ProductDBRecord>(&format!("{SELECT_PRODUCTS} WHERE p.category_id = $1 ORDER BY p.product_id"))
            .bind(category_id)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(products)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Products<'c> {
    type Record = ProductDBRecord;
    type Id = ProductId;
    type Filter = Page;

    #[instrument(skip(self, record), fields(product_name = %record.product_name), err)]
    async fn insert(&mut self, record: &Self::Record) -> Result<Self::Id> {
        Self::check_columns(record)?;

        let id = sqlx::query_scalar::<_, ProductId>(
            r#"
            INSERT INTO products (
                product_name, supplier_id, category_id, quantity_per_unit, unit_price, units_in_stock,
                units_on_order, reorder_level, discontinued
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING product_id
            "#,
        )
        .bind(&record.product_name)
        .bind(record.supplier_id)
        .bind(record.category_id)
        .bind(record.quantity_per_unit.as_deref())
        .bind(record.unit_price)
        .bind(record.units_in_stock)
        .bind(record.units_on_order)
        .bind(record.reorder_level)
        .bind(record.discontinued)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn find(&mut self, id: Self::Id) -> Result<Self::Record> {
        require_positive_id("product_id", id)?;

        let product = sqlx::query_as::<_, ProductDBRecord>(&format!("{SELECT_PRODUCTS} WHERE p.product_id = $1"))
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?
            .ok_or(DbError::NotFound)?;

        Ok(product)
    }

    #[instrument(skip(self, page), fields(offset = page.offset, limit = page.limit), err)]
    async fn list(&mut self, page: &Self::Filter) -> Result<Vec<Self::Record>> {
        page.validate()?;

        let products = sqlx::query_as::<_, ProductDBRecord>(&format!("{SELECT_PRODUCTS} ORDER BY p.product_id OFFSET $1 LIMIT $2"))
            .bind(page.offset)
            .bind(page.limit)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(products)
    }

    #[instrument(skip(self, record), fields(product_id = record.id), err)]
    async fn update(&mut self, record: &Self::Record) -> Result<bool> {
        require_positive_id("product_id", record.id)?;
        Self::check_columns(record)?;

        let result = sqlx::query(
            r#"
            UPDATE products SET
                product_name = $2, supplier_id = $3, category_id = $4, quantity_per_unit = $5, unit_price = $6,
                units_in_stock = $7, units_on_order = $8, reorder_level = $9, discontinued = $10
            WHERE product_id = $1
            "#,
        )
        .bind(record.id)
        .bind(&record.product_name)
        .bind(record.supplier_id)
        .bind(record.category_id)
        .bind(record.quantity_per_unit.as_deref())
        .bind(record.unit_price)
        .bind(record.units_in_stock)
        .bind(record.units_on_order)
        .bind(record.reorder_level)
        .bind(record.discontinued)
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        require_positive_id("product_id", id)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
