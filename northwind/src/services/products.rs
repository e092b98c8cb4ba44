//! Product management service.

use super::{found, require_id};
use crate::db::factory::DataAccessFactory;
use crate::db::handlers::{Page, Repository};
use crate::db::models::products::ProductDBRecord;
use crate::errors::Result;
use crate::models::products::Product;
use crate::types::{CategoryId, ProductId};
use sqlx::PgPool;
use tracing::instrument;

pub struct ProductManagementService {
    factory: DataAccessFactory,
}

impl ProductManagementService {
    pub fn new(factory: DataAccessFactory) -> Self {
        Self { factory }
    }

    pub async fn connect(pool: &PgPool) -> Result<Self> {
        Ok(Self::new(DataAccessFactory::acquire(pool).await?))
    }

    #[instrument(skip(self, product), fields(product_name = %product.product_name), err)]
    pub async fn create_product(&mut self, product: Product) -> Result<ProductId> {
        Ok(self.factory.products().insert(&ProductDBRecord::from(product)).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn destroy_product(&mut self, product_id: ProductId) -> Result<bool> {
        require_id("product_id", product_id)?;
        Ok(self.factory.products().delete(product_id).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn show_products(&mut self, offset: i64, limit: i64) -> Result<Vec<Product>> {
        let records = self.factory.products().list(&Page::new(offset, limit)).await?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self), err)]
    pub async fn try_show_product(&mut self, product_id: ProductId) -> Result<Option<Product>> {
        require_id("product_id", product_id)?;
        let record = found(self.factory.products().find(product_id).await)?;
        Ok(record.map(Product::from))
    }

    #[instrument(skip(self, product), err)]
    pub async fn update_product(&mut self, product_id: ProductId, product: Product) -> Result<bool> {
        require_id("product_id", product_id)?;
        if product_id != product.product_id {
            return Ok(false);
        }
        Ok(self.factory.products().update(&ProductDBRecord::from(product)).await?)
    }

    /// Products whose names exactly match any of `names`
    #[instrument(skip(self, names), fields(count = names.len()), err)]
    pub async fn lookup_products_by_names(&mut self, names: &[String]) -> Result<Vec<Product>> {
        let records = self.factory.products().list_by_names(names).await?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self), err)]
    pub async fn show_products_for_category(&mut self, category_id: CategoryId) -> Result<Vec<Product>> {
        require_id("category_id", category_id)?;
        let records = self.factory.products().list_by_category(category_id).await?;
        Ok(records.into_iter().map(Product::from).collect())
    }
}
