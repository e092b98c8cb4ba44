//! Database models for products.

use crate::models::products::Product;
use crate::types::{CategoryId, ProductId, SupplierId};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Transfer record for a row of the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct ProductDBRecord {
    #[sqlx(rename = "product_id")]
    pub id: ProductId,
    pub product_name: String,
    pub supplier_id: Option<SupplierId>,
    pub category_id: Option<CategoryId>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<Decimal>,
    pub units_in_stock: Option<i16>,
    pub units_on_order: Option<i16>,
    pub reorder_level: Option<i16>,
    pub discontinued: bool,
}

impl From<Product> for ProductDBRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.product_id,
            product_name: product.product_name,
            supplier_id: product.supplier_id,
            category_id: product.category_id,
            quantity_per_unit: product.quantity_per_unit,
            unit_price: product.unit_price,
            units_in_stock: product.units_in_stock,
            units_on_order: product.units_on_order,
            reorder_level: product.reorder_level,
            discontinued: product.discontinued,
        }
    }
}

impl From<ProductDBRecord> for Product {
    fn from(db: ProductDBRecord) -> Self {
        Self {
            product_id: db.id,
            product_name: db.product_name,
            supplier_id: db.supplier_id,
            category_id: db.category_id,
            quantity_per_unit: db.quantity_per_unit,
            unit_price: db.unit_price,
            units_in_stock: db.units_in_stock,
            units_on_order: db.units_on_order,
            reorder_level: db.reorder_level,
            discontinued: db.discontinued,
        }
    }
}
