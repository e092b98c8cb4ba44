//! Fixtures shared by repository and service tests.

use crate::db::models::{
    blogging::{BlogArticleDBRecord, BlogCommentDBRecord},
    categories::CategoryDBRecord,
    employees::EmployeeDBRecord,
    products::ProductDBRecord,
};
use crate::types::{BlogArticleId, EmployeeId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// An employee with every column populated except `photo` and `reports_to`
pub fn sample_employee(last_name: &str, first_name: &str) -> EmployeeDBRecord {
    EmployeeDBRecord {
        id: 0,
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        title: Some("Sales Representative".to_string()),
        title_of_courtesy: Some("Ms.".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1968, 12, 8),
        hire_date: NaiveDate::from_ymd_opt(1992, 5, 1),
        address: Some("507 - 20th Ave. E. Apt. 2A".to_string()),
        city: Some("Seattle".to_string()),
        region: Some("WA".to_string()),
        postal_code: Some("98122".to_string()),
        country: Some("USA".to_string()),
        home_phone: Some("(206) 555-9857".to_string()),
        extension: Some("5467".to_string()),
        photo: None,
        notes: Some(format!("{first_name} {last_name} joined the sales team.")),
        reports_to: None,
        photo_path: Some("http://accweb/emmployees/davolio.bmp".to_string()),
    }
}

/// A product outside any category
pub fn sample_product(product_name: &str) -> ProductDBRecord {
    ProductDBRecord {
        id: 0,
        product_name: product_name.to_string(),
        supplier_id: Some(1),
        category_id: None,
        quantity_per_unit: Some("10 boxes x 20 bags".to_string()),
        unit_price: Some(Decimal::new(18, 0)),
        units_in_stock: Some(39),
        units_on_order: Some(0),
        reorder_level: Some(10),
        discontinued: false,
    }
}

pub fn sample_category(category_name: &str) -> CategoryDBRecord {
    CategoryDBRecord {
        id: 0,
        category_name: category_name.to_string(),
        description: Some(format!("All kinds of {}", category_name.to_lowercase())),
    }
}

pub fn sample_article(employee_id: EmployeeId) -> BlogArticleDBRecord {
    BlogArticleDBRecord {
        id: 0,
        title: Some("New arrivals".to_string()),
        body: Some("This month we are stocking a few new teas and sauces.".to_string()),
        publication_date: NaiveDate::from_ymd_opt(2021, 8, 26).unwrap_or_default(),
        employee_id,
    }
}

pub fn sample_comment(article_id: BlogArticleId, text: &str) -> BlogCommentDBRecord {
    BlogCommentDBRecord {
        id: 0,
        article_id,
        customer_id: 7,
        text: Some(text.to_string()),
    }
}
