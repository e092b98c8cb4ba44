//! Blogging domain models.
//!
//! Articles are written by employees and may reference any number of products; customers leave
//! comments on articles. All of these references are plain identifiers.

use crate::types::{BlogArticleId, BlogArticleProductId, BlogCommentId, CustomerId, EmployeeId, ProductId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogArticle {
    pub blog_article_id: BlogArticleId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub publication_date: NaiveDate,
    /// Author
    pub employee_id: EmployeeId,
}

/// A product mentioned by an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogArticleProduct {
    pub blog_article_product_id: BlogArticleProductId,
    pub article_id: BlogArticleId,
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogComment {
    pub blog_comment_id: BlogCommentId,
    pub article_id: BlogArticleId,
    pub customer_id: CustomerId,
    pub text: Option<String>,
}
