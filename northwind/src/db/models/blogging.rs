//! Database models for the blogging tables.

use crate::models::blogging::{BlogArticle, BlogArticleProduct, BlogComment};
use crate::types::{BlogArticleId, BlogArticleProductId, BlogCommentId, CustomerId, EmployeeId, ProductId};
use chrono::NaiveDate;
use sqlx::FromRow;

/// Transfer record for a row of the `blog_articles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BlogArticleDBRecord {
    #[sqlx(rename = "blog_article_id")]
    pub id: BlogArticleId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub publication_date: NaiveDate,
    pub employee_id: EmployeeId,
}

/// Transfer record for a row of the `blog_article_products` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct BlogArticleProductDBRecord {
    #[sqlx(rename = "blog_article_product_id")]
    pub id: BlogArticleProductId,
    pub article_id: BlogArticleId,
    pub product_id: ProductId,
}

/// Transfer record for a row of the `blog_comments` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BlogCommentDBRecord {
    #[sqlx(rename = "blog_comment_id")]
    pub id: BlogCommentId,
    pub article_id: BlogArticleId,
    pub customer_id: CustomerId,
    pub text: Option<String>,
}

impl From<BlogArticle> for BlogArticleDBRecord {
    fn from(article: BlogArticle) -> Self {
        Self {
            id: article.blog_article_id,
            title: article.title,
            body: article.body,
            publication_date: article.publication_date,
            employee_id: article.employee_id,
        }
    }
}

impl From<BlogArticleDBRecord> for BlogArticle {
    fn from(db: BlogArticleDBRecord) -> Self {
        Self {
            blog_article_id: db.id,
            title: db.title,
            body: db.body,
            publication_date: db.publication_date,
            employee_id: db.employee_id,
        }
    }
}

impl From<BlogArticleProductDBRecord> for BlogArticleProduct {
    fn from(db: BlogArticleProductDBRecord) -> Self {
        Self {
            blog_article_product_id: db.id,
            article_id: db.article_id,
            product_id: db.product_id,
        }
    }
}

impl From<BlogComment> for BlogCommentDBRecord {
    fn from(comment: BlogComment) -> Self {
        Self {
            id: comment.blog_comment_id,
            article_id: comment.article_id,
            customer_id: comment.customer_id,
            text: comment.text,
        }
    }
}

impl From<BlogCommentDBRecord> for BlogComment {
    fn from(db: BlogCommentDBRecord) -> Self {
        Self {
            blog_comment_id: db.id,
            article_id: db.article_id,
            customer_id: db.customer_id,
            text: db.text,
        }
    }
}
