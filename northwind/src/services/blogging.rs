//! Blogging service: articles, the products they mention, and customer comments.

use super::{found, require_id};
use crate::db::factory::DataAccessFactory;
use crate::db::handlers::{BlogCommentFilter, Page, Repository};
use crate::db::models::blogging::{BlogArticleDBRecord, BlogCommentDBRecord};
use crate::errors::Result;
use crate::models::blogging::{BlogArticle, BlogArticleProduct, BlogComment};
use crate::types::{BlogArticleId, BlogArticleProductId, BlogCommentId, ProductId};
use sqlx::PgPool;
use tracing::instrument;

pub struct BloggingService {
    factory: DataAccessFactory,
}

impl BloggingService {
    pub fn new(factory: DataAccessFactory) -> Self {
        Self { factory }
    }

    pub async fn connect(pool: &PgPool) -> Result<Self> {
        Ok(Self::new(DataAccessFactory::acquire(pool).await?))
    }

    #[instrument(skip(self, article), fields(employee_id = article.employee_id), err)]
    pub async fn create_article(&mut self, article: BlogArticle) -> Result<BlogArticleId> {
        Ok(self.factory.blog_articles().insert(&BlogArticleDBRecord::from(article)).await?)
    }

    /// Delete an article together with its product links; comments are left in place
    #[instrument(skip(self), err)]
    pub async fn destroy_article(&mut self, article_id: BlogArticleId) -> Result<bool> {
        require_id("article_id", article_id)?;
        Ok(self.factory.blog_articles().delete(article_id).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn show_articles(&mut self, offset: i64, limit: i64) -> Result<Vec<BlogArticle>> {
        let records = self.factory.blog_articles().list(&Page::new(offset, limit)).await?;
        Ok(records.into_iter().map(BlogArticle::from).collect())
    }

    #[instrument(skip(self), err)]
    pub async fn try_show_article(&mut self, article_id: BlogArticleId) -> Result<Option<BlogArticle>> {
        require_id("article_id", article_id)?;
        let record = found(self.factory.blog_articles().find(article_id).await)?;
        Ok(record.map(BlogArticle::from))
    }

    #[instrument(skip(self, article), err)]
    pub async fn update_article(&mut self, article_id: BlogArticleId, article: BlogArticle) -> Result<bool> {
        require_id("article_id", article_id)?;
        if article_id != article.blog_article_id {
            return Ok(false);
        }
        Ok(self.factory.blog_articles().update(&BlogArticleDBRecord::from(article)).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn link_product(&mut self, article_id: BlogArticleId, product_id: ProductId) -> Result<BlogArticleProductId> {
        require_id("article_id", article_id)?;
        require_id("product_id", product_id)?;
        Ok(self.factory.blog_articles().link_product(article_id, product_id).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn unlink_product(&mut self, article_id: BlogArticleId, product_id: ProductId) -> Result<bool> {
        require_id("article_id", article_id)?;
        require_id("product_id", product_id)?;
        Ok(self.factory.blog_articles().unlink_product(article_id, product_id).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn show_article_products(&mut self, article_id: BlogArticleId) -> Result<Vec<BlogArticleProduct>> {
        require_id("article_id", article_id)?;
        let links = self.factory.blog_articles().list_products(article_id).await?;
        Ok(links.into_iter().map(BlogArticleProduct::from).collect())
    }

    #[instrument(skip(self, comment), fields(article_id = comment.article_id), err)]
    pub async fn create_comment(&mut self, comment: BlogComment) -> Result<BlogCommentId> {
        Ok(self.factory.blog_comments().insert(&BlogCommentDBRecord::from(comment)).await?)
    }

    /// Comments across all articles, or one article's comments when `article_id` is given
    #[instrument(skip(self), err)]
    pub async fn show_comments(&mut self, article_id: Option<BlogArticleId>, offset: i64, limit: i64) -> Result<Vec<BlogComment>> {
        let filter = match article_id {
            Some(article_id) => {
                require_id("article_id", article_id)?;
                BlogCommentFilter::for_article(article_id, offset, limit)
            }
            None => BlogCommentFilter::new(offset, limit),
        };
        let records = self.factory.blog_comments().list(&filter).await?;
        Ok(records.into_iter().map(BlogComment::from).collect())
    }

    #[instrument(skip(self), err)]
    pub async fn try_show_comment(&mut self, comment_id: BlogCommentId) -> Result<Option<BlogComment>> {
        require_id("comment_id", comment_id)?;
        let record = found(self.factory.blog_comments().find(comment_id).await)?;
        Ok(record.map(BlogComment::from))
    }

    #[instrument(skip(self, comment), err)]
    pub async fn update_comment(&mut self, comment_id: BlogCommentId, comment: BlogComment) -> Result<bool> {
        require_id("comment_id", comment_id)?;
        if comment_id != comment.blog_comment_id {
            return Ok(false);
        }
        Ok(self.factory.blog_comments().update(&BlogCommentDBRecord::from(comment)).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn destroy_comment(&mut self, comment_id: BlogCommentId) -> Result<bool> {
        require_id("comment_id", comment_id)?;
        Ok(self.factory.blog_comments().delete(comment_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::models::employees::Employee;
    use crate::models::products::Product;
    use crate::services::{EmployeeManagementService, ProductManagementService};
    use crate::test_utils::{sample_article, sample_comment, sample_employee, sample_product};

    async fn author(pool: &PgPool) -> i32 {
        let mut employees = EmployeeManagementService::connect(pool).await.unwrap();
        employees
            .create_employee(Employee::from(sample_employee("Callahan", "Laura")))
            .await
            .unwrap()
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_article_lifecycle(pool: PgPool) {
        let employee_id = author(&pool).await;
        let mut service = BloggingService::connect(&pool).await.unwrap();

        let mut article = BlogArticle::from(sample_article(employee_id));
        article.blog_article_id = service.create_article(article.clone()).await.unwrap();
        assert_eq!(service.try_show_article(article.blog_article_id).await.unwrap(), Some(article.clone()));

        article.title = Some("Spring menu".to_string());
        assert!(!service.update_article(article.blog_article_id + 1, article.clone()).await.unwrap());
        assert!(service.update_article(article.blog_article_id, article.clone()).await.unwrap());
        assert_eq!(service.show_articles(0, 10).await.unwrap(), vec![article.clone()]);

        assert!(service.destroy_article(article.blog_article_id).await.unwrap());
        assert_eq!(service.try_show_article(article.blog_article_id).await.unwrap(), None);
        assert!(!service.destroy_article(article.blog_article_id).await.unwrap());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_article_products(pool: PgPool) {
        let employee_id = author(&pool).await;
        let mut products = ProductManagementService::connect(&pool).await.unwrap();
        let chang = products.create_product(Product::from(sample_product("Chang"))).await.unwrap();
        let ikura = products.create_product(Product::from(sample_product("Ikura"))).await.unwrap();

        let mut service = BloggingService::connect(&pool).await.unwrap();
        let article_id = service.create_article(BlogArticle::from(sample_article(employee_id))).await.unwrap();

        let first = service.link_product(article_id, ikura).await.unwrap();
        let second = service.link_product(article_id, chang).await.unwrap();

        let links = service.show_article_products(article_id).await.unwrap();
        assert_eq!(links.iter().map(|l| l.blog_article_product_id).collect::<Vec<_>>(), vec![first, second]);
        assert_eq!(links.iter().map(|l| l.product_id).collect::<Vec<_>>(), vec![ikura, chang]);

        assert!(service.unlink_product(article_id, ikura).await.unwrap());
        assert!(!service.unlink_product(article_id, ikura).await.unwrap());
        assert_eq!(service.show_article_products(article_id).await.unwrap().len(), 1);

        assert!(service.link_product(0, chang).await.unwrap_err().is_invalid_argument());
        assert!(service.unlink_product(article_id, -1).await.unwrap_err().is_invalid_argument());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_comments(pool: PgPool) {
        let employee_id = author(&pool).await;
        let mut service = BloggingService::connect(&pool).await.unwrap();
        let article_id = service.create_article(BlogArticle::from(sample_article(employee_id))).await.unwrap();

        let mut comment = BlogComment::from(sample_comment(article_id, "Tried the recipe, loved it"));
        comment.blog_comment_id = service.create_comment(comment.clone()).await.unwrap();
        let other = service
            .create_comment(BlogComment::from(sample_comment(article_id + 1, "Wrong article")))
            .await
            .unwrap();

        assert_eq!(service.show_comments(Some(article_id), 0, 10).await.unwrap(), vec![comment.clone()]);
        let all = service.show_comments(None, 0, 10).await.unwrap();
        assert_eq!(all.iter().map(|c| c.blog_comment_id).collect::<Vec<_>>(), vec![comment.blog_comment_id, other]);

        comment.text = None;
        assert!(!service.update_comment(other, comment.clone()).await.unwrap());
        assert!(service.update_comment(comment.blog_comment_id, comment.clone()).await.unwrap());
        assert_eq!(service.try_show_comment(comment.blog_comment_id).await.unwrap(), Some(comment.clone()));

        assert!(service.destroy_comment(comment.blog_comment_id).await.unwrap());
        assert_eq!(service.try_show_comment(comment.blog_comment_id).await.unwrap(), None);
        assert!(!service.destroy_comment(comment.blog_comment_id).await.unwrap());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_comment_arguments(pool: PgPool) {
        let mut service = BloggingService::connect(&pool).await.unwrap();

        assert!(service.show_comments(Some(0), 0, 10).await.unwrap_err().is_invalid_argument());
        assert!(service.show_comments(None, -1, 10).await.unwrap_err().is_invalid_argument());
        assert!(service.destroy_comment(0).await.unwrap_err().is_invalid_argument());
        assert!(matches!(
            service.create_comment(BlogComment::from(sample_comment(1, &"!".repeat(501)))).await,
            Err(Error::InvalidArgument { argument: "text", .. })
        ));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_non_positive_ids_are_rejected(pool: PgPool) {
        let mut service = BloggingService::connect(&pool).await.unwrap();

        for id in [0, -1, i32::MIN] {
            assert!(service.try_show_article(id).await.unwrap_err().is_invalid_argument());
            assert!(service.destroy_article(id).await.unwrap_err().is_invalid_argument());
            assert!(service.show_article_products(id).await.unwrap_err().is_invalid_argument());
            assert!(service.link_product(id, 1).await.unwrap_err().is_invalid_argument());
            assert!(service.link_product(1, id).await.unwrap_err().is_invalid_argument());
            assert!(service.unlink_product(id, 1).await.unwrap_err().is_invalid_argument());
            assert!(service.try_show_comment(id).await.unwrap_err().is_invalid_argument());
            assert!(service.destroy_comment(id).await.unwrap_err().is_invalid_argument());
            assert!(service.show_comments(Some(id), 0, 10).await.unwrap_err().is_invalid_argument());

            let mut article = BlogArticle::from(sample_article(1));
            article.blog_article_id = id;
            assert!(service.update_article(id, article).await.unwrap_err().is_invalid_argument());

            let mut comment = BlogComment::from(sample_comment(1, "Nice"));
            comment.blog_comment_id = id;
            assert!(service.update_comment(id, comment).await.unwrap_err().is_invalid_argument());
        }
    }
}
