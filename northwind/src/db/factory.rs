//! Data access factory handing out repositories over one connection.

use crate::db::errors::Result;
use crate::db::handlers::{BlogArticles, BlogComments, Categories, Employees, Products};
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::instrument;

/// Owns one pooled connection and lends it to repositories.
///
/// Every repository returned borrows the connection mutably, so statements issued through one
/// factory are strictly sequential. The connection goes back to the pool when the factory drops.
pub struct DataAccessFactory {
    conn: PoolConnection<Postgres>,
}

impl DataAccessFactory {
    /// Acquire a connection from the pool
    #[instrument(skip(pool), err)]
    pub async fn acquire(pool: &PgPool) -> Result<Self> {
        let conn = pool.acquire().await?;
        Ok(Self { conn })
    }

    pub fn employees(&mut self) -> Employees<'_> {
        Employees::new(&mut self.conn)
    }

    pub fn products(&mut self) -> Products<'_> {
        Products::new(&mut self.conn)
    }

    pub fn categories(&mut self) -> Categories<'_> {
        Categories::new(&mut self.conn)
    }

    pub fn blog_articles(&mut self) -> BlogArticles<'_> {
        BlogArticles::new(&mut self.conn)
    }

    pub fn blog_comments(&mut self) -> BlogComments<'_> {
        BlogComments::new(&mut self.conn)
    }
}
