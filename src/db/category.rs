//! Category model and repository.

use tracing::info;

use super::DbPool;
use crate::error::Resource;
use crate::{PostingsError, Result};

/// Category a posting is filed under.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Repository for category lookups.
pub struct CategoryRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new CategoryRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a category.
    pub async fn create(&self, name: &str) -> Result<Category> {
        let id: i64 = sqlx::query_scalar("INSERT INTO categories (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(self.pool)
            .await?;

        self.get_by_id(id)
            .await?
            .ok_or(PostingsError::NotFound(Resource::Category))
    }

    /// Get a category by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;
        Ok(category)
    }

    /// Check whether a category exists.
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await?;
        Ok(exists)
    }

    /// Create every named category that does not exist yet.
    ///
    /// Returns the number of categories created.
    pub async fn seed(&self, names: &[String]) -> Result<u64> {
        let mut created = 0;
        for name in names {
            let result = sqlx::query("INSERT OR IGNORE INTO categories (name) VALUES (?)")
                .bind(name)
                .execute(self.pool)
                .await?;
            created += result.rows_affected();
        }
        if created > 0 {
            info!(created, "Seeded categories");
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[tokio::test]
    async fn test_create_and_exists() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = CategoryRepository::new(db.pool());

        let category = repo.create("notice").await.unwrap();
        assert_eq!(category.name, "notice");
        assert!(repo.exists(category.id).await.unwrap());
        assert!(!repo.exists(category.id + 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_seed_skips_existing() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = CategoryRepository::new(db.pool());
        repo.create("notice").await.unwrap();

        let names = vec!["notice".to_string(), "free".to_string()];
        assert_eq!(repo.seed(&names).await.unwrap(), 1);
        assert_eq!(repo.seed(&names).await.unwrap(), 0);

        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM categories ORDER BY id")
            .fetch_all(db.pool())
            .await
            .unwrap();
        assert_eq!(names, vec!["notice", "free"]);
    }
}
