use crate::domain::{models::amenity::Amenity, ports::AmenityRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteAmenityRepo {
    pool: SqlitePool,
}

impl SqliteAmenityRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AmenityRepository for SqliteAmenityRepo {
    async fn create(&self, amenity: &Amenity) -> Result<Amenity, AppError> {
        sqlx::query_as::<_, Amenity>(
            "INSERT INTO amenities (id, name, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&amenity.id)
            .bind(&amenity.name)
            .bind(amenity.created_at)
            .bind(amenity.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Amenity>, AppError> {
        sqlx::query_as::<_, Amenity>("SELECT * FROM amenities WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Amenity>, AppError> {
        sqlx::query_as::<_, Amenity>("SELECT * FROM amenities WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Amenity>, AppError> {
        sqlx::query_as::<_, Amenity>("SELECT * FROM amenities ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, amenity: &Amenity) -> Result<Amenity, AppError> {
        sqlx::query_as::<_, Amenity>(
            "UPDATE amenities SET name = ?, updated_at = ? WHERE id = ? RETURNING *"
        )
            .bind(&amenity.name)
            .bind(amenity.updated_at)
            .bind(&amenity.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Amenity not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM amenities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Amenity not found".into()));
        }
        Ok(())
    }
}
