use crate::domain::{models::{amenity::Amenity, place::Place}, ports::PlaceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

pub struct SqlitePlaceRepo {
    pool: SqlitePool,
}

impl SqlitePlaceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn link_amenities(tx: &mut Transaction<'_, Sqlite>, place_id: &str, amenity_ids: &[String]) -> Result<(), AppError> {
    for amenity_id in amenity_ids {
        sqlx::query("INSERT OR IGNORE INTO place_amenity (place_id, amenity_id) VALUES (?, ?)")
            .bind(place_id)
            .bind(amenity_id)
            .execute(&mut **tx)
            .await
            .map_err(AppError::Database)?;
    }
    Ok(())
}

#[async_trait]
impl PlaceRepository for SqlitePlaceRepo {
    async fn create(&self, place: &Place, amenity_ids: &[String]) -> Result<Place, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Place>(
            "INSERT INTO places (id, title, description, price, latitude, longitude, owner_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&place.id).bind(&place.title).bind(&place.description)
            .bind(place.price).bind(place.latitude).bind(place.longitude)
            .bind(&place.owner_id).bind(place.created_at).bind(place.updated_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        link_amenities(&mut tx, &created.id, amenity_ids).await?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Place>, AppError> {
        sqlx::query_as::<_, Place>("SELECT * FROM places WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Place>, AppError> {
        sqlx::query_as::<_, Place>("SELECT * FROM places ORDER BY created_at ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, place: &Place, amenity_ids: Option<&[String]>) -> Result<Place, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query_as::<_, Place>(
            "UPDATE places SET title = ?, description = ?, price = ?, latitude = ?, longitude = ?, updated_at = ?
             WHERE id = ? RETURNING *"
        )
            .bind(&place.title).bind(&place.description).bind(place.price)
            .bind(place.latitude).bind(place.longitude).bind(place.updated_at)
            .bind(&place.id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Place not found".into()))?;

        if let Some(ids) = amenity_ids {
            sqlx::query("DELETE FROM place_amenity WHERE place_id = ?")
                .bind(&place.id)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
            link_amenities(&mut tx, &place.id, ids).await?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM places WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Place not found".into()));
        }
        Ok(())
    }

    async fn list_amenities(&self, place_id: &str) -> Result<Vec<Amenity>, AppError> {
        sqlx::query_as::<_, Amenity>(
            "SELECT a.id, a.name, a.created_at, a.updated_at
             FROM amenities a
             JOIN place_amenity pa ON pa.amenity_id = a.id
             WHERE pa.place_id = ?
             ORDER BY a.name ASC"
        )
            .bind(place_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
