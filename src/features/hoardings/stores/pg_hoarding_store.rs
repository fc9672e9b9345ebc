use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::hoardings::dtos::HoardingFieldsDto;
use crate::features::hoardings::models::Hoarding;
use crate::features::hoardings::stores::HoardingStore;

const HOARDING_COLUMNS: &str = "h_id, h_name, address, city, state, latitude, longitude, size, \
     owner_name, contact_person, contact_number, ad_start_date, ad_end_date, status, \
     rental_cost, contract_start_date, contract_end_date, notes, created_at";

/// PostgreSQL-backed [`HoardingStore`]
pub struct PgHoardingStore {
    pool: PgPool,
}

impl PgHoardingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HoardingStore for PgHoardingStore {
    async fn insert(&self, fields: &HoardingFieldsDto) -> Result<i32> {
        let h_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO hoardings
                (h_name, address, city, state, latitude, longitude, size, owner_name,
                 contact_person, contact_number, ad_start_date, ad_end_date, status,
                 rental_cost, contract_start_date, contract_end_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING h_id
            "#,
        )
        .bind(&fields.h_name)
        .bind(&fields.address)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.latitude)
        .bind(&fields.longitude)
        .bind(&fields.size)
        .bind(&fields.owner_name)
        .bind(&fields.contact_person)
        .bind(&fields.contact_number)
        .bind(fields.ad_start_date)
        .bind(fields.ad_end_date)
        .bind(&fields.status)
        .bind(fields.rental_cost)
        .bind(fields.contract_start_date)
        .bind(fields.contract_end_date)
        .bind(&fields.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert hoarding: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(h_id)
    }

    async fn fetch_all(&self) -> Result<Vec<Hoarding>> {
        let sql = format!("SELECT {} FROM hoardings", HOARDING_COLUMNS);

        sqlx::query_as::<_, Hoarding>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list hoardings: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn fetch_by_id(&self, id: i32) -> Result<Option<Hoarding>> {
        let sql = format!("SELECT {} FROM hoardings WHERE h_id = $1", HOARDING_COLUMNS);

        sqlx::query_as::<_, Hoarding>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch hoarding {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: i32, fields: &HoardingFieldsDto) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE hoardings SET
                h_name = $1, address = $2, city = $3, state = $4, latitude = $5,
                longitude = $6, size = $7, owner_name = $8, contact_person = $9,
                contact_number = $10, ad_start_date = $11, ad_end_date = $12,
                status = $13, rental_cost = $14, contract_start_date = $15,
                contract_end_date = $16, notes = $17
            WHERE h_id = $18
            "#,
        )
        .bind(&fields.h_name)
        .bind(&fields.address)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.latitude)
        .bind(&fields.longitude)
        .bind(&fields.size)
        .bind(&fields.owner_name)
        .bind(&fields.contact_person)
        .bind(&fields.contact_number)
        .bind(fields.ad_start_date)
        .bind(fields.ad_end_date)
        .bind(&fields.status)
        .bind(fields.rental_cost)
        .bind(fields.contract_start_date)
        .bind(fields.contract_end_date)
        .bind(&fields.notes)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update hoarding {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM hoardings WHERE h_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete hoarding {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(())
    }
}
