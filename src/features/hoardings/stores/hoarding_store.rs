use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::hoardings::dtos::HoardingFieldsDto;
use crate::features::hoardings::models::Hoarding;

/// Seam to the relational store backing the `hoardings` table.
///
/// Every method issues exactly one parameterized statement; connection
/// management and statement queuing stay behind the implementation.
/// Injected into [`HoardingService`](crate::features::hoardings::HoardingService)
/// as a trait object so tests can substitute an in-memory fake.
#[async_trait]
pub trait HoardingStore: Send + Sync {
    /// Insert a row and return the store-generated `h_id`.
    async fn insert(&self, fields: &HoardingFieldsDto) -> Result<i32>;

    /// Fetch all rows, all columns, in whatever order the store returns.
    async fn fetch_all(&self) -> Result<Vec<Hoarding>>;

    /// Fetch the row with `h_id = id`, if any.
    async fn fetch_by_id(&self, id: i32) -> Result<Option<Hoarding>>;

    /// Replace all non-key columns of the row with `h_id = id`.
    ///
    /// The affected-row count is not inspected: updating a missing id is
    /// indistinguishable from updating an existing one.
    async fn update(&self, id: i32, fields: &HoardingFieldsDto) -> Result<()>;

    /// Delete the row with `h_id = id`. Same caveat as [`update`](Self::update):
    /// deleting a missing id succeeds.
    async fn delete(&self, id: i32) -> Result<()>;
}
