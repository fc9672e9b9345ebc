use std::sync::Arc;

use crate::core::error::Result;
use crate::features::hoardings::dtos::{HoardingFieldsDto, HoardingResponseDto};
use crate::features::hoardings::stores::HoardingStore;

/// Service for hoarding operations.
///
/// Stateless apart from the injected store; each operation is a single
/// store call with no retry or compensation.
pub struct HoardingService {
    store: Arc<dyn HoardingStore>,
}

impl HoardingService {
    pub fn new(store: Arc<dyn HoardingStore>) -> Self {
        Self { store }
    }

    /// Create a new hoarding and return the generated id
    pub async fn create(&self, fields: HoardingFieldsDto) -> Result<i32> {
        let h_id = self.store.insert(&fields).await?;

        tracing::info!("Hoarding created: h_id={}", h_id);

        Ok(h_id)
    }

    /// List all hoardings in store order
    pub async fn list(&self) -> Result<Vec<HoardingResponseDto>> {
        let rows = self.store.fetch_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get hoarding by id; `None` when no row matches
    pub async fn get_by_id(&self, id: i32) -> Result<Option<HoardingResponseDto>> {
        Ok(self.store.fetch_by_id(id).await?.map(Into::into))
    }

    /// Replace all fields of the hoarding with the given id.
    /// Succeeds whether or not the id exists.
    pub async fn update(&self, id: i32, fields: HoardingFieldsDto) -> Result<()> {
        self.store.update(id, &fields).await?;

        tracing::info!("Hoarding updated: h_id={}", id);

        Ok(())
    }

    /// Delete the hoarding with the given id.
    /// Succeeds whether or not the id exists.
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.store.delete(id).await?;

        tracing::info!("Hoarding deleted: h_id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::hoardings::stores::memory::MemoryHoardingStore;

    fn service() -> HoardingService {
        HoardingService::new(Arc::new(MemoryHoardingStore::new()))
    }

    fn named(name: &str) -> HoardingFieldsDto {
        HoardingFieldsDto {
            h_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let service = service();

        let fields = HoardingFieldsDto {
            h_name: Some("Billboard A".to_string()),
            city: Some("Pune".to_string()),
            rental_cost: Some(5000),
            ..Default::default()
        };
        let id = service.create(fields).await.unwrap();

        let found = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.h_id, id);
        assert_eq!(found.h_name.as_deref(), Some("Billboard A"));
        assert_eq!(found.city.as_deref(), Some("Pune"));
        assert_eq!(found.rental_cost, Some(5000));
        assert_eq!(found.address, None);
    }

    #[tokio::test]
    async fn get_of_missing_id_is_none_not_an_error() {
        let service = service();
        assert!(service.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_all_fields_and_keeps_created_at() {
        let service = service();

        let id = service
            .create(HoardingFieldsDto {
                h_name: Some("Old".to_string()),
                city: Some("Pune".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let created_at = service.get_by_id(id).await.unwrap().unwrap().created_at;

        // full replace: city is absent in the new field set, so it nulls out
        service.update(id, named("New")).await.unwrap();

        let found = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.h_name.as_deref(), Some("New"));
        assert_eq!(found.city, None);
        assert_eq!(found.created_at, created_at);
    }

    #[tokio::test]
    async fn update_of_missing_id_still_succeeds() {
        let service = service();
        service.update(999, named("Ghost")).await.unwrap();
        assert!(service.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_then_get_is_empty_and_delete_is_idempotent() {
        let service = service();

        let id = service.create(named("Billboard A")).await.unwrap();
        service.delete(id).await.unwrap();
        assert!(service.get_by_id(id).await.unwrap().is_none());

        // deleting again (or a never-existing id) is indistinguishable
        service.delete(id).await.unwrap();
        service.delete(12345).await.unwrap();
    }

    #[tokio::test]
    async fn list_contains_exactly_the_created_records() {
        let service = service();

        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(service.create(named(&format!("Billboard {}", i))).await.unwrap());
        }

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 5);
        let mut listed_ids: Vec<i32> = listed.iter().map(|h| h.h_id).collect();
        listed_ids.sort_unstable();
        assert_eq!(listed_ids, ids);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let service = Arc::new(service());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.create(named(&format!("B{}", i))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap());
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test]
    async fn store_failure_propagates_verbatim() {
        let store = Arc::new(MemoryHoardingStore::new());
        let service = HoardingService::new(Arc::clone(&store) as Arc<dyn HoardingStore>);

        store.fail_with("connection reset by peer");

        let err = service.list().await.unwrap_err();
        match err {
            AppError::Internal(msg) => assert_eq!(msg, "connection reset by peer"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
