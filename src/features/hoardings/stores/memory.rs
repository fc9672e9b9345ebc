use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::hoardings::dtos::HoardingFieldsDto;
use crate::features::hoardings::models::Hoarding;
use crate::features::hoardings::stores::HoardingStore;

/// In-memory [`HoardingStore`] fake for tests.
///
/// Mirrors the store contract: ids are generated, `created_at` is stamped
/// at insertion, update/delete of a missing id succeed silently. A forced
/// failure message makes every subsequent call report a store error.
pub struct MemoryHoardingStore {
    rows: Mutex<BTreeMap<i32, Hoarding>>,
    next_id: AtomicI32,
    fail_with: Mutex<Option<String>>,
}

impl MemoryHoardingStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
            fail_with: Mutex::new(None),
        }
    }

    /// Make every subsequent store call fail with the given message
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::Internal(message.clone())),
            None => Ok(()),
        }
    }

    fn materialize(&self, h_id: i32, fields: &HoardingFieldsDto) -> Hoarding {
        Hoarding {
            h_id,
            h_name: fields.h_name.clone(),
            address: fields.address.clone(),
            city: fields.city.clone(),
            state: fields.state.clone(),
            latitude: fields.latitude.clone(),
            longitude: fields.longitude.clone(),
            size: fields.size.clone(),
            owner_name: fields.owner_name.clone(),
            contact_person: fields.contact_person.clone(),
            contact_number: fields.contact_number.clone(),
            ad_start_date: fields.ad_start_date,
            ad_end_date: fields.ad_end_date,
            status: fields.status.clone(),
            rental_cost: fields.rental_cost,
            contract_start_date: fields.contract_start_date,
            contract_end_date: fields.contract_end_date,
            notes: fields.notes.clone(),
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl HoardingStore for MemoryHoardingStore {
    async fn insert(&self, fields: &HoardingFieldsDto) -> Result<i32> {
        self.check_failure()?;
        let h_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = self.materialize(h_id, fields);
        self.rows.lock().unwrap().insert(h_id, row);
        Ok(h_id)
    }

    async fn fetch_all(&self) -> Result<Vec<Hoarding>> {
        self.check_failure()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn fetch_by_id(&self, id: i32) -> Result<Option<Hoarding>> {
        self.check_failure()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: i32, fields: &HoardingFieldsDto) -> Result<()> {
        self.check_failure()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.get(&id) {
            let created_at = existing.created_at;
            let mut row = self.materialize(id, fields);
            row.created_at = created_at;
            rows.insert(id, row);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.check_failure()?;
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}
