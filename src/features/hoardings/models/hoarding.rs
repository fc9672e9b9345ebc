use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database row for a hoarding.
///
/// `h_id` and `created_at` are store-generated; every client-writable
/// column is nullable because the schema enforces nothing beyond types.
#[derive(Debug, Clone, FromRow)]
pub struct Hoarding {
    pub h_id: i32,
    pub h_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub size: Option<String>,
    pub owner_name: Option<String>,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub ad_start_date: Option<NaiveDate>,
    pub ad_end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub rental_cost: Option<i32>,
    pub contract_start_date: Option<NaiveDate>,
    pub contract_end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
