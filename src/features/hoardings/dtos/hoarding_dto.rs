use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::hoardings::models::Hoarding;

/// Request body for create and update.
///
/// Both operations take the full field set (update is a full replace, no
/// partial-patch semantics). No field is required; absent fields land in
/// the store as NULL. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct HoardingFieldsDto {
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
}

/// A hoarding as returned to the client. Absent columns serialize as null.
#[derive(Debug, Serialize, ToSchema)]
pub struct HoardingResponseDto {
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

impl From<Hoarding> for HoardingResponseDto {
    fn from(h: Hoarding) -> Self {
        Self {
            h_id: h.h_id,
            h_name: h.h_name,
            address: h.address,
            city: h.city,
            state: h.state,
            latitude: h.latitude,
            longitude: h.longitude,
            size: h.size,
            owner_name: h.owner_name,
            contact_person: h.contact_person,
            contact_number: h.contact_number,
            ad_start_date: h.ad_start_date,
            ad_end_date: h.ad_end_date,
            status: h.status,
            rental_cost: h.rental_cost,
            contract_start_date: h.contract_start_date,
            contract_end_date: h.contract_end_date,
            notes: h.notes,
            created_at: h.created_at,
        }
    }
}

/// Response for a successful create: confirmation plus the generated id
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateHoardingResponseDto {
    pub message: String,
    pub id: i32,
}

/// Bare acknowledgment for update and delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponseDto {
    pub message: String,
}
