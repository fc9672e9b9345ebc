//! Hoarding inventory feature.
//!
//! Records location, ownership, contract, and ad-campaign metadata for
//! physical advertising assets (billboards), one row per asset. Each
//! endpoint maps onto a single parameterized statement against the
//! `hoardings` table.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/hoardings` | Create a new hoarding |
//! | GET | `/hoardings` | List all hoardings |
//! | GET | `/hoardings/{id}` | Get hoarding by ID |
//! | PUT | `/hoardings/{id}` | Update hoarding (full replace) |
//! | DELETE | `/hoardings/{id}` | Delete hoarding |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::HoardingService;
pub use stores::{HoardingStore, PgHoardingStore};
