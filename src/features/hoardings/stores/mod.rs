pub mod hoarding_store;
pub mod pg_hoarding_store;

#[cfg(test)]
pub mod memory;

pub use hoarding_store::HoardingStore;
pub use pg_hoarding_store::PgHoardingStore;
