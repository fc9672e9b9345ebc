pub mod hoarding_service;

pub use hoarding_service::HoardingService;
