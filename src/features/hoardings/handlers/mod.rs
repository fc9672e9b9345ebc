pub mod hoarding_handler;

pub use hoarding_handler::*;
