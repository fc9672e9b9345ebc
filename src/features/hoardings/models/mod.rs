pub mod hoarding;

pub use hoarding::Hoarding;
