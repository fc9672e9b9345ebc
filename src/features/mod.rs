pub mod hoardings;
