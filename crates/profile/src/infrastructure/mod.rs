// crates/profile/src/infrastructure/mod.rs

pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;
