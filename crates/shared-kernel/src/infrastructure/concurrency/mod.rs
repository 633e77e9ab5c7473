// crates/shared-kernel/src/infrastructure/concurrency/mod.rs

mod in_flight;

pub use in_flight::{InFlightPermit, InFlightRegistry};
