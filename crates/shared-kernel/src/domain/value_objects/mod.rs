// crates/shared-kernel/src/domain/value_objects/mod.rs

mod account_id;
mod counter;
mod url;
mod value_object;

pub use account_id::AccountId;
pub use counter::Counter;
pub use url::Url;
pub use value_object::ValueObject;
