// crates/profile/src/domain/errors/mod.rs

mod follow_error;

pub use follow_error::{FollowError, FollowResult};
