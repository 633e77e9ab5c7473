// crates/profile/src/domain/value_objects/mod.rs

mod bio;
mod counter_delta;
mod display_name;
mod follow_state;
mod handle;
mod profile_stats;

pub use bio::Bio;
pub use counter_delta::CounterDelta;
pub use display_name::DisplayName;
pub use follow_state::FollowState;
pub use handle::Handle;
pub use profile_stats::ProfileStats;
