// crates/profile/src/domain/entities/mod.rs

mod follow_edge;
mod profile;

pub use follow_edge::FollowEdge;
pub use profile::Profile;
