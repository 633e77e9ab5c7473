// crates/profile/src/application/mod.rs

pub mod create_profile;
pub mod follow_controller;
pub mod follow_graph;
pub mod get_follow_state;
pub mod get_profile;
pub mod toggle_follow;
pub mod update_profile;
