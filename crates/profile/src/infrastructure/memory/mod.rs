// crates/profile/src/infrastructure/memory/mod.rs

mod memory_social_store;
mod social_state;

pub use memory_social_store::MemorySocialStore;
pub use social_state::SocialState;
