// crates/profile/tests/infrastructure/mod.rs

mod repository_it_for_follow;
mod repository_it_for_profile;
