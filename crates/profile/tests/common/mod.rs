// crates/profile/tests/common/mod.rs

mod setup_postgres_test_db;

pub use setup_postgres_test_db::{seed_profile, setup_postgres_test_db, SocialFixture};
