// crates/shared-kernel/src/infrastructure/postgres/utils/mod.rs

mod postgres_test_context;
mod postgres_test_context_builder;

pub use postgres_test_context::PostgresTestContext;
pub use postgres_test_context_builder::PostgresTestContextBuilder;
