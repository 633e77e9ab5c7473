// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context.rs

use std::path::Path;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres as PostgresImage;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::PostgresContext;
use crate::infrastructure::postgres::utils::PostgresTestContextBuilder;

fn infra(context: &str, e: impl std::fmt::Display) -> AppError {
    AppError::new(ErrorCode::InfrastructureFailure, format!("{}: {}", context, e))
}

/// Postgres jetable dans un container, migrations appliquées.
/// Le container vit tant que le contexte n'est pas droppé.
pub struct PostgresTestContext {
    context: PostgresContext,
    _container: ContainerAsync<PostgresImage>,
}

impl PostgresTestContext {
    pub fn builder() -> PostgresTestContextBuilder {
        PostgresTestContextBuilder::new()
    }

    pub async fn restore(builder: PostgresTestContextBuilder) -> AppResult<Self> {
        // 1. Démarrage container
        let container = PostgresImage::default()
            .with_user(&builder.user)
            .with_password(&builder.password)
            .with_db_name(&builder.db_name)
            .with_name(&builder.image_name)
            .with_tag(&builder.image_tag)
            .start()
            .await
            .map_err(|e| infra("Postgres container failed to start", e))?;

        let host_port = container
            .get_host_port_ipv4(5432)
            .await
            .map_err(|e| infra("Postgres port not exposed", e))?;

        let conn_str = format!(
            "postgres://{}:{}@127.0.0.1:{}/{}",
            builder.user, builder.password, host_port, builder.db_name
        );

        let mut context_builder = PostgresContext::builder_raw().with_url(&conn_str);
        if let Some(cfg) = builder.config {
            context_builder = context_builder.with_config(cfg);
        }
        let context = context_builder.build().await?;

        // 2. Migrations des modules
        for path in &builder.migrations {
            let migrator = Migrator::new(Path::new(path))
                .await
                .map_err(|e| infra("Invalid migration path", e))?;

            migrator
                .run(&context.pool())
                .await
                .map_err(|e| infra("Failed to apply migrations", e))?;

            tracing::info!("✅ Migrations applied from {}", path);
        }

        Ok(Self {
            context,
            _container: container,
        })
    }

    pub fn pool(&self) -> PgPool {
        self.context.pool()
    }

    pub fn url(&self) -> &str {
        self.context.url()
    }
}
