// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use sqlx::PgPool;

use crate::error::Result;

/// Connects to the content backend (the Supabase Postgres instance).
/// Migrations are only run on request, the content tables normally belong to the CMS.
pub async fn init_database(database_url: String, migrate: bool) -> Result<Arc<PgPool>> {
    let pool = PgPool::connect(&database_url).await?;

    if migrate {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations run successfully");
    }

    Ok(Arc::new(pool))
}
