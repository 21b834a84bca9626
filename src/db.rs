use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn init_pool(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(8)
        .connect(database_url)
        .await
        .expect("Failed to create DB pool")
}

pub async fn run_migrations(pool: &PgPool) {
    sqlx::migrate!()
        .run(pool)
        .await
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Seed roles, permission codes, default accounts, settings and talk types.
/// Skips entirely if any user already exists.
pub async fn seed(pool: &PgPool, admin_password_hash: &str) {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap_or((0,));
    if count > 0 {
        log::info!("Database already seeded ({count} users), skipping");
        return;
    }

    let mut tx = pool.begin().await.expect("Failed to begin seed transaction");

    let (admin_role,): (i64,) = sqlx::query_as(
        "INSERT INTO roles (name, label) VALUES ('admin', 'Administrator') RETURNING id",
    )
    .fetch_one(&mut *tx)
    .await
    .expect("Failed to seed admin role");

    let (reviewer_role,): (i64,) = sqlx::query_as(
        "INSERT INTO roles (name, label) VALUES ('reviewer', 'Talk Reviewer') RETURNING id",
    )
    .fetch_one(&mut *tx)
    .await
    .expect("Failed to seed reviewer role");

    for code in ["talks.view_all", "talks.edit_all", "audit.view"] {
        sqlx::query("INSERT INTO role_permissions (role_id, code) VALUES ($1, $2)")
            .bind(admin_role)
            .bind(code)
            .execute(&mut *tx)
            .await
            .expect("Failed to seed admin permissions");
    }
    sqlx::query("INSERT INTO role_permissions (role_id, code) VALUES ($1, 'talks.view_all')")
        .bind(reviewer_role)
        .execute(&mut *tx)
        .await
        .expect("Failed to seed reviewer permissions");

    for (username, first, last, role_id) in [
        ("admin", "Ada", "Admin", admin_role),
        ("reviewer", "Rex", "Reviewer", reviewer_role),
    ] {
        let (user_id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (username, password, email, first_name, last_name) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(username)
        .bind(admin_password_hash)
        .bind(format!("{username}@example.org"))
        .bind(first)
        .bind(last)
        .fetch_one(&mut *tx)
        .await
        .expect("Failed to seed user");
        sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(role_id)
            .execute(&mut *tx)
            .await
            .expect("Failed to seed user role");
    }

    for (key, value) in [("app.name", "Podium"), ("talks.open", "true")] {
        sqlx::query("INSERT INTO settings (key, value) VALUES ($1, $2)")
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .expect("Failed to seed settings");
    }

    for (name, description) in [
        ("Talk", "A standard conference talk slot"),
        ("Tutorial", "A hands-on tutorial session"),
    ] {
        sqlx::query("INSERT INTO talk_types (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(&mut *tx)
            .await
            .expect("Failed to seed talk types");
    }

    tx.commit().await.expect("Failed to commit seed transaction");
    log::info!("Base seed complete");
}
