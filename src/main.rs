use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use podium::auth::rate_limit::RateLimiter;
use podium::{auth, db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = db::init_pool(&database_url).await;
    db::run_migrations(&pool).await;

    // Seed roles, permissions, default accounts and talk types if empty
    let admin_hash = auth::password::hash_password("admin123")
        .expect("Failed to hash default password");
    db::seed(&pool, &admin_hash).await;

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let limiter = RateLimiter::new();
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(limiter.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            // Root redirect
            .route(
                "/",
                web::get().to(|| async {
                    actix_web::HttpResponse::SeeOther()
                        .insert_header(("Location", "/talks"))
                        .finish()
                }),
            )
            // Talk list, talk detail and the speaker roster are public;
            // the detail pattern is numeric so /talks/new stays free
            .route("/talks", web::get().to(handlers::talk_handlers::list))
            .route(
                "/talks/{id:\\d+}",
                web::get().to(handlers::talk_handlers::detail),
            )
            .route("/speakers", web::get().to(handlers::speaker_handlers::speakers))
            // REST API — visibility and write permissions enforced per handler
            .service(web::scope("/api/v1").configure(handlers::api_v1::configure))
            // Protected routes
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                    .route("/logout", web::post().to(handlers::auth_handlers::logout))
                    .route("/talks/new", web::get().to(handlers::talk_handlers::new_form))
                    .route("/talks", web::post().to(handlers::talk_handlers::create))
                    .route(
                        "/talks/{id}/edit",
                        web::get().to(handlers::talk_handlers::edit_form),
                    )
                    .route("/talks/{id}", web::post().to(handlers::talk_handlers::update))
                    .route(
                        "/talks/{id}/delete",
                        web::get().to(handlers::talk_handlers::confirm_delete),
                    )
                    .route(
                        "/talks/{id}/delete",
                        web::post().to(handlers::talk_handlers::delete),
                    )
                    .route("/audit", web::get().to(handlers::audit_handlers::list)),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
