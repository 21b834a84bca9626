//! Request-level guard tests: auth redirect middleware, the JSON
//! content-type check on API mutations, and CSRF token handling. These run
//! against a real actix service with cookie sessions but no database.

use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpResponse, cookie::Key, http::StatusCode, test, web};

use podium::auth::csrf;
use podium::auth::middleware::require_auth;
use podium::handlers::api_v1;

fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .build()
}

#[actix_rt::test]
async fn anonymous_requests_to_protected_routes_redirect_to_login() {
    let app = test::init_service(
        App::new().wrap(session_middleware()).service(
            web::scope("")
                .wrap(actix_web::middleware::from_fn(require_auth))
                .route(
                    "/private",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                ),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/private").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(location, "/login");
}

#[actix_rt::test]
async fn api_mutations_without_json_content_type_are_rejected() {
    let app = test::init_service(
        App::new()
            .wrap(session_middleware())
            .service(web::scope("/api/v1").configure(api_v1::configure)),
    )
    .await;

    // Form-encoded POST must be turned away before any handler runs.
    let req = test::TestRequest::post()
        .uri("/api/v1/talks")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload("title=hi")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Same for DELETE with no content type at all.
    let req = test::TestRequest::delete()
        .uri("/api/v1/talks/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

async fn token_echo(session: Session) -> HttpResponse {
    let token = csrf::get_or_create_token(&session);
    HttpResponse::Ok().body(token)
}

async fn token_check(session: Session) -> HttpResponse {
    let _ = csrf::get_or_create_token(&session);
    match csrf::validate_csrf(&session, "definitely-not-the-token") {
        Ok(_) => HttpResponse::Ok().body("accepted"),
        Err(_) => HttpResponse::Forbidden().body("rejected"),
    }
}

#[actix_rt::test]
async fn csrf_tokens_are_64_hex_chars() {
    let app = test::init_service(
        App::new()
            .wrap(session_middleware())
            .route("/token", web::get().to(token_echo)),
    )
    .await;

    let req = test::TestRequest::get().uri("/token").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let token = std::str::from_utf8(&body).expect("utf8 token");
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[actix_rt::test]
async fn mismatched_csrf_tokens_are_rejected() {
    let app = test::init_service(
        App::new()
            .wrap(session_middleware())
            .route("/check", web::get().to(token_check)),
    )
    .await;

    let req = test::TestRequest::get().uri("/check").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
