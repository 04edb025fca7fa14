pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::OrderService;
use infrastructure::DieselReservationStore;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::orders::place_order, handlers::products::list_products),
    components(schemas(
        handlers::orders::PlaceOrderRequest,
        handlers::orders::OrderItemRequest,
        handlers::orders::PlacedOrderResponse,
        handlers::orders::OrderLineResponse,
        handlers::products::ProductsPageResponse,
        handlers::products::ProductResponse,
    ))
)]
struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let service = OrderService::new(DieselReservationStore::new(pool.clone()));
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(service))
            .wrap(Logger::default())
            .route("/orders", web::post().to(handlers::orders::place_order))
            .route("/products", web::get().to(handlers::products::list_products))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
