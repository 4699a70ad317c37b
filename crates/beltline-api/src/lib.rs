//! REST API for airport arrival baggage-carousel assignments

pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers
pub struct AppState {
    pub db: DatabaseConnection,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beltline",
        version = "0.1.0",
        description = "REST API for airport arrival baggage carousel assignments"
    ),
    paths(
        handlers::system::service_status,
        handlers::system::health_check,
        handlers::airlines::list_airlines,
        handlers::airlines::get_airline,
        handlers::airlines::create_airline,
        handlers::airlines::init_airlines,
        handlers::carousels::list_carousels,
        handlers::carousels::get_carousel,
        handlers::carousels::create_carousel,
        handlers::carousels::update_carousel,
        handlers::carousels::init_carousels,
        handlers::flights::list_flights,
        handlers::flights::get_flight,
        handlers::flights::create_flight,
        handlers::flights::upload_flights,
        handlers::flights::delete_flight,
        handlers::assignments::list_assignments,
        handlers::assignments::get_assignment,
        handlers::assignments::create_assignment,
        handlers::assignments::update_assignment,
        handlers::assignments::delete_assignment,
    ),
    components(
        schemas(
            models::ErrorResponse,
            models::StatusResponse,
            models::HealthResponse,
            models::CreateAirlineRequest,
            models::AirlineResponse,
            models::CreateCarouselRequest,
            models::UpdateCarouselRequest,
            models::CarouselResponse,
            models::CreateFlightRequest,
            models::FlightResponse,
            models::FlightWithAirlineResponse,
            models::CreateAssignmentRequest,
            models::UpdateAssignmentRequest,
            models::AssignmentResponse,
            models::AssignmentWithDetailsResponse,
        )
    ),
    tags(
        (name = "airlines", description = "Airline reference data endpoints"),
        (name = "carousels", description = "Carousel inventory endpoints"),
        (name = "flights", description = "Arrival flight endpoints"),
        (name = "assignments", description = "Carousel assignment endpoints"),
        (name = "system", description = "System health and info endpoints")
    )
)]
struct ApiDoc;

/// API server configuration
pub struct ApiServerConfig {
    /// Address to bind the API server
    pub bind_addr: SocketAddr,
    /// Enable CORS (for development frontends)
    pub enable_cors: bool,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".parse().expect("valid literal address"),
            enable_cors: true,
        }
    }
}

/// API Server
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiServerConfig, db: DatabaseConnection) -> Self {
        let state = Arc::new(AppState { db });

        Self { config, state }
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let api_doc = ApiDoc::openapi();

        let api_router = Router::new()
            .route("/", get(handlers::system::service_status))
            .route("/health", get(handlers::system::health_check))
            .route(
                "/airlines",
                get(handlers::airlines::list_airlines).post(handlers::airlines::create_airline),
            )
            .route("/airlines/init", post(handlers::airlines::init_airlines))
            .route(
                "/airlines/{airline_code}",
                get(handlers::airlines::get_airline),
            )
            .route(
                "/carousels",
                get(handlers::carousels::list_carousels)
                    .post(handlers::carousels::create_carousel),
            )
            .route("/carousels/init", post(handlers::carousels::init_carousels))
            .route(
                "/carousels/{carousel_id}",
                get(handlers::carousels::get_carousel)
                    .patch(handlers::carousels::update_carousel),
            )
            .route(
                "/flights",
                get(handlers::flights::list_flights).post(handlers::flights::create_flight),
            )
            .route("/flights/upload", post(handlers::flights::upload_flights))
            .route(
                "/flights/{flight_id}",
                get(handlers::flights::get_flight).delete(handlers::flights::delete_flight),
            )
            .route(
                "/assignments",
                get(handlers::assignments::list_assignments)
                    .post(handlers::assignments::create_assignment),
            )
            .route(
                "/assignments/{assignment_id}",
                get(handlers::assignments::get_assignment)
                    .put(handlers::assignments::update_assignment)
                    .delete(handlers::assignments::delete_assignment),
            )
            .with_state(self.state.clone());

        let router = Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc))
            .merge(api_router);

        let mut router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            use tower_http::cors::AllowOrigin;

            // Credentialed CORS cannot use a wildcard origin, so allow the
            // common development hosts by predicate
            let cors = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::PATCH,
                ])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
                    let origin_str = origin.to_str().unwrap_or("");
                    origin_str.starts_with("http://localhost:")
                        || origin_str.starts_with("http://127.0.0.1:")
                }));

            router = router.layer(cors);
        }

        router
    }

    /// Start the API server
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let router = self.build_router();

        info!("Starting API server on {}", self.config.bind_addr);
        info!(
            "OpenAPI spec: http://{}/api-docs/openapi.json",
            self.config.bind_addr
        );
        info!("Swagger UI: http://{}/swagger-ui", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;

        axum::serve(listener, router)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        // Ensure OpenAPI spec can be generated without panics
        let _api_doc = ApiDoc::openapi();
    }
}
