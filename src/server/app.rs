use anyhow::{anyhow, Result};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::handlers::health;
use crate::graphql::{build_schema, GraphQLContext, GraphQLSchema};
use crate::store::{EntityStore, SeaOrmStore};

#[derive(Clone)]
pub struct AppState {
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let store: Arc<dyn EntityStore> = Arc::new(SeaOrmStore::new(db));
    create_app_with_store(store, cors_origin)
}

/// Build the router over any entity store
pub fn create_app_with_store(
    store: Arc<dyn EntityStore>,
    cors_origin: Option<&str>,
) -> Result<Router> {
    let state = AppState {
        graphql_schema: build_schema(GraphQLContext::new(store)),
    };

    let allow_origin: AllowOrigin = match cors_origin {
        Some(origin) => origin
            .parse::<axum::http::HeaderValue>()
            .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?
            .into(),
        None => Any.into(),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_credentials(false);

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(req.into_inner()).await;
    tracing::debug!("GraphQL request completed");
    response.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
