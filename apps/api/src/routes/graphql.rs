//! GraphQL HTTP route handlers
//!
//! - `POST /graphql` - Execute a GraphQL request
//! - `GET /graphql` - GraphQL Playground

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{FromRef, State},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::graphql::DevshelfSchema;
use crate::middleware::AdminIdentity;
use crate::models::CallerContext;

/// Path the router is mounted at, used by the playground to post queries
pub const GRAPHQL_PATH: &str = "/graphql";

/// Shared state for GraphQL handlers
#[derive(Clone)]
pub struct GraphQLState {
    /// Executable schema
    pub schema: DevshelfSchema,
    /// Configured admin identity
    pub admin: AdminIdentity,
}

impl GraphQLState {
    /// Create new GraphQL state
    pub fn new(schema: DevshelfSchema, admin: AdminIdentity) -> Self {
        Self { schema, admin }
    }
}

impl FromRef<GraphQLState> for AdminIdentity {
    fn from_ref(state: &GraphQLState) -> Self {
        state.admin.clone()
    }
}

/// Create GraphQL router
pub fn graphql_router(state: GraphQLState) -> Router {
    Router::new()
        .route("/", get(graphql_playground).post(graphql_handler))
        .with_state(state)
}

/// Execute a GraphQL request with the caller context derived from its headers
async fn graphql_handler(
    State(state): State<GraphQLState>,
    caller: CallerContext,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner().data(caller);
    state.schema.execute(request).await.into()
}

/// GraphQL Playground handler
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(GRAPHQL_PATH)))
}
