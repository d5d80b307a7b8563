//! Helpers for executing GraphQL requests in tests

#![allow(dead_code)]

use async_graphql::{Request, Response, Variables};
use serde_json::Value;

use devshelf_api::graphql::{build_schema, DevshelfSchema};
use devshelf_api::models::{CallerContext, NewResource, ResourceCategory};

use super::mock_store::MockResourceStore;

/// Admin address used throughout the tests
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Build the real schema over a mock store
pub fn schema_for(store: &MockResourceStore) -> DevshelfSchema {
    build_schema(store.shared())
}

/// Caller context matching the configured admin
pub fn admin() -> CallerContext {
    CallerContext::admin(ADMIN_EMAIL)
}

/// Execute a request as the given caller
pub async fn execute_as(
    schema: &DevshelfSchema,
    caller: CallerContext,
    query: &str,
    variables: Value,
) -> Response {
    let request = Request::new(query)
        .variables(Variables::from_json(variables))
        .data(caller);
    schema.execute(request).await
}

/// Response data as JSON, panicking if the request produced errors
pub fn data_of(response: Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "unexpected GraphQL errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// The first error message of a response, panicking if there is none
pub fn first_error(response: &Response) -> &str {
    response
        .errors
        .first()
        .map(|e| e.message.as_str())
        .expect("expected a GraphQL error")
}

/// A small mixed population: two DOCS (one favorite), one TOOL favorite, one VIDEO
pub fn sample_population() -> Vec<NewResource> {
    vec![
        NewResource::new(
            "Rust Book",
            "The Rust book",
            "https://doc.rust-lang.org/book",
            ResourceCategory::Docs,
        ),
        NewResource::new(
            "Tokio Docs",
            "Async runtime docs",
            "https://tokio.rs",
            ResourceCategory::Docs,
        )
        .favorite(true),
        NewResource::new(
            "ripgrep",
            "Fast search tool",
            "https://github.com/BurntSushi/ripgrep",
            ResourceCategory::Tool,
        )
        .favorite(true),
        NewResource::new(
            "RustConf talk",
            "Conference video",
            "https://example.com/talk",
            ResourceCategory::Video,
        ),
    ]
}

/// Resource ids present in a `resources` query result
pub fn ids_of(data: &Value) -> Vec<String> {
    data["resources"]
        .as_array()
        .expect("resources should be a list")
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

pub const LIST_QUERY: &str = r#"
    query List($category: Category, $isFavorite: Boolean) {
        resources(category: $category, isFavorite: $isFavorite) {
            id title description url category isFavorite
        }
    }
"#;

pub const CREATE_MUTATION: &str = r#"
    mutation Create($data: NewResourceInput!) {
        createResource(data: $data) { id title description url category isFavorite }
    }
"#;

pub const TOGGLE_MUTATION: &str = r#"
    mutation Toggle($id: ID!) {
        toggleFavorite(id: $id) { id title description url category isFavorite }
    }
"#;

pub const DELETE_MUTATION: &str = r#"
    mutation Delete($id: ID!) {
        deleteResource(id: $id) { success message }
    }
"#;
