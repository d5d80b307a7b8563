//! Sample data for a fresh database
//!
//! The seed loader replaces the whole `resources` table with this set.

use crate::models::{NewResource, ResourceCategory};
use crate::repositories::ResourceRepository;

/// The sample resources inserted by `devshelf-seed`
pub fn sample_resources() -> Vec<NewResource> {
    vec![
        NewResource::new(
            "React Documentation",
            "Official React documentation and tutorials",
            "https://react.dev",
            ResourceCategory::Docs,
        ),
        NewResource::new(
            "TypeScript Handbook",
            "Complete TypeScript documentation and guides",
            "https://www.typescriptlang.org/docs",
            ResourceCategory::Docs,
        )
        .favorite(true),
        NewResource::new(
            "VS Code",
            "Popular code editor with extensive extensions",
            "https://code.visualstudio.com",
            ResourceCategory::Tool,
        )
        .favorite(true),
        NewResource::new(
            "Tailwind CSS",
            "Utility-first CSS framework for rapid UI development",
            "https://tailwindcss.com",
            ResourceCategory::Uikit,
        ),
        NewResource::new(
            "GraphQL Tutorial",
            "Learn GraphQL from the ground up",
            "https://graphql.org/learn",
            ResourceCategory::Course,
        ),
    ]
}

/// Clear the store and insert the sample set, returning the inserted count
pub async fn seed(repo: &ResourceRepository) -> Result<u64, sqlx::Error> {
    let resources = sample_resources();
    let inserted = repo.replace_all(&resources).await?;
    tracing::info!(inserted, "Database seeded");
    Ok(inserted)
}
