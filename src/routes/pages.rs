use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use tera::Context;

use crate::{error::AppError, services::catalog::ALL_CATEGORIES, state::SharedState};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

pub async fn index_page(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let category = query.category.filter(|c| !c.is_empty());
    let recipes = state.catalog.list(category.as_deref()).await;

    let mut context = Context::new();
    context.insert("recipes", &recipes);
    context.insert("categories", &state.catalog.categories().await);
    context.insert(
        "current_category",
        category.as_deref().unwrap_or(ALL_CATEGORIES),
    );

    Ok(Html(state.templates.render("index.html", &context)?))
}

pub async fn recipe_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    // Non-numeric ids are simply unknown recipes.
    let recipe = match id.parse::<u32>() {
        Ok(id) => state.catalog.get(id).await,
        Err(_) => None,
    }
    .ok_or(AppError::NotFound("Recipe not found"))?;

    let mut context = Context::new();
    context.insert("recipe", &recipe);
    context.insert("current_category", ALL_CATEGORIES);

    Ok(Html(state.templates.render("recipe.html", &context)?))
}

pub async fn add_recipe_page(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("current_category", ALL_CATEGORIES);

    Ok(Html(state.templates.render("add-recipe.html", &context)?))
}
