use axum::{Form, extract::State, response::Redirect};
use tracing::info;

use crate::{services::catalog::NewRecipe, state::SharedState};

pub async fn create_recipe_handler(
    State(state): State<SharedState>,
    Form(fields): Form<NewRecipe>,
) -> Redirect {
    let recipe = state.catalog.add(fields).await;
    info!(id = recipe.id, category = %recipe.category, "Recipe added");
    Redirect::to("/")
}
