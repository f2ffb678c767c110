// src/services/catalog.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

pub const ALL_CATEGORIES: &str = "All";
pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_CATEGORY: &str = "Other";
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1495521821757-a1efb6729352?auto=format&fit=crop&q=80&w=800";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
    pub author: String,
    pub category: String,
}

/// Fields submitted through the add-recipe form. Every field may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewRecipe {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    inner: Arc<RwLock<Vec<Recipe>>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(recipes)),
        }
    }

    /// Catalog holding the three house recipes.
    pub fn seeded() -> Self {
        Self::new(seed_recipes())
    }

    /// Recipes in insertion order, narrowed to `category` unless it is absent or "All".
    pub async fn list(&self, category: Option<&str>) -> Vec<Recipe> {
        let guard = self.inner.read().await;
        match category {
            Some(c) if !c.is_empty() && c != ALL_CATEGORIES => {
                guard.iter().filter(|r| r.category == c).cloned().collect()
            }
            _ => guard.clone(),
        }
    }

    pub async fn get(&self, id: u32) -> Option<Recipe> {
        let guard = self.inner.read().await;
        guard.iter().find(|r| r.id == id).cloned()
    }

    pub async fn add(&self, fields: NewRecipe) -> Recipe {
        let mut guard = self.inner.write().await;
        let recipe = Recipe {
            id: guard.len() as u32 + 1,
            title: fields.title.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            ingredients: split_ingredients(fields.ingredients.as_deref().unwrap_or_default()),
            instructions: fields.instructions.unwrap_or_default(),
            image: or_default(fields.image, DEFAULT_IMAGE),
            author: or_default(fields.author, DEFAULT_AUTHOR),
            category: or_default(fields.category, DEFAULT_CATEGORY),
        };
        guard.push(recipe.clone());
        recipe
    }

    /// Distinct categories in first-seen order.
    pub async fn categories(&self) -> Vec<String> {
        let guard = self.inner.read().await;
        let mut seen: Vec<String> = Vec::new();
        for recipe in guard.iter() {
            if !seen.contains(&recipe.category) {
                seen.push(recipe.category.clone());
            }
        }
        seen
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// One ingredient per line; blank lines are dropped.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

fn seed_recipes() -> Vec<Recipe> {
    let ingredients =
        |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

    vec![
        Recipe {
            id: 1,
            title: "Classic Spaghetti Carbonara".into(),
            description: "A traditional Italian pasta dish made with eggs, cheese, pancetta, and pepper.".into(),
            ingredients: ingredients(&[
                "200g spaghetti",
                "100g pancetta",
                "2 large eggs",
                "50g Pecorino Romano",
                "50g Parmesan",
                "Black pepper",
            ]),
            instructions: "Cook pasta. Fry pancetta. Mix eggs and cheese. Combine all with a splash of pasta water.".into(),
            image: "https://images.unsplash.com/photo-1612874742237-6526221588e3?auto=format&fit=crop&q=80&w=800".into(),
            author: "Chef Mario".into(),
            category: "Dinner".into(),
        },
        Recipe {
            id: 2,
            title: "Fresh Avocado Toast".into(),
            description: "Perfectly ripe avocado on toasted sourdough with chili flakes and a drizzle of olive oil.".into(),
            ingredients: ingredients(&[
                "1 slice sourdough bread",
                "1 ripe avocado",
                "Lemon juice",
                "Chili flakes",
                "Olive oil",
                "Salt",
            ]),
            instructions: "Toast the bread. Mash avocado with lemon and salt. Spread on toast. Garnish with chili and oil.".into(),
            image: "https://images.unsplash.com/photo-1525351484163-7529414344d8?auto=format&fit=crop&q=80&w=800".into(),
            author: "Healthy Eater".into(),
            category: "Breakfast".into(),
        },
        Recipe {
            id: 3,
            title: "Spicy Thai Green Curry".into(),
            description: "An aromatic and spicy curry with coconut milk, authentic Thai herbs, and fresh vegetables.".into(),
            ingredients: ingredients(&[
                "400ml coconut milk",
                "2 tbsp green curry paste",
                "Chicken or Tofu",
                "Bamboo shoots",
                "Thai basil",
                "Fish sauce",
            ]),
            instructions: "Simmer curry paste with coconut milk. Add protein and vegetables. Season with fish sauce and basil.".into(),
            image: "https://images.unsplash.com/photo-1455619452474-d2be8b1e70cd?auto=format&fit=crop&q=80&w=800".into(),
            author: "Siam Kitchen".into(),
            category: "Lunch".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_blank_lines() {
        assert_eq!(split_ingredients("a\n\nb\n "), vec!["a", "b"]);
        assert_eq!(split_ingredients("eggs\r\nflour\r\n"), vec!["eggs", "flour"]);
        assert!(split_ingredients("").is_empty());
    }

    #[tokio::test]
    async fn seeded_catalog_has_three_recipes() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len().await, 3);
        assert_eq!(
            catalog.categories().await,
            vec!["Dinner", "Breakfast", "Lunch"]
        );
    }
}
