//! Caller-supplied shape of the top-level composition.
//!
//! Nothing here has a built-in default: the wrapper element and the number of
//! cups are presentation choices, so the caller picks them, either field by
//! field or through one of the presets.

use crate::{Drinkers, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Wrapper {
    /// Children go inside a `<section>`.
    Section,
    /// Children are returned bare, for the parent to place.
    Fragment,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeSection {
    pub heading: String,
    pub drinkers: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppConfig {
    pub wrapper: Wrapper,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub recipes: Vec<RecipeSection>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guests: u32,
}

impl AppConfig {
    pub fn new(wrapper: Wrapper) -> Self {
        Self {
            wrapper,
            title: None,
            recipes: Vec::new(),
            guests: 0,
        }
    }

    /// A titled section with the recipe for two and for a gathering of ten.
    pub fn recipe_card() -> Self {
        AppConfig::new(Wrapper::Section)
            .title("Spiced Chai Recipe")
            .recipe("For two", 2.0)
            .recipe("For a gathering", 10.0)
    }

    /// A bare fragment of `guests` cups.
    pub fn tea_party(guests: u32) -> Self {
        AppConfig::new(Wrapper::Fragment).guests(guests)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn recipe(mut self, heading: impl Into<String>, drinkers: f64) -> Self {
        self.recipes.push(RecipeSection {
            heading: heading.into(),
            drinkers,
        });
        self
    }

    pub fn guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    /// Checks every recipe up front and returns the validated amounts in order.
    pub fn validate(&self) -> Result<Vec<Drinkers>> {
        self.recipes
            .iter()
            .map(|recipe| Drinkers::try_from(recipe.drinkers))
            .collect()
    }
}
