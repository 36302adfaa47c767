// WebAssembly bindings for recipe scaling
use crate::density::load_internal_density_table;
use crate::recipe::Recipe;
use crate::render::session::TemplateSession;
use crate::units::types::MeasuringSystem;
use js_sys::Array;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct RecipeScaleWasm {
    session: TemplateSession,
}

impl Default for RecipeScaleWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_system(system: &str) -> Result<MeasuringSystem, JsValue> {
    system
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))
}

#[wasm_bindgen]
impl RecipeScaleWasm {
    /// Session backed by the embedded density table, or none if it fails to load
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let session = match load_internal_density_table() {
            Ok(table) => TemplateSession::new(Arc::new(table)),
            Err(e) => {
                tracing::warn!("Embedded density table unavailable: {}", e);
                TemplateSession::without_densities()
            }
        };
        Self { session }
    }

    /// Scale a recipe document (JSON string)
    /// Returns the scaled recipe as a JSON string
    #[wasm_bindgen]
    pub fn scale_recipe(
        &self,
        recipe_json: &str,
        factor: f32,
        system: &str,
    ) -> Result<String, JsValue> {
        let system = parse_system(system)?;
        let recipe: Recipe = serde_json::from_str(recipe_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse recipe JSON: {}", e)))?;

        let scaled = self.session.scale_and_convert_recipe(&recipe, factor, system);

        let json = serde_json::to_string(&scaled)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize recipe: {}", e)))?;

        Ok(json)
    }

    /// Render a single template string
    #[wasm_bindgen]
    pub fn render_template(
        &self,
        template: &str,
        factor: f32,
        system: &str,
    ) -> Result<String, JsValue> {
        let system = parse_system(system)?;
        Ok(self.session.render_template(template, factor, system))
    }

    /// Combine ingredients across recipes (JSON array of recipe documents)
    /// Returns an array of lines
    #[wasm_bindgen]
    pub fn combine_ingredients(
        &self,
        recipes_json: &str,
        system: &str,
        include_count: bool,
    ) -> Result<Array, JsValue> {
        let system = parse_system(system)?;
        let recipes: Vec<Recipe> = serde_json::from_str(recipes_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse recipes JSON: {}", e)))?;

        Ok(self
            .session
            .combine_ingredients(&recipes, system, include_count)
            .into_iter()
            .map(|line| JsValue::from_str(&line))
            .collect())
    }
}
