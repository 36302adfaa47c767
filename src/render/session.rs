use crate::density::DensityTable;
use crate::recipe::models::Recipe;
use crate::recipe::scale::scale_recipe_with_options;
use crate::render::combine::combine_ingredients_with_densities;
use crate::render::formatter::apply_smart_punctuation;
use crate::render::renderer::render_elements;
use crate::template::models::ParsedTemplate;
use crate::template::parser::parse_template;
use crate::units::types::MeasuringSystem;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Curly quotes and en-dashes in rendered text
    pub smart_punctuation: bool,
    /// Wrap the leading part of ingredient text in `<strong>`
    pub strong_ingredients: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            smart_punctuation: true,
            strong_ingredients: true,
        }
    }
}

impl RenderOptions {
    /// Final text pass over an assembled template
    pub fn finish(&self, rendered: String) -> String {
        if self.smart_punctuation {
            apply_smart_punctuation(&rendered)
        } else {
            rendered
        }
    }
}

/// A density table plus rendering options, shared across render calls
#[derive(Debug, Clone, Default)]
pub struct TemplateSession {
    densities: Option<Arc<DensityTable>>,
    options: RenderOptions,
}

impl TemplateSession {
    pub fn new(densities: Arc<DensityTable>) -> Self {
        Self {
            densities: Some(densities),
            options: RenderOptions::default(),
        }
    }

    pub fn without_densities() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn densities(&self) -> Option<&DensityTable> {
        self.densities.as_deref()
    }

    pub fn render_parsed(
        &self,
        template: &ParsedTemplate,
        factor: f32,
        system: MeasuringSystem,
    ) -> String {
        self.options
            .finish(render_elements(template, factor, system, self.densities()))
    }

    pub fn render_template(&self, template: &str, factor: f32, system: MeasuringSystem) -> String {
        self.render_parsed(&parse_template(template), factor, system)
    }

    pub fn scale_and_convert_recipe(
        &self,
        recipe: &Recipe,
        factor: f32,
        system: MeasuringSystem,
    ) -> Recipe {
        scale_recipe_with_options(recipe, factor, system, self.densities(), &self.options)
    }

    pub fn combine_ingredients(
        &self,
        recipes: &[Recipe],
        system: MeasuringSystem,
        include_count: bool,
    ) -> Vec<String> {
        combine_ingredients_with_densities(recipes, system, include_count, self.densities())
    }
}
