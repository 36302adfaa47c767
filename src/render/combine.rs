// Shopping-list style totals of the same ingredient across several recipes

use crate::density::DensityTable;
use crate::recipe::models::Recipe;
use crate::render::renderer::{format_quantity, placeholder_amount};
use crate::template::parser::parse_template;
use crate::units::converter::convert_unit_system;
use crate::units::types::{Amount, MeasurementUnit, MeasuringSystem, UnitId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

// (ingredient, unit symbol, unit id); BTreeMap order gives the output order
type GroupKey = (String, String, Option<UnitId>);

#[derive(Debug)]
struct IngredientTotal {
    unit: Option<MeasurementUnit>,
    min: f32,
    max: f32,
    // Only a group made up entirely of ranges keeps a max
    all_ranges: bool,
    count: usize,
    recipes: BTreeSet<usize>,
}

impl IngredientTotal {
    fn new(unit: Option<MeasurementUnit>) -> Self {
        Self {
            unit,
            min: 0.0,
            max: 0.0,
            all_ranges: true,
            count: 0,
            recipes: BTreeSet::new(),
        }
    }

    fn add(&mut self, recipe: usize, amount: &Amount) {
        self.min += amount.min;
        match amount.max {
            Some(max) => self.max += max,
            None => self.all_ranges = false,
        }
        self.count += 1;
        self.recipes.insert(recipe);
    }

    fn amount(&self) -> Amount {
        Amount::new(
            self.min,
            self.all_ranges.then_some(self.max),
            self.unit.clone(),
        )
    }
}

/// Sum the quantities of every ingredient named in the recipes' templates
///
/// Quantities are converted to `system` first and grouped by ingredient and resulting unit,
/// so "1 cup flour" and "100 g flour" stay on separate lines. Lines are ordered by
/// ingredient, then unit symbol. With `include_count`, groups fed by more than one recipe
/// are suffixed with the number of contributing items, e.g. "6 egg (2)".
pub fn combine_ingredients(
    recipes: &[Recipe],
    system: MeasuringSystem,
    include_count: bool,
) -> Vec<String> {
    combine_ingredients_with_densities(recipes, system, include_count, None)
}

pub fn combine_ingredients_with_densities(
    recipes: &[Recipe],
    system: MeasuringSystem,
    include_count: bool,
    densities: Option<&DensityTable>,
) -> Vec<String> {
    let mut totals: BTreeMap<GroupKey, IngredientTotal> = BTreeMap::new();

    let templates = recipes.iter().enumerate().flat_map(|(index, recipe)| {
        recipe
            .ingredient_items()
            .filter_map(move |item| item.template.as_deref().map(move |template| (index, template)))
    });

    for (recipe_index, template) in templates {
        let parsed = parse_template(template);
        for placeholder in parsed.quantities() {
            let ingredient = match &placeholder.ingredient {
                Some(ingredient) => ingredient,
                None => continue,
            };
            let density = densities.and_then(|table| table.density_for_norm(ingredient));
            let amount = convert_unit_system(&placeholder_amount(placeholder), system, density);

            let key = (
                ingredient.clone(),
                amount
                    .unit
                    .as_ref()
                    .map(|unit| unit.symbol.to_string())
                    .unwrap_or_default(),
                amount.unit.as_ref().and_then(|unit| unit.id),
            );
            totals
                .entry(key)
                .or_insert_with(|| IngredientTotal::new(amount.unit.clone()))
                .add(recipe_index, &amount);
        }
    }

    debug!("Combined ingredients into {} lines", totals.len());

    totals
        .into_iter()
        .map(|((ingredient, _, _), total)| {
            let mut line = format!("{} {}", format_quantity(&total.amount()), ingredient);
            if include_count && total.recipes.len() > 1 {
                line.push_str(&format!(" ({})", total.count));
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(templates: &[&str]) -> Recipe {
        Recipe::with_ingredient_templates("test-recipe", templates)
    }

    #[test]
    fn test_combine_same_unit() {
        let recipes = [
            recipe(&[r#"{"min": 2, "scale": true, "ingredient": "egg"} egg"#]),
            recipe(&[r#"{"min": 6, "scale": true, "ingredient": "egg"} egg"#]),
        ];
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Metric, false),
            vec!["8 egg"]
        );
    }

    #[test]
    fn test_keep_different_units_separate() {
        let recipes = [
            recipe(&[r#"{"min": 100, "unit": "g", "scale": true, "ingredient": "flour"} flour"#]),
            recipe(&[r#"{"min": 1, "unit": "cup", "scale": true, "ingredient": "flour"} flour"#]),
        ];
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Metric, false),
            vec!["1 cup flour", "100 g flour"]
        );
    }

    #[test]
    fn test_combine_ranges() {
        let recipes = [
            recipe(&[r#"{"min": 1, "max": 2, "unit": "tbsp", "scale": true, "ingredient": "sugar"} sugar"#]),
            recipe(&[r#"{"min": 2, "max": 3, "unit": "tbsp", "scale": true, "ingredient": "sugar"} sugar"#]),
        ];
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Metric, false),
            vec!["3-5 tbsp sugar"]
        );
    }

    #[test]
    fn test_mixed_range_and_single_drops_max() {
        let recipes = [
            recipe(&[r#"{"min": 1, "max": 2, "unit": "tbsp", "ingredient": "sugar"} sugar"#]),
            recipe(&[r#"{"min": 2, "max": 2, "unit": "tbsp", "ingredient": "sugar"} sugar"#]),
        ];
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Metric, false),
            vec!["3 tbsp sugar"]
        );
    }

    #[test]
    fn test_include_count() {
        let recipes = [
            recipe(&[r#"{"min": 2, "scale": true, "ingredient": "egg"} egg"#]),
            recipe(&[r#"{"min": 4, "scale": true, "ingredient": "egg"} egg"#]),
            recipe(&[r#"{"min": 100, "unit": "g", "scale": true, "ingredient": "flour"} flour"#]),
        ];
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Metric, true),
            vec!["6 egg (2)", "100 g flour"]
        );
    }

    #[test]
    fn test_count_needs_more_than_one_recipe() {
        let recipes = [
            recipe(&[
                r#"{"min": 2, "ingredient": "egg"} eggs for the batter"#,
                r#"{"min": 1, "ingredient": "egg"} egg to glaze"#,
            ]),
            recipe(&[r#"{"min": 100, "unit": "g", "ingredient": "flour"} flour"#]),
        ];
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Metric, true),
            vec!["3 egg", "100 g flour"]
        );

        let recipes = [
            recipe(&[
                r#"{"min": 2, "ingredient": "egg"} eggs"#,
                r#"{"min": 1, "ingredient": "egg"} egg"#,
            ]),
            recipe(&[r#"{"min": 3, "ingredient": "egg"} eggs"#]),
        ];
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Metric, true),
            vec!["6 egg (3)"]
        );
    }

    #[test]
    fn test_converts_before_grouping() {
        let recipes = [
            recipe(&[r#"{"min": 500, "unit": "g", "ingredient": "butter"} butter"#]),
            recipe(&[r#"{"min": 1, "unit": "kg", "ingredient": "butter"} butter"#]),
        ];
        // 1.1 lb + 2.2 lbs
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Imperial, false),
            vec!["3.31 lbs butter"]
        );
    }

    #[test]
    fn test_skip_items_without_template_or_ingredient() {
        let mut without_template = recipe(&[]);
        without_template.ingredients = Some(vec![crate::recipe::models::IngredientSection {
            ingredients_list: Some(vec![crate::recipe::models::IngredientItem {
                text: Some("2 eggs".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }]);
        let recipes = [
            without_template,
            recipe(&[r#"{"min": 3, "scale": true, "ingredient": "egg"} egg"#]),
            recipe(&[r#"{"min": 100, "unit": "g", "scale": true} some flour"#]),
        ];
        assert_eq!(
            combine_ingredients(&recipes, MeasuringSystem::Metric, false),
            vec!["3 egg"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(combine_ingredients(&[], MeasuringSystem::Metric, false).is_empty());
    }
}
