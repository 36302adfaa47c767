#[cfg(test)]
mod tests {
    use super::super::models::*;
    use super::super::scale::*;
    use crate::render::session::RenderOptions;
    use crate::units::types::MeasuringSystem;
    use serde_json::json;

    fn test_recipe() -> Recipe {
        Recipe {
            id: "test-recipe".to_string(),
            ingredients: Some(vec![IngredientSection {
                ingredients_list: Some(vec![IngredientItem::from_template(
                    r#"{"min": 100, "max": 120, "unit": "g", "scale": true} of flour"#,
                )]),
                ..IngredientSection::default()
            }]),
            instructions: Some(vec![Instruction {
                description_template: Some(
                    r#"pre-warm the oven to {"temperatureC": 180, "temperatureFanC": 160}"#
                        .to_string(),
                ),
                ..Instruction::default()
            }]),
            ..Recipe::default()
        }
    }

    #[test]
    fn test_scale_a_recipe() {
        let scaled = scale_and_convert_recipe(&test_recipe(), 2.0, MeasuringSystem::Metric, None);

        let item = scaled.ingredient_items().next().unwrap();
        assert_eq!(item.text.as_deref(), Some("<strong>200-240 g of flour</strong>"));
        // The template is kept so the recipe can be scaled again
        assert!(item.template.is_some());

        let instructions = scaled.instructions.unwrap();
        assert_eq!(instructions[0].description, "pre-warm the oven to 180C (160C fan)");
    }

    #[test]
    fn test_items_without_template_keep_their_text() {
        let mut recipe = test_recipe();
        recipe.ingredients = Some(vec![IngredientSection {
            ingredients_list: Some(vec![IngredientItem {
                text: Some("Salt and pepper".to_string()),
                ..IngredientItem::default()
            }]),
            ..IngredientSection::default()
        }]);
        recipe.instructions = Some(vec![Instruction {
            description: "Season well".to_string(),
            ..Instruction::default()
        }]);

        let scaled = scale_and_convert_recipe(&recipe, 3.0, MeasuringSystem::Imperial, None);
        assert_eq!(scaled, recipe);
    }

    #[test]
    fn test_unknown_fields_survive_scaling() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "soup",
            "title": "Leek and potato soup",
            "serves": [{"amount": {"min": 4, "max": 4}, "unit": "people"}],
            "ingredients": [{
                "recipeSection": "For the soup",
                "ingredientsList": [{
                    "template": "{\"min\": 2, \"scale\": true} leeks, sliced",
                    "ingredientID": "leek",
                    "optional": false
                }]
            }],
            "instructions": [{
                "description": "",
                "descriptionTemplate": "Simmer for {\"min\": 20, \"unit\": \"minutes\"}",
                "stepNumber": 1,
                "images": ["img-1"]
            }]
        }))
        .unwrap();

        let scaled = scale_and_convert_recipe(&recipe, 2.0, MeasuringSystem::Metric, None);
        let value = serde_json::to_value(&scaled).unwrap();

        assert_eq!(value["title"], "Leek and potato soup");
        assert_eq!(value["serves"][0]["unit"], "people");
        assert_eq!(value["ingredients"][0]["recipeSection"], "For the soup");
        assert_eq!(value["ingredients"][0]["ingredientsList"][0]["ingredientID"], "leek");
        assert_eq!(
            value["ingredients"][0]["ingredientsList"][0]["text"],
            "<strong>4 leeks</strong>, sliced"
        );
        assert_eq!(value["instructions"][0]["description"], "Simmer for 20 minutes");
        assert_eq!(value["instructions"][0]["stepNumber"], 1);
        assert_eq!(value["instructions"][0]["images"][0], "img-1");
    }

    #[test]
    fn test_us_customary_recipe() {
        let recipe = Recipe::with_ingredient_templates(
            "dressing",
            &[
                r#"{"min": 100, "unit": "ml", "scale": true, "usCust": true} of water, ice cold"#,
                r#"{"min": 120, "unit": "ml", "scale": true, "usCust": true} of oil"#,
            ],
        );

        let scaled =
            scale_and_convert_recipe(&recipe, 1.0, MeasuringSystem::USCustomary, None);
        let texts: Vec<_> = scaled
            .ingredient_items()
            .filter_map(|item| item.text.as_deref())
            .collect();
        assert_eq!(
            texts,
            vec!["<strong>⅜ cup of water</strong>, ice cold", "<strong>½ cup of oil</strong>"]
        );
    }

    #[test]
    fn test_options_disable_strong_and_punctuation() {
        let recipe = Recipe::with_ingredient_templates(
            "pasta",
            &[r#"{"min": 200, "unit": "g", "scale": true} "00" flour"#],
        );
        let options = RenderOptions {
            smart_punctuation: false,
            strong_ingredients: false,
        };

        let scaled =
            scale_recipe_with_options(&recipe, 1.0, MeasuringSystem::Metric, None, &options);
        assert_eq!(
            scaled.ingredient_items().next().unwrap().text.as_deref(),
            Some("200 g \"00\" flour")
        );

        let scaled = scale_and_convert_recipe(&recipe, 1.0, MeasuringSystem::Metric, None);
        assert_eq!(
            scaled.ingredient_items().next().unwrap().text.as_deref(),
            Some("<strong>200 g “00” flour</strong>")
        );
    }

    #[test]
    fn test_ingredient_without_suffix() {
        assert_eq!(ingredient_without_suffix("2 red onions, finely sliced"), "2 red onions");
        assert_eq!(ingredient_without_suffix("1 lemon; zested"), "1 lemon");
        assert_eq!(ingredient_without_suffix("200 g butter (softened)"), "200 g butter");
        assert_eq!(ingredient_without_suffix("salt"), "salt");
        assert_eq!(ingredient_without_suffix(""), "");
    }

    #[test]
    fn test_wrap_with_strong_tag() {
        assert_eq!(
            wrap_with_strong_tag("200 g butter (softened), cubed"),
            "<strong>200 g butter</strong> (softened), cubed"
        );
        assert_eq!(wrap_with_strong_tag("4 eggs"), "<strong>4 eggs</strong>");
        assert_eq!(wrap_with_strong_tag("4 eggs  "), "<strong>4 eggs</strong>  ");
    }
}
