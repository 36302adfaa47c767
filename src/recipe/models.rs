use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Only the template-bearing fields are typed, everything else rides along in `extra`

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientSection>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<Instruction>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_list: Option<Vec<IngredientItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_section: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct IngredientItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IngredientItem {
    pub fn from_template(template: &str) -> Self {
        Self {
            template: Some(template.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_template: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// A recipe with a single unnamed ingredient section
    pub fn with_ingredient_templates(id: &str, templates: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            ingredients: Some(vec![IngredientSection {
                ingredients_list: Some(
                    templates
                        .iter()
                        .map(|template| IngredientItem::from_template(template))
                        .collect(),
                ),
                ..IngredientSection::default()
            }]),
            ..Self::default()
        }
    }

    pub fn ingredient_items(&self) -> impl Iterator<Item = &IngredientItem> {
        self.ingredients
            .iter()
            .flatten()
            .flat_map(|section| section.ingredients_list.iter().flatten())
    }
}
