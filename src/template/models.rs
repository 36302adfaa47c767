use serde::{Deserialize, Serialize};

/// `{"min": 100, "max": 120, "unit": "g", "scale": true, "usCust": true, "ingredient": "flour"}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityPlaceholder {
    pub min: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,

    // Raw unit name as written in the recipe, resolved through the catalog at render time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default)]
    pub scale: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub us_cust: Option<bool>,

    // Normalised ingredient name, used for density lookup and combining
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
}

impl QuantityPlaceholder {
    pub fn new(min: f32, max: Option<f32>, unit: Option<&str>) -> Self {
        Self {
            min,
            max,
            unit: unit.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn scaled(mut self) -> Self {
        self.scale = true;
        self
    }

    pub fn with_ingredient(mut self, ingredient: &str) -> Self {
        self.ingredient = Some(ingredient.to_string());
        self
    }

    pub fn us_cust(&self) -> bool {
        self.us_cust.unwrap_or(false)
    }
}

/// `{"temperatureC": 180, "temperatureFanC": 160, "temperatureF": 350, "gasMark": 4}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OvenTemperaturePlaceholder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_fan_c: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_f: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_mark: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum TemplateElement {
    Const(String),
    Quantity(QuantityPlaceholder),
    OvenTemperature(OvenTemperaturePlaceholder),
}

/// A template split into literal text and placeholders, in rendering order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParsedTemplate {
    pub elements: Vec<TemplateElement>,
}

impl ParsedTemplate {
    pub fn new(elements: Vec<TemplateElement>) -> Self {
        Self { elements }
    }

    pub fn quantities(&self) -> impl Iterator<Item = &QuantityPlaceholder> {
        self.elements.iter().filter_map(|element| match element {
            TemplateElement::Quantity(quantity) => Some(quantity),
            _ => None,
        })
    }

    /// Rebuild a template string, placeholders written back as compact JSON
    pub fn to_template_string(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for element in &self.elements {
            match element {
                TemplateElement::Const(text) => out.push_str(text),
                TemplateElement::Quantity(quantity) => {
                    out.push_str(&serde_json::to_string(quantity)?)
                }
                TemplateElement::OvenTemperature(oven) => {
                    out.push_str(&serde_json::to_string(oven)?)
                }
            }
        }
        Ok(out)
    }
}
