use crate::template::models::*;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::warn;

lazy_static! {
    /// A `{...}` span, treating quoted strings inside it as opaque
    /// so `{"unit": "}"}` is matched as a whole
    static ref PLACEHOLDER_PATTERN: Regex =
        Regex::new(r#"\{(?:[^{}"]|"(?:[^"\\]|\\.)*")*\}"#).unwrap();
}

/// Split a template into literal text and typed placeholders
///
/// Never fails: a span that is not a valid placeholder is kept as literal text.
pub fn parse_template(template: &str) -> ParsedTemplate {
    let mut elements = Vec::new();
    let mut last_end = 0;

    for (index, span) in PLACEHOLDER_PATTERN.find_iter(template).enumerate() {
        let text = &template[last_end..span.start()];
        // Whitespace between two placeholders is significant: "{..} {..}"
        if !text.trim().is_empty() || (index > 0 && !text.is_empty()) {
            elements.push(TemplateElement::Const(text.to_string()));
        }

        match parse_placeholder(span.as_str()) {
            Ok(element) => elements.push(element),
            Err(e) => {
                warn!("Failed to parse placeholder {}: {}", span.as_str(), e);
                elements.push(TemplateElement::Const(span.as_str().to_string()));
            }
        }

        last_end = span.end();
    }

    let remaining = &template[last_end..];
    if !remaining.trim().is_empty() {
        elements.push(TemplateElement::Const(remaining.to_string()));
    }

    ParsedTemplate::new(elements)
}

fn parse_placeholder(span: &str) -> Result<TemplateElement, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_str(span)?;
    if object.contains_key("min") {
        serde_json::from_value(Value::Object(object)).map(TemplateElement::Quantity)
    } else {
        serde_json::from_value(Value::Object(object)).map(TemplateElement::OvenTemperature)
    }
}
