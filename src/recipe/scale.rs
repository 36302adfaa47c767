use crate::density::DensityTable;
use crate::recipe::models::*;
use crate::render::renderer::render_elements;
use crate::render::session::RenderOptions;
use crate::template::parser::parse_template;
use crate::units::types::MeasuringSystem;

/// Rendered ingredient text up to the first `,`, `;` or `(`, trailing whitespace trimmed
///
/// "2 red onions, finely sliced" -> "2 red onions"
pub fn ingredient_without_suffix(rendered: &str) -> &str {
    let end = rendered.find([',', ';', '(']).unwrap_or(rendered.len());
    rendered[..end].trim_end()
}

/// `<strong>2 red onions</strong>, finely sliced`
pub fn wrap_with_strong_tag(rendered: &str) -> String {
    let before = ingredient_without_suffix(rendered);
    let after = &rendered[before.len()..];
    format!("<strong>{}</strong>{}", before, after)
}

/// Scale and convert every ingredient and instruction template of a recipe
///
/// `factor` is desired servings over original servings. Rendered ingredient templates
/// replace `text`, rendered instruction templates replace `description`; items without a
/// template and every other field are left as they are.
pub fn scale_and_convert_recipe(
    recipe: &Recipe,
    factor: f32,
    system: MeasuringSystem,
    densities: Option<&DensityTable>,
) -> Recipe {
    scale_recipe_with_options(recipe, factor, system, densities, &RenderOptions::default())
}

pub fn scale_recipe_with_options(
    recipe: &Recipe,
    factor: f32,
    system: MeasuringSystem,
    densities: Option<&DensityTable>,
    options: &RenderOptions,
) -> Recipe {
    let render = |template: &str| {
        options.finish(render_elements(&parse_template(template), factor, system, densities))
    };

    let ingredients = recipe.ingredients.as_ref().map(|sections| {
        sections
            .iter()
            .map(|section| IngredientSection {
                ingredients_list: section.ingredients_list.as_ref().map(|items| {
                    items
                        .iter()
                        .map(|item| IngredientItem {
                            text: match &item.template {
                                Some(template) if options.strong_ingredients => {
                                    Some(wrap_with_strong_tag(&render(template)))
                                }
                                Some(template) => Some(render(template)),
                                None => item.text.clone(),
                            },
                            ..item.clone()
                        })
                        .collect()
                }),
                ..section.clone()
            })
            .collect()
    });

    let instructions = recipe.instructions.as_ref().map(|instructions| {
        instructions
            .iter()
            .map(|instruction| Instruction {
                description: match &instruction.description_template {
                    Some(template) => render(template),
                    None => instruction.description.clone(),
                },
                ..instruction.clone()
            })
            .collect()
    });

    Recipe {
        ingredients,
        instructions,
        ..recipe.clone()
    }
}
