use clap::{Parser, Subcommand};
use recipe_scale::config::Config;
use recipe_scale::recipe::Recipe;
use recipe_scale::template::parse_template;
use recipe_scale::units::{all_units, smallest_unit, MeasuringSystem};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "recipe-scale.toml";

#[derive(Parser)]
#[command(name = "recipe-scale")]
#[command(about = "Scale recipe templates and convert their units", long_about = None)]
struct Cli {
    /// Configuration file (default: ./recipe-scale.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log conversion decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single template
    Render {
        /// Template text, e.g. '{"min": 100, "unit": "g", "scale": true} flour'
        template: String,

        /// Scaling factor: desired servings / original servings
        #[arg(short, long, default_value_t = 1.0)]
        factor: f32,

        /// Metric, Imperial or USCustomary
        #[arg(short, long)]
        system: Option<String>,
    },

    /// Show how a template is split into text and placeholders
    Parse {
        template: String,
    },

    /// Scale every template in a recipe JSON document
    Scale {
        /// Recipe JSON file
        path: String,

        #[arg(short, long, default_value_t = 1.0)]
        factor: f32,

        #[arg(short, long)]
        system: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Combine ingredient quantities across recipes
    Combine {
        /// Recipe JSON files
        #[arg(required = true)]
        paths: Vec<String>,

        #[arg(short, long)]
        system: Option<String>,

        /// Append the number of contributing items
        #[arg(long)]
        count: bool,
    },

    /// List known units
    Units {
        /// Only units belonging to this system
        #[arg(short, long)]
        system: Option<String>,
    },

    /// Look up an ingredient density by display or normalised name, or list the table
    Density {
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            template,
            factor,
            system,
        } => render_template(cli.config.as_deref(), &template, factor, system.as_deref()),
        Commands::Parse { template } => parse(&template),
        Commands::Scale {
            path,
            factor,
            system,
            output,
        } => scale_recipe(
            cli.config.as_deref(),
            &path,
            factor,
            system.as_deref(),
            output.as_deref(),
        ),
        Commands::Combine {
            paths,
            system,
            count,
        } => combine(cli.config.as_deref(), &paths, system.as_deref(), count),
        Commands::Units { system } => list_units(system.as_deref()),
        Commands::Density { name } => lookup_density(cli.config.as_deref(), name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load_from_file(DEFAULT_CONFIG)?,
        None => Config::empty(),
    };
    Ok(config)
}

// A system given on the command line wins over the configured one
fn resolve_system(
    config: &Config,
    system: Option<&str>,
) -> Result<MeasuringSystem, Box<dyn std::error::Error>> {
    let system = match system {
        Some(system) => system.parse::<MeasuringSystem>()?,
        None => config.measuring_system()?,
    };
    debug!("Rendering for {}", system);
    Ok(system)
}

fn read_recipe(path: &str) -> Result<Recipe, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let recipe: Recipe = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse recipe {}: {}", path, e))?;
    Ok(recipe)
}

fn render_template(
    config_path: Option<&str>,
    template: &str,
    factor: f32,
    system: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let system = resolve_system(&config, system)?;
    let session = config.build_session()?;

    println!("{}", session.render_template(template, factor, system));

    Ok(())
}

fn parse(template: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_template(template);
    println!("{}", serde_json::to_string_pretty(&parsed)?);

    Ok(())
}

fn scale_recipe(
    config_path: Option<&str>,
    path: &str,
    factor: f32,
    system: Option<&str>,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let system = resolve_system(&config, system)?;
    let session = config.build_session()?;

    let recipe = read_recipe(path)?;
    let scaled = session.scale_and_convert_recipe(&recipe, factor, system);
    let json = serde_json::to_string_pretty(&scaled)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Recipe written to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn combine(
    config_path: Option<&str>,
    paths: &[String],
    system: Option<&str>,
    count: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let system = resolve_system(&config, system)?;
    let session = config.build_session()?;

    let recipes = paths
        .iter()
        .map(|path| read_recipe(path))
        .collect::<Result<Vec<_>, _>>()?;

    let include_count = count || config.combine.include_count;
    for line in session.combine_ingredients(&recipes, system, include_count) {
        println!("{}", line);
    }

    Ok(())
}

fn list_units(system: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let system = system.map(str::parse::<MeasuringSystem>).transpose()?;

    let units: Vec<_> = all_units()
        .filter(|unit| system.map_or(true, |s| unit.belongs_to(s)))
        .collect();

    println!("Units ({}):", units.len());
    for unit in units {
        let base = unit
            .unit_type
            .map(|unit_type| smallest_unit(unit_type).symbol.as_ref())
            .unwrap_or("");
        let systems: Vec<&str> = unit.measuring_systems.iter().map(|s| s.as_str()).collect();
        println!(
            "  - {} ({} / {}) = {} {} [{}]",
            unit.symbol,
            unit.singular,
            unit.plural,
            unit.quantity,
            base,
            systems.join(", ")
        );
    }

    Ok(())
}

fn lookup_density(
    config_path: Option<&str>,
    name: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let session = config.build_session()?;
    let table = session
        .densities()
        .ok_or("Density lookup is disabled in the configuration")?;

    let name = match name {
        Some(name) => name,
        None => {
            println!("Densities ({}, prepared at {}):", table.len(), table.prepared_at());
            for entry in table.entries() {
                println!("  - {} ({}): {} g/ml", entry.name, entry.normalised_name, entry.density);
            }
            return Ok(());
        }
    };

    let entry = table
        .data_for(name)
        .or_else(|| table.data_for_norm(name))
        .ok_or_else(|| format!("No density for '{}'", name))?;

    println!("{} ({}): {} g/ml", entry.name, entry.normalised_name, entry.density);
    println!("Table prepared at {}", table.prepared_at());

    Ok(())
}
