//! mealdb CLI — look up recipes on TheMealDB from the terminal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::{DynamicImage, RgbaImage};

use mealdb_core::api::{first_meal_in_category, search_query};
use mealdb_core::report::{Rendered, render};
use mealdb_core::thumbnail::fetch_thumbnail;
use mealdb_core::types::MealsResponse;
use mealdb_core::{ApiConfig, HttpMealApi, MealApi};

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "mealdb",
    about = "Search TheMealDB for recipes",
    version,
)]
struct Cli {
    /// API root (overrides MEALDB_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides MEALDB_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Show verbose output
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search meals by name and show the first match
    Search {
        /// Meal name, e.g. "Arrabiata"
        name: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show a random meal
    Random {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List meal categories
    Categories,
    /// Show the first meal in a category
    Category {
        /// Category name as listed by `mealdb categories`
        category: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print the raw meal record as JSON instead of the report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Save the resized 300x200 thumbnail to this path
    #[arg(long)]
    save_thumbnail: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ApiConfig::from_env();
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout_secs {
        if secs == 0 {
            bail!("--timeout-secs must be greater than zero");
        }
        config = config.with_timeout_secs(secs);
    }
    let api = HttpMealApi::new(&config).context("Failed to set up HTTP client")?;
    log::debug!("Using API at {}", api.base_url());

    match cli.command {
        Command::Search { name, output } => {
            let Some(query) = search_query(&name) else {
                log::warn!("Empty search name, nothing to look up");
                return Ok(());
            };
            let resp = api
                .search_by_name(query)
                .with_context(|| format!("Search for {:?} failed", name))?;
            show_meal(&api, resp.as_ref(), &output)
        }
        Command::Random { output } => {
            let resp = api.random_meal().context("Random meal lookup failed")?;
            show_meal(&api, resp.as_ref(), &output)
        }
        Command::Categories => {
            // Unlike the GUI selector, a failed listing is an error here.
            let list = api.list_categories().context("Category listing failed")?;
            for name in list.map(|l| l.names()).unwrap_or_default() {
                println!("{}", name);
            }
            Ok(())
        }
        Command::Category { category, output } => {
            let resp = first_meal_in_category(&api, &category)
                .with_context(|| format!("Category lookup for {:?} failed", category))?;
            show_meal(&api, resp.as_ref(), &output)
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

fn show_meal(api: &dyn MealApi, resp: Option<&MealsResponse>, output: &OutputArgs) -> Result<()> {
    let rendered = render(resp);

    if output.json {
        match resp.and_then(MealsResponse::first) {
            Some(meal) => println!("{}", serde_json::to_string_pretty(meal)?),
            None => println!("null"),
        }
    } else {
        print!("{}", rendered.text());
        if matches!(rendered, Rendered::NotFound) {
            println!();
        }
    }

    if let (Some(path), Rendered::Meal(meal)) = (&output.save_thumbnail, &rendered) {
        let img = fetch_thumbnail(api, meal.thumbnail_url.as_deref())
            .with_context(|| format!("Thumbnail for {:?} unavailable", meal.name))?;
        save_thumbnail(img, path)?;
        log::info!("Thumbnail saved to {}", path.display());
    }
    Ok(())
}

/// Write the thumbnail in the format implied by `path`'s extension.
///
/// Saved as RGB because JPEG has no alpha channel.
fn save_thumbnail(img: RgbaImage, path: &Path) -> Result<()> {
    DynamicImage::ImageRgba8(img)
        .to_rgb8()
        .save(path)
        .with_context(|| format!("Failed to write thumbnail: {}", path.display()))
}
