use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use paramex::{
    CategoryRegistry, ParameterCatalog, SelectionTracker, doc_links, parse_param_file,
    write_selected,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect ArduPilot parameter files & extract selected subsets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all parameters with their category classification
    List {
        /// ArduPilot .param file
        #[arg(value_name = "PARAM_FILE")]
        param_file: Utf8PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the per-vehicle documentation links for a parameter
    Docs {
        /// Parameter name, e.g. RC1_MIN
        #[arg(value_name = "PARAMETER")]
        parameter: String,
    },
    /// Extract a subset of a parameter file
    Extract {
        /// ArduPilot .param file
        #[arg(value_name = "PARAM_FILE")]
        param_file: Utf8PathBuf,
        /// Output file for the extracted subset
        #[arg(short, long, value_name = "FILE")]
        output: Utf8PathBuf,
        /// Parameter names to exclude from the extraction
        #[arg(long, value_name = "NAME")]
        exclude: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("paramex=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::List { param_file, json } => list(&param_file, json),
        Command::Docs { parameter } => docs(&parameter),
        Command::Extract {
            param_file,
            output,
            exclude,
        } => extract(&param_file, &output, &exclude),
    }
}

fn load_catalog(param_file: &Utf8PathBuf) -> Result<ParameterCatalog> {
    let entries =
        parse_param_file(param_file).with_context(|| format!("Failed to read {param_file}"))?;
    let mut catalog = ParameterCatalog::new();
    catalog
        .load(entries)
        .with_context(|| format!("Failed to load {param_file}"))?;
    Ok(catalog)
}

fn list(param_file: &Utf8PathBuf, json: bool) -> Result<()> {
    let catalog = load_catalog(param_file)?;
    let registry = CategoryRegistry::with_default_palette();

    if json {
        let params: Vec<_> = catalog.all().collect();
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    for param in catalog.all() {
        let category = registry.resolve(&param.category);
        println!(
            "{:<20} {:>12}  [{} {}]",
            param.name,
            param.value,
            category.identifier,
            category.color.to_rgb_string()
        );
    }
    println!("{} parameters", catalog.len());
    Ok(())
}

fn docs(parameter: &str) -> Result<()> {
    for (family, url) in doc_links(parameter)? {
        println!("{:<15} {}", family.label(), url);
    }
    Ok(())
}

fn extract(param_file: &Utf8PathBuf, output: &Utf8PathBuf, exclude: &[String]) -> Result<()> {
    let catalog = load_catalog(param_file)?;
    let mut selection = SelectionTracker::new();
    selection.attach(&catalog);
    for name in exclude {
        selection
            .set_selected(name, false)
            .with_context(|| format!("Cannot exclude '{name}'"))?;
    }

    write_selected(output, &catalog, &selection)
        .with_context(|| format!("Failed to write {output}"))?;
    println!(
        "Extracted {} of {} parameters to {}",
        selection.selected_count(),
        catalog.len(),
        output
    );
    Ok(())
}
