//! indexkit CLI: build index items from connector configuration.
//!
//! Usage:
//!   indexkit build <name> [--config FILE] [--schema FILE] [--values FILE]
//!   indexkit keys

use clap::{Parser, Subcommand};
use indexkit::config::keys;
use indexkit::{
    Configuration, IndexingContext, IndexingResult, Item, ItemBuilder, ItemType, Schema, ValueMap,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "indexkit",
    version,
    about = "Build search index items from configuration and field values"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one item and print it as JSON
    Build {
        /// Item name (identifier)
        name: String,
        /// YAML configuration with itemMetadata.* keys
        #[arg(long)]
        config: Option<PathBuf>,
        /// JSON structured data schema
        #[arg(long)]
        schema: Option<PathBuf>,
        /// JSON object of extracted field values
        #[arg(long)]
        values: Option<PathBuf>,
        /// Item type (CONTENT_ITEM, CONTAINER_ITEM, VIRTUAL_CONTAINER_ITEM)
        #[arg(long)]
        item_type: Option<ItemType>,
        /// Queue name
        #[arg(long)]
        queue: Option<String>,
        /// Version string, stored as bytes
        #[arg(long)]
        version: Option<String>,
    },
    /// List the recognized configuration keys
    Keys,
}

struct BuildArgs {
    name: String,
    config: Option<PathBuf>,
    schema: Option<PathBuf>,
    values: Option<PathBuf>,
    item_type: Option<ItemType>,
    queue: Option<String>,
    version: Option<String>,
}

fn load_context(config: Option<&Path>, schema: Option<&Path>) -> IndexingResult<IndexingContext> {
    let mut ctx = IndexingContext::new();
    let configuration = match config {
        Some(path) => Configuration::from_file(path)?,
        None => Configuration::new(),
    };
    ctx.init_config(&configuration)?;
    if let Some(path) = schema {
        let raw = std::fs::read_to_string(path)?;
        ctx.init_schema(Schema::from_json_str(&raw)?)?;
    }
    Ok(ctx)
}

fn load_values(path: Option<&Path>) -> IndexingResult<ValueMap> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            ValueMap::from_json(&serde_json::from_str(&raw)?)
        }
        None => Ok(ValueMap::new()),
    }
}

fn build_item(args: BuildArgs) -> IndexingResult<Item> {
    let ctx = load_context(args.config.as_deref(), args.schema.as_deref())?;
    let values = load_values(args.values.as_deref())?;

    let mut builder = ItemBuilder::from_configuration(args.name, &ctx)?.with_values(values);
    if let Some(item_type) = args.item_type {
        builder = builder.with_item_type(item_type);
    }
    if let Some(queue) = args.queue {
        builder = builder.with_queue(queue);
    }
    if let Some(version) = args.version {
        builder = builder.with_version(version.into_bytes());
    }
    builder.build()
}

fn cmd_build(args: BuildArgs) -> i32 {
    let item = match build_item(args) {
        Ok(item) => item,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match serde_json::to_string_pretty(&item) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_keys() -> i32 {
    for key in keys::ALL {
        println!("{}", key);
    }
    0
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Build {
            name,
            config,
            schema,
            values,
            item_type,
            queue,
            version,
        } => cmd_build(BuildArgs {
            name,
            config,
            schema,
            values,
            item_type,
            queue,
            version,
        }),
        Commands::Keys => cmd_keys(),
    };
    std::process::exit(code);
}
