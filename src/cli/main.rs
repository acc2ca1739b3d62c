use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use flink_catalog_types::config::Config;
use flink_catalog_types::services::CatalogLoader;
use flink_catalog_types::{ColumnProps, TypeParser, build_column};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "flink-types")]
#[command(version)]
#[command(about = "Parse Flink SQL type signatures into catalog column trees")]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["file", "type_signature", "parse"])
))]
struct Args {
    /// Catalog rows file (.json, .yaml, .yml) to build relations from
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print relation tooltips instead of JSON
    #[arg(long, requires = "file")]
    tooltip: bool,

    /// Build a column from one type signature
    #[arg(long = "type", value_name = "SIGNATURE")]
    type_signature: Option<String>,

    /// Print the parsed type tree of one signature
    #[arg(long, value_name = "SIGNATURE")]
    parse: Option<String>,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env();
    config.init_tracing()?;

    if let Some(signature) = args.type_signature {
        let column = build_column(&ColumnProps::new("cli", "column", signature));
        print_json(&column, config.pretty_output)?;
    } else if let Some(signature) = args.parse {
        let parsed = TypeParser::parse(&signature)
            .with_context(|| format!("Failed to parse type signature '{}'", signature))?;
        print_json(&parsed, config.pretty_output)?;
    } else if let Some(path) = args.file {
        let relations = CatalogLoader::new().load_relations(&path)?;
        info!("Built {} relations from {}", relations.len(), path.display());
        if args.tooltip {
            for relation in &relations {
                println!("{}\n", relation.tooltip());
            }
        } else {
            print_json(&relations, config.pretty_output)?;
        }
    }

    Ok(())
}
