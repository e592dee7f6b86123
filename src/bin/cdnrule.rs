use std::fs;
use std::path::{Path, PathBuf};

use cdnrule::utils::LoggingConfig;
use cdnrule::{
    expand_document, flatten_document, load_document, schema_exports, validate_document,
};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "cdnrule", version, about = "CDN delivery rule condition tool", author)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },
    /// Validate a conditions document
    Validate { file: PathBuf },
    /// Expand a conditions document into API wire format
    Expand {
        file: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Flatten API wire conditions back into a conditions document
    Flatten {
        file: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SchemaCommand {
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> anyhow::Result<()> {
    LoggingConfig::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Schema { command } => match command {
            SchemaCommand::Export { output, compact } => handle_schema_export(output, !compact)?,
        },
        Command::Validate { file } => handle_validate(&file)?,
        Command::Expand { file, output } => {
            let document = load_document(&file)?;
            write_value(&expand_document(&document)?, output, true)?;
        }
        Command::Flatten { file, output } => {
            let wire = load_document(&file)?;
            write_value(&flatten_document(&wire)?, output, true)?;
        }
    }
    Ok(())
}

fn handle_schema_export(output: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let entries = schema_exports();
    write_value(&json!(entries), output, pretty)
}

fn handle_validate(file: &Path) -> anyhow::Result<()> {
    let document = load_document(file)?;
    let count = validate_document(&document)?;
    println!("`{}` is valid ({count} conditions)", file.display());
    Ok(())
}

fn write_value(value: &Value, output: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let content = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(path) = output {
        fs::write(&path, content)?;
        println!("Written to `{}`", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
