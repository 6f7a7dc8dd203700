use clap::{Parser, Subcommand};
use std::path::Path;
use std::str::FromStr;

use templex_parser::Framework;

#[derive(Parser)]
#[command(name = "templex")]
#[command(about = "Templex — embedded markup template extraction and parsing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a source file and print its template trees as JSON
    Parse {
        /// Input file
        path: String,

        /// Framework strategy (html, angular, jsx, lit, svelte, vue);
        /// guessed from the file extension when omitted
        #[arg(long)]
        framework: Option<String>,
    },

    /// Print the template regions a strategy locates in a file
    Templates {
        /// Input file
        path: String,

        /// Framework strategy; guessed from the file extension when omitted
        #[arg(long)]
        framework: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { path, framework } => cmd_parse(&path, framework.as_deref()),
        Command::Templates { path, framework } => cmd_templates(&path, framework.as_deref()),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn resolve_framework(path: &str, framework: Option<&str>) -> Framework {
    if let Some(name) = framework {
        match Framework::from_str(name) {
            Ok(framework) => return framework,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Framework::from_extension)
        .unwrap_or(Framework::Html)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_parse(path: &str, framework: Option<&str>) {
    let source = read_source(path);
    let framework = resolve_framework(path, framework);

    let trees = templex_parser::parse_with(&source, framework.plugin());
    print_json(&trees);
}

fn cmd_templates(path: &str, framework: Option<&str>) {
    let source = read_source(path);
    let framework = resolve_framework(path, framework);

    let normalized = templex_parser::normalize(&source);
    let templates = framework.plugin().extract_templates(&normalized);
    if templates.is_empty() {
        eprintln!("No templates found in {path} ({})", framework.name());
    }
    print_json(&templates);
}
