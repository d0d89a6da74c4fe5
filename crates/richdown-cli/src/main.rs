//! richdown CLI - convert a JSON document tree to Markdown

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use richdown::{MarkdownSerializer, Options};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "richdown")]
#[command(version, about = "Convert a rich-text JSON document to CommonMark", long_about = None)]
struct Cli {
    /// Input JSON file (reads stdin when absent or '-')
    input: Option<PathBuf>,

    /// Markup for hard line breaks; `\n` is read as a line break
    #[arg(long)]
    hard_break: Option<String>,

    /// Render lists without a `tight` attribute as tight
    #[arg(long)]
    tight_lists: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let mut options = Options {
            tight_lists: self.tight_lists,
            ..Default::default()
        };
        if let Some(hard_break) = &self.hard_break {
            options.hard_break = hard_break.replace("\\n", "\n");
        }
        options
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            _ => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("failed to read stdin")?;
                Ok(input)
            }
        }
    }
}

fn convert(json: &str, options: Options) -> Result<String> {
    let serializer = MarkdownSerializer::with_options(options);
    serializer
        .serialize_json(json)
        .context("failed to convert document")
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "richdown=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(input = ?cli.input, "reading document");
    let input = cli.read_input()?;
    let markdown = convert(&input, cli.options())?;
    println!("{}", markdown);
    Ok(())
}
