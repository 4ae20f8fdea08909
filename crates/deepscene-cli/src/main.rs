//! DeepScene command-line interface.

mod logging;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::process::ExitCode;
use tracing::{error, info};

use deepscene_engine::{clean_description, EngineConfig, SceneAnalyzer};
use deepscene_models::{ImageRequest, SceneRequest, SceneResult};

#[derive(Parser)]
#[command(name = "deepscene")]
#[command(about = "Analyze scene descriptions into genre, mood, characters and prompts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full scene analysis
    Analyze {
        /// Scene description; read from stdin when omitted
        description: Option<String>,

        /// Visual style to use instead of the genre's style
        #[arg(short, long)]
        style: Option<String>,

        /// Also print the image generation request
        #[arg(long)]
        image: bool,

        /// Image width
        #[arg(long, default_value_t = ImageRequest::DEFAULT_WIDTH)]
        width: u32,

        /// Image height
        #[arg(long, default_value_t = ImageRequest::DEFAULT_HEIGHT)]
        height: u32,
    },

    /// Genre, characters and setting only
    Text {
        /// Text to analyze; read from stdin when omitted
        text: Option<String>,
    },

    /// List known genres with their styles and keywords
    Genres,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    scene: &'a SceneResult,
    image: ImageRequest,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::from_env().context("Invalid engine configuration")?;
    info!(
        lexicon = ?config.lexicon_path,
        fallback = %config.fallback_policy,
        tagger = ?config.tagger,
        "Engine config loaded"
    );
    let analyzer = SceneAnalyzer::from_config(&config).context("Failed to build analyzer")?;

    match cli.command {
        Commands::Analyze {
            description,
            style,
            image,
            width,
            height,
        } => {
            let description = input_or_stdin(description)?;
            let request = SceneRequest {
                description,
                style,
            };
            let scene = analyzer.analyze_request(&request)?;

            if image {
                let image = ImageRequest::for_scene(&scene, width, height);
                print_json(&AnalyzeOutput {
                    scene: &scene,
                    image,
                })
            } else {
                print_json(&scene)
            }
        }
        Commands::Text { text } => {
            let text = input_or_stdin(text)?;
            print_json(&analyzer.analyze_text(&text)?)
        }
        Commands::Genres => print_json(&analyzer.genres()),
    }
}

/// The argument as given, or cleaned stdin when absent.
fn input_or_stdin(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read description from stdin")?;
    let cleaned = clean_description(&raw);
    if cleaned.is_empty() {
        bail!("No description given and stdin was empty");
    }
    Ok(cleaned)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
