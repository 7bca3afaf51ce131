use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use vidprep::{
    classify,
    ffmpeg::{faststart::process_for_fast_start, probe::video_aspect_ratio},
    summary::summarize,
    Tools,
};

#[derive(Parser)]
#[command(version, about = "Video aspect ratio and fast-start helper")]
pub struct Cli {
    /// ffprobe executable
    #[clap(long, global = true, env = "VIDPREP_FFPROBE", default_value = "ffprobe")]
    pub ffprobe: PathBuf,
    /// ffmpeg executable
    #[clap(long, global = true, env = "VIDPREP_FFMPEG", default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,
    #[command(subcommand)]
    pub subcommand: Commands,
}

#[derive(Parser)]
pub enum Commands {
    /// Print the reduced width:height ratio of a video
    #[clap(name = "aspect-ratio")]
    AspectRatio { file: PathBuf },
    /// Classify a width:height ratio as portrait, landscape or other
    #[clap(name = "orientation")]
    Orientation { ratio: String },
    /// Print ratio and orientation of a video
    #[clap(name = "info")]
    Info(InfoArgs),
    /// Rewrite a video with its index at the front of the file
    #[clap(name = "fast-start")]
    FastStart { file: PathBuf },
}

#[derive(Parser)]
pub struct InfoArgs {
    pub file: PathBuf,
    #[clap(long)]
    pub json: bool,
}

fn cmd_info(tools: &Tools, args: &InfoArgs) -> anyhow::Result<()> {
    let summary = summarize(tools, &args.file)
        .with_context(|| format!("Failed to inspect {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} {}", summary.aspect_ratio, summary.orientation);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let tools = Tools::new(cli.ffprobe, cli.ffmpeg);

    match cli.subcommand {
        Commands::AspectRatio { ref file } => {
            let ratio = video_aspect_ratio(&tools, file)
                .with_context(|| format!("Failed to probe {}", file.display()))?;
            println!("{}", ratio);
        }
        Commands::Orientation { ref ratio } => {
            println!("{}", classify(ratio)?);
        }
        Commands::Info(ref args) => cmd_info(&tools, args)?,
        Commands::FastStart { ref file } => {
            let output = process_for_fast_start(&tools, file)
                .with_context(|| format!("Failed to process {}", file.display()))?;
            println!("{}", output.display());
        }
    }

    Ok(())
}
