use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vidvault_cli::api_client::ApiClient;
use vidvault_cli::{display_title, truncate_string};
use vidvault_core::VideoRecord;

#[derive(Parser, Debug)]
#[command(name = "vidvault")]
#[command(about = "Upload videos to and list videos from a vidvault server")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a video file
    Upload {
        /// Path to the video file
        file: PathBuf,
    },
    /// List uploaded videos
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    vidvault_cli::init_tracing();

    let args = Args::parse();
    let client = ApiClient::from_env()?;

    match args.command {
        Command::Upload { file } => {
            let receipt = client.upload_file(&file).await?;
            println!("{}", receipt.message);
            println!("Video ID: {}", receipt.video_id);
            println!("URL:      {}", receipt.url);
        }
        Command::List { format } => {
            let videos = client.list_videos().await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&videos)?),
                OutputFormat::Table => print_video_table(&videos),
            }
        }
    }

    Ok(())
}

fn print_video_table(videos: &[VideoRecord]) {
    println!("\n=== Uploaded Videos ===\n");

    if videos.is_empty() {
        println!("No videos uploaded yet.");
        return;
    }

    println!("{:<30} {:<42} {}", "Title", "Video ID", "URL");
    println!("{}", "-".repeat(120));

    for video in videos {
        println!(
            "{:<30} {:<42} {}",
            truncate_string(display_title(video), 30),
            video.video_id,
            video.url
        );
    }

    println!("\nTotal: {} videos\n", videos.len());
}
