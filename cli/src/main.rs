//! wikidown CLI - wiki markup to HTML renderer

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use wikidown::render::{toc_to_json, JsonFormat};
use wikidown::{substitute_emoticons, RenderResult, Wikidown, DEFAULT_THUMBNAIL_WIDTH};

#[derive(Parser)]
#[command(name = "wikidown")]
#[command(version)]
#[command(about = "Render wiki markup to HTML with a table of contents", long_about = None)]
struct Cli {
    /// Input wiki file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render wiki markup to HTML
    Render {
        /// Input wiki file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Directory holding source images and thumbnails
        #[arg(long, value_name = "DIR", env = "WIKIDOWN_IMAGE_ROOT", default_value = "img")]
        image_root: PathBuf,

        /// Thumbnail width in pixels
        #[arg(long, value_name = "N", default_value_t = DEFAULT_THUMBNAIL_WIDTH)]
        thumbnail_width: u32,

        /// Skip thumbnail lookup and generation
        #[arg(long)]
        no_thumbnails: bool,

        /// Replace emoticon codes with images
        #[arg(long)]
        emoticons: bool,

        /// Also write the table of contents as JSON
        #[arg(long, value_name = "FILE")]
        toc_json: Option<PathBuf>,

        /// Print rendering statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Print the table of contents as JSON
    Toc {
        /// Input wiki file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Replace emoticon codes in an HTML file
    Emoticons {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            image_root,
            thumbnail_width,
            no_thumbnails,
            emoticons,
            toc_json,
            stats,
        }) => {
            let mut wikidown = Wikidown::new()
                .with_image_root(image_root)
                .with_thumbnail_width(thumbnail_width);
            if no_thumbnails {
                wikidown = wikidown.without_thumbnails();
            }
            if emoticons {
                wikidown = wikidown.with_emoticons();
            }
            cmd_render(
                &wikidown,
                &input,
                output.as_deref(),
                toc_json.as_deref(),
                stats,
            )
        }
        Some(Commands::Toc { input, compact }) => cmd_toc(&input, compact),
        Some(Commands::Emoticons { input, output }) => cmd_emoticons(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_render(&Wikidown::new(), &input, None, None, false)
            } else {
                println!("{}", "Usage: wikidown <FILE>".yellow());
                println!("       wikidown --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_render(
    wikidown: &Wikidown,
    input: &Path,
    output: Option<&Path>,
    toc_json: Option<&Path>,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = wikidown.render_file(input)?;
    log::debug!("Rendered {} ({} bytes)", input.display(), result.html_len());

    if let Some(path) = toc_json {
        let json = toc_to_json(&result.toc, JsonFormat::Pretty)?;
        fs::write(path, json)?;
        eprintln!("{} {}", "TOC saved to".green(), path.display());
    }

    if stats {
        print_stats(&result)?;
    }

    write_output(output, &result.html)
}

fn cmd_toc(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let (_, toc) = wikidown::extract_headings(&wikidown::render::escape_html(
        &wikidown::normalize(&text),
    ));

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", toc_to_json(&toc, format)?);

    Ok(())
}

fn cmd_emoticons(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let html = fs::read_to_string(input)?;
    write_output(output, &substitute_emoticons(&html))
}

fn print_stats(result: &RenderResult) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("{}", "Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}", serde_json::to_string_pretty(&result.stats)?);
    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "wikidown".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Wiki markup to HTML renderer");
    println!();
    println!("License: MIT");
}
