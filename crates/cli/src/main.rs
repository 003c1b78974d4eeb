//! Generate any of the certification decks.

use anyhow::{Context, Result};
use certdeck_cli::{check, failure_line, generate, init_logging, outline_json, report_success};
use certdeck_decks::DeckId;
use clap::Parser;
use std::path::PathBuf;

/// Generate the French certification slide decks (.pptx).
#[derive(Parser, Debug)]
#[command(name = "certdeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Decks to generate: bloc4, bloc4-enhanced, bloc2-enhanced (default: all)
    decks: Vec<DeckId>,

    /// Output directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// List the available decks and exit
    #[arg(long)]
    list: bool,

    /// Print the deck model as JSON instead of writing files
    #[arg(long)]
    outline: bool,

    /// Re-read each written file and verify its slide count
    #[arg(long)]
    check: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let decks = if args.decks.is_empty() {
        DeckId::ALL.to_vec()
    } else {
        args.decks.clone()
    };

    if args.list {
        for id in DeckId::ALL {
            println!(
                "{:<16} {} ({} slides)",
                id.as_str(),
                id.filename(),
                id.announced_slides()
            );
        }
        return Ok(());
    }

    if args.outline {
        println!("{}", outline_json(&decks)?);
        return Ok(());
    }

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.output_dir.display()
        )
    })?;

    for id in decks {
        if args.verbose {
            eprintln!("Generating: {}", id);
        }

        let result = generate(id, &args.output_dir).and_then(|path| {
            if args.check {
                let outline = check(id, &path)?;
                log::info!("{}: verified {} slides", id, outline.slide_count());
                if args.verbose {
                    eprintln!("  Verified {} slides", outline.slide_count());
                }
            }
            Ok(path)
        });

        match result {
            Ok(path) => {
                report_success(id, &path);
                println!();
            }
            Err(e) => println!("{}", failure_line(&e)),
        }
    }

    Ok(())
}
