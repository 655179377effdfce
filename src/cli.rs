//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_index_letter, INDEX_LETTERS};
use crate::error::Result;
use crate::harvester::{harvest_acts_letter, harvest_excerpts, harvest_offences};
use crate::http::create_client;
use crate::output::{
    load_acts, save_all_acts, save_excerpts, save_letter_acts, save_offences, save_timeline,
    ALL_ACTS_FILE, JSON_DIR,
};
use crate::timeline::build_timeline;
use crate::types::{Act, OffenceCategory};

/// CAP Harvester - Harvest Canadian federal acts and offence classifications.
#[derive(Parser)]
#[command(name = "cap-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Harvest the Consolidated Acts indexes into JSON record lists.
    Acts {
        /// Harvest a single index letter instead of all of A-Z
        #[arg(short, long)]
        letter: Option<char>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Harvest Criminal Notebook offence listings into JSON record lists.
    Offences {
        /// Harvest a single category (summary, indictable, hybrid)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<OffenceCategory>,

        /// Skip fetching detail pages for keyword-filtered excerpts
        #[arg(long)]
        skip_excerpts: bool,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Aggregate a harvested acts list into a decade-bucketed timeline.
    Timeline {
        /// Acts JSON file (default: JSONs/all_parliament_acts.json)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse an offence category argument.
fn parse_category(value: &str) -> std::result::Result<OffenceCategory, String> {
    match value {
        "summary" => Ok(OffenceCategory::Summary),
        "indictable" => Ok(OffenceCategory::Indictable),
        "hybrid" => Ok(OffenceCategory::Hybrid),
        other => Err(format!(
            "unknown category '{other}' (expected summary, indictable, or hybrid)"
        )),
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Acts { letter, output } => {
            acts_command(letter, output.as_deref().unwrap_or(Path::new(".")))
        }
        Commands::Offences {
            category,
            skip_excerpts,
            output,
        } => offences_command(
            category,
            skip_excerpts,
            output.as_deref().unwrap_or(Path::new(".")),
        ),
        Commands::Timeline { input, output } => {
            timeline_command(input.as_deref(), output.as_deref().unwrap_or(Path::new(".")))
        }
    }
}

/// Progress bar over a fixed number of crawl units.
fn create_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );
    pb
}

/// Execute the acts command.
fn acts_command(letter: Option<char>, output: &Path) -> Result<()> {
    let letters: Vec<char> = match letter {
        Some(l) => {
            validate_index_letter(l)?;
            vec![l]
        }
        None => INDEX_LETTERS.to_vec(),
    };

    println!(
        "{} acts indexes for {} letter(s)",
        style("Harvesting").bold(),
        style(letters.len()).cyan()
    );

    let client = create_client()?;
    let pb = create_progress(letters.len() as u64);
    let mut all_acts: Vec<Act> = Vec::new();
    let mut failed = 0usize;

    for l in letters {
        pb.set_message(format!("letter {l}"));
        match harvest_acts_letter(&client, l) {
            Ok(acts) => {
                save_letter_acts(&acts, l, output)?;
                all_acts.extend(acts);
            }
            Err(e) => {
                failed += 1;
                tracing::error!(letter = %l, error = %e, "Failed to harvest acts index, skipping");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let path = save_all_acts(&all_acts, output)?;

    println!("  Acts: {}", style(all_acts.len()).green());
    if failed > 0 {
        println!("  Failed letters: {}", style(failed).yellow().bold());
    }
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        path.display()
    );

    Ok(())
}

/// Execute the offences command.
fn offences_command(
    category: Option<OffenceCategory>,
    skip_excerpts: bool,
    output: &Path,
) -> Result<()> {
    let categories: Vec<OffenceCategory> = match category {
        Some(c) => vec![c],
        None => OffenceCategory::listed().to_vec(),
    };

    let client = create_client()?;
    let pb = create_progress(categories.len() as u64);

    for category in categories {
        pb.set_message(category.as_str().to_string());
        match harvest_offences(&client, category) {
            Ok(offences) => {
                let (flat_path, _) = save_offences(&offences, category, output)?;
                println!(
                    "  {}: {} offences -> {}",
                    style(category.as_str()).cyan(),
                    style(offences.len()).green(),
                    flat_path.display()
                );

                if !skip_excerpts {
                    let excerpts = harvest_excerpts(&client, category, &offences);
                    save_excerpts(&excerpts, category, output)?;
                }
            }
            Err(e) => {
                tracing::error!(
                    category = category.as_str(),
                    error = %e,
                    "Failed to harvest offence listing, skipping"
                );
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(())
}

/// Execute the timeline command.
fn timeline_command(input: Option<&Path>, output: &Path) -> Result<()> {
    let default_input = output.join(JSON_DIR).join(ALL_ACTS_FILE);
    let input = input.unwrap_or(&default_input);

    let acts = load_acts(input)?;
    let document = build_timeline(&acts);
    let path = save_timeline(&document, output)?;

    println!("  Acts: {}", style(acts.len()).green());
    println!("  Periods: {}", style(document.periods.len()).green());
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        path.display()
    );

    Ok(())
}
