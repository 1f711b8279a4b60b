//! docgroup CLI
//!
//! Organizes a documentation model produced by an external builder phase:
//! sorts container children, partitions them into named groups and
//! categories, and emits the organized model.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use docgroup_core::{
    format_output, organize_model, Entity, OrganizeConfig, OutputFormat, SortStrategy,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "docgroup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Organize a documentation model into named groups and categories")]
#[command(long_about = "Reads a documentation model (a JSON entity tree produced by a builder \
    phase), sorts each container's children by the configured strategies, partitions them into \
    groups declared with @group tags (falling back to kind labels), buckets them into @category \
    categories, and emits the organized model.\n\n\
    Group and category markers are consumed: they never appear in the emitted comments.")]
pub struct Args {
    /// Documentation model file (JSON entity tree)
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Json)]
    pub format: OutputFormatArg,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Options file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sort strategies in priority order (can be specified multiple times)
    #[arg(long, value_enum, action = clap::ArgAction::Append)]
    pub sort: Vec<SortArg>,

    /// Group order entries; "*" marks the position of unlisted groups
    #[arg(long, action = clap::ArgAction::Append)]
    pub group_order: Vec<String>,

    /// Category order entries; "*" marks the position of unlisted categories
    #[arg(long, action = clap::ArgAction::Append)]
    pub category_order: Vec<String>,

    /// Category for entities without @category tags (empty disables the fallback)
    #[arg(long)]
    pub default_category: Option<String>,

    /// Attach categories to containers instead of per group
    #[arg(long)]
    pub flat_categories: bool,

    /// Keep builder order for containers holding only entry-point modules
    #[arg(long)]
    pub keep_entry_point_order: bool,

    /// Print run statistics instead of the organized model
    #[arg(long)]
    pub stats_only: bool,

    /// Show verbose progress
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Ansi,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

/// Sort strategy argument
#[derive(ValueEnum, Clone, Debug)]
pub enum SortArg {
    SourceOrder,
    Alphabetical,
    AlphabeticalIgnoringCase,
    EnumValueAscending,
    EnumValueDescending,
    EnumMemberSourceOrder,
    StaticFirst,
    InstanceFirst,
    Visibility,
    RequiredFirst,
    Kind,
    ExternalLast,
}

impl From<SortArg> for SortStrategy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::SourceOrder => SortStrategy::SourceOrder,
            SortArg::Alphabetical => SortStrategy::Alphabetical,
            SortArg::AlphabeticalIgnoringCase => SortStrategy::AlphabeticalIgnoringCase,
            SortArg::EnumValueAscending => SortStrategy::EnumValueAscending,
            SortArg::EnumValueDescending => SortStrategy::EnumValueDescending,
            SortArg::EnumMemberSourceOrder => SortStrategy::EnumMemberSourceOrder,
            SortArg::StaticFirst => SortStrategy::StaticFirst,
            SortArg::InstanceFirst => SortStrategy::InstanceFirst,
            SortArg::Visibility => SortStrategy::Visibility,
            SortArg::RequiredFirst => SortStrategy::RequiredFirst,
            SortArg::Kind => SortStrategy::Kind,
            SortArg::ExternalLast => SortStrategy::ExternalLast,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = build_config(&args)?;

    // Show progress if verbose
    let spinner = if args.verbose && atty::is(atty::Stream::Stderr) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Loading model...");
        Some(pb)
    } else {
        None
    };

    let project = Entity::from_json_file(&args.input)
        .with_context(|| format!("Failed to load model from {}", args.input.display()))?;

    if let Some(ref pb) = spinner {
        pb.set_message(format!(
            "Organizing {} entities...",
            project.total_entities()
        ));
    }

    let result = organize_model(project, config);

    if let Some(ref pb) = spinner {
        pb.finish_with_message(format!(
            "Organized {} entities into {} groups in {}ms",
            result.stats.entities_visited,
            result.stats.groups_created,
            result.metadata.organize_duration_ms
        ));
    }

    let output = if args.stats_only {
        match args.format {
            OutputFormatArg::Yaml => {
                serde_yaml::to_string(&result.stats).context("Failed to serialize statistics")?
            }
            _ => serde_json::to_string_pretty(&result.stats)
                .context("Failed to serialize statistics")?,
        }
    } else {
        format_output(&result, args.format.clone().into())
            .context("Failed to format organized model")?
    };

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        if args.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Merge the options file and command line flags into a configuration
///
/// Command line flags win over file settings.
fn build_config(args: &Args) -> Result<OrganizeConfig> {
    let mut config = match &args.config {
        Some(path) => OrganizeConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => OrganizeConfig::default(),
    };

    if !args.sort.is_empty() {
        config.sort = args
            .sort
            .iter()
            .map(|strategy| SortStrategy::from(strategy.clone()))
            .collect();
    }
    if !args.group_order.is_empty() {
        config.group_order = args.group_order.clone();
    }
    if !args.category_order.is_empty() {
        config.category_order = args.category_order.clone();
    }
    if let Some(default_category) = &args.default_category {
        config.default_category = default_category.clone();
    }
    if args.flat_categories {
        config.categorize_by_group = false;
    }
    if args.keep_entry_point_order {
        config.sort_entry_points = false;
    }

    Ok(config)
}
