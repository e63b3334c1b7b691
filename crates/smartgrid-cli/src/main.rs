//! smartgrid CLI - generate dashboard layouts from the shell.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

use clap::{Parser, Subcommand, ValueEnum};
use smartgrid_core::{
    IdStrategy, OverflowPolicy, SmartgridConfig, WidgetCatalog, WidgetMetadata, WidgetType,
};
use smartgrid_layout::{id_generator, Layout, LayoutGenerator};
use std::borrow::Cow;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smartgrid")]
#[command(about = "Automatic 12-column dashboard layout engine")]
#[command(version)]
struct Cli {
    /// Configuration file (default: XDG config path)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Custom widget catalog (YAML)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a layout for the given widget types
    Layout {
        /// Widget types, e.g. market_indices news
        #[arg(required = true)]
        widgets: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Row capacity of the grid
        #[arg(long)]
        max_rows: Option<u16>,

        /// Overflow policy (drop, grow, reject)
        #[arg(long)]
        overflow: Option<OverflowPolicy>,

        /// Identifier strategy (sequential, random)
        #[arg(long)]
        ids: Option<IdStrategy>,
    },

    /// List catalog widget types
    Widgets {
        /// Show display groups instead of metadata
        #[arg(long)]
        groups: bool,
    },

    /// Show the resolved size of a widget type
    Size {
        /// Widget type
        widget: String,
    },

    /// Print the default configuration file
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
    Text,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if matches!(cli.command, Commands::Config) {
        print!("{}", SmartgridConfig::default_yaml());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = SmartgridConfig::load(cli.config.as_deref())?;
    if cli.catalog.is_some() {
        config.catalog = cli.catalog;
    }
    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::Layout {
            widgets,
            format,
            max_rows,
            overflow,
            ids,
        } => {
            if let Some(max_rows) = max_rows {
                config.grid.max_rows = max_rows;
            }
            if let Some(overflow) = overflow {
                config.grid.overflow = overflow;
            }
            if let Some(ids) = ids {
                config.ids = ids;
            }
            config.validate()?;
            layout(&catalog, &config, &widgets, format)
        }
        Commands::Widgets { groups } => {
            if groups {
                print_groups(&catalog);
            } else {
                print_widgets(&catalog);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Size { widget } => {
            let widget = WidgetType::from(widget);
            let known = catalog.metadata(&widget).is_some();
            println!(
                "{}: {} (max width {}, expandable: {}){}",
                widget,
                catalog.smart_size(&widget),
                catalog.max_width(&widget),
                catalog.can_expand(&widget),
                if known { "" } else { " [not in catalog, using defaults]" }
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => Ok(ExitCode::SUCCESS),
    }
}

fn load_catalog(
    config: &SmartgridConfig,
) -> Result<Cow<'static, WidgetCatalog>, Box<dyn std::error::Error>> {
    match &config.catalog {
        Some(path) => {
            tracing::info!(path = %path.display(), "using custom catalog");
            Ok(Cow::Owned(WidgetCatalog::from_file(path)?))
        }
        None => Ok(Cow::Borrowed(WidgetCatalog::builtin())),
    }
}

fn layout(
    catalog: &WidgetCatalog,
    config: &SmartgridConfig,
    widgets: &[String],
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let selected: Vec<WidgetType> = widgets
        .iter()
        .map(|w| WidgetType::from(w.as_str()))
        .collect();
    for widget in selected.iter().filter(|w| catalog.metadata(w).is_none()) {
        tracing::warn!(widget = %widget, "unknown widget type, using default metadata");
    }

    let generator = LayoutGenerator::new(catalog).with_grid(config.grid);
    let mut ids = id_generator(config.ids);
    let result = generator.generate(&selected, ids.as_mut())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.widgets)?),
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&result.widgets)?),
        OutputFormat::Text => print_text(&result),
    }

    for widget in &result.omitted {
        eprintln!("omitted: {} (no room within {} rows)", widget, config.grid.max_rows);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_text(layout: &Layout) {
    print!("{}", layout.render_ascii());
    println!();
    for (i, widget) in layout.widgets.iter().enumerate() {
        println!(
            "{}  {:<20} {:<24} {}",
            Layout::glyph(i),
            widget.widget_type,
            widget.id,
            widget.position
        );
    }
}

fn print_widgets(catalog: &WidgetCatalog) {
    println!(
        "{:<20} {:<8} {:<8} {:<8} {:<8} {}",
        "TYPE", "PRIORITY", "CATEGORY", "SIZE", "MAX", "EXPAND"
    );
    for entry in catalog.entries() {
        let WidgetMetadata {
            priority,
            category,
            default_size,
            max_size,
            expandable,
        } = entry.metadata;
        let max = max_size.map_or_else(|| "-".to_string(), |m| m.to_string());
        println!(
            "{:<20} {:<8} {:<8} {:<8} {:<8} {}",
            entry.widget_type,
            format!("{:?}", priority).to_lowercase(),
            format!("{:?}", category).to_lowercase(),
            default_size.to_string(),
            max,
            if expandable { "yes" } else { "no" }
        );
    }
}

fn print_groups(catalog: &WidgetCatalog) {
    for group in catalog.display_groups() {
        let members: Vec<&str> = group.widgets.iter().map(WidgetType::as_str).collect();
        println!("{} ({}): {}", group.label, group.id, members.join(", "));
    }
}
