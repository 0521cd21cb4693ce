//! Flutter Blueprint CLI - Starter project scaffolding for Flutter

use anyhow::Result;
use blueprint_core::bundles::library;
use blueprint_core::tui::{AddFeatureArgs, CreateArgs};
use blueprint_core::ProjectTemplate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flutter-blueprint")]
#[command(about = "CLI for scaffolding Flutter starter projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Flutter project
    Create(CliCreateArgs),
    /// Add a feature module to an existing generated project
    AddFeature(CliAddFeatureArgs),
    /// List the available project templates
    Templates,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// App name (lowercase Dart package name, e.g. my_shop)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Target platforms (comma-separated: mobile,web,desktop)
    #[arg(short, long, value_delimiter = ',')]
    pub platforms: Option<Vec<String>>,

    /// State management (provider, riverpod, bloc)
    #[arg(short, long)]
    pub state: Option<String>,

    /// Project template (see `flutter-blueprint templates`)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Optional features to enable (comma-separated: env,api,tests,l10n,theme)
    #[arg(short, long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Backend base URL for the generated API client
    #[arg(long = "api-url")]
    pub api_url: Option<String>,

    /// Start from an existing blueprint.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project directory to create
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Write a zip archive to this path instead of a directory
    #[arg(long)]
    pub zip: Option<PathBuf>,

    /// List the files that would be generated without writing them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the Flutter and Dart SDK check
    #[arg(long = "skip-sdk-check")]
    pub skip_sdk_check: bool,

    /// Write the remaining files even if some templates fail
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            platforms: args.platforms,
            state: args.state,
            template: args.template,
            features: args.features,
            api_url: args.api_url,
            config: args.config,
            directory: args.directory,
            zip: args.zip,
            dry_run: args.dry_run,
            skip_sdk_check: args.skip_sdk_check,
            keep_going: args.keep_going,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliAddFeatureArgs {
    /// Feature module name (snake_case)
    pub name: String,

    /// Project root containing blueprint.yaml
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,
}

impl From<CliAddFeatureArgs> for AddFeatureArgs {
    fn from(args: CliAddFeatureArgs) -> Self {
        AddFeatureArgs {
            name: args.name,
            directory: args.directory,
            force: args.force,
        }
    }
}

fn print_templates() {
    println!();
    for template in ProjectTemplate::ALL {
        println!(
            "  {}{}",
            format!("{:<18}", template.name()).bold(),
            template.description()
        );
        let features = library::required_features(template);
        if !features.is_empty() {
            println!("  {:<18}{}", "", features.join(", ").dimmed());
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Create(create_args)) => blueprint_core::run(create_args.into()).await,
        Some(Command::AddFeature(feature_args)) => {
            blueprint_core::add_feature(feature_args.into()).await
        }
        Some(Command::Templates) => {
            print_templates();
            Ok(())
        }
        // No subcommand provided, default to create behavior (interactive mode)
        None => blueprint_core::run(CreateArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
