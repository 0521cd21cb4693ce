//! Charm-style CLI prompts using cliclack

use crate::config::{
    file as config_file, BlueprintConfig, Feature, FeatureFlags, Platform, ProjectTemplate,
    StateManagement, DEFAULT_API_BASE_URL,
};
use crate::generator::{self, Generation};
use crate::runtime;
use crate::{naming, writer};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const FLUTTER_INSTALL_URL: &str = "https://docs.flutter.dev/get-started/install";
const FALLBACK_APP_NAME: &str = "my_app";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// App name (Dart package name)
    pub name: Option<String>,

    /// Target platforms
    pub platforms: Option<Vec<String>>,

    /// State management style
    pub state: Option<String>,

    /// Project template
    pub template: Option<String>,

    /// Enabled optional features; anything not listed is off
    pub features: Option<Vec<String>>,

    /// Backend base URL used by the API client
    pub api_url: Option<String>,

    /// Existing blueprint.yaml to start from
    pub config: Option<PathBuf>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Write a zip archive instead of a directory
    pub zip: Option<PathBuf>,

    /// List what would be generated without writing anything
    pub dry_run: bool,

    /// Skip the Flutter and Dart SDK check
    pub skip_sdk_check: bool,

    /// Write the files that generated even if some failed
    pub keep_going: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// CLI arguments for the add-feature command
#[derive(Debug, Clone, Default)]
pub struct AddFeatureArgs {
    /// Feature module name (snake_case)
    pub name: String,

    /// Project root containing blueprint.yaml
    pub directory: Option<PathBuf>,

    /// Overwrite files that already exist
    pub force: bool,
}

/// Run the create flow with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("flutter-blueprint")?;

    // Step 1: Resolve configuration (file, then flags, then prompts)
    let config = resolve_config(&args)?;

    // Step 2: Check SDKs (advisory only)
    if args.skip_sdk_check {
        cliclack::log::info("Skipping SDK check")?;
    } else {
        check_sdks(&args)?;
    }

    // Step 3: Generate
    let spinner = cliclack::spinner();
    spinner.start("Generating project...");
    let generation = generator::generate(&config);
    spinner.stop(format!(
        "Generated {} files ({} for {})",
        generation.files.len(),
        config.shape().name(),
        config.state_management().display_name()
    ));
    report_problems(&generation, args.keep_going)?;

    // Step 4: Output
    if args.dry_run {
        print_file_list(&generation);
        cliclack::outro("Dry run: nothing was written")?;
        return Ok(());
    }

    if let Some(zip_path) = &args.zip {
        let bytes = writer::write_zip(&generation.files, config.app_name(), zip_path).await?;
        cliclack::log::success(format!(
            "Wrote {} ({} KiB)",
            zip_path.display(),
            bytes.div_ceil(1024)
        ))?;
        cliclack::outro("Unzip the archive and run flutter pub get inside it.")?;
        return Ok(());
    }

    let project_dir = select_directory(&args, &config)?;
    confirm_overwrites(&generation, &project_dir, args.yes)?;

    let spinner = cliclack::spinner();
    spinner.start("Writing files...");
    let written = writer::write_files(&generation.files, &project_dir).await?;
    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        project_dir.display()
    ));

    // Step 5: Show next steps
    print_next_steps(&config, &project_dir)?;

    Ok(())
}

/// Scaffold one feature module inside an existing project
pub async fn add_feature(args: AddFeatureArgs) -> Result<()> {
    cliclack::intro("flutter-blueprint add-feature")?;

    let project_dir = args.directory.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = config_file::load_from_project(&project_dir).with_context(|| {
        format!(
            "No usable {} in {}; run this inside a generated project",
            config_file::CONFIG_FILE_NAME,
            project_dir.display()
        )
    })?;
    cliclack::log::info(format!(
        "Project {} uses {}",
        config.app_name(),
        config.state_management().display_name()
    ))?;

    let generation = generator::generate_feature(&config, &args.name)?;
    report_problems(&generation, false)?;

    let conflicts = writer::conflicting_files(&generation.files, &project_dir)?;
    if !conflicts.is_empty() && !args.force {
        for path in &conflicts {
            cliclack::log::warning(format!("{} already exists", path))?;
        }
        bail!(
            "Feature '{}' would overwrite {} file(s). Re-run with --force to replace them.",
            args.name,
            conflicts.len()
        );
    }

    let written = writer::write_files(&generation.files, &project_dir).await?;
    for path in &written {
        cliclack::log::step(path)?;
    }

    let route = naming::camel_case(&args.name);
    cliclack::log::info(format!(
        "Register the page in lib/core/routing/app_router.dart (AppRouter.{}) to navigate to it",
        route
    ))?;
    cliclack::outro(format!("Added feature {}", args.name.green()))?;
    Ok(())
}

fn resolve_config(args: &CreateArgs) -> Result<BlueprintConfig> {
    let base = match &args.config {
        Some(path) => {
            let config = config_file::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            cliclack::log::info(format!("Using configuration from {}", path.display()))?;
            Some(config)
        }
        None => None,
    };
    let interactive = base.is_none() && !args.yes;

    let name = match (&args.name, &base) {
        (Some(name), _) => name.clone(),
        (None, Some(base)) => base.app_name().to_string(),
        (None, None) if interactive => prompt_name()?,
        (None, None) => FALLBACK_APP_NAME.to_string(),
    };

    let platforms = match (&args.platforms, &base) {
        (Some(names), _) => parse_all::<Platform>(names)?,
        (None, Some(base)) => base.platforms().iter().copied().collect(),
        (None, None) if interactive => prompt_platforms()?,
        (None, None) => vec![Platform::Mobile],
    };

    let state = match (&args.state, &base) {
        (Some(name), _) => StateManagement::from_str(name)?,
        (None, Some(base)) => base.state_management(),
        (None, None) if interactive => prompt_state()?,
        (None, None) => StateManagement::default(),
    };

    let template = match (&args.template, &base) {
        (Some(name), _) => ProjectTemplate::from_str(name)?,
        (None, Some(base)) => base.template(),
        (None, None) if interactive => prompt_template()?,
        (None, None) => ProjectTemplate::default(),
    };

    let features = match (&args.features, &base) {
        (Some(names), _) => FeatureFlags::from_names(names)?,
        (None, Some(base)) => *base.features(),
        (None, None) if interactive => prompt_features()?,
        (None, None) => FeatureFlags::default(),
    };

    let api_url = match (&args.api_url, &base) {
        (Some(url), _) => url.clone(),
        (None, Some(base)) => base.api_base_url().to_string(),
        (None, None) if interactive && features.api => prompt_api_url()?,
        (None, None) => DEFAULT_API_BASE_URL.to_string(),
    };

    let config = BlueprintConfig::builder(name)
        .platforms(platforms)
        .state_management(state)
        .template(template)
        .features(features)
        .api_base_url(api_url)
        .build()?;

    let platform_names: Vec<&str> = config.platforms().iter().map(|p| p.display_name()).collect();
    cliclack::log::success(format!(
        "{}: {} with {}",
        config.app_title(),
        platform_names.join(", "),
        config.state_management().display_name()
    ))?;
    Ok(config)
}

fn parse_all<T>(names: &[String]) -> Result<Vec<T>>
where
    T: FromStr + PartialEq,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut values = Vec::new();
    for name in names {
        let value = T::from_str(name)?;
        if !values.contains(&value) {
            values.push(value);
        }
    }
    Ok(values)
}

fn prompt_name() -> Result<String> {
    let name: String = cliclack::input("App name")
        .placeholder(FALLBACK_APP_NAME)
        .default_input(FALLBACK_APP_NAME)
        .validate(|input: &String| naming::check_snake_identifier(input))
        .interact()?;
    Ok(name)
}

fn prompt_platforms() -> Result<Vec<Platform>> {
    let mut multi = cliclack::multiselect("Target platforms");
    for platform in Platform::ALL {
        multi = multi.item(platform, platform.display_name(), "");
    }
    let selected: Vec<Platform> = multi
        .initial_values(vec![Platform::Mobile])
        .required(true)
        .interact()?;
    Ok(selected)
}

fn prompt_state() -> Result<StateManagement> {
    let mut select = cliclack::select("State management");
    for style in StateManagement::ALL {
        select = select.item(style, style.display_name(), "");
    }
    let style: StateManagement = select
        .initial_value(StateManagement::default())
        .interact()?;
    Ok(style)
}

fn prompt_template() -> Result<ProjectTemplate> {
    let mut select = cliclack::select("Project template");
    for template in ProjectTemplate::ALL {
        select = select.item(template, template.display_name(), template.description());
    }
    let template: ProjectTemplate = select.initial_value(ProjectTemplate::Blank).interact()?;
    Ok(template)
}

fn prompt_features() -> Result<FeatureFlags> {
    let defaults = FeatureFlags::default();
    let mut multi = cliclack::multiselect("Optional features");
    for feature in Feature::ALL {
        multi = multi.item(feature, feature.display_name(), "");
    }
    let selected: Vec<Feature> = multi
        .initial_values(defaults.enabled())
        .required(false)
        .interact()?;

    let mut flags = FeatureFlags::none();
    for feature in selected {
        flags.set(feature, true);
    }
    Ok(flags)
}

fn prompt_api_url() -> Result<String> {
    let url: String = cliclack::input("API base URL")
        .placeholder(DEFAULT_API_BASE_URL)
        .default_input(DEFAULT_API_BASE_URL)
        .validate(|input: &String| match url::Url::parse(input) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
            Ok(_) => Err("Use an http or https URL"),
            Err(_) => Err("Not a valid URL"),
        })
        .interact()?;
    Ok(url)
}

fn check_sdks(args: &CreateArgs) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking Flutter SDK...");

    let sdks = runtime::check_sdks();
    let summary: Vec<String> = sdks
        .iter()
        .map(|sdk| {
            if sdk.available {
                format!("{} ({})", sdk.name, sdk.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", sdk.name)
            }
        })
        .collect();
    spinner.stop(format!("Detected SDKs: {}", summary.join(", ")));

    for advisory in runtime::sdk_advisories(&sdks) {
        cliclack::log::warning(advisory.lines().next().unwrap_or(&advisory))?;
    }

    let flutter_missing = sdks.iter().any(|sdk| sdk.name == "Flutter" && !sdk.available);
    if flutter_missing && !args.yes && !args.dry_run {
        let open_docs: bool = cliclack::confirm("Open the Flutter install guide in your browser?")
            .initial_value(false)
            .interact()?;
        if open_docs {
            open::that(FLUTTER_INSTALL_URL)?;
        }
        cliclack::log::info("Generating anyway; install Flutter before running the project")?;
    }

    Ok(())
}

fn report_problems(generation: &Generation, keep_going: bool) -> Result<()> {
    for path in &generation.collisions {
        cliclack::log::warning(format!(
            "{} was generated more than once; the last version was kept",
            path
        ))?;
    }

    if generation.failures.is_empty() {
        return Ok(());
    }
    for failure in &generation.failures {
        cliclack::log::error(failure.to_string())?;
    }
    if !keep_going {
        bail!(
            "{} file(s) failed to generate. Re-run with --keep-going to write the rest.",
            generation.failures.len()
        );
    }
    cliclack::log::warning("Continuing without the failed files (--keep-going)")?;
    Ok(())
}

fn print_file_list(generation: &Generation) {
    println!();
    for path in generation.files.keys() {
        println!("  {}", path);
    }
    println!();

    let deps: Vec<String> = generation
        .dependencies
        .iter()
        .map(|(name, version)| format!("{} {}", name, version.dimmed()))
        .collect();
    println!("  {} {}", "dependencies:".bold(), deps.join(", "));
    if !generation.required_features.is_empty() {
        println!(
            "  {} {}",
            "feature modules:".bold(),
            generation.required_features.join(", ")
        );
    }
    println!();
}

fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

fn select_directory(args: &CreateArgs, config: &BlueprintConfig) -> Result<PathBuf> {
    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = resolve_path(dir);
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        resolve_path(Path::new(config.app_name()))
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(config.app_name())
            .default_input(config.app_name())
            .interact()?;
        resolve_path(Path::new(&input))
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    Ok(path)
}

fn confirm_overwrites(generation: &Generation, project_dir: &Path, yes: bool) -> Result<()> {
    if writer::is_empty_dir(project_dir)? {
        return Ok(());
    }

    let conflicts = writer::conflicting_files(&generation.files, project_dir)?;
    if conflicts.is_empty() {
        cliclack::log::warning("Directory is not empty; existing files are kept")?;
        return Ok(());
    }

    cliclack::log::warning(format!(
        "{} existing file(s) would be overwritten",
        conflicts.len()
    ))?;

    // Auto-confirm with --yes flag
    let confirm = if yes {
        true
    } else {
        cliclack::confirm("Overwrite them?")
            .initial_value(false)
            .interact()?
    };

    if !confirm {
        bail!("Setup cancelled.");
    }
    Ok(())
}

fn next_steps(config: &BlueprintConfig, project_dir: &Path) -> Vec<String> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }
    if config.has_platform(Platform::Desktop) {
        steps.push("flutter create --platforms=windows,macos,linux .".to_string());
    }
    steps.push("flutter pub get".to_string());
    if config.features().localization {
        steps.push("flutter gen-l10n".to_string());
    }
    if config.features().env {
        steps.push("cp .env.example .env".to_string());
    }
    let run = match config.platforms().iter().next() {
        Some(Platform::Web) if config.platforms().len() == 1 => "flutter run -d chrome",
        _ => "flutter run",
    };
    steps.push(run.to_string());
    steps
}

fn print_next_steps(config: &BlueprintConfig, project_dir: &Path) -> Result<()> {
    let steps = next_steps(config, project_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_dedupes() {
        let names = vec!["mobile".to_string(), "android".to_string(), "web".to_string()];
        let platforms: Vec<Platform> = parse_all(&names).unwrap();
        assert_eq!(platforms, vec![Platform::Mobile, Platform::Web]);
        assert!(parse_all::<Platform>(&["tv".to_string()]).is_err());
    }

    #[test]
    fn test_next_steps_follow_config() {
        let config = BlueprintConfig::builder("shop")
            .platforms([Platform::Web])
            .features(FeatureFlags::all())
            .build()
            .unwrap();
        let steps = next_steps(&config, Path::new("/tmp/definitely/not/cwd/shop"));
        assert_eq!(steps[0], "cd /tmp/definitely/not/cwd/shop");
        assert!(steps.contains(&"flutter gen-l10n".to_string()));
        assert!(steps.contains(&"cp .env.example .env".to_string()));
        assert_eq!(steps.last().map(String::as_str), Some("flutter run -d chrome"));
    }

    #[test]
    fn test_flags_resolve_without_prompts() {
        let args = CreateArgs {
            name: Some("shop".to_string()),
            platforms: Some(vec!["mobile".to_string(), "desktop".to_string()]),
            state: Some("bloc".to_string()),
            template: Some("food_delivery".to_string()),
            features: Some(vec!["api".to_string()]),
            yes: true,
            ..CreateArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.state_management(), StateManagement::Bloc);
        assert_eq!(config.template(), ProjectTemplate::FoodDelivery);
        assert!(config.features().api);
        assert!(!config.features().tests);
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }
}
