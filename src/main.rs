use alt_vulndb::adapters::outbound::console::StderrProgressReporter;
use alt_vulndb::adapters::outbound::filesystem::FileSystemFeedReader;
use alt_vulndb::adapters::outbound::storage::{InMemoryAdvisoryStore, JsonFileAdvisoryStore};
use alt_vulndb::application::dto::{LookupRequest, OutputFormat, UpdateRequest};
use alt_vulndb::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use alt_vulndb::application::use_cases::{LookupAdvisoriesUseCase, UpdateAdvisoriesUseCase};
use alt_vulndb::cli::{Args, Command, LookupArgs, UpdateArgs};
use alt_vulndb::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use alt_vulndb::ports::outbound::{AdvisoryStore, ProgressReporter};
use alt_vulndb::shared::error::{ExitCode, VulnDbError};
use alt_vulndb::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_DB_PATH: &str = "alt-vulndb.json";

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();

    match args.command {
        Command::Update(update) => {
            let config = load_config(update.config.as_deref(), &progress_reporter)?;
            run_update(resolve_update(update, config), progress_reporter)
        }
        Command::Lookup(lookup) => {
            let config = load_config(lookup.config.as_deref(), &progress_reporter)?;
            run_lookup(resolve_lookup(lookup, config), progress_reporter)
        }
    }
}

/// Update settings after applying CLI > config > default precedence
#[derive(Debug, PartialEq)]
struct UpdateSettings {
    feed_dir: PathBuf,
    db_path: PathBuf,
    dry_run: bool,
}

/// Lookup settings after applying CLI > config > default precedence
#[derive(Debug, PartialEq)]
struct LookupSettings {
    package: String,
    platform: String,
    format: OutputFormat,
    output: Option<PathBuf>,
    db_path: PathBuf,
}

fn load_config(explicit: Option<&Path>, reporter: &impl ProgressReporter) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => {
            reporter.report(&format!("📄 Using config file: {}", path.display()));
            load_config_from_path(path)?
        }
        None => match discover_config(Path::new("."))? {
            Some(config) => {
                reporter.report(&format!("📄 Auto-discovered config file: {}", CONFIG_FILENAME));
                config
            }
            None => ConfigFile::default(),
        },
    };

    for key in config.unknown_field_names() {
        reporter.report_error(&format!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        ));
    }

    Ok(config)
}

fn resolve_update(args: UpdateArgs, config: ConfigFile) -> UpdateSettings {
    UpdateSettings {
        feed_dir: args
            .feed_dir
            .or(config.feed_dir)
            .unwrap_or_else(|| PathBuf::from(".")),
        db_path: args
            .db_path
            .or(config.db_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
        dry_run: args.dry_run || config.dry_run.unwrap_or(false),
    }
}

fn resolve_lookup(args: LookupArgs, config: ConfigFile) -> LookupSettings {
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();

    LookupSettings {
        package: args.package,
        platform: args.platform,
        format,
        output: args.output,
        db_path: args
            .db_path
            .or(config.db_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
    }
}

fn run_update(settings: UpdateSettings, progress_reporter: StderrProgressReporter) -> Result<()> {
    // A dry run never opens the database file
    if settings.dry_run {
        return execute_update(InMemoryAdvisoryStore::new(), settings, progress_reporter);
    }
    let store = JsonFileAdvisoryStore::open(&settings.db_path)?;
    execute_update(store, settings, progress_reporter)
}

fn execute_update<S: AdvisoryStore>(
    store: S,
    settings: UpdateSettings,
    progress_reporter: StderrProgressReporter,
) -> Result<()> {
    let use_case =
        UpdateAdvisoriesUseCase::new(FileSystemFeedReader::new(), store, progress_reporter);

    use_case.execute(UpdateRequest::new(settings.feed_dir, settings.dry_run))?;
    Ok(())
}

fn run_lookup(settings: LookupSettings, progress_reporter: StderrProgressReporter) -> Result<()> {
    if !settings.db_path.exists() {
        return Err(VulnDbError::Validation {
            message: format!(
                "Database not found: {}\n\n💡 Hint: Run `alt-vulndb update` first.",
                settings.db_path.display()
            ),
        }
        .into());
    }

    let request = LookupRequest::new(settings.package, settings.platform)?;
    let store = JsonFileAdvisoryStore::open(&settings.db_path)?;
    let response = LookupAdvisoriesUseCase::new(store).execute(request)?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let output = FormatterFactory::create(settings.format).format(&response)?;

    PresenterFactory::create(PresenterType::from_output(settings.output)).present(&output)?;
    Ok(())
}
