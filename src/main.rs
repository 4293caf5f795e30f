use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use ktcheck::config::{self, Overrides, Settings};
use ktcheck::invocation::{self, LaunchSpec};
use ktcheck::logging;
use ktcheck::paths;
use ktcheck::report::{self, Outcome};
use ktcheck::request::{self, InvocationRequest};
use ktcheck::rules::DisabledRules;
use ktcheck::runner::{self, LaunchError};

#[derive(Parser)]
#[command(
    name = "ktcheck",
    version,
    about = "Run ktlint on the Kotlin files you changed"
)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally booleans
struct Cli {
    /// Files to check; anything other than .kt/.kts is ignored
    #[arg(short = 'f', long = "file", num_args = 0.., action = ArgAction::Append)]
    files: Vec<PathBuf>,

    /// Fix violations in place
    #[arg(short = 'F', long, overrides_with = "noformat")]
    format: bool,

    /// Only report violations (default)
    #[arg(long, overrides_with = "format")]
    noformat: bool,

    /// Leave formatting rules to another formatter and skip the format hint
    #[arg(long = "no-verify-format")]
    no_verify_format: bool,

    /// .editorconfig handed to ktlint; pass "" to let ktlint search the tree
    #[arg(long, value_name = "PATH")]
    editorconfig: Option<String>,

    /// Java runtime used to launch ktlint
    #[arg(long, env = "KTCHECK_JAVA", value_name = "CMD")]
    java: Option<String>,

    /// ktlint jar to run
    #[arg(long, env = "KTCHECK_JAR", value_name = "PATH")]
    jar: Option<PathBuf>,

    /// Config file to use instead of the usual lookup
    #[arg(long, env = "KTCHECK_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log resolution details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn cmd_lint(cli: Cli) -> anyhow::Result<Outcome> {
    for skipped in cli.files.iter().filter(|f| !request::is_kotlin_source(f)) {
        tracing::debug!("skipping {}", skipped.display());
    }
    if request::kotlin_sources(&cli.files).is_empty() {
        tracing::debug!("no Kotlin sources given, nothing to do");
        return Ok(Outcome::NoSources);
    }

    let loaded = config::load(cli.config.as_deref(), &config::default_search_paths())?;
    match &loaded.source {
        Some(source) => tracing::debug!("using config {}", source.display()),
        None => tracing::debug!("no config file found, using defaults"),
    }
    let settings = Settings::resolve(
        Overrides {
            java: cli.java,
            jar: cli.jar,
            editorconfig: cli.editorconfig,
        },
        loaded,
    );

    let request = InvocationRequest {
        files: cli.files,
        format: cli.format,
        verify_format: !cli.no_verify_format,
        editorconfig: settings.editorconfig.clone(),
    };
    let sources = request.source_files();

    let rules = DisabledRules::new(request.verify_format, &settings.extra_disabled);
    let args = invocation::linter_args(
        &sources,
        &rules,
        request.editorconfig.as_deref(),
        request.format,
    );
    let spec = LaunchSpec::ktlint(&settings, args);
    tracing::debug!("running {}", spec.display());

    let mut stdout = io::stdout().lock();
    match runner::execute(&spec) {
        Ok(result) => {
            let hint = request
                .verify_format
                .then(|| report::format_hint(&paths::self_command(), &sources));
            Ok(report::write_result(&mut stdout, &result, hint.as_deref())?)
        }
        Err(e @ LaunchError::NotFound { .. }) => {
            tracing::debug!("{e}");
            Ok(report::write_not_found(&mut stdout)?)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let exit_code = match cmd_lint(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("[ktcheck] error: {e:#}");
            2
        }
    };
    std::process::exit(exit_code);
}
