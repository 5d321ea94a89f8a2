//! CLI for converting Values Compass markdown into a test spec
//!
//! Usage:
//!   values-compass convert --test-id test-values-compass --slug values-compass \
//!       --category values --version 1 \
//!       --en content/en.md --es content/es.md --ptbr content/pt-BR.md \
//!       --out specs/test-values-compass/spec.json
//!
//!   values-compass validate specs/test-values-compass/spec.json
//!
//! Every flag of `convert` can also come from a `VALUES_COMPASS_*` variable.
//! Content errors are printed one per line as `ERROR: <message>` on stderr and
//! the process exits with status 1.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use values_compass_spec::{
    convert, validate_spec, write_spec, ConvertConfig, ConvertError, ErrorLog, Localized, SpecMeta,
};

#[derive(Parser, Debug)]
#[command(name = "values-compass")]
#[command(about = "Convert Values Compass markdown sources into a test spec")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the three locale files and write the spec JSON
    Convert(ConvertArgs),
    /// Check an existing spec JSON file
    Validate {
        /// Spec file to check
        #[arg(value_name = "PATH")]
        spec: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Test id in the form test-<slug>
    #[arg(long, env = "VALUES_COMPASS_TEST_ID")]
    test_id: String,

    /// URL-safe slug
    #[arg(long, env = "VALUES_COMPASS_SLUG")]
    slug: String,

    /// Category label for the test
    #[arg(long, env = "VALUES_COMPASS_CATEGORY")]
    category: String,

    /// Spec version (>= 1)
    #[arg(long = "version", env = "VALUES_COMPASS_VERSION", allow_negative_numbers = true)]
    spec_version: i64,

    /// English source markdown
    #[arg(long, env = "VALUES_COMPASS_EN", value_name = "PATH")]
    en: PathBuf,

    /// Spanish source markdown
    #[arg(long, env = "VALUES_COMPASS_ES", value_name = "PATH")]
    es: PathBuf,

    /// Brazilian Portuguese source markdown
    #[arg(long, env = "VALUES_COMPASS_PTBR", value_name = "PATH")]
    ptbr: PathBuf,

    /// Output spec path
    #[arg(long, env = "VALUES_COMPASS_OUT", value_name = "PATH")]
    out: PathBuf,
}

impl ConvertArgs {
    fn into_config(self) -> ConvertConfig {
        ConvertConfig {
            meta: SpecMeta::new(&self.test_id, &self.slug, &self.category, self.spec_version),
            sources: Localized {
                en: self.en,
                es: self.es,
                pt_br: self.ptbr,
            },
            output: self.out,
        }
    }
}

fn print_errors(messages: &[String]) {
    for message in messages {
        eprintln!("ERROR: {}", message);
    }
}

fn run_convert(args: ConvertArgs) -> anyhow::Result<ExitCode> {
    let config = args.into_config();
    match convert(&config) {
        Ok(spec) => {
            write_spec(&spec, &config.output)?;
            println!("Wrote {}", config.output.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(ConvertError::Invalid(messages)) => {
            print_errors(&messages);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn run_validate(path: &Path) -> anyhow::Result<ExitCode> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

    let mut errors = ErrorLog::new();
    let info = validate_spec(&data, &path.display().to_string(), &mut errors);
    if !errors.is_empty() {
        print_errors(errors.messages());
        return Ok(ExitCode::FAILURE);
    }

    tracing::info!("Locales: {:?}", info.locales);
    println!(
        "{} is valid ({})",
        path.display(),
        info.test_id.as_deref().unwrap_or("unknown test")
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "values_compass_spec=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert(args) => run_convert(args),
        Command::Validate { spec } => run_validate(&spec),
    }
}
