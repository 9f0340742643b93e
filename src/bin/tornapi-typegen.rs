//! Torn API type generator CLI
//!
//! Generates TypeScript declarations from the V1 schema service and,
//! optionally, the V2 OpenAPI document.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tornapi_typegen::{
    combine_artifacts, generate_v1_types, generate_v2_types, load_json_auto, save_document,
    write_artifact, CollectingSink, CommandConverter, DiagnosticSink, DirSource, GenerateError,
    SchemaSource, TracingSink, DEFAULT_OPENAPI_URL, DEFAULT_V1_BASE_URL,
};

#[derive(Parser)]
#[command(name = "tornapi-typegen")]
#[command(about = "Generate TypeScript types for the Torn API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate V1 types only
    V1 {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Fail without writing output if any warning was reported
        #[arg(long)]
        strict: bool,
    },

    /// Generate V1 types, then V2 types through an external OpenAPI converter
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// OpenAPI document: file path or URL
        #[arg(long, default_value = DEFAULT_OPENAPI_URL)]
        openapi: String,

        /// Converter program; reads OpenAPI JSON on stdin, writes TypeScript to stdout.
        /// V2 generation is skipped when absent.
        #[arg(long)]
        converter: Option<String>,

        /// Argument passed to the converter (repeatable)
        #[arg(long = "converter-arg", allow_hyphen_values = true, requires = "converter")]
        converter_args: Vec<String>,

        /// Also save the fetched OpenAPI document here
        #[arg(long, requires = "converter")]
        save_openapi: Option<PathBuf>,

        /// Output file
        #[arg(long, default_value = "dist/index.ts")]
        output: PathBuf,

        /// Fail without writing output if any warning was reported
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Base URL of the V1 schema service
    #[arg(long, default_value = DEFAULT_V1_BASE_URL)]
    base_url: String,

    /// Read the V1 schema from a snapshot directory instead
    /// (sections.json, errors.json, schema/<section>.json)
    #[arg(long, conflicts_with = "base_url")]
    from_dir: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

impl SourceArgs {
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    fn open(&self) -> Result<Box<dyn SchemaSource>, GenerateError> {
        if let Some(dir) = &self.from_dir {
            return Ok(Box::new(DirSource::new(dir)));
        }
        open_remote(&self.base_url, self.timeout())
    }
}

#[cfg(feature = "remote")]
fn open_remote(base_url: &str, timeout: Duration) -> Result<Box<dyn SchemaSource>, GenerateError> {
    Ok(Box::new(tornapi_typegen::HttpSource::with_timeout(
        base_url, timeout,
    )?))
}

#[cfg(not(feature = "remote"))]
fn open_remote(base_url: &str, _timeout: Duration) -> Result<Box<dyn SchemaSource>, GenerateError> {
    Err(GenerateError::RemoteDisabled {
        url: base_url.to_string(),
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::V1 {
            source,
            output,
            strict,
        } => run_v1(&source, output, strict),

        Commands::Generate {
            source,
            openapi,
            converter,
            converter_args,
            save_openapi,
            output,
            strict,
        } => run_generate(GenerateArgs {
            source,
            openapi,
            converter,
            converter_args,
            save_openapi,
            output,
            strict,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run_v1(source: &SourceArgs, output: Option<PathBuf>, strict: bool) -> Result<(), GenerateError> {
    let v1 = generate_checked(source, strict)?;

    match output {
        Some(path) => write_artifact(&path, &v1),
        None => {
            println!("{}", v1);
            Ok(())
        }
    }
}

struct GenerateArgs {
    source: SourceArgs,
    openapi: String,
    converter: Option<String>,
    converter_args: Vec<String>,
    save_openapi: Option<PathBuf>,
    output: PathBuf,
    strict: bool,
}

fn run_generate(args: GenerateArgs) -> Result<(), GenerateError> {
    let GenerateArgs {
        source,
        openapi,
        converter,
        converter_args,
        save_openapi,
        output,
        strict,
    } = args;

    let v1 = generate_checked(&source, strict)?;

    // Nothing is written until both halves have been generated.
    let v2 = match converter {
        Some(program) => {
            let document = load_json_auto(&openapi, source.timeout())?;
            let converter = CommandConverter::new(program).args(converter_args);
            let v2 = generate_v2_types(&document, &openapi, &converter)?;
            Some((document, v2))
        }
        None => {
            tracing::info!("no converter given, skipping V2 types");
            None
        }
    };

    if let (Some(path), Some((document, _))) = (&save_openapi, &v2) {
        save_document(path, document)?;
    }
    let combined = combine_artifacts(&v1, v2.as_ref().map(|(_, text)| text.as_str()));
    write_artifact(&output, &combined)
}

/// Generate V1 types, log collected warnings, and enforce `--strict`.
///
/// In strict mode the warnings are logged as errors since they fail the run.
fn generate_checked(source: &SourceArgs, strict: bool) -> Result<String, GenerateError> {
    let schema_source = source.open()?;
    let sink = CollectingSink::new();
    let v1 = generate_v1_types(schema_source.as_ref(), &sink)?;

    let warnings = sink.warnings();
    for diagnostic in sink.into_diagnostics() {
        if strict {
            TracingSink.report(diagnostic.escalate());
        } else {
            TracingSink.report(diagnostic);
        }
    }

    if strict && warnings > 0 {
        return Err(GenerateError::StrictWarnings { count: warnings });
    }
    Ok(v1)
}
