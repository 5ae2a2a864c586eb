use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use expo_mocks_gen::{load_modules, CheckStatus, MockGenerator, ModuleDefinition};
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

mod config;
mod report;

use config::MocksConfig;

/// Environment variable holding a tracing filter, e.g. `EXPO_MOCKS_LOG=debug`.
const LOG_ENV: &str = "EXPO_MOCKS_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "expo-mocks",
    version,
    about = "Generate TypeScript mocks for native modules"
)]
struct Cli {
    /// Module schema JSON files produced by the schema exporter
    #[arg(required = true, value_name = "SCHEMA")]
    schemas: Vec<PathBuf>,

    /// Output directory (default: [output] dir from expo-mocks.toml, else ./mocks)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (default: ./expo-mocks.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail if any mock is missing or out of date, without writing files
    #[arg(long, conflicts_with = "print")]
    check: bool,

    /// Write generated sources to stdout instead of files
    #[arg(long)]
    print: bool,

    /// Indent size in spaces
    #[arg(long)]
    indent_size: Option<usize>,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose debug logging (or set EXPO_MOCKS_LOG=debug)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            let mut stderr = StandardStream::stderr(color_choice(atty::Stream::Stderr));
            // A failed fallback write has nowhere left to go.
            let _ = report::write_error_or_fallback(&mut stderr, &mut std::io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn color_choice(stream: atty::Stream) -> ColorChoice {
    if atty::is(stream) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => MocksConfig::load_from_path(path)?,
        None => MocksConfig::load_or_default()?,
    };

    let mut format = config.format.to_format_config();
    if let Some(size) = cli.indent_size {
        format = format.with_indent_size(size);
    }

    // Relative output directories resolve against the working directory here and nowhere else.
    let output_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(config.output.dir()));
    let generator = MockGenerator::new(output_dir)
        .with_format(format)
        .with_extension(config.output.extension());

    let modules = load_all(&cli.schemas)?;
    tracing::debug!(
        modules = modules.len(),
        output = %generator.output_dir().display(),
        "loaded module definitions"
    );

    if cli.print {
        print_sources(&generator, &modules)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut stdout = StandardStream::stdout(color_choice(atty::Stream::Stdout));

    if cli.check {
        let statuses = generator.check_all(&modules)?;
        let outdated = if cli.quiet {
            statuses
                .iter()
                .filter(|(_, status)| *status != CheckStatus::UpToDate)
                .count()
        } else {
            report::write_check(&mut stdout, &statuses)?
        };
        return Ok(if outdated == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let written = generator.generate_all(&modules)?;
    if !cli.quiet {
        report::write_generated(&mut stdout, &written)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Load every schema file in argument order.
fn load_all(paths: &[PathBuf]) -> anyhow::Result<Vec<ModuleDefinition>> {
    let mut modules = Vec::new();
    for path in paths {
        let loaded = load_modules(path)?;
        tracing::debug!(path = %path.display(), modules = loaded.len(), "loaded schema");
        modules.extend(loaded);
    }
    Ok(modules)
}

fn print_sources(generator: &MockGenerator, modules: &[ModuleDefinition]) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (i, module) in modules.iter().enumerate() {
        let source = generator.render(module)?;
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "// {}", generator.output_path(module).display())?;
        write!(out, "{source}")?;
    }
    out.flush().context("failed to write to stdout")
}
