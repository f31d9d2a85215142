use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use schema_simplify_core::{relax, simplify, simplify_with, Diagnostic, RelaxOptions, Schema};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "schema-simplify")]
#[command(about = "Simplify schema trees into an LLM-compatible structured output subset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a schema tree into the restricted vocabulary
    Simplify {
        /// Input schema tree file ("-" reads stdin)
        input: PathBuf,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write lossy-conversion diagnostics to this file instead of the log
        #[arg(long)]
        diagnostics: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Make every top-level field of an object schema nullable with a null default
    Relax {
        /// Input object schema file ("-" reads stdin)
        input: PathBuf,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field to leave unchanged (repeatable)
        #[arg(long = "except", value_name = "FIELD")]
        except: Vec<String>,

        /// JSON file of relax options, e.g. {"exceptions": {"id": true}}
        #[arg(long)]
        exceptions: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Simplify {
            input,
            output,
            diagnostics,
            format,
        } => {
            let schema = read_schema(&input)?;

            let result = match diagnostics {
                Some(path) => {
                    let mut collected: Vec<Diagnostic> = Vec::new();
                    let result = simplify_with(&schema, &mut collected);
                    write_json(&collected, Some(&path), format)?;
                    result
                }
                None => simplify(&schema),
            };

            write_json(&result, output.as_ref(), format)?;
        }
        Commands::Relax {
            input,
            output,
            except,
            exceptions,
            format,
        } => {
            let schema = read_schema(&input)?;

            let mut options = match exceptions {
                Some(path) => {
                    let reader = open_input(&path)?;
                    serde_json::from_reader::<_, RelaxOptions>(reader).with_context(|| {
                        format!("Failed to parse relax options from: {}", path.display())
                    })?
                }
                None => RelaxOptions::new(),
            };
            for field in except {
                options = options.except(field);
            }

            let result = relax(&schema, &options)
                .map_err(|e| anyhow::Error::from(e).context("Relax failed"))?;

            write_json(&result, output.as_ref(), format)?;
        }
    }

    Ok(())
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn read_schema(path: &Path) -> Result<Schema> {
    let reader = open_input(path)?;
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse schema from: {}", path.display()))
}

fn write_json<T: serde::Serialize>(
    val: &T,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    // Ensure trailing newline
    writeln!(writer).context("Failed to write trailing newline")?;
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
