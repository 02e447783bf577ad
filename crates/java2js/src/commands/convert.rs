//! Convert command - read a Java file, write the JavaScript translation.

use clap::Args;
use java2js_rewrite::{ConfigError, Converter, ConverterConfig};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Convert command arguments
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Java source file
    pub input: PathBuf,

    /// Output file (stdout if not specified)
    pub output: Option<PathBuf>,

    /// Converter config (TOML) selecting which rules run
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Failure at the file boundary. Conversion itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The canonical converter, or one built from the config file at `path`.
pub fn load_converter(path: Option<&Path>) -> Result<Converter, DriverError> {
    match path {
        Some(path) => {
            let config = ConverterConfig::load_file(path)?;
            tracing::debug!(
                config = %path.display(),
                disabled = ?config.rules.disable,
                templates = config.rules.templates,
                "loaded config"
            );
            Ok(Converter::with_config(&config))
        }
        None => Ok(Converter::new()),
    }
}

/// Read `input`, convert it, and return the JavaScript text.
pub fn convert_file(converter: &Converter, input: &Path) -> Result<String, DriverError> {
    if !input.exists() {
        return Err(DriverError::MissingInput(input.to_path_buf()));
    }
    let java = std::fs::read_to_string(input).map_err(|source| DriverError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(converter.convert(&java))
}

/// Convert `input` and write the result to `output`, or stdout when absent.
pub fn convert_to(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), DriverError> {
    let js = convert_file(converter, input)?;
    match output {
        Some(path) => {
            std::fs::write(path, &js).map_err(|source| DriverError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(input = %input.display(), output = %path.display(), "converted");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(js.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| DriverError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }
    Ok(())
}

/// Run the convert command
pub fn run(args: ConvertArgs) -> i32 {
    let result = load_converter(args.config.as_deref())
        .and_then(|converter| convert_to(&converter, &args.input, args.output.as_deref()));
    match result {
        Ok(()) => {
            if let Some(path) = &args.output {
                eprintln!("Converted {} -> {}", args.input.display(), path.display());
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}
