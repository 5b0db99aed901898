mod convert;
mod info;
mod params;
mod schema;
mod validate;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use tr069_model::InternetGatewayDevice;

#[derive(Parser)]
#[command(
    name = "tr069",
    version,
    about = "Convert and validate TR-069 InternetGatewayDevice documents"
)]
struct Cli {
    /// Default log filter (error, warn, info, debug, trace); RUST_LOG overrides it
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Shorthand for --log-level debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a document between XML, YAML and JSON
    Convert {
        /// Input file (.xml, .yml/.yaml, .json)
        input: PathBuf,

        /// Output file (.xml, .yml/.yaml, .json)
        #[arg(short, long)]
        output: PathBuf,

        /// Parse and validate without writing output
        #[arg(long)]
        dry_run: bool,

        /// Set every *NumberOfEntries parameter to its table length before writing
        #[arg(long)]
        refresh_counts: bool,
    },

    /// Check documents against the parameter constraints and cross-object rules
    Validate {
        /// Input files (.xml, .yml/.yaml, .json)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Suppress individual error output
        #[arg(short, long)]
        quiet: bool,

        /// Print summary count only
        #[arg(short, long)]
        summary: bool,
    },

    /// Display a summary of a document
    Info {
        /// Input file (.xml, .yml/.yaml, .json)
        input: PathBuf,
    },

    /// Print parameter values as `path = value` lines
    Params {
        /// Input file (.xml, .yml/.yaml, .json)
        input: PathBuf,

        /// Parameter paths, or partial paths ending in '.'; all parameters when omitted
        paths: Vec<String>,
    },

    /// Set one parameter the way an ACS would, honouring access modes
    Set {
        /// Input file (.xml, .yml/.yaml, .json)
        input: PathBuf,

        /// Full parameter path
        path: String,

        /// New value in wire form
        value: String,

        /// Output file; the input is rewritten when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the built-in data model
    Schema {
        #[arg(long, value_enum, default_value_t = SchemaFormat::Text)]
        format: SchemaFormat,

        /// Model name written to the data-model document
        #[arg(long, default_value = "InternetGatewayDevice:1.4")]
        model_name: String,
    },

    /// Compare a BBF data-model XML file with the built-in data model
    CheckDm {
        /// Data-model definition file
        input: PathBuf,

        /// Path the built-in root is mounted at in the file
        #[arg(long, default_value = InternetGatewayDevice::ROOT_PATH)]
        root_path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchemaFormat {
    /// Parameter path templates with type and access
    Text,
    /// BBF cwmp-datamodel XML
    Dm,
    /// JSON Schema for YAML/JSON documents
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Xml,
    Yaml,
    Json,
}

impl Format {
    fn name(self) -> &'static str {
        match self {
            Format::Xml => "XML",
            Format::Yaml => "YAML",
            Format::Json => "JSON",
        }
    }
}

fn detect_format(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("xml") => Ok(Format::Xml),
        Some("yml" | "yaml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        Some(ext) => bail!("Unknown file extension: .{ext}"),
        None => bail!("Cannot detect format: file has no extension"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { cli.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Convert {
            input,
            output,
            dry_run,
            refresh_counts,
        } => convert::run_convert(&input, &output, dry_run, refresh_counts),

        Command::Validate {
            inputs,
            quiet,
            summary,
        } => validate::run_validate(&inputs, quiet, summary),

        Command::Info { input } => info::run_info(&input),

        Command::Params { input, paths } => params::run_params(&input, &paths),

        Command::Set {
            input,
            path,
            value,
            output,
        } => params::run_set(&input, &path, &value, output.as_deref()),

        Command::Schema { format, model_name } => schema::run_schema(format, &model_name),

        Command::CheckDm { input, root_path } => schema::run_check_dm(&input, &root_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_format_by_extension() {
        assert_eq!(detect_format(Path::new("a.xml")).unwrap(), Format::Xml);
        assert_eq!(detect_format(Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(detect_format(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert_eq!(detect_format(Path::new("dir/a.json")).unwrap(), Format::Json);
    }

    #[test]
    fn detect_format_unknown_extension() {
        let err = detect_format(Path::new("a.odx")).unwrap_err();
        assert!(err.to_string().contains("Unknown file extension: .odx"));
        let err = detect_format(Path::new("Makefile")).unwrap_err();
        assert!(err.to_string().contains("no extension"));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["tr069", "-v", "schema", "--format", "dm"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Schema {
                format: SchemaFormat::Dm,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["tr069", "validate", "a.xml", "b.yml", "--quiet"]).unwrap();
        match cli.command {
            Command::Validate { inputs, quiet, .. } => {
                assert_eq!(inputs.len(), 2);
                assert!(quiet);
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn cli_requires_validate_input() {
        assert!(Cli::try_parse_from(["tr069", "validate"]).is_err());
    }
}
