use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tagcheck_core::report::ERROR_LOG_BANNER;
use tagcheck_core::{render_summary, MismatchPolicy, Validator, ValidatorConfig};
use tagcheck_syntax::{ScanMode, TagScanner, TagToken};

#[derive(Parser)]
#[command(name = "tagcheck")]
#[command(about = "Structural checker for tagged text", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate tag structure and print findings
    Check {
        /// Path to the document
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[command(flatten)]
        settings: Settings,
    },
    /// Dump classified tags as JSON
    Tokens {
        /// Path to the document
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },
}

#[derive(Args)]
struct Settings {
    /// JSON validator config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides the config's mismatch policy
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Overrides the config's scan mode
    #[arg(long, value_enum)]
    mode: Option<Mode>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    Report,
    Extras,
}

impl From<Policy> for MismatchPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Report => MismatchPolicy::Report,
            Policy::Extras => MismatchPolicy::Extras,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Tags,
    Lines,
}

impl From<Mode> for ScanMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Tags => ScanMode::Tags,
            Mode::Lines => ScanMode::Lines,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Check {
            path,
            format,
            settings,
        } => {
            if !path.exists() {
                eprintln!("File does not exist: {}", path.display());
                return Ok(ExitCode::from(2));
            }

            let config = resolve_config(settings)?;
            let tokens = scan_file(path, config.scan_mode)?;
            log::info!("Validating {} token(s) from {:?}", tokens.len(), path);
            let diagnostics = Validator::new(config).validate(&tokens);

            match format {
                Format::Text => {
                    println!("{}", ERROR_LOG_BANNER);
                    for line in render_summary(&diagnostics) {
                        println!("{}", line);
                    }
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(&diagnostics)?),
            }

            if diagnostics.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Commands::Tokens { path, mode } => {
            if !path.exists() {
                eprintln!("File does not exist: {}", path.display());
                return Ok(ExitCode::from(2));
            }

            let mode = mode.map(ScanMode::from).unwrap_or_default();
            let tokens = scan_file(path, mode)?;
            println!("{}", serde_json::to_string_pretty(&tokens)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn resolve_config(settings: &Settings) -> anyhow::Result<ValidatorConfig> {
    let mut config = match &settings.config {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    if let Some(policy) = settings.policy {
        config.mismatch_policy = policy.into();
    }
    if let Some(mode) = settings.mode {
        config.scan_mode = mode.into();
    }
    Ok(config)
}

/// Streams the file through a scanner line by line.
fn scan_file(path: &Path, mode: ScanMode) -> anyhow::Result<Vec<TagToken>> {
    let file = File::open(path)
        .with_context(|| format!("Error reading file: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut scanner = TagScanner::new(mode);
    let mut tokens = Vec::new();
    let mut line = Vec::new();

    // Bytes that are not UTF-8 become U+FFFD instead of aborting the scan.
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("Error reading file: {}", path.display()))?;
        if read == 0 {
            break;
        }
        tokens.extend(scanner.update(&String::from_utf8_lossy(&line)));
    }
    tokens.extend(scanner.finish());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tagcheck_syntax::TagKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_file_matches_one_shot_scan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.xml");
        let source = "<a>\r\n  <b/>\n</a>\n<tail";
        std::fs::write(&path, source).unwrap();

        let streamed = scan_file(&path, ScanMode::Tags).unwrap();
        assert_eq!(streamed, TagScanner::default().scan(source));
        assert_eq!(streamed.last().map(|t| t.kind), Some(TagKind::Invalid));
    }

    #[test]
    fn test_scan_file_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.xml");
        std::fs::write(&path, b"<a>caf\xe9 \xff\n</a>\n").unwrap();

        let tokens = scan_file(&path, ScanMode::Tags).unwrap();
        assert_eq!(
            tokens,
            vec![
                TagToken::new(TagKind::Start, "a", 1),
                TagToken::new(TagKind::End, "a", 2),
            ]
        );
    }

    #[test]
    fn test_scan_file_missing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_file(&dir.path().join("absent.xml"), ScanMode::Tags).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagcheck.json");
        ValidatorConfig {
            mismatch_policy: MismatchPolicy::Extras,
            scan_mode: ScanMode::Lines,
        }
        .save(&path)
        .unwrap();

        let settings = Settings {
            config: Some(path),
            policy: Some(Policy::Report),
            mode: None,
        };
        let config = resolve_config(&settings).unwrap();
        assert_eq!(config.mismatch_policy, MismatchPolicy::Report);
        assert_eq!(config.scan_mode, ScanMode::Lines);
    }
}
