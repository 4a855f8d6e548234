//! Command-line interface module

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::conversion::{ConverterOptions, ToWords, ToWordsOptions};
use crate::error::{ToWordsError, ToWordsResult};
use crate::locale::registry::DEFAULT_LOCALE;
use crate::locale::{available_locales, get_locale_class};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "towords")]
#[command(about = "Convert numbers, currency amounts and ordinals to words")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Number to convert (digits, optional sign, thousands separators, decimal point)
    #[arg(allow_negative_numbers = true)]
    pub number: Option<String>,

    /// Read numbers from standard input, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Locale code
    #[arg(short, long, default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Render as a currency phrase
    #[arg(long)]
    pub currency: bool,

    /// Drop the fractional part before converting
    #[arg(long)]
    pub ignore_decimal: bool,

    /// Omit the zero major-unit phrase for amounts below one
    #[arg(long)]
    pub ignore_zero_currency: bool,

    /// Omit the trailing "only" text in currency phrases
    #[arg(long)]
    pub do_not_add_only: bool,

    /// Render the ordinal form
    #[arg(long, conflicts_with = "currency")]
    pub ordinal: bool,

    /// Converter options as JSON, overridden by explicit flags
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List available locale codes and exit
    #[arg(long)]
    pub list_locales: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub to_words_options: ToWordsOptions,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let converter_options = Self::create_converter_options(&args)?;
        let to_words_options =
            ToWordsOptions::new(args.locale.clone()).with_converter_options(converter_options);

        Ok(Self {
            args,
            to_words_options,
        })
    }

    /// Merge `--options` JSON with the individual flags; flags win
    fn create_converter_options(args: &Args) -> Result<ConverterOptions> {
        let base = match &args.options {
            Some(json) => serde_json::from_str::<ConverterOptions>(json)
                .with_context(|| format!("Invalid --options JSON: {}", json))?,
            None => ConverterOptions::new(),
        };

        let flags = ConverterOptions {
            currency: args.currency.then_some(true),
            ignore_decimal: args.ignore_decimal.then_some(true),
            ignore_zero_currency: args.ignore_zero_currency.then_some(true),
            do_not_add_only: args.do_not_add_only.then_some(true),
            currency_options: None,
        };

        Ok(base.merge(&flags))
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        if self.args.stdin {
            "standard input".to_string()
        } else if let Some(number) = &self.args.number {
            format!("'{}'", number)
        } else {
            "no input specified".to_string()
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Execute the command described by `config`
pub fn run(config: &CliConfig) -> Result<()> {
    if config.args.list_locales {
        return write_output(config, &available_locales().join("\n"));
    }

    // Fail on a bad locale before reading any input
    get_locale_class(&config.to_words_options.locale_code)?;

    let inputs = collect_inputs(config)?;
    debug!(
        input = %config.input_description(),
        output = %config.output_description(),
        count = inputs.len(),
        "converting"
    );

    let converter = ToWords::new(config.to_words_options.clone());
    let lines = inputs
        .iter()
        .map(|input| convert_one(&converter, input, config.args.ordinal))
        .collect::<ToWordsResult<Vec<_>>>()?;

    write_output(config, &lines.join("\n"))
}

/// Convert a single textual number
pub fn convert_one(converter: &ToWords, input: &str, ordinal: bool) -> ToWordsResult<String> {
    if ordinal {
        converter.to_ordinal(input)
    } else {
        converter.convert(input)
    }
}

fn collect_inputs(config: &CliConfig) -> Result<Vec<String>> {
    if config.args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(parse_lines(&buffer))
    } else if let Some(number) = &config.args.number {
        Ok(vec![number.clone()])
    } else {
        bail!("No input provided. Pass a NUMBER or use --stdin")
    }
}

/// Non-blank, trimmed input lines
pub fn parse_lines(buffer: &str) -> Vec<String> {
    buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_output(config: &CliConfig, content: &str) -> Result<()> {
    match &config.args.output {
        Some(path) => {
            write_file(path, content)?;
            CliUtils::show_success(
                &format!("Written to: {}", path.display()),
                config.is_quiet(),
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the level
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "towords=debug" } else { "towords=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second initialisation (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Suggestion printed under an error, if any
    pub fn tip_for(error: &ToWordsError) -> Option<&'static str> {
        match error {
            ToWordsError::UnknownLocale { .. } => {
                Some("Use --list-locales to see the supported locale codes")
            }
            ToWordsError::InvalidNumber { .. } => {
                Some("Numbers may use digits, a sign, ',' separators and one '.'")
            }
            ToWordsError::InvalidOrdinalInput { .. } => {
                Some("Ordinals accept whole numbers of zero or more")
            }
            ToWordsError::OrdinalUnsupported { .. } => {
                Some("Try an English, Hindi, French, Turkish or Persian locale for ordinals")
            }
            ToWordsError::NumberOutOfRange { .. } => {
                Some("Values must fit 39 integer digits and 38 decimal places")
            }
            ToWordsError::LocaleData { .. } => None,
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &anyhow::Error) {
    match error.downcast_ref::<ToWordsError>() {
        Some(error) => {
            CliUtils::show_error(&error.user_message());
            if let Some(tip) = CliUtils::tip_for(error) {
                eprintln!("\nTip: {}", tip);
            }
        }
        None => CliUtils::show_error(&format!("{:#}", error)),
    }

    // Show usage hint
    eprintln!("\nTry 'towords --help' for usage information.");
}
