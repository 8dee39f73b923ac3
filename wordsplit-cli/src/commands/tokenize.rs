//! Tokenize command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use wordsplit_core::{ClassifierKind, TokenizerConfig};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{BoxedWriter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Text to tokenize (standard input is read when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's default_format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Character classification policy
    #[arg(long, value_enum)]
    pub classifier: Option<ClassifierArg>,

    /// Lowercase every token
    #[arg(long, overrides_with = "no_lowercase")]
    pub lowercase: bool,

    /// Keep token case even if the config file enables lowercasing
    #[arg(long, overrides_with = "lowercase")]
    pub no_lowercase: bool,

    /// Normalize text before splitting (NFD, mark and niqqud stripping, leet)
    #[arg(long, overrides_with = "no_normalize")]
    pub normalize: bool,

    /// Skip normalization even if the config file enables it
    #[arg(long, overrides_with = "normalize")]
    pub no_normalize: bool,

    /// Drop nonspacing marks when normalizing
    #[arg(long, value_name = "BOOL")]
    pub strip_marks: Option<bool>,

    /// Drop Hebrew points and cantillation when normalizing
    #[arg(long, value_name = "BOOL")]
    pub strip_niqqud: Option<bool>,

    /// Substitute leet characters when normalizing
    #[arg(long, value_name = "BOOL")]
    pub leet: Option<bool>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "WORDSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Classifier choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ClassifierArg {
    /// Letters, marks and numbers of any script
    Unicode,
    /// Legacy [A-Za-z0-9] only
    Ascii,
}

impl From<ClassifierArg> for ClassifierKind {
    fn from(arg: ClassifierArg) -> Self {
        match arg {
            ClassifierArg::Unicode => ClassifierKind::Unicode,
            ClassifierArg::Ascii => ClassifierKind::Ascii,
        }
    }
}

/// Effective settings after merging the config file with flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Tokenizer configuration
    pub tokenizer: TokenizerConfig,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

/// Where the text comes from
#[derive(Debug)]
enum Source {
    Text(String),
    Files(Vec<PathBuf>),
    Stdin,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let settings = self.resolve_settings()?;
        log::debug!("Effective settings: {:?}", settings);

        let writer: BoxedWriter = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let count = self.run(&settings, writer)?;
        log::info!("Emitted {} tokens", count);
        Ok(())
    }

    /// Merge the config file (if any) with command-line flags
    pub fn resolve_settings(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::load(path)?
            }
            None => CliConfig::default(),
        };

        let mut tokenizer = file_config.tokenizer;
        if let Some(classifier) = self.classifier {
            tokenizer.classifier = classifier.into();
        }
        if let Some(lowercase) = switch(self.lowercase, self.no_lowercase) {
            tokenizer.lowercase = lowercase;
        }

        let normalize = &mut tokenizer.normalize;
        if let Some(enabled) = switch(self.normalize, self.no_normalize) {
            normalize.enabled = enabled;
        }
        if let Some(strip_marks) = self.strip_marks {
            normalize.strip_marks = strip_marks;
        }
        if let Some(strip_niqqud) = self.strip_niqqud {
            normalize.strip_niqqud = strip_niqqud;
        }
        if let Some(leet) = self.leet {
            normalize.leet = leet;
        }

        let format = match self.format {
            Some(format) => format,
            None => {
                let name = &file_config.output.default_format;
                <OutputFormat as clap::ValueEnum>::from_str(name, true)
                    .map_err(|_| CliError::UnknownOutputFormat(name.clone()))?
            }
        };

        Ok(Settings {
            tokenizer,
            format,
            pretty_json: file_config.output.pretty_json,
        })
    }

    /// Tokenize every source and write the result, returning the token count
    pub fn run(&self, settings: &Settings, writer: BoxedWriter) -> Result<usize> {
        let mut formatter = settings.format.formatter(writer, settings.pretty_json);
        let mut count = 0;

        match self.source()? {
            Source::Text(text) => {
                count += emit(formatter.as_mut(), &settings.tokenizer, &text)?;
            }
            Source::Stdin => {
                let text = FileReader::read_stdin()?;
                count += emit(formatter.as_mut(), &settings.tokenizer, &text)?;
            }
            Source::Files(files) => {
                log::info!("Tokenizing {} file(s)", files.len());
                let mut progress = ProgressReporter::new(self.quiet);
                progress.init_files(files.len() as u64);

                match emit_files(formatter.as_mut(), &settings.tokenizer, &files, &progress) {
                    Ok(emitted) => {
                        progress.finish();
                        count += emitted;
                    }
                    Err(err) => {
                        progress.abandon();
                        return Err(err);
                    }
                }
            }
        }

        formatter.finish()?;
        Ok(count)
    }

    fn source(&self) -> Result<Source> {
        if let Some(text) = &self.text {
            return Ok(Source::Text(text.clone()));
        }
        if self.input.is_empty() {
            return Ok(Source::Stdin);
        }
        Ok(Source::Files(resolve_patterns(&self.input)?))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// `Some(true)` for `--x`, `Some(false)` for `--no-x`, `None` when neither was given
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn emit_files(
    formatter: &mut dyn OutputFormatter,
    config: &TokenizerConfig,
    files: &[PathBuf],
    progress: &ProgressReporter,
) -> Result<usize> {
    let mut count = 0;
    for path in files {
        let name = path.display().to_string();
        log::debug!("Reading {}", name);
        let text = FileReader::read_text(path)?;

        if files.len() > 1 {
            formatter.begin_source(&name)?;
        }
        let emitted = emit(formatter, config, &text)?;
        progress.file_completed(&name, emitted);
        count += emitted;
    }
    Ok(count)
}

fn emit(formatter: &mut dyn OutputFormatter, config: &TokenizerConfig, text: &str) -> Result<usize> {
    let spans = config.spans(text);
    for span in &spans {
        formatter.format_token(span)?;
    }
    Ok(spans.len())
}
