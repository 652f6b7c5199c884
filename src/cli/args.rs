//! Command line argument parsing for the narrative CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::pipeline::PipelineConfig;
use crate::analytics::topic::TopicModelType;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// narrative - Text analytics for documents
#[derive(Parser, Debug, Clone)]
#[command(name = "narrative")]
#[command(about = "Text processing, sentiment, topics, keywords and summaries for documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NarrativeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NarrativeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the full analysis and print the report
    Analyze(AnalyzeArgs),

    /// Run only the text pipeline and print the processed text
    Process(ProcessArgs),
}

/// Where the document text comes from. Standard input when neither is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Document file (.txt or .csv)
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Analyze this text instead of a file
    #[arg(long)]
    pub text: Option<String>,
}

/// Pipeline stage switches.
#[derive(Args, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Keep whitespace as is
    #[arg(long)]
    pub no_remove_space: bool,

    /// Keep special characters
    #[arg(long)]
    pub no_remove_special: bool,

    /// Keep stop words
    #[arg(long)]
    pub no_stopwords: bool,

    /// Apply stemming
    #[arg(long)]
    pub stem: bool,

    /// Apply lemmatization
    #[arg(long)]
    pub lemma: bool,
}

impl PipelineArgs {
    /// Apply the switches that were given on top of `config`.
    pub fn apply(&self, config: &mut PipelineConfig) {
        if self.no_remove_space {
            config.remove_space = false;
        }
        if self.no_remove_special {
            config.remove_special = false;
        }
        if self.no_stopwords {
            config.stopword_flag = false;
        }
        if self.stem {
            config.stem_flag = true;
        }
        if self.lemma {
            config.lemma_flag = true;
        }
    }
}

/// Arguments for the full analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Number of topics to extract
    #[arg(long, value_name = "N")]
    pub topics: Option<usize>,

    /// Topic model
    #[arg(long, value_name = "MODEL")]
    pub model: Option<TopicModelType>,

    /// Number of keywords to report
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Number of summary sentences
    #[arg(long, value_name = "N")]
    pub sentences: Option<usize>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Load the config file, if any, and apply command line overrides.
    pub fn resolve_config(&self) -> Result<AnalysisConfig> {
        let mut config = load_config(self.config.as_ref())?;
        self.pipeline.apply(&mut config.pipeline);
        if let Some(topics) = self.topics {
            config.topics.num_topics = topics;
        }
        if let Some(model) = self.model {
            config.topics.model_type = model;
        }
        if let Some(top_n) = self.top_n {
            config.keywords.top_n = top_n;
        }
        if let Some(sentences) = self.sentences {
            config.summary.sentence_count = sentences;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for running only the pipeline
#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl ProcessArgs {
    /// Load the config file, if any, and apply the pipeline switches.
    pub fn resolve_config(&self) -> Result<AnalysisConfig> {
        let mut config = load_config(self.config.as_ref())?;
        self.pipeline.apply(&mut config.pipeline);
        Ok(config)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_file(path),
        None => Ok(AnalysisConfig::default()),
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_analyze_command() {
        let args = NarrativeArgs::try_parse_from([
            "narrative",
            "analyze",
            "report.txt",
            "--topics",
            "3",
            "--model",
            "nmf",
            "--stem",
            "--no-stopwords",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.input.file, Some(PathBuf::from("report.txt")));
            let config = analyze_args.resolve_config().unwrap();
            assert_eq!(config.topics.num_topics, 3);
            assert_eq!(config.topics.model_type, TopicModelType::Nmf);
            assert!(config.pipeline.stem_flag);
            assert!(!config.pipeline.stopword_flag);
            assert!(config.pipeline.remove_space);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_process_command_with_text() {
        let args = NarrativeArgs::try_parse_from([
            "narrative",
            "process",
            "--text",
            "Hello world",
            "--lemma",
            "--no-remove-special",
        ])
        .unwrap();

        if let Command::Process(process_args) = args.command {
            assert_eq!(process_args.input.text.as_deref(), Some("Hello world"));
            assert!(process_args.input.file.is_none());
            let config = process_args.resolve_config().unwrap();
            assert!(config.pipeline.lemma_flag);
            assert!(!config.pipeline.remove_special);
        } else {
            panic!("Expected Process command");
        }
    }

    #[test]
    fn test_file_and_text_conflict() {
        let result =
            NarrativeArgs::try_parse_from(["narrative", "process", "a.txt", "--text", "hello"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_topics_is_rejected() {
        let args =
            NarrativeArgs::try_parse_from(["narrative", "analyze", "--text", "x", "--topics", "0"])
                .unwrap();
        if let Command::Analyze(analyze_args) = args.command {
            assert!(analyze_args.resolve_config().is_err());
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_output_format_and_verbosity() {
        let args =
            NarrativeArgs::try_parse_from(["narrative", "--format", "json", "process", "--text", "x"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 1);

        let args = NarrativeArgs::try_parse_from(["narrative", "-vv", "process"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = NarrativeArgs::try_parse_from(["narrative", "-q", "-v", "process"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
