//! Output formatting for CLI commands.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::cli::args::{NarrativeArgs, OutputFormat};
use crate::error::Result;
use crate::report::AnalysisReport;

/// Result structure for the process command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResult {
    pub stages: Vec<String>,
    pub processed_text: String,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self, verbosity: u8) -> std::result::Result<String, fmt::Error>;
}

impl HumanOutput for ProcessResult {
    fn render_human(&self, verbosity: u8) -> std::result::Result<String, fmt::Error> {
        let mut out = String::new();
        if verbosity > 1 {
            writeln!(out, "Stages: {}", self.stages.join(" -> "))?;
        }
        writeln!(out, "{}", self.processed_text)?;
        Ok(out)
    }
}

impl HumanOutput for AnalysisReport {
    fn render_human(&self, verbosity: u8) -> std::result::Result<String, fmt::Error> {
        let mut out = String::new();

        writeln!(out, "Statistics:")?;
        writeln!(out, "  Characters: {}", self.stats.char_count)?;
        writeln!(out, "  Words:      {}", self.stats.word_count)?;
        writeln!(out, "  Lines:      {}", self.stats.line_count)?;
        writeln!(out, "  Sentences:  {}", self.stats.sentence_count)?;
        writeln!(out)?;

        writeln!(out, "Sentiment: {} ({:.3})", self.sentiment.label, self.sentiment.polarity)?;
        if verbosity > 1 {
            writeln!(out, "  Subjectivity: {:.3}", self.sentiment.subjectivity)?;
        }
        writeln!(out)?;

        writeln!(out, "Topics:")?;
        if self.topics.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for topic in &self.topics {
            writeln!(out, "  {}: {}", topic.label, topic.terms)?;
        }
        writeln!(out)?;

        writeln!(out, "Keywords:")?;
        for keyword in &self.keywords {
            writeln!(out, "  {:<20} {}", keyword.token, keyword.count)?;
        }
        writeln!(out)?;

        writeln!(out, "Summary:")?;
        writeln!(out, "  {}", self.summary)?;

        if verbosity > 1 {
            writeln!(out)?;
            writeln!(out, "Processed text:")?;
            writeln!(out, "  {}", self.processed_text)?;
        }
        Ok(out)
    }
}

/// Output a command result in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &NarrativeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &NarrativeArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human(args.verbosity())?);
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &NarrativeArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

/// Serialize a result, optionally pretty-printed.
pub fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::report::DocumentAnalyzer;

    fn report() -> AnalysisReport {
        DocumentAnalyzer::new(AnalysisConfig::default())
            .unwrap()
            .analyze("Great tools make great work. Bad tools do not.")
            .unwrap()
    }

    #[test]
    fn test_render_report() {
        let rendered = report().render_human(1).unwrap();
        assert!(rendered.contains("Sentiment: Positive"));
        assert!(rendered.contains("Topic 1:"));
        assert!(rendered.contains("Summary:"));
        assert!(!rendered.contains("Processed text:"));
        assert!(report().render_human(2).unwrap().contains("Processed text:"));
    }

    #[test]
    fn test_render_process_result() {
        let result = ProcessResult {
            stages: vec!["whitespace".to_string()],
            processed_text: "hello world".to_string(),
        };
        assert_eq!(result.render_human(1).unwrap(), "hello world\n");
        assert!(result.render_human(2).unwrap().starts_with("Stages: whitespace"));
    }

    #[test]
    fn test_to_json() {
        let result = ProcessResult {
            stages: Vec::new(),
            processed_text: "x".to_string(),
        };
        assert_eq!(
            to_json(&result, false).unwrap(),
            r#"{"stages":[],"processed_text":"x"}"#
        );
        assert!(to_json(&result, true).unwrap().contains('\n'));
    }
}
