//! Command implementations for the narrative CLI.

use std::io::{self, Read};

use log::{debug, warn};

use crate::analysis::pipeline::TextPipeline;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::extract::extract_file;
use crate::report::DocumentAnalyzer;

/// Execute a CLI command.
pub fn execute_command(args: NarrativeArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Process(process_args) => process(process_args, &args),
    }
}

/// Run the full analysis.
fn analyze(args: &AnalyzeArgs, cli_args: &NarrativeArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let text = read_input(&args.input)?;

    let analyzer = DocumentAnalyzer::new(config)?;
    let report = analyzer.analyze(&text)?;

    output_result("Analysis report", &report, cli_args)
}

/// Run only the text pipeline.
fn process(args: &ProcessArgs, cli_args: &NarrativeArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let text = read_input(&args.input)?;

    let resources = config.resources.load()?;
    let pipeline = TextPipeline::with_resources(config.pipeline, &resources);
    let result = ProcessResult {
        stages: pipeline.stage_names().into_iter().map(String::from).collect(),
        processed_text: pipeline.process(&text),
    };

    output_result("Processed text", &result, cli_args)
}

/// Read the document text from `--text`, a file, or standard input.
///
/// File extraction problems are logged and produce empty text.
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        let text = extract_file(path);
        if text.is_empty() {
            warn!("no text extracted from {}", path.display());
        }
        return Ok(text);
    }

    debug!("reading document from standard input");
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_read_input_prefers_text() {
        let input = InputArgs {
            file: None,
            text: Some("inline".to_string()),
        };
        assert_eq!(read_input(&input).unwrap(), "inline");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        write!(File::create(&path).unwrap(), "from a file").unwrap();

        let input = InputArgs {
            file: Some(path),
            text: None,
        };
        assert_eq!(read_input(&input).unwrap(), "from a file");
    }

    #[test]
    fn test_read_input_unsupported_file_is_empty() {
        let input = InputArgs {
            file: Some("slides.pptx".into()),
            text: None,
        };
        assert_eq!(read_input(&input).unwrap(), "");
    }

    #[test]
    fn test_analyze_empty_file_fails() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let args = NarrativeArgs {
            verbose: 0,
            quiet: true,
            output_format: OutputFormat::Json,
            pretty: false,
            command: Command::Analyze(AnalyzeArgs {
                input: InputArgs {
                    file: Some(file.path().to_path_buf()),
                    text: None,
                },
                pipeline: PipelineArgs::default(),
                topics: None,
                model: None,
                top_n: None,
                sentences: None,
                config: None,
            }),
        };
        assert!(execute_command(args).is_err());
    }
}
