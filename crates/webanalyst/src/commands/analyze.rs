use crate::cli::{AnalyzeArgs, Format};
use crate::prompt::value_or_ask;
use crate::report::{render_json, render_text};
use anyhow::Context;
use std::time::Duration;
use webanalyst_core::{AnalysisConfig, AnalysisReport, Analyzer, RunRequest, StopWords};
use webanalyst_source::{FileSource, HtmlExtractor, HttpSource};

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    let request = collect_request(&args)?;

    let report = analyze(&args, config, request)?;

    let output = match args.format {
        Format::Text => render_text(&report),
        Format::Json => render_json(&report)?,
    };
    println!("{output}");
    Ok(())
}

fn analyze(
    args: &AnalyzeArgs,
    config: AnalysisConfig,
    request: RunRequest,
) -> anyhow::Result<AnalysisReport> {
    let url = request.url.clone();
    let report = match &args.html_file {
        Some(path) => {
            Analyzer::new(FileSource::new(path), HtmlExtractor::new(), config).run(request)
        }
        None => {
            let timeout = Duration::from_secs(config.request_timeout_secs);
            let source = HttpSource::new(timeout).context("failed to build HTTP client")?;
            Analyzer::new(source, HtmlExtractor::new(), config).run(request)
        }
    };
    report.with_context(|| format!("analysis of {url} aborted"))
}

/// Config file first, then command-line overrides
fn build_config(args: &AnalyzeArgs) -> anyhow::Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(path) = &args.stopwords {
        config.stopwords = StopWords::from_file(path)?;
    }
    if let Some(policy) = args.relevance {
        config.relevance_policy = policy.into();
    }
    if let Some(max) = args.max_keywords {
        config.max_keywords = max;
    }
    if let Some(secs) = args.timeout {
        config.request_timeout_secs = secs;
    }

    tracing::debug!(
        stopwords = config.stopwords.len(),
        policy = ?config.relevance_policy,
        max_keywords = config.max_keywords,
        "resolved config"
    );
    Ok(config)
}

fn collect_request(args: &AnalyzeArgs) -> anyhow::Result<RunRequest> {
    let interactive = !args.no_input;

    let url = match (&args.url, &args.html_file) {
        (Some(url), _) => url.trim().to_string(),
        (None, Some(path)) => path.display().to_string(),
        (None, None) if interactive => value_or_ask(None, "Website URL", true)?,
        (None, None) => anyhow::bail!("a URL or --html-file is required with --no-input"),
    };
    if url.is_empty() {
        anyhow::bail!("no URL given");
    }

    let content_type = value_or_ask(
        args.content_type.as_deref(),
        "Content type of interest",
        interactive,
    )?;
    let variables = value_or_ask(
        args.variables.as_deref(),
        "Variables of interest (comma-separated)",
        interactive,
    )?;

    Ok(RunRequest::new(url, content_type, &variables))
}
