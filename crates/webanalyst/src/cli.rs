use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use webanalyst_core::RelevancePolicy;

#[derive(Parser)]
#[command(name = "webanalyst")]
#[command(version)]
#[command(about = "Keyword relevance analysis for a single web page")]
pub struct Cli {
    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a page and print its keyword report
    Analyze(AnalyzeArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Page URL (prompted for when omitted)
    pub url: Option<String>,

    /// Content category of interest, e.g. "news"
    #[arg(short = 't', long)]
    pub content_type: Option<String>,

    /// Comma-separated variables of interest
    #[arg(long)]
    pub variables: Option<String>,

    /// Analyze a saved HTML file instead of fetching the URL
    #[arg(long, value_name = "FILE")]
    pub html_file: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stopword list, one word per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Paragraph relevance policy
    #[arg(long, value_enum)]
    pub relevance: Option<PolicyArg>,

    /// Max keywords in the table
    #[arg(long)]
    pub max_keywords: Option<usize>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Never prompt; missing inputs are left empty (URL still required)
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Positional,
    TermWeight,
}

impl From<PolicyArg> for RelevancePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Positional => RelevancePolicy::Positional,
            PolicyArg::TermWeight => RelevancePolicy::TermWeight,
        }
    }
}
