use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "jar-audit", version)]
#[command(about = "List the jars in a library directory that a Java source tree does (or does not) use")]
#[command(group(ArgGroup::new("input").required(true).args(["src", "class"])))]
pub struct Cli {
    /// Directory holding the jars to audit (not searched recursively)
    #[arg(long, value_name = "DIR")]
    pub lib: PathBuf,

    /// Java source root whose imports decide which jars are used
    #[arg(long, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// Single class name to look up instead of scanning sources
    #[arg(long, value_name = "CLASS")]
    pub class: Option<String>,

    /// List useful jars (default)
    #[arg(short = 'l', long, conflicts_with = "useless")]
    pub useful: bool,

    /// List useless jars
    #[arg(short = 'u', long)]
    pub useless: bool,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Additional import prefix to ignore, e.g. `org.junit.`
    #[arg(long = "exclude", value_name = "PREFIX")]
    pub exclude: Vec<String>,

    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Accepts a class name pasted straight from an import line.
pub fn normalize_class_name(raw: &str) -> String {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("import")
        && rest.starts_with(char::is_whitespace)
    {
        s = rest.trim();
    }
    if s.ends_with(';') {
        s = s.trim_end_matches(';').trim();
    }
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
