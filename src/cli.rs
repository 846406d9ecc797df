use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bridgemoc")]
#[command(about = "Extract webbridge class metadata from C++ headers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the C++ header file
    pub header: PathBuf,

    /// Name of the class to extract
    #[arg(short, long = "class-name")]
    pub class_name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Detailed plain-text report
    Terminal,
    /// Serialized class descriptor
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
        }
    }
}
