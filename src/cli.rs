use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Modify license of identified files (default is a dry run)
    #[arg(short, long)]
    pub modify: bool,

    /// Exclude patterns (glob patterns like ".git" or "*.o")
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Maximum recursion depth (0 means no recursion)
    #[arg(long, default_value = "50")]
    pub max_depth: usize,

    /// Write a JSON report of the run to this file
    #[arg(short, long = "output")]
    pub output_file: Option<String>,
}
