use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:

  # multiple files
  $ xlsx2seed -i /path/to/src -o /path/to/dst hoge.xlsx huga.xlsx

  # only foo and bar sheets / bar subdivide postfix 2
  $ xlsx2seed hoge.xlsx huga.xlsx -O foo,bar:2

  # foo subdivide prefix 1 / bar subdivide postfix 2 / baz subdivide prefix 1 and postfix 2
  $ xlsx2seed hoge.xlsx huga.xlsx -S 2:foo,bar:2,1:baz:2

  # column names row is 3 (2 in zero origin)
  $ xlsx2seed hoge.xlsx huga.xlsx -C \"column_names_row: 2\"
";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "xlsx2seed",
    version,
    about = "Convert spreadsheet sheets into keyed YAML seed files",
    arg_required_else_help = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Workbook files, relative to --input unless absolute.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Subdivide rules: `[prefix:]sheet_name[:postfix]`, comma separated.
    #[arg(short = 'S', long, value_name = "RULES", value_delimiter = ',')]
    pub subdivide: Vec<String>,

    /// Sheet names to skip, comma separated.
    #[arg(short = 'I', long, value_name = "SHEETS", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Only convert these sheets (subdivide rules allowed), comma separated.
    #[arg(short = 'O', long, value_name = "SHEETS", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Input directory.
    #[arg(short = 'i', long, value_name = "PATH", default_value = ".")]
    pub input: PathBuf,

    /// Output directory.
    #[arg(short = 'o', long, value_name = "PATH", default_value = ".")]
    pub output: PathBuf,

    /// Print sheets to stdout instead of writing files.
    #[arg(short = 'd', long)]
    pub stdout: bool,

    /// Keep only rows whose version column equals this value.
    #[arg(short = 'R', long, value_name = "VERSION", default_value = "")]
    pub require_version: String,

    /// Column holding the row version.
    #[arg(short = 'v', long, value_name = "COLUMN", default_value = "")]
    pub version_column: String,

    /// Columns left out of every record, comma separated.
    #[arg(short = 'n', long, value_name = "COLUMNS", value_delimiter = ',')]
    pub ignore_columns: Vec<String>,

    /// Config file (default: xlsx2seed.yml when present).
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Inline YAML config; takes precedence over --config.
    #[arg(short = 'C', long, value_name = "YAML")]
    pub config_content: Option<String>,
}
