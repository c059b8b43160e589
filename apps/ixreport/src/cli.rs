//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ixreport",
    version,
    about = "Render an HTML report from inline XBRL validation results",
    long_about = "ixreport — inject the XBRL namespaces into an inline XBRL document, run the validator on the working copy, and turn its log into a readable HTML report with source context.\n\nConfiguration precedence: CLI > ixreport.toml > defaults.",
    after_help = "Examples:\n  ixreport filing.htm report.html\n  ixreport filing.htm report.html --validator /opt/arelle/arelleCmdLine\n  ixreport filing.htm report.html --log-file earlier-run.xml --output json",
    arg_required_else_help = true
)]
/// Positional input/report paths plus optional overrides.
pub struct Cli {
    #[arg(help = "Inline XBRL / xHTML document to validate")]
    pub input: String,
    #[arg(help = "Destination of the HTML report")]
    pub report: String,
    #[arg(long, help = "Config file (default: discover ixreport.toml|yaml)")]
    pub config: Option<String>,
    #[arg(long, help = "Validator executable (default: arelleCmdLine)")]
    pub validator: Option<String>,
    #[arg(
        long,
        help = "Use an existing validator log instead of running the validator"
    )]
    pub log_file: Option<String>,
    #[arg(long, help = "Console output mode: human|json (default: human)")]
    pub output: Option<String>,
}
