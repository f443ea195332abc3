use clap::Parser;

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Path to a YAML configuration file. Built-in defaults apply when omitted.
    #[clap(long, env = "BOOKS_API_CONFIG_FILE")]
    pub config_file: Option<String>,
}
