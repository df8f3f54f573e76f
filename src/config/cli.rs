use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "product-application")]
#[command(about = "Submit a seller application to the matching product backend")]
pub struct CliArgs {
    #[arg(long, help = "TOML file describing the seller application")]
    pub application: PathBuf,

    #[arg(long, help = "Dispatcher configuration (logging, dry-run responses)")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        help = "Submit through the product specific entry point instead of the legacy route"
    )]
    pub product_only: bool,

    #[arg(long, help = "Print the outcome as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
