// CLI argument definitions using clap

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "namechanger-server")]
#[command(version)]
#[command(about = "gRPC server exposing the NameChanger service", long_about = None)]
pub struct Cli {
    /// Directory containing the config file (optional, defaults are used without it)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Config file name without extension, looked up as <config>/<key>.{json,yaml,yml,toml}
    #[arg(long, default_value = "namechanger")]
    pub config_key: String,

    /// Port to listen on, overrides the config file
    #[arg(short, long, env = "NAMECHANGER_PORT")]
    pub port: Option<u16>,

    /// Host to bind to, overrides the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Log level (trace, debug, info, warn, error), overrides the config file
    #[arg(long)]
    pub log_level: Option<String>,
}
