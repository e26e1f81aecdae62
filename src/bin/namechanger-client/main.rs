// NameChanger client - calls Reverse and CharReplace on a running server

use anyhow::{Context, Result};
use clap::Parser;

use namechanger::proto::{NameChangerClient, TransformRequest};

#[derive(Parser, Debug)]
#[command(name = "namechanger-client")]
#[command(version)]
#[command(about = "Call the NameChanger gRPC service", long_about = None)]
struct Args {
    /// Server address
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    addr: String,

    /// Name to transform
    #[arg(short, long)]
    name: String,

    /// Replacement character for CharReplace (CharReplace is skipped without it)
    #[arg(short, long)]
    chara: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut client = NameChangerClient::connect(args.addr.clone())
        .await
        .with_context(|| format!("Failed to connect to {}", args.addr))?;

    let response = client
        .reverse(TransformRequest {
            name: args.name.clone(),
            chara: String::new(),
        })
        .await
        .context("Reverse failed")?;
    println!("{}", response.into_inner().message);

    if let Some(chara) = args.chara {
        let response = client
            .char_replace(TransformRequest {
                name: args.name,
                chara,
            })
            .await
            .context("CharReplace failed")?;
        println!("{}", response.into_inner().message);
    }

    Ok(())
}
