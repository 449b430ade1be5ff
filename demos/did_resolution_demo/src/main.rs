use clap::{Parser, ValueEnum};
use peaq_did_resolver::PeaqDidResolver;
use peaq_providers::did::model::ResolveOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Resolves a peaq DID and prints the result as JSON.
#[derive(Debug, Parser)]
struct Cli {
    /// Node endpoint
    #[arg(long, default_value = "wss://wsspc1-qa.agung.peaq.network")]
    base_url: String,

    /// Owner wallet address, SS58 or 0x-prefixed EVM
    #[arg(long)]
    address: String,

    /// DID name
    #[arg(long)]
    name: String,

    #[arg(long, value_enum, default_value_t = Part::Record)]
    part: Part,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Part {
    Record,
    Document,
    Services,
    Verifications,
    Authentications,
    Signature,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let resolver = PeaqDidResolver::default();
    let did_service = resolver.did_service;

    let options = ResolveOptions {
        base_url: cli.base_url,
        name: cli.name,
        address: cli.address,
    };

    let output = match cli.part {
        Part::Record => serde_json::to_value(did_service.resolve(&options).await?)?,
        Part::Document => serde_json::to_value(did_service.resolve_document(&options).await?)?,
        Part::Services => serde_json::to_value(did_service.resolve_services(&options).await?)?,
        Part::Verifications => {
            serde_json::to_value(did_service.resolve_verifications(&options).await?)?
        }
        Part::Authentications => {
            serde_json::to_value(did_service.resolve_authentications(&options).await?)?
        }
        Part::Signature => serde_json::to_value(did_service.resolve_signature(&options).await?)?,
    };

    if output.is_null() {
        info!(name = %options.name, address = %options.address, "DID not found");
    }
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
