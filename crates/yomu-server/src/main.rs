use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use yomu_config::Config;
use yomu_server::{AppState, logging};

#[derive(Parser, Debug)]
#[command(name = "yomu", about = "Japanese tokenizing and dictionary lookup service")]
struct Args {
    /// Listening port, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// jmdict-simplified JSON snapshot, overrides JMDICT_PATH
    #[arg(long)]
    jmdict: Option<String>,

    /// Compiled vibrato dictionary, overrides TOKENIZER_DICT
    #[arg(long)]
    tokenizer_dict: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let mut config = Config::new();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.jmdict {
        config.dictionary.path = path;
    }
    if let Some(path) = args.tokenizer_dict {
        config.tokenizer.dict_path = path;
    }

    let state = AppState::from_config(&config)?;

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_on_ctrl_c(cancel.clone()));

    yomu_server::serve(&config.server.bind_addr(), state, cancel).await
}

async fn shutdown_on_ctrl_c(cancel: CancellationToken) {
    match signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Shutdown requested");
            cancel.cancel();
        }
        Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
    }
}
