use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::PrivateKeySigner,
};
use anyhow::{Context, Result};
use chrono::Local;
use dotenv::dotenv;
use std::{env, fs, str::FromStr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use diamond_engine::{remove_facet, CutError, FacetInterface};

// Helper function for timestamped logging
fn log(msg: &str) {
    println!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), msg);
}

// Configuration (loaded from .env)
struct Config {
    diamond_address: Address,
    interface_path: String,
    gas_limit: u64,
}

impl Config {
    fn from_env() -> Result<Self> {
        let diamond_str = env::var("DIAMOND_ADDRESS").context("Missing DIAMOND_ADDRESS in .env")?;
        let diamond_address =
            Address::from_str(&diamond_str).context("Invalid DIAMOND_ADDRESS")?;

        let interface_path =
            env::var("FACET_INTERFACE").context("Missing FACET_INTERFACE in .env")?;

        let gas_limit = env::var("CUT_GAS_LIMIT")
            .unwrap_or("800000".to_string())
            .parse()
            .unwrap_or(800_000);

        Ok(Self {
            diamond_address,
            interface_path,
            gas_limit,
        })
    }
}

async fn send_telegram(client: &reqwest::Client, token: &str, chat_id: &str, message: &str) {
    if token.is_empty() || chat_id.is_empty() {
        return;
    }
    let url = format!("https://api.telegram.org/bot{}/sendMessage", token);
    let _ = client
        .post(&url)
        .form(&[("chat_id", chat_id), ("text", message)])
        .send()
        .await;
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339()),
        )
        .init();

    log("💎 Diamond facet remover starting...");

    let config = Config::from_env()?;

    let interface_json = fs::read_to_string(&config.interface_path).with_context(|| {
        format!(
            "Failed to read facet interface '{}'",
            config.interface_path
        )
    })?;
    let facet: FacetInterface = serde_json::from_str(&interface_json)
        .with_context(|| format!("Invalid facet interface '{}'", config.interface_path))?;

    log(&format!(
        "⚙️  Config: Diamond={:?}, Facet={} ({} functions), GasLimit={}",
        config.diamond_address,
        facet.name,
        facet.functions.len(),
        config.gas_limit
    ));

    let rpc_url_str = env::var("RPC_URL").context("Missing RPC_URL in .env")?;
    let private_key = env::var("PRIVATE_KEY").context("Missing PRIVATE_KEY in .env")?;
    let tg_token = env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default();
    let tg_chat_id = env::var("TELEGRAM_CHAT_ID").unwrap_or_default();

    let rpc_url = Url::parse(&rpc_url_str)?;
    let signer = PrivateKeySigner::from_str(&private_key)?;
    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(rpc_url);

    let my_address = provider.wallet().default_signer().address();
    log(&format!("👤 Signer: {:?}", my_address));

    let chain_id = provider.get_chain_id().await?;
    log(&format!("🔗 Chain ID: {}", chain_id));

    let http_client = reqwest::Client::new();

    log(&format!(
        "📤 Submitting diamond cut (Remove) for {}...",
        facet.name
    ));
    match remove_facet(&provider, config.diamond_address, &facet, config.gas_limit).await {
        Ok(tx_hash) => {
            log(&format!("✅ Diamond remove success! Hash: {:?}", tx_hash));
            send_telegram(
                &http_client,
                &tg_token,
                &tg_chat_id,
                &format!(
                    "✅ Diamond remove success: {} ({} functions), tx {:?}",
                    facet.name,
                    facet.functions.len(),
                    tx_hash
                ),
            )
            .await;
            Ok(())
        }
        Err(err) => {
            log(&format!("❌ Diamond remove failed: {}", err));
            if let CutError::Reverted { tx_hash } = &err {
                log(&format!("   TX: {:?}", tx_hash));
            }
            send_telegram(
                &http_client,
                &tg_token,
                &tg_chat_id,
                &format!("❌ Diamond remove failed: {}", err),
            )
            .await;
            Err(err.into())
        }
    }
}
