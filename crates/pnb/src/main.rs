use std::sync::Arc;

use pnb_core::{config::Config, lookup::LookupPort};
use pnb_lookup::HttpLookupClient;

#[tokio::main]
async fn main() -> Result<(), pnb_core::Error> {
    pnb_core::logging::init("pnb")?;

    // Fail fast: a partially configured bot must not start polling.
    let cfg = Arc::new(Config::load()?);

    let lookup: Arc<dyn LookupPort> = Arc::new(HttpLookupClient::new(
        cfg.lookup_base_url.clone(),
        cfg.lookup_timeout,
    )?);

    pnb_telegram::router::run_polling(cfg, lookup)
        .await
        .map_err(|e| pnb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
