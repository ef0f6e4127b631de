//! Minimal HTTP server for the Azure container demo.
//!
//! Two fixed routes: `/health` returns a JSON status payload, every other
//! request-target returns a static greeting. See `handler` for the routing
//! contract.

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();

    // Bind failure (e.g. port already in use) propagates out of main and
    // exits non-zero. No retry, no fallback port.
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(cfg.port);

    server::run(listener).await
}
