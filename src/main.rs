use anyhow::Result;
use bikeshare::{config::CityData, session};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // logs go to stderr so they never interleave with the reports
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!("startup");

    // ─── 2) configure the city → file mapping ────────────────────────
    let config = CityData::new("data");

    // ─── 3) run the interactive session ──────────────────────────────
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    session::run(&config, &mut input, &mut out)
}
