//! Example surfacing values that could not be parsed
//!
//! Run with `RUST_LOG=fieldenv=debug` to see the skipped fields logged too.

use fieldenv::Populate;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Populate)]
struct Config {
    pub workers: u16,

    #[conf(default = "true")]
    pub cache: bool,

    pub ratio: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    std::env::set_var("WORKERS", "lots");
    std::env::set_var("CACHE", "nope");
    std::env::set_var("RATIO", "0.75");

    let mut config = Config::default();
    let failures = fieldenv::populate_report(&mut config)?;

    println!("Configuration: {config:?}");
    for failure in &failures {
        println!("  skipped: {failure}");
    }

    Ok(())
}
