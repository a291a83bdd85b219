//! Example demonstrating a prefixed formatter

use fieldenv::{Populate, Uppercaser};

#[derive(Debug, Default, Populate)]
struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_API_KEY, etc.
    pub database_url: String,
    pub api_key: String,

    #[conf(default = 8080)]
    pub port: u16,

    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    fieldenv::set_formatter(Uppercaser::with_prefix("MYAPP"));

    // Set environment variables with prefix
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_API_KEY", "secret-key-123");
    std::env::set_var("MYAPP_PORT", "3000");

    let mut config = Config::default();
    fieldenv::populate(&mut config)?;

    println!("Configuration with prefix 'MYAPP':");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
