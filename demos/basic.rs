//! Basic usage example

use fieldenv::Populate;
use std::time::Duration;

#[derive(Debug, Default, Populate)]
struct Config {
    // Loaded from DATABASE_URL
    pub database_url: String,

    // With default value
    #[conf(default = "127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[conf(default = 10)]
    pub max_connections: u32,

    // Boolean type
    #[conf(default = false)]
    pub debug_mode: bool,

    // Duration type
    #[conf(default = "30s")]
    pub request_timeout: Duration,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    let mut config = Config::default();
    fieldenv::populate(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Request Timeout: {:?}", config.request_timeout);

    Ok(())
}
