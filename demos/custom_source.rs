//! Example with a custom source and formatter held in a `Context`

use fieldenv::{Context, Populate, Source};
use std::collections::BTreeMap;

/// Source reading `key=value` lines, e.g. from a mounted config file.
struct Lines(BTreeMap<String, String>);

impl Lines {
    fn parse(text: &str) -> Self {
        let pairs = text
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        Self(pairs)
    }
}

impl Source for Lines {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[derive(Debug, Default, Populate)]
struct Config {
    pub name: String,
    pub replicas: u8,

    #[conf(default = "0.5")]
    pub sample_rate: f64,
}

fn main() -> anyhow::Result<()> {
    let source = Lines::parse(
        "
        service.name = billing
        service.replicas = 3
        ",
    );

    // Field `replicas` is looked up as `service.replicas`
    let context = Context::new()
        .with_source(source)
        .with_formatter(|field: &str| format!("service.{field}"));

    let mut config = Config::default();
    context.populate(&mut config)?;

    println!("Configuration from custom source:");
    println!("  Name: {}", config.name);
    println!("  Replicas: {}", config.replicas);
    println!("  Sample Rate: {}", config.sample_rate);

    Ok(())
}
