//! Example showing duration fields

use fieldenv::Populate;
use std::time::Duration;

#[derive(Debug, Default, Populate)]
struct Timeouts {
    #[conf(default = "5s")]
    pub connect: Duration,

    #[conf(default = "1m30s")]
    pub idle: Duration,

    #[conf(default = "2h")]
    pub session: Duration,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("CONNECT", "250ms");
    std::env::set_var("SESSION", "1.5h");

    let mut timeouts = Timeouts::default();
    fieldenv::populate(&mut timeouts)?;

    println!("Timeouts:");
    println!("  Connect: {:?}", timeouts.connect);
    println!("  Idle: {:?}", timeouts.idle);
    println!("  Session: {:?}", timeouts.session);

    Ok(())
}
