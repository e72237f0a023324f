use std::io;

use anyhow::Result;
use tracing::info;
use xiangqi_play::Console;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("xiangqi starting");

    let stdin = io::stdin();
    Console::new().run(stdin.lock(), io::stdout())?;
    Ok(())
}
