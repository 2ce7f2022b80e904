use std::io;

use anyhow::Context;
use othello::game::Game;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Game::new()
        .run(stdin.lock(), stdout.lock())
        .context("failed to drive the game loop")?;
    Ok(())
}
