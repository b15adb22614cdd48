use anyhow::Result;

use gesture_pilot::app;
use gesture_pilot::config::{Config, Variant};

fn main() -> Result<()> {
    app::init_tracing();

    println!("Gesture Control ({})", env!("GIT_VERSION"));
    println!("  one   -> up");
    println!("  two   -> down");
    println!("  three -> left");
    println!("  four  -> right");
    println!("  five  -> space");
    println!("  fist  -> enter");
    println!("Press 'Q' to quit");

    let config = Config::load_or_default("config.toml");
    app::run(Variant::Gesture, &config)?;
    Ok(())
}
