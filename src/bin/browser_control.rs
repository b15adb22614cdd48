use anyhow::Result;

use gesture_pilot::app;
use gesture_pilot::config::{Config, Variant};

fn main() -> Result<()> {
    app::init_tracing();

    let config = Config::load_or_default("config.toml");

    println!("Browser Gesture Control ({})", env!("GIT_VERSION"));
    println!("  fist + move up/down -> scroll");
    if config.browser.shortcuts {
        println!("  one   -> back (alt+left)");
        println!("  two   -> forward (alt+right)");
        println!("  three -> reload (F5)");
        println!("  four  -> new tab (ctrl+t)");
        println!("  five  -> close tab (ctrl+w)");
    }
    println!("Press 'Q' to quit");

    app::run(Variant::Browser, &config)?;
    Ok(())
}
