use anyhow::Result;

use gesture_pilot::app;
use gesture_pilot::config::{Config, Variant};

fn main() -> Result<()> {
    app::init_tracing();

    println!("Pose Control ({})", env!("GIT_VERSION"));
    println!("  left hand up  -> w");
    println!("  right hand up -> s");
    println!("  both hands up -> space");
    println!("  lean left     -> a");
    println!("  lean right    -> d");
    println!("  arms crossed  -> enter");
    println!("Press 'Q' to quit");

    let config = Config::load_or_default("config.toml");
    app::run(Variant::Pose, &config)?;
    Ok(())
}
