use lumbapp_core::{dial_targets, Config};

use super::open_session;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let session = open_session(&config)?;

    for target in dial_targets(session.profile(), &config) {
        println!("{}: {}", target.label, target.tel_uri());
    }
    Ok(())
}
