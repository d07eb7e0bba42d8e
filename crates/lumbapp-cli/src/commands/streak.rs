use lumbapp_core::{Config, StreakTransition};
use serde::Serialize;

use super::open_session;

#[derive(Serialize)]
struct StreakReport {
    streak: u32,
    last_visit: Option<chrono::NaiveDate>,
    transition: StreakTransition,
}

pub async fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let session = open_session(&config)?;
    let report = StreakReport {
        streak: session.streak(),
        last_visit: session.last_visit(),
        transition: session.last_reconciliation().transition,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let note = match report.transition {
        StreakTransition::FirstVisit => "first visit, welcome!",
        StreakTransition::SameDay => "already counted today",
        StreakTransition::Continued => "keep it up!",
        StreakTransition::Reset => "streak restarted",
    };
    println!("Streak: {} day(s) ({note})", report.streak);
    Ok(())
}
