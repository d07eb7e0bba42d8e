//! Profile commands.
//!
//! Each command opens one session, which also counts today's visit.

use clap::Subcommand;
use lumbapp_core::{Config, ProfileField, UserProfile};

use super::open_session;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the stored profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change one field (name, age, sex, weight, height, pain, contact, phone)
    Set {
        field: String,
        value: String,
    },
    /// Delete the profile and the visit streak
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show { json } => show(json),
        ProfileAction::Set { field, value } => set(&field, &value).await,
        ProfileAction::Clear { yes } => clear(yes),
    }
}

fn show(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let session = open_session(&config)?;
    let profile = session.profile();

    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    if !session.is_setup_complete() {
        println!("Setup not completed. Run `lumbapp setup` first.");
        println!();
    }
    print_profile(profile);
    Ok(())
}

fn print_profile(profile: &UserProfile) {
    println!("Personal data:");
    println!("  Name:       {}", profile.name);
    println!("  Age:        {}", profile.age);
    println!("  Sex:        {}", profile.sex);
    println!("  Weight:     {} kg", profile.weight);
    println!("  Height:     {} cm", profile.height);
    println!("  Pain level: {}", profile.pain_level);
    println!();
    println!("Emergency contact:");
    println!("  Name:  {}", profile.emergency_contact_name);
    println!("  Phone: {}", profile.emergency_contact_phone);
    println!();
    println!("Streak: {} day(s)", profile.streak);
}

async fn set(field: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let edit = ProfileField::parse(field, value).ok_or_else(|| {
        format!(
            "cannot set '{field}' to '{value}' (fields: {})",
            ProfileField::NAMES.join(", ")
        )
    })?;

    let config = Config::load()?;
    let mut session = open_session(&config)?;
    session.update_field(edit);
    session.settle().await?;
    println!("ok");
    Ok(())
}

fn clear(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        return Err("this deletes the profile and the streak; pass --yes to confirm".into());
    }
    let config = Config::load()?;
    let mut session = open_session(&config)?;
    session.clear_profile();
    session.close();
    println!("profile cleared");
    Ok(())
}
