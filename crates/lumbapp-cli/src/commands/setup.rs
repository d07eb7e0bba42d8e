use clap::Args;
use lumbapp_core::{validate_profile, Config, PainLevel, ProfileField};

use super::open_session;

#[derive(Args)]
pub struct SetupArgs {
    /// Full name
    #[arg(long)]
    name: String,
    /// Age in years
    #[arg(long)]
    age: String,
    /// Sex (masculino, femenino, otro)
    #[arg(long, default_value = "masculino")]
    sex: String,
    /// Weight in kg
    #[arg(long)]
    weight: String,
    /// Height in cm
    #[arg(long)]
    height: String,
    /// Current pain level, 0-10
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=10))]
    pain: u8,
    /// Emergency contact name
    #[arg(long)]
    contact: String,
    /// Emergency contact phone (10 digits)
    #[arg(long)]
    phone: String,
}

impl SetupArgs {
    fn into_edits(self) -> Vec<ProfileField> {
        vec![
            ProfileField::Name(self.name),
            ProfileField::Age(self.age),
            ProfileField::Sex(self.sex),
            ProfileField::Weight(self.weight),
            ProfileField::Height(self.height),
            ProfileField::PainLevel(PainLevel::new(self.pain.into())),
            ProfileField::EmergencyContactName(self.contact),
            ProfileField::EmergencyContactPhone(self.phone),
        ]
    }
}

pub async fn run(args: SetupArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut session = open_session(&config)?;

    let edits = args.into_edits();
    let mut candidate = session.profile().clone();
    for edit in &edits {
        candidate.apply(edit.clone());
    }
    validate_profile(&candidate)?;

    for edit in edits {
        session.update_field(edit);
    }
    session.complete_setup();
    session.settle().await?;

    println!("Welcome, {}! Setup complete.", session.profile().name);
    println!("Streak: {} day(s)", session.streak());
    Ok(())
}
