use std::path::Path;

use clap::Subcommand;
use lumbapp_core::Catalog;

#[derive(Subcommand)]
pub enum ContentSection {
    /// Exercise routines
    Exercises,
    /// Educational articles
    Education,
    /// Do / don't posture examples
    Precautions,
    /// General recommendations
    Recommendations,
}

pub fn run(section: ContentSection, dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match dir {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::builtin()?,
    };

    match section {
        ContentSection::Exercises => {
            for item in &catalog.exercises {
                println!("{}", item.title.as_deref().unwrap_or(&item.id));
                if let Some(description) = &item.description {
                    println!("  {description}");
                }
                if let Some(video) = &item.video_url {
                    println!("  video: {video}");
                }
                println!();
            }
        }
        ContentSection::Education => {
            for item in &catalog.education {
                println!("{}", item.title.as_deref().unwrap_or(&item.id));
                if let Some(content) = &item.content {
                    println!("  {content}");
                }
                if let Some(embed) = item.embed_url() {
                    println!("  video: {embed}");
                }
                println!();
            }
        }
        ContentSection::Precautions => {
            for item in &catalog.precautions {
                let mark = if item.is_good { "[ok]" } else { "[avoid]" };
                println!("{mark} {}", item.title.as_deref().unwrap_or(&item.id));
                if let Some(src) = item.image_source() {
                    println!("  image: {src}");
                }
            }
        }
        ContentSection::Recommendations => {
            for item in &catalog.recommendations {
                if let Some(text) = &item.text {
                    println!("- {text}");
                }
            }
        }
    }
    Ok(())
}
