//! Static educational content: exercises, education, precautions and
//! recommendations.
//!
//! The catalog ships inside the library. A directory holding files with the
//! same names can replace it.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

const EXERCISES_FILE: &str = "exercises.json";
const EDUCATION_FILE: &str = "education.json";
const PRECAUTIONS_FILE: &str = "precautions.json";
const RECOMMENDATIONS_FILE: &str = "recommendations.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "videoUrl")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "videoUrl")]
    pub video_url: Option<String>,
}

impl EducationItem {
    /// Embeddable player URL for the item's video, if it has one.
    pub fn embed_url(&self) -> Option<String> {
        self.video_url.as_deref().map(to_embed_url)
    }
}

/// Good or bad posture example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precaution {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_id: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub is_good: bool,
}

impl Precaution {
    /// Where to load the image from.
    ///
    /// Relative paths are served from the site root; absolute URLs are used
    /// unchanged.
    pub fn image_source(&self) -> Option<String> {
        let url = self.image_url.trim();
        if url.is_empty() {
            None
        } else if url.starts_with("http") {
            Some(url.to_string())
        } else {
            Some(format!("/{}", url.trim_start_matches('/')))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// All static content sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub education: Vec<EducationItem>,
    pub precautions: Vec<Precaution>,
    pub recommendations: Vec<Recommendation>,
}

impl Catalog {
    /// The content bundled with the library.
    ///
    /// # Errors
    /// Returns an error if a bundled file is malformed.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            exercises: serde_json::from_str(include_str!("../data/exercises.json"))?,
            education: serde_json::from_str(include_str!("../data/education.json"))?,
            precautions: serde_json::from_str(include_str!("../data/precautions.json"))?,
            recommendations: serde_json::from_str(include_str!("../data/recommendations.json"))?,
        })
    }

    /// Load every section from `dir`.
    ///
    /// # Errors
    /// Returns an error if a file is missing or malformed.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            exercises: read_section(&dir.join(EXERCISES_FILE))?,
            education: read_section(&dir.join(EDUCATION_FILE))?,
            precautions: read_section(&dir.join(PRECAUTIONS_FILE))?,
            recommendations: read_section(&dir.join(RECOMMENDATIONS_FILE))?,
        })
    }
}

fn read_section<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Turn YouTube watch and short links into embed links.
///
/// Anything else, including strings that are not URLs, comes back unchanged.
pub fn to_embed_url(raw: &str) -> String {
    let Ok(url) = Url::parse(raw) else {
        return raw.to_string();
    };
    let host = url.host_str().unwrap_or_default();

    if host.contains("youtube.com") {
        if let Some((_, id)) = url.query_pairs().find(|(k, _)| k == "v") {
            if !id.is_empty() {
                return format!("https://www.youtube.com/embed/{id}");
            }
        }
    }
    if host == "youtu.be" {
        let id = url.path().trim_start_matches('/');
        if !id.is_empty() {
            return format!("https://www.youtube.com/embed/{id}");
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.exercises.is_empty());
        assert!(!catalog.education.is_empty());
        assert!(!catalog.precautions.is_empty());
        assert!(!catalog.recommendations.is_empty());
    }

    #[test]
    fn embed_url_handles_watch_links() {
        assert_eq!(
            to_embed_url("https://www.youtube.com/watch?v=abc123&t=30"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn embed_url_handles_short_links() {
        assert_eq!(
            to_embed_url("https://youtu.be/xyz789"),
            "https://www.youtube.com/embed/xyz789"
        );
    }

    #[test]
    fn embed_url_passes_through_other_urls() {
        assert_eq!(
            to_embed_url("https://vimeo.com/12345"),
            "https://vimeo.com/12345"
        );
        assert_eq!(
            to_embed_url("https://www.youtube.com/embed/abc"),
            "https://www.youtube.com/embed/abc"
        );
        assert_eq!(to_embed_url("not a url"), "not a url");
    }

    #[test]
    fn image_source_resolution() {
        let mut p = Precaution {
            id: "p".into(),
            title: None,
            image_id: "x".into(),
            image_url: "images/a.png".into(),
            is_good: true,
        };
        assert_eq!(p.image_source().as_deref(), Some("/images/a.png"));
        p.image_url = "/images/b.png".into();
        assert_eq!(p.image_source().as_deref(), Some("/images/b.png"));
        p.image_url = "https://cdn.example.com/c.png".into();
        assert_eq!(
            p.image_source().as_deref(),
            Some("https://cdn.example.com/c.png")
        );
        p.image_url = String::new();
        assert_eq!(p.image_source(), None);
    }

    #[test]
    fn from_dir_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(EXERCISES_FILE),
            r#"[{"id":"e1","title":"Plancha"}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join(EDUCATION_FILE), "[]").unwrap();
        std::fs::write(dir.path().join(PRECAUTIONS_FILE), "[]").unwrap();
        std::fs::write(
            dir.path().join(RECOMMENDATIONS_FILE),
            r#"[{"id":"r1"}]"#,
        )
        .unwrap();

        let catalog = Catalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.exercises[0].title.as_deref(), Some("Plancha"));
        assert_eq!(catalog.exercises[0].video_url, None);
        assert_eq!(catalog.recommendations[0].text, None);
    }

    #[test]
    fn from_dir_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Catalog::from_dir(dir.path()).is_err());
    }
}
