//! Résumé content and its PDF rendering.
//!
//! A [`Resume`] is read from JSON, optionally passed through the
//! passphrase obfuscation of [`ObfsCipher`], and rendered to a single page
//! with [`Resume::to_pdf`].
//!
//! ```
//! use resume_pdf::config::RenderConfig;
//! use resume_pdf::fonts::FontRegistry;
//! use resume_pdf::resume::Resume;
//!
//! let resume: Resume = serde_json::from_str(r#"{
//!     "Name": "Jane Doe", "Trade": "Engineer",
//!     "Tel": "555-0100", "Email": "jane@example.com",
//!     "Experience": []
//! }"#)?;
//! let fonts = FontRegistry::with_base14()?;
//! let doc = resume.to_pdf(&fonts, &RenderConfig::default())?;
//! assert_eq!(doc.len(), 9);
//! # Ok::<(), resume_pdf::error::Error>(())
//! ```

mod render;

use crate::encryption::ObfsCipher;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single-page résumé.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Resume {
    /// Full name, set as the page heading
    pub name: String,
    /// Job title or trade
    pub trade: String,
    /// Telephone number
    pub tel: String,
    /// E-mail address
    pub email: String,
    /// Positions, most recent first
    pub experience: Vec<Experience>,
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Experience {
    /// Employer or project name
    pub name: String,
    /// Employer or project URL
    #[serde(rename = "URL")]
    pub url: String,
    /// Start date, free form
    pub since: String,
    /// End date; absent for a current position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended: Option<String>,
    /// Technologies used
    pub technologies: Vec<String>,
    /// Description of the work
    pub summary: String,
}

impl Resume {
    /// Parse a résumé from JSON text.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Read a résumé from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Obfuscate or restore every text field with `passphrase`.
    ///
    /// Each field is processed independently, so applying this twice with
    /// the same passphrase restores the original content.
    pub fn obfuscate(&mut self, passphrase: &str) -> Result<()> {
        let cipher = ObfsCipher::new(passphrase);
        cipher.pad_str(&mut self.name)?;
        cipher.pad_str(&mut self.trade)?;
        cipher.pad_str(&mut self.tel)?;
        cipher.pad_str(&mut self.email)?;
        for exp in &mut self.experience {
            cipher.pad_str(&mut exp.name)?;
            cipher.pad_str(&mut exp.url)?;
            cipher.pad_str(&mut exp.since)?;
            if let Some(ended) = exp.ended.as_mut() {
                cipher.pad_str(ended)?;
            }
            for tech in &mut exp.technologies {
                cipher.pad_str(tech)?;
            }
            cipher.pad_str(&mut exp.summary)?;
        }
        log::debug!(
            "processed {} experience entries with the obfuscation cipher",
            self.experience.len()
        );
        Ok(())
    }
}

impl Experience {
    /// Timeline line: `Since X`, or `From X until Y` for an ended position.
    pub fn timeline(&self) -> String {
        match self.ended.as_deref() {
            Some(ended) if !ended.is_empty() => format!("From {} until {}", self.since, ended),
            _ => format!("Since {}", self.since),
        }
    }

    /// Technologies line: `Technologies: a, b, c`.
    pub fn technologies_line(&self) -> String {
        format!("Technologies: {}", self.technologies.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SAMPLE: &str = r#"{
        "Name": "Jane Doe",
        "Trade": "Software Engineer",
        "Tel": "555-0100",
        "Email": "jane@example.com",
        "Experience": [
            {
                "Name": "Acme Corp",
                "URL": "https://acme.example",
                "Since": "2019",
                "Technologies": ["Rust", "PostgreSQL"],
                "Summary": "Built the billing pipeline."
            },
            {
                "Name": "Initech",
                "URL": "https://initech.example",
                "Since": "2015",
                "Ended": "2019",
                "Technologies": [],
                "Summary": "Maintained TPS reports."
            }
        ]
    }"#;

    #[test]
    fn test_parse_json() {
        let resume = Resume::from_json(SAMPLE).unwrap();
        assert_eq!(resume.name, "Jane Doe");
        assert_eq!(resume.experience.len(), 2);
        assert_eq!(resume.experience[0].url, "https://acme.example");
        assert_eq!(resume.experience[0].ended, None);
        assert_eq!(resume.experience[1].ended.as_deref(), Some("2019"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let resume =
            Resume::from_json(r#"{"Name":"Jane","Experience":[{"Name":"Acme","Summary":"x"}]}"#)
                .unwrap();
        assert_eq!(resume.name, "Jane");
        assert_eq!(resume.trade, "");
        assert_eq!(resume.email, "");
        let exp = &resume.experience[0];
        assert_eq!(exp.since, "");
        assert_eq!(exp.ended, None);
        assert!(exp.technologies.is_empty());
        assert_eq!(exp.timeline(), "Since ");
    }

    #[test]
    fn test_empty_object() {
        let resume = Resume::from_json("{}").unwrap();
        assert_eq!(resume, Resume::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Resume::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_json_omits_missing_end_date() {
        let resume = Resume::from_json(SAMPLE).unwrap();
        let json = resume.to_json().unwrap();
        assert_eq!(json.matches("\"Ended\"").count(), 1);
        assert_eq!(Resume::from_json(&json).unwrap(), resume);
    }

    #[test]
    fn test_timeline() {
        let resume = Resume::from_json(SAMPLE).unwrap();
        assert_eq!(resume.experience[0].timeline(), "Since 2019");
        assert_eq!(resume.experience[1].timeline(), "From 2015 until 2019");
    }

    #[test]
    fn test_technologies_line() {
        let resume = Resume::from_json(SAMPLE).unwrap();
        assert_eq!(
            resume.experience[0].technologies_line(),
            "Technologies: Rust, PostgreSQL"
        );
        assert_eq!(resume.experience[1].technologies_line(), "Technologies: ");
    }

    #[test]
    fn test_obfuscate_round_trip() {
        let original = Resume::from_json(SAMPLE).unwrap();
        let mut resume = original.clone();
        resume.obfuscate("hunter2").unwrap();
        assert_ne!(resume.name, original.name);
        assert_eq!(resume.name.as_bytes(), &[51, 83, 125, 15, 0, 72, 10, 84]);
        assert_eq!(resume.experience[0].ended, None);
        resume.obfuscate("hunter2").unwrap();
        assert_eq!(resume, original);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let resume = Resume::from_file(&path).unwrap();
        assert_eq!(resume.trade, "Software Engineer");
    }
}
