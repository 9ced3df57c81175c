//! Profile content records
//!
//! Everything the portfolio displays is read-only data of these shapes,
//! loaded from a JSON file or taken from the embedded sample.

use serde::{Deserialize, Serialize};

/// A complete portfolio profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    /// About-section paragraphs.
    pub summary: Vec<String>,
    pub contact: ContactInfo,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub education: Vec<Education>,
}

/// How to reach the person behind the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Formspree-format endpoint the contact form posts to.
    pub form_endpoint: String,
}

/// One position in the work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub location: String,
    pub position: String,
    /// Display range, e.g. `"Mar 2022 – Present"`.
    pub duration: String,
    pub description: Vec<String>,
    #[serde(default)]
    pub remote: bool,
    pub technologies: Vec<String>,
}

/// A highlighted project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

/// A named cluster of skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: u32,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: u32,
    pub degree: String,
    pub status: String,
    pub institution: String,
    pub period: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_from_camel_case_json() {
        let raw = r#"{
            "name": "Ada Lovelace",
            "headline": "Analyst",
            "tagline": "Numbers into notes.",
            "summary": ["First paragraph."],
            "contact": {
                "email": "ada@example.com",
                "location": "London",
                "github": "https://example.com/ada",
                "formEndpoint": "https://formspree.io/f/abcd1234"
            },
            "experience": [{
                "id": 1,
                "company": "Analytical Engines Ltd",
                "location": "London",
                "position": "Lead Analyst",
                "duration": "1842 – 1843",
                "description": ["Wrote the first program."],
                "remote": true,
                "technologies": ["Punch cards"]
            }],
            "skills": [{"category": "Mathematics", "items": ["Calculus"]}],
            "projects": [{
                "id": 1,
                "title": "Notes on the Analytical Engine",
                "description": "Annotated translation.",
                "technologies": ["Pen", "Paper"],
                "liveUrl": "https://example.com/notes"
            }],
            "certifications": [{"id": 1, "name": "None", "issuer": "N/A", "date": "1843"}],
            "education": [{
                "id": 1,
                "degree": "Private tutoring",
                "status": "Completed",
                "institution": "Home",
                "period": "1820s"
            }]
        }"#;

        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.contact.form_endpoint, "https://formspree.io/f/abcd1234");
        assert_eq!(profile.contact.linkedin, None);
        assert!(profile.experience[0].remote);
        assert_eq!(
            profile.projects[0].live_url.as_deref(),
            Some("https://example.com/notes")
        );
        assert_eq!(profile.projects[0].repo_url, None);
    }

    #[test]
    fn remote_defaults_to_false() {
        let raw = r#"{
            "id": 2,
            "company": "Cascade Digital",
            "location": "Seattle, WA",
            "position": "Developer",
            "duration": "2019 – 2022",
            "description": [],
            "technologies": []
        }"#;
        let experience: Experience = serde_json::from_str(raw).unwrap();
        assert!(!experience.remote);
    }
}
