//! Built-in sample profile
//!
//! Used when no profile file is configured or the configured one fails to
//! load, so the app always has something to render.

use crate::types::{
    Certification, ContactInfo, Education, Experience, Profile, Project, SkillGroup,
};

/// Returns the embedded demo profile.
#[must_use]
pub fn sample_profile() -> Profile {
    Profile {
        name: "Jordan Reyes".to_string(),
        headline: "Full-Stack Developer".to_string(),
        tagline: "I build reliable software and the tooling around it.".to_string(),
        summary: vec![
            "Full-stack developer with seven years of experience shipping web \
             applications and the services behind them. Comfortable anywhere \
             between a database schema and a pixel."
                .to_string(),
            "Lately focused on developer tooling and terminal interfaces. I like \
             small teams, clear ownership, and software that keeps working after \
             everyone has gone home."
                .to_string(),
        ],
        contact: ContactInfo {
            email: "jordan.reyes@example.com".to_string(),
            location: "Portland, OR".to_string(),
            github: Some("https://github.com/octocat".to_string()),
            linkedin: Some("https://www.linkedin.com/in/octocat".to_string()),
            form_endpoint: "https://formspree.io/f/your-form-id".to_string(),
        },
        experience: vec![
            Experience {
                id: 1,
                company: "Brightlayer Labs".to_string(),
                location: "Portland, OR".to_string(),
                position: "Senior Full-Stack Developer".to_string(),
                duration: "Mar 2022 – Present".to_string(),
                description: vec![
                    "Lead development of an internal platform serving 40+ product \
                     teams, from API design through deployment."
                        .to_string(),
                    "Cut median page load from 2.1s to 600ms by reworking the data \
                     layer and adding request coalescing."
                        .to_string(),
                    "Mentor three developers and run the team's architecture \
                     reviews."
                        .to_string(),
                ],
                remote: true,
                technologies: vec![
                    "TypeScript".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                    "PostgreSQL".to_string(),
                    "AWS".to_string(),
                ],
            },
            Experience {
                id: 2,
                company: "Cascade Digital".to_string(),
                location: "Seattle, WA".to_string(),
                position: "Full-Stack Developer".to_string(),
                duration: "Jun 2019 – Feb 2022".to_string(),
                description: vec![
                    "Built and maintained e-commerce storefronts for a dozen retail \
                     clients."
                        .to_string(),
                    "Introduced contract tests between frontend and services, which \
                     halved integration regressions."
                        .to_string(),
                ],
                remote: false,
                technologies: vec![
                    "JavaScript".to_string(),
                    "Vue".to_string(),
                    "Django".to_string(),
                    "MySQL".to_string(),
                ],
            },
            Experience {
                id: 3,
                company: "Harborline Studio".to_string(),
                location: "Portland, OR".to_string(),
                position: "Junior Developer".to_string(),
                duration: "Aug 2017 – May 2019".to_string(),
                description: vec![
                    "Shipped marketing sites and small web apps for local \
                     businesses."
                        .to_string(),
                    "Owned the studio's static-site build pipeline."
                        .to_string(),
                ],
                remote: false,
                technologies: vec![
                    "HTML/CSS".to_string(),
                    "JavaScript".to_string(),
                    "PHP".to_string(),
                ],
            },
        ],
        skills: vec![
            SkillGroup {
                category: "Languages".to_string(),
                items: vec![
                    "TypeScript".to_string(),
                    "JavaScript".to_string(),
                    "Rust".to_string(),
                    "Python".to_string(),
                    "SQL".to_string(),
                ],
            },
            SkillGroup {
                category: "Frontend".to_string(),
                items: vec![
                    "React".to_string(),
                    "Vue".to_string(),
                    "Tailwind CSS".to_string(),
                    "Vite".to_string(),
                ],
            },
            SkillGroup {
                category: "Backend".to_string(),
                items: vec![
                    "Node.js".to_string(),
                    "Django".to_string(),
                    "PostgreSQL".to_string(),
                    "Redis".to_string(),
                ],
            },
            SkillGroup {
                category: "Tooling".to_string(),
                items: vec![
                    "Docker".to_string(),
                    "GitHub Actions".to_string(),
                    "Terraform".to_string(),
                    "Grafana".to_string(),
                ],
            },
        ],
        projects: vec![
            Project {
                id: 1,
                title: "Shelfwise".to_string(),
                description: "Inventory tracker for small bookshops with barcode \
                              scanning and daily reconciliation reports."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "PostgreSQL".to_string(),
                ],
                live_url: Some("https://shelfwise.example.com".to_string()),
                repo_url: Some("https://github.com/octocat/shelfwise".to_string()),
            },
            Project {
                id: 2,
                title: "tide-cli".to_string(),
                description: "Command-line tide tables for the Oregon coast, with \
                              offline caching of NOAA station data."
                    .to_string(),
                technologies: vec!["Rust".to_string(), "SQLite".to_string()],
                live_url: None,
                repo_url: Some("https://github.com/octocat/tide-cli".to_string()),
            },
            Project {
                id: 3,
                title: "Standup Digest".to_string(),
                description: "Slack bot that collects async standup notes and posts \
                              a morning summary per team."
                    .to_string(),
                technologies: vec![
                    "Python".to_string(),
                    "FastAPI".to_string(),
                    "Redis".to_string(),
                ],
                live_url: Some("https://digest.example.com".to_string()),
                repo_url: None,
            },
        ],
        certifications: vec![
            Certification {
                id: 1,
                name: "AWS Certified Developer – Associate".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: "2023".to_string(),
            },
            Certification {
                id: 2,
                name: "Professional Scrum Master I".to_string(),
                issuer: "Scrum.org".to_string(),
                date: "2021".to_string(),
            },
        ],
        education: vec![Education {
            id: 1,
            degree: "B.S. Computer Science".to_string(),
            status: "Graduated".to_string(),
            institution: "Oregon State University".to_string(),
            period: "2013 – 2017".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_profile_round_trips_through_json() {
        let profile = sample_profile();
        let raw = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.name, profile.name);
        assert_eq!(back.experience.len(), 3);
        assert_eq!(back.skills.len(), 4);
    }

    #[test]
    fn sample_profile_covers_every_section() {
        let profile = sample_profile();
        assert!(!profile.summary.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.contact.email.is_empty());
    }
}
