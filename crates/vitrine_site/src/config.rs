//! Site content configuration (vitrine.toml)
//!
//! Every section is optional in the file; anything left out falls back to
//! the built-in sample content.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default file name looked up in a site directory
pub const CONFIG_FILE: &str = "vitrine.toml";

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub nav: Vec<Link>,
    pub banner: Vec<BannerItem>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub contact: ContactSection,
    pub social: Vec<SocialLink>,
}

/// Owner and headline copy
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteMeta {
    /// `<title>` of the page
    pub title: String,
    /// `lang` attribute of the root element
    pub lang: String,
    /// Logo text in the navigation bar
    pub brand: String,
    pub owner: String,
    pub badge: String,
    pub headline: String,
    pub intro: String,
    /// One-line description under the owner name in the footer
    pub tagline: String,
}

/// Navigation or quick link
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Phrase scrolling through the animated banner
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BannerItem {
    pub icon: String,
    pub text: String,
}

/// Project card content
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Group of related skills
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkillGroup {
    pub title: String,
    pub icon: String,
    pub items: Vec<String>,
}

/// Contact section copy and details
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactSection {
    pub intro: String,
    pub availability: String,
    pub details: Vec<ContactDetail>,
}

/// One contact channel (email, phone, location)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContactDetail {
    pub icon: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Social profile shown in the navbar and footer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

impl SiteConfig {
    /// Load from a file, or from `vitrine.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn link(label: &str, href: &str) -> Link {
    Link {
        label: label.into(),
        href: href.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".into(),
            lang: "en".into(),
            brand: "Portfolio".into(),
            owner: "Your Name".into(),
            badge: "Available for new projects".into(),
            headline: "Crafting Remarkable Digital Experiences".into(),
            intro: "Full stack developer building modern, scalable, user-centred web \
                    applications with current technology."
                .into(),
            tagline: "Software developer crafting remarkable digital experiences.".into(),
        }
    }
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            intro: "Have a project in mind? Let's talk about how I can help.".into(),
            availability: "Available for freelance projects and collaborations".into(),
            details: vec![
                ContactDetail {
                    icon: "mail".into(),
                    label: "Email".into(),
                    value: "you@example.com".into(),
                    href: Some("mailto:you@example.com".into()),
                },
                ContactDetail {
                    icon: "phone".into(),
                    label: "Phone".into(),
                    value: "+52 123 456 7890".into(),
                    href: Some("tel:+521234567890".into()),
                },
                ContactDetail {
                    icon: "map-pin".into(),
                    label: "Location".into(),
                    value: "Mexico City, Mexico".into(),
                    href: None,
                },
            ],
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta::default(),
            nav: vec![
                link("Home", "#home"),
                link("Projects", "#projects"),
                link("Skills", "#skills"),
                link("Contact", "#contact"),
            ],
            banner: [
                ("code-2", "Modern Web Development"),
                ("sparkles", "Innovative Design"),
                ("zap", "High Performance"),
                ("rocket", "Scalable Solutions"),
                ("star", "User Experience"),
                ("award", "Quality Code"),
            ]
            .into_iter()
            .map(|(icon, text)| BannerItem {
                icon: icon.into(),
                text: text.into(),
            })
            .collect(),
            projects: vec![
                Project {
                    title: "E-Commerce Platform".into(),
                    description: "Full online store with shopping cart, payment gateway and \
                                  an administration panel."
                        .into(),
                    image: "https://images.unsplash.com/photo-1658297063569-162817482fb6?w=1080"
                        .into(),
                    tags: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
                    live_url: Some("#".into()),
                    source_url: Some("#".into()),
                },
                Project {
                    title: "Analytics Dashboard".into(),
                    description: "Interactive dashboard with real-time data visualisation, \
                                  advanced charts and custom reports."
                        .into(),
                    image: "https://images.unsplash.com/photo-1748609160056-7b95f30041f0?w=1080"
                        .into(),
                    tags: strings(&["TypeScript", "Next.js", "Chart.js", "PostgreSQL"]),
                    live_url: Some("#".into()),
                    source_url: Some("#".into()),
                },
                Project {
                    title: "Mobile App".into(),
                    description: "Cross-platform mobile app with cloud sync and offline-first \
                                  features."
                        .into(),
                    image: "https://images.unsplash.com/photo-1618761714954-0b8cd0026356?w=1080"
                        .into(),
                    tags: strings(&["React Native", "Firebase", "Redux", "iOS/Android"]),
                    live_url: Some("#".into()),
                    source_url: Some("#".into()),
                },
                Project {
                    title: "Task Management System".into(),
                    description: "Collaborative task manager with project assignment, time \
                                  tracking and notifications."
                        .into(),
                    image: "https://images.unsplash.com/photo-1566915896913-549d796d2166?w=1080"
                        .into(),
                    tags: strings(&["Vue.js", "Express", "Socket.io", "MySQL"]),
                    live_url: Some("#".into()),
                    source_url: Some("#".into()),
                },
            ],
            skills: vec![
                SkillGroup {
                    title: "Frontend Development".into(),
                    icon: "code-2".into(),
                    items: strings(&["React", "TypeScript", "Next.js", "Tailwind CSS", "Vue.js"]),
                },
                SkillGroup {
                    title: "Backend Development".into(),
                    icon: "database".into(),
                    items: strings(&["Node.js", "Python", "PostgreSQL", "MongoDB", "GraphQL"]),
                },
                SkillGroup {
                    title: "Mobile Development".into(),
                    icon: "smartphone".into(),
                    items: strings(&["React Native", "Flutter", "iOS", "Android", "PWA"]),
                },
                SkillGroup {
                    title: "Cloud & DevOps".into(),
                    icon: "cloud".into(),
                    items: strings(&["AWS", "Docker", "Kubernetes", "CI/CD", "Vercel"]),
                },
                SkillGroup {
                    title: "UI/UX Design".into(),
                    icon: "palette".into(),
                    items: strings(&[
                        "Figma",
                        "Adobe XD",
                        "Responsive Design",
                        "Accessibility",
                        "Design Systems",
                    ]),
                },
                SkillGroup {
                    title: "Performance".into(),
                    icon: "zap".into(),
                    items: strings(&["Optimization", "SEO", "Web Vitals", "Testing", "Debugging"]),
                },
            ],
            contact: ContactSection::default(),
            social: vec![
                SocialLink {
                    icon: "github".into(),
                    label: "GitHub".into(),
                    href: "#".into(),
                },
                SocialLink {
                    icon: "linkedin".into(),
                    label: "LinkedIn".into(),
                    href: "#".into(),
                },
                SocialLink {
                    icon: "twitter".into(),
                    label: "Twitter".into(),
                    href: "#".into(),
                },
                SocialLink {
                    icon: "mail".into(),
                    label: "Email".into(),
                    href: "mailto:you@example.com".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_default_sections() {
        let config = SiteConfig::from_toml(
            r#"
            [site]
            owner = "Ada Lovelace"

            [[projects]]
            title = "Engine"
            description = "Analytical"
            image = "engine.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.owner, "Ada Lovelace");
        assert_eq!(config.site.brand, "Portfolio");
        assert_eq!(config.projects.len(), 1);
        assert!(config.projects[0].tags.is_empty());
        assert_eq!(config.skills.len(), 6);
    }

    #[test]
    fn default_config_survives_toml() {
        let config = SiteConfig::default();
        let parsed = SiteConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn rejects_wrong_types() {
        let err = SiteConfig::from_toml("nav = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
