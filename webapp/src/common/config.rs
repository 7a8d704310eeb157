use serde::Deserialize;
use tracing::{Level, debug, instrument};

// the profile shown on the page
//
// this is compiled into the binary from assets/profile.toml, so changing the
// page content never touches the components
pub const EMBEDDED_PROFILE: &str = include_str!("../../assets/profile.toml");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProfileConfig {
    pub name: String,
    pub headline: String,
    pub portrait_url: String,

    pub about: AboutConfig,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: ContactConfig,
    pub links: LinksConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AboutConfig {
    pub greeting: String,
    pub summary: String,
    pub education: String,
    pub specialization: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactConfig {
    pub email: String,
    pub location: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LinksConfig {
    pub linkedin: String,
    pub github: String,
}

// the profile lives under a [profile] table so the document can grow other
// tables later without breaking this one
#[derive(Debug, Deserialize)]
struct ProfileFile {
    profile: ProfileConfig,
}

impl ProfileConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        debug!("parsing profile document");

        let file: ProfileFile = toml::from_str(doc)?;
        let profile = file.profile;

        if profile.name.trim().is_empty() {
            return Err(anyhow::Error::msg("profile name must not be empty"));
        }

        if profile.skills.iter().any(|skill| skill.trim().is_empty()) {
            return Err(anyhow::Error::msg("skill labels must not be empty"));
        }

        if profile
            .projects
            .iter()
            .any(|project| project.title.trim().is_empty())
        {
            return Err(anyhow::Error::msg("project titles must not be empty"));
        }

        Ok(profile)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml(EMBEDDED_PROFILE)
    }

    // shown in the portrait frame when the image can't be loaded
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(3)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
        [profile]
        name = "ada lovelace"
        headline = "Analyst"
        portrait_url = "https://example.com/ada.jpg"
        skills = ["Engines", "Notes"]

        [profile.about]
        greeting = "Hi"
        summary = "s"
        education = "e"
        specialization = "x"

        [[profile.projects]]
        title = "Note G"
        description = "Bernoulli numbers"
        link = "#"

        [profile.contact]
        email = "ada@example.com"
        location = "London"

        [profile.links]
        linkedin = "#"
        github = "#"
    "##;

    #[test]
    fn embedded_profile_parses() {
        let profile = ProfileConfig::embedded().unwrap();

        assert_eq!(profile.name, "Rahul Gour");
        assert_eq!(profile.skills.len(), 23);
        assert_eq!(profile.skills.first().map(String::as_str), Some("Machine Learning"));
        assert_eq!(profile.skills.last().map(String::as_str), Some("Cypress"));
        assert_eq!(profile.projects.len(), 3);
        assert!(profile.links.linkedin.starts_with("https://www.linkedin.com/"));
    }

    #[test]
    fn minimal_profile_parses() {
        let profile = ProfileConfig::from_toml(MINIMAL).unwrap();

        assert_eq!(profile.skills, ["Engines", "Notes"]);
        assert_eq!(profile.projects[0].title, "Note G");
        assert_eq!(profile.contact.location, "London");
    }

    #[test]
    fn rejects_missing_table() {
        assert!(ProfileConfig::from_toml("name = \"x\"").is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let doc = MINIMAL.replace("ada lovelace", " ");
        assert!(ProfileConfig::from_toml(&doc).is_err());
    }

    #[test]
    fn rejects_empty_skill() {
        let doc = MINIMAL.replace("\"Notes\"", "\"\"");
        assert!(ProfileConfig::from_toml(&doc).is_err());
    }

    #[test]
    fn rejects_empty_project_title() {
        let doc = MINIMAL.replace("\"Note G\"", "\"\"");
        assert!(ProfileConfig::from_toml(&doc).is_err());
    }

    #[test]
    fn initials_from_name() {
        let profile = ProfileConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(profile.initials(), "AL");

        let embedded = ProfileConfig::embedded().unwrap();
        assert_eq!(embedded.initials(), "RG");
    }
}
