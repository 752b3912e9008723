//! Content model: language-indexed chrome bundles plus per-entry localized
//! fields, and the checks the static catalog must pass.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::catalog;
use crate::preferences::Language;

/// A value carried once per display language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Localized<T> {
    pub en: T,
    pub id: T,
}

impl<T> Localized<T> {
    pub const fn new(en: T, id: T) -> Self {
        Self { en, id }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Id => &self.id,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLabels {
    pub home: &'static str,
    pub projects: &'static str,
    pub skills: &'static str,
    pub experience: &'static str,
    pub contact: &'static str,
}

/// Every chrome string of the page for one language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bundle {
    pub nav: NavLabels,
    pub role: &'static str,
    pub hi: &'static str,
    pub bio_short: &'static str,
    pub bio_long: &'static str,
    pub download: &'static str,
    pub view_projects: &'static str,
    pub about_title: &'static str,
    pub projects_title: &'static str,
    pub projects_desc: &'static str,
    pub view_repo: &'static str,
    pub preview: &'static str,
    pub skills_title: &'static str,
    pub skills_desc: &'static str,
    pub experience_title: &'static str,
    pub education_title: &'static str,
    pub certs_title: &'static str,
    pub contact_title: &'static str,
    pub contact_desc: &'static str,
    pub send_email: &'static str,
    pub find_me: &'static str,
    pub footer: &'static str,
    pub toggle_language: &'static str,
    pub toggle_theme: &'static str,
    pub toggle_menu: &'static str,
    pub opens_new_tab: &'static str,
}

impl Bundle {
    /// Dotted key paths of every string in the bundle, e.g. `nav.home`.
    pub fn keys(&self) -> BTreeSet<String> {
        self.entries().into_iter().map(|(key, _)| key).collect()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Ok(value) = serde_json::to_value(self) {
            flatten(&value, "", &mut out);
        }
        out
    }
}

fn flatten(value: &serde_json::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child, &path, out);
            }
        }
        serde_json::Value::String(text) => out.push((prefix.to_string(), text.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

/// Chrome strings for `language`.
pub fn select(language: Language) -> &'static Bundle {
    match language {
        Language::En => &catalog::EN,
        Language::Id => &catalog::ID,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn label(self, bundle: &Bundle) -> &'static str {
        match self {
            Self::Home => bundle.nav.home,
            Self::Projects => bundle.nav.projects,
            Self::Skills => bundle.nav.skills,
            Self::Experience => bundle.nav.experience,
            Self::Contact => bundle.nav.contact,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: Localized<&'static str>,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Server,
    Zap,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Server => "▤",
            Self::Zap => "ϟ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub icon: SkillIcon,
    pub items: &'static [Skill],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub bullets: Localized<&'static [&'static str]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub period: &'static str,
    pub degree: Localized<&'static str>,
    pub gpa: &'static str,
    pub highlights: Localized<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: Localized<&'static str>,
    pub issuer: Localized<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub photo: &'static str,
    pub cv_href: &'static str,
    pub cv_file_name: &'static str,
    pub email: &'static str,
    pub phone_display: &'static str,
    pub whatsapp_number: &'static str,
    pub linkedin_handle: &'static str,
    pub github_handle: &'static str,
    pub copyright_year: u16,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://linkedin.com/in/{}", self.linkedin_handle)
    }

    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_handle)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project id `{0}`")]
    DuplicateProjectId(String),

    #[error("skill `{skill}` proficiency {percent} is outside 0..=100")]
    ProficiencyOutOfRange { skill: String, percent: u8 },

    #[error("empty {language} text in {field}")]
    EmptyText { field: String, language: &'static str },

    #[error("bundle keys differ between languages: {0:?}")]
    BundleParity(Vec<String>),
}

/// Checks the whole static catalog.
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_bundles(select(Language::En), select(Language::Id))?;
    validate_projects(catalog::PROJECTS)?;
    validate_skills(catalog::SKILLS)?;
    validate_entries()
}

pub fn validate_bundles(en: &Bundle, id: &Bundle) -> Result<(), CatalogError> {
    let en_keys = en.keys();
    let id_keys = id.keys();
    let mismatched: Vec<String> = en_keys.symmetric_difference(&id_keys).cloned().collect();
    if !mismatched.is_empty() {
        return Err(CatalogError::BundleParity(mismatched));
    }

    for (language, bundle) in [(Language::En, en), (Language::Id, id)] {
        for (key, value) in bundle.entries() {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyText {
                    field: format!("bundle.{key}"),
                    language: language.as_str(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_projects(projects: &[Project]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for project in projects {
        if !seen.insert(project.id) {
            return Err(CatalogError::DuplicateProjectId(project.id.to_string()));
        }
        check_localized(&format!("project `{}` description", project.id), &project.description)?;
    }

    Ok(())
}

pub fn validate_skills(groups: &[SkillGroup]) -> Result<(), CatalogError> {
    for skill in groups.iter().flat_map(|group| group.items) {
        if skill.percent > 100 {
            return Err(CatalogError::ProficiencyOutOfRange {
                skill: skill.name.to_string(),
                percent: skill.percent,
            });
        }
    }

    Ok(())
}

fn validate_entries() -> Result<(), CatalogError> {
    let experience = &catalog::EXPERIENCE;
    for language in Language::ALL {
        let bullets = experience.bullets.get(language);
        if bullets.is_empty() || bullets.iter().any(|bullet| bullet.trim().is_empty()) {
            return Err(CatalogError::EmptyText {
                field: "experience bullets".to_string(),
                language: language.as_str(),
            });
        }
    }

    check_localized("education degree", &catalog::EDUCATION.degree)?;
    check_localized("education highlights", &catalog::EDUCATION.highlights)?;

    for (index, certification) in catalog::CERTIFICATIONS.iter().enumerate() {
        check_localized(&format!("certification {index} title"), &certification.title)?;
        check_localized(&format!("certification {index} issuer"), &certification.issuer)?;
    }

    Ok(())
}

fn check_localized(field: &str, text: &Localized<&'static str>) -> Result<(), CatalogError> {
    for language in Language::ALL {
        if text.get(language).trim().is_empty() {
            return Err(CatalogError::EmptyText {
                field: field.to_string(),
                language: language.as_str(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_expose_identical_key_sets() {
        let en = select(Language::En).keys();
        let id = select(Language::Id).keys();

        assert!(en.contains("nav.home"));
        assert!(en.contains("hi"));
        assert_eq!(en, id);
    }

    #[test]
    fn selection_is_pure() {
        for language in Language::ALL {
            let first = select(language);
            let second = select(language);

            assert!(std::ptr::eq(first, second));
            assert_eq!(first.entries(), second.entries());
        }
    }

    #[test]
    fn double_language_toggle_selects_the_original_bundle() {
        for language in Language::ALL {
            assert_eq!(select(language.toggled().toggled()), select(language));
            assert_ne!(select(language.toggled()), select(language));
        }
    }

    #[test]
    fn english_bundle_is_the_baseline() {
        let en = select(Language::En);

        assert_eq!(en.hi, "Hi, I'm");
        assert_eq!(select(Language::Id).hi, "Halo, saya");
    }

    #[test]
    fn shipped_catalog_is_valid() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let mut projects = catalog::PROJECTS.to_vec();
        projects.push(catalog::PROJECTS[0]);

        assert_eq!(
            validate_projects(&projects),
            Err(CatalogError::DuplicateProjectId(catalog::PROJECTS[0].id.to_string()))
        );
    }

    #[test]
    fn proficiency_above_one_hundred_is_rejected() {
        let groups = [SkillGroup {
            category: "Broken",
            icon: SkillIcon::Code,
            items: &[Skill { name: "Overconfidence", percent: 120 }],
        }];

        assert!(matches!(
            validate_skills(&groups),
            Err(CatalogError::ProficiencyOutOfRange { percent: 120, .. })
        ));
    }

    #[test]
    fn empty_bundle_value_is_rejected() {
        let mut broken = *select(Language::Id);
        broken.role = " ";

        assert_eq!(
            validate_bundles(select(Language::En), &broken),
            Err(CatalogError::EmptyText {
                field: "bundle.role".to_string(),
                language: "id",
            })
        );
    }

    #[test]
    fn every_project_has_distinct_descriptions_per_language() {
        for project in catalog::PROJECTS {
            assert_ne!(project.description.en, project.description.id, "{}", project.id);
        }
    }

    #[test]
    fn sections_resolve_by_id_only_for_known_anchors() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("about"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn profile_links_are_built_from_handles() {
        let profile = &catalog::PROFILE;

        assert!(profile.mailto().starts_with("mailto:"));
        assert!(profile.whatsapp_url().starts_with("https://wa.me/62"));
        assert!(profile.github_url().ends_with(profile.github_handle));
    }
}
