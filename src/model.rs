//! Content model for the Pearl Coast microsite.
//! Everything here is loaded once from the embedded site document and never mutated.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::config::{SyncConfig, SyncConfigError};

const EMBEDDED_SITE: &str = include_str!("../content/site.json");

/// Page anchors owned by the fixed sections; project ids must not shadow them.
pub const RESERVED_ANCHORS: [&str; 5] = ["home", "transformation", "projects", "partners", "download"];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// DOM anchor of the project's panel and key into the marker table.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub origin: String,
    pub design: String,
    pub progress: String,
    pub expected: String,
    /// Published budget, `None` while the figure is not public.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub budget: Option<String>,
    pub image: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum BusinessCategory {
    #[serde(rename = "美食")]
    Food,
    #[serde(rename = "伴手禮")]
    Gift,
    #[serde(rename = "旅宿")]
    Lodging,
}

impl BusinessCategory {
    pub fn label(self) -> &'static str {
        match self {
            BusinessCategory::Food => "美食",
            BusinessCategory::Gift => "伴手禮",
            BusinessCategory::Lodging => "旅宿",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Business {
    pub id: String,
    pub category: BusinessCategory,
    pub name: String,
    pub description: String,
    pub image: String,
}

/// Marker location in the coastline map's 400x600 viewBox.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct MarkerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Secondary,
    Orange,
    Yellow,
}

impl Accent {
    pub fn color(self) -> &'static str {
        match self {
            Accent::Secondary => "#8cc280",
            Accent::Orange => "#EE7800",
            Accent::Yellow => "#f0ea30",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub body: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteMeta {
    pub brand: String,
    pub logo: String,
    pub hero_image: String,
    pub hero_kicker: String,
    pub hero_title: String,
    pub hero_lead: String,
    pub copyright: String,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site document lists no projects")]
    NoProjects,
    #[error("site document lists no partner businesses")]
    NoBusinesses,
    #[error("duplicate project id `{0}`")]
    DuplicateProjectId(String),
    #[error("duplicate business id `{0}`")]
    DuplicateBusinessId(String),
    #[error("id `{0}` is not a valid URL fragment")]
    InvalidId(String),
    #[error("project id `{0}` collides with a fixed page anchor")]
    ReservedId(String),
    #[error("project `{0}` has no map marker")]
    MissingMarker(String),
    #[error("invalid sync config: {0}")]
    InvalidSyncConfig(#[from] SyncConfigError),
}

/// Wire shape of `content/site.json`.
#[derive(Deserialize)]
struct SiteDocument {
    site: SiteMeta,
    #[serde(default)]
    sync: SyncConfig,
    projects: Vec<Project>,
    #[serde(default)]
    map_markers: BTreeMap<String, MarkerPosition>,
    #[serde(default)]
    milestones: Vec<Milestone>,
    businesses: Vec<Business>,
}

/// Read-only store of every piece of page content.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentStore {
    site: SiteMeta,
    sync: SyncConfig,
    projects: Vec<Project>,
    markers: BTreeMap<String, MarkerPosition>,
    milestones: Vec<Milestone>,
    businesses: Vec<Business>,
}

impl ContentStore {
    /// Loads the document compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_SITE)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let doc: SiteDocument = serde_json::from_str(raw)?;
        Self::from_document(doc)
    }

    fn from_document(doc: SiteDocument) -> Result<Self, ContentError> {
        if doc.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        if doc.businesses.is_empty() {
            return Err(ContentError::NoBusinesses);
        }
        doc.sync.validate()?;

        let mut seen = HashSet::new();
        for p in &doc.projects {
            if !is_fragment_safe(&p.id) {
                return Err(ContentError::InvalidId(p.id.clone()));
            }
            if RESERVED_ANCHORS.contains(&p.id.as_str()) {
                return Err(ContentError::ReservedId(p.id.clone()));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(p.id.clone()));
            }
            if !doc.map_markers.contains_key(&p.id) {
                return Err(ContentError::MissingMarker(p.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for b in &doc.businesses {
            if !is_fragment_safe(&b.id) {
                return Err(ContentError::InvalidId(b.id.clone()));
            }
            if !seen.insert(b.id.as_str()) {
                return Err(ContentError::DuplicateBusinessId(b.id.clone()));
            }
        }

        Ok(Self {
            site: doc.site,
            sync: doc.sync,
            projects: doc.projects,
            markers: doc.map_markers,
            milestones: doc.milestones,
            businesses: doc.businesses,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn marker(&self, project_id: &str) -> Option<MarkerPosition> {
        self.markers.get(project_id).copied()
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn site(&self) -> &SiteMeta {
        &self.site
    }

    pub fn sync_config(&self) -> SyncConfig {
        self.sync
    }
}

fn is_fragment_safe(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> serde_json::Value {
        json!({
            "site": {
                "brand": "b", "logo": "l", "hero_image": "h", "hero_kicker": "k",
                "hero_title": "t", "hero_lead": "lead", "copyright": "c"
            },
            "projects": [
                { "id": "zhuwei", "title": "Z", "subtitle": "", "origin": "", "design": "",
                  "progress": "", "expected": "", "budget": "", "image": "z.jpg" },
                { "id": "yongan", "title": "Y", "subtitle": "", "origin": "", "design": "",
                  "progress": "", "expected": "", "budget": "NT$ 1.2 億", "image": "y.jpg" }
            ],
            "map_markers": {
                "zhuwei": { "x": 65.0, "y": 80.0 },
                "yongan": { "x": 85.0, "y": 280.0 }
            },
            "businesses": [
                { "id": "b1", "category": "美食", "name": "n", "description": "d", "image": "i" },
                { "id": "b2", "category": "旅宿", "name": "n", "description": "d", "image": "i" }
            ]
        })
    }

    fn load(v: serde_json::Value) -> Result<ContentStore, ContentError> {
        ContentStore::from_json(&v.to_string())
    }

    #[test]
    fn embedded_document_loads() {
        let store = ContentStore::embedded().expect("embedded site document is valid");
        let ids: Vec<&str> = store.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["zhuwei", "yongan", "xinwu", "connection"]);
        assert_eq!(store.businesses().len(), 3);
        assert_eq!(store.milestones().len(), 3);
        assert_eq!(store.sync_config(), SyncConfig::default());
        for p in store.projects() {
            assert!(store.marker(&p.id).is_some());
        }
    }

    #[test]
    fn blank_budget_is_none() {
        let store = load(doc()).unwrap();
        assert_eq!(store.projects()[0].budget, None);
        assert_eq!(store.projects()[1].budget.as_deref(), Some("NT$ 1.2 億"));
    }

    #[test]
    fn categories_use_chinese_labels() {
        let store = load(doc()).unwrap();
        assert_eq!(store.businesses()[0].category, BusinessCategory::Food);
        assert_eq!(store.businesses()[1].category, BusinessCategory::Lodging);
        assert_eq!(BusinessCategory::Gift.label(), "伴手禮");
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let mut v = doc();
        v["businesses"][0]["category"] = json!("Spa");
        assert!(matches!(load(v), Err(ContentError::Parse(_))));
    }

    #[test]
    fn project_lookup_is_bounds_checked() {
        let store = load(doc()).unwrap();
        assert_eq!(store.project(1).map(|p| p.title.as_str()), Some("Y"));
        assert!(store.project(2).is_none());
    }

    #[test]
    fn rejects_empty_project_list() {
        let mut v = doc();
        v["projects"] = json!([]);
        assert!(matches!(load(v), Err(ContentError::NoProjects)));
    }

    #[test]
    fn rejects_empty_business_list() {
        let mut v = doc();
        v["businesses"] = json!([]);
        assert!(matches!(load(v), Err(ContentError::NoBusinesses)));

        let mut v = doc();
        v.as_object_mut().unwrap().remove("businesses");
        assert!(matches!(load(v), Err(ContentError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_project_id() {
        let mut v = doc();
        v["projects"][1]["id"] = json!("zhuwei");
        match load(v) {
            Err(ContentError::DuplicateProjectId(id)) => assert_eq!(id, "zhuwei"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_business_id() {
        let mut v = doc();
        v["businesses"][1]["id"] = json!("b1");
        assert!(matches!(load(v), Err(ContentError::DuplicateBusinessId(_))));
    }

    #[test]
    fn rejects_unsafe_and_reserved_ids() {
        let mut v = doc();
        v["projects"][0]["id"] = json!("zhu wei");
        assert!(matches!(load(v), Err(ContentError::InvalidId(_))));

        let mut v = doc();
        v["projects"][0]["id"] = json!("");
        assert!(matches!(load(v), Err(ContentError::InvalidId(_))));

        let mut v = doc();
        v["projects"][0]["id"] = json!("partners");
        v["map_markers"]["partners"] = json!({ "x": 1.0, "y": 1.0 });
        assert!(matches!(load(v), Err(ContentError::ReservedId(_))));
    }

    #[test]
    fn rejects_project_without_marker() {
        let mut v = doc();
        v["map_markers"].as_object_mut().unwrap().remove("yongan");
        match load(v) {
            Err(ContentError::MissingMarker(id)) => assert_eq!(id, "yongan"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_sync_config() {
        let mut v = doc();
        v["sync"] = json!({ "window_bottom_ratio": 0.0 });
        assert!(matches!(load(v), Err(ContentError::InvalidSyncConfig(_))));
    }
}
