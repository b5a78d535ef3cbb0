use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    Dashboard,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Folder,
    /// Holds dashboards that live outside any folder. Cannot be deleted.
    General,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub uid: String,
    pub title: String,
    pub kind: ItemKind,
    pub folder_uid: Option<String>,
    pub tags: Vec<String>,
    pub checked: bool,
}

impl SearchItem {
    pub fn dashboard(uid: &str, title: &str) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            kind: ItemKind::Dashboard,
            folder_uid: None,
            tags: Vec::new(),
            checked: false,
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSection {
    pub uid: String,
    pub title: String,
    pub kind: SectionKind,
    pub checked: bool,
    pub expanded: bool,
    pub items: Vec<SearchItem>,
}

pub const GENERAL_TITLE: &str = "General";

impl DashboardSection {
    pub fn folder(uid: &str, title: &str) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            kind: SectionKind::Folder,
            checked: false,
            expanded: true,
            items: Vec::new(),
        }
    }

    pub fn general() -> Self {
        Self {
            uid: String::new(),
            title: GENERAL_TITLE.into(),
            kind: SectionKind::General,
            checked: false,
            expanded: true,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<SearchItem>) -> Self {
        self.items = items;
        self
    }

    pub fn is_deletable(&self) -> bool {
        self.kind == SectionKind::Folder
    }
}
