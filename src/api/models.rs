use serde::{Deserialize, Serialize};

use crate::search::{DashboardSection, ItemKind, SearchItem};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitType {
    #[serde(rename = "dash-folder")]
    Folder,
    #[serde(rename = "dash-db")]
    Dashboard,
    #[serde(other)]
    Other,
}

/// One row of `GET /api/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub uid: String,
    pub title: String,
    #[serde(rename = "type")]
    pub hit_type: HitType,
    #[serde(default)]
    pub folder_uid: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Groups flat search hits into folder sections.
///
/// Folders keep the order the server returned them in. Dashboards whose
/// folder is unknown, or that have none, end up in a trailing General
/// section, which is omitted when empty.
pub fn sections_from_hits(hits: Vec<SearchHit>) -> Vec<DashboardSection> {
    let mut sections: Vec<DashboardSection> = hits
        .iter()
        .filter(|h| h.hit_type == HitType::Folder)
        .map(|h| DashboardSection::folder(&h.uid, &h.title))
        .collect();
    let mut general = DashboardSection::general();

    for hit in hits.into_iter().filter(|h| h.hit_type == HitType::Dashboard) {
        let item = SearchItem {
            uid: hit.uid,
            title: hit.title,
            kind: ItemKind::Dashboard,
            folder_uid: hit.folder_uid,
            tags: hit.tags,
            checked: false,
        };
        let home = item
            .folder_uid
            .as_deref()
            .filter(|f| !f.is_empty())
            .and_then(|f| sections.iter().position(|s| s.uid == f));
        match home {
            Some(i) => sections[i].items.push(item),
            None => general.items.push(item),
        }
    }

    if !general.items.is_empty() {
        sections.push(general);
    }
    sections
}
