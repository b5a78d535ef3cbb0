use serde::{Deserialize, Serialize};

use super::models::{DashboardSection, ItemKind, SectionKind};

/// UIDs handed to the deletion service, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionRequest {
    pub folders: Vec<String>,
    pub dashboards: Vec<String>,
}

impl DeletionRequest {
    pub fn new(folders: Vec<String>, dashboards: Vec<String>) -> Self {
        let mut req = Self::default();
        for uid in folders {
            push_unique(&mut req.folders, uid);
        }
        for uid in dashboards {
            push_unique(&mut req.dashboards, uid);
        }
        req
    }

    pub fn counts(&self) -> SelectionCounts {
        SelectionCounts {
            folders: self.folders.len(),
            dashboards: self.dashboards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.dashboards.is_empty()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionCounts {
    pub folders: usize,
    pub dashboards: usize,
}

/// Collects what a bulk delete would remove.
///
/// A checked folder section stands for everything inside it, so its items are
/// not listed separately. Other sections contribute their checked items; the
/// General section is never deleted itself, even when checked.
pub fn checked_uids(sections: &[DashboardSection]) -> DeletionRequest {
    let mut req = DeletionRequest::default();
    for section in sections {
        if section.checked && section.kind == SectionKind::Folder {
            push_unique(&mut req.folders, section.uid.clone());
            continue;
        }
        for item in section.items.iter().filter(|i| i.checked) {
            match item.kind {
                ItemKind::Folder => push_unique(&mut req.folders, item.uid.clone()),
                ItemKind::Dashboard => push_unique(&mut req.dashboards, item.uid.clone()),
            }
        }
    }
    req
}

fn push_unique(list: &mut Vec<String>, uid: String) {
    if !list.contains(&uid) {
        list.push(uid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::models::SearchItem;

    fn checked(mut item: SearchItem) -> SearchItem {
        item.checked = true;
        item
    }

    #[test]
    fn checked_folder_hides_its_items() {
        let mut ops = DashboardSection::folder("f1", "Ops")
            .with_items(vec![checked(SearchItem::dashboard("d1", "CPU"))]);
        ops.checked = true;
        let general = DashboardSection::general().with_items(vec![
            checked(SearchItem::dashboard("d2", "Home")),
            SearchItem::dashboard("d3", "Other"),
        ]);
        let req = checked_uids(&[ops, general]);
        assert_eq!(req.folders, vec!["f1"]);
        assert_eq!(req.dashboards, vec!["d2"]);
    }

    #[test]
    fn checked_general_section_contributes_only_its_checked_items() {
        let mut general = DashboardSection::general().with_items(vec![
            checked(SearchItem::dashboard("d1", "Home")),
            SearchItem::dashboard("d2", "Other"),
        ]);
        general.checked = true;
        let req = checked_uids(&[general]);
        assert!(req.folders.is_empty());
        assert_eq!(req.dashboards, vec!["d1"]);
    }

    #[test]
    fn request_drops_duplicates() {
        let req = DeletionRequest::new(
            vec!["a".into(), "a".into()],
            vec!["b".into(), "c".into(), "b".into()],
        );
        assert_eq!(req.counts(), SelectionCounts { folders: 1, dashboards: 2 });
    }
}
