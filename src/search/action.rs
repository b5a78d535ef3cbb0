use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::DashboardSection;

/// State-update events understood by [`SearchState::reduce`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SearchAction {
    ToggleChecked { uid: String },
    ToggleAllChecked,
    ToggleSection { uid: String },
    DeleteItems {
        folders: Vec<String>,
        dashboards: Vec<String>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub sections: Vec<DashboardSection>,
    pub all_checked: bool,
}

impl SearchState {
    pub fn new(sections: Vec<DashboardSection>) -> Self {
        Self {
            sections,
            all_checked: false,
        }
    }

    pub fn reduce(&mut self, action: SearchAction) {
        debug!(?action, "reducing search action");
        match action {
            SearchAction::ToggleChecked { uid } => self.toggle_checked(&uid),
            SearchAction::ToggleAllChecked => {
                self.all_checked = !self.all_checked;
                let value = self.all_checked;
                for section in &mut self.sections {
                    section.checked = value && section.is_deletable();
                    for item in &mut section.items {
                        item.checked = value;
                    }
                }
            }
            SearchAction::ToggleSection { uid } => {
                if let Some(section) = self.sections.iter_mut().find(|s| s.uid == uid) {
                    section.expanded = !section.expanded;
                }
            }
            SearchAction::DeleteItems {
                folders,
                dashboards,
            } => {
                if folders.is_empty() && dashboards.is_empty() {
                    return;
                }
                self.sections.retain(|s| !folders.contains(&s.uid));
                for section in &mut self.sections {
                    section.items.retain(|i| !dashboards.contains(&i.uid));
                }
                self.all_checked = false;
            }
        }
    }

    fn toggle_checked(&mut self, uid: &str) {
        for section in &mut self.sections {
            if section.is_deletable() && section.uid == uid {
                section.checked = !section.checked;
                let value = section.checked;
                for item in &mut section.items {
                    item.checked = value;
                }
                continue;
            }
            for item in section.items.iter_mut().filter(|i| i.uid == uid) {
                item.checked = !item.checked;
            }
        }
    }
}
