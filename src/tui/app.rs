use crate::deletion::DEFAULT_LISTING_PATH;
use crate::search::{
    checked_uids, DashboardSection, DeletionRequest, SearchAction, SearchItem, SearchState,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    List,
    ConfirmDelete,
}

/// A visible line of the browser: a section header or one of its items.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Row {
    Section(usize),
    Item(usize, usize),
}

pub struct App {
    state: SearchState,
    rows: Vec<Row>,
    pub selected: usize,
    pub view: View,
    pub location: String,
    pub query: Option<String>,
    toast: Option<String>,
    toast_ticks: u16,
}

impl App {
    pub fn new(sections: Vec<DashboardSection>) -> Self {
        let mut app = Self {
            state: SearchState::new(sections),
            rows: Vec::new(),
            selected: 0,
            view: View::List,
            location: DEFAULT_LISTING_PATH.to_string(),
            query: None,
            toast: None,
            toast_ticks: 0,
        };
        app.recompute();
        app
    }

    pub fn sections(&self) -> &[DashboardSection] {
        &self.state.sections
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn all_checked(&self) -> bool {
        self.state.all_checked
    }

    pub fn section(&self, idx: usize) -> &DashboardSection {
        &self.state.sections[idx]
    }

    pub fn item(&self, section: usize, item: usize) -> &SearchItem {
        &self.state.sections[section].items[item]
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() { return; }
        self.selected = (self.selected + 1).min(self.rows.len().saturating_sub(1));
    }

    pub fn prev(&mut self) {
        if self.rows.is_empty() { return; }
        if self.selected > 0 { self.selected -= 1; }
    }

    fn selected_uid(&self) -> Option<String> {
        match self.rows.get(self.selected)? {
            Row::Section(s) => Some(self.section(*s).uid.clone()),
            Row::Item(s, i) => Some(self.item(*s, *i).uid.clone()),
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(uid) = self.selected_uid() {
            self.apply(SearchAction::ToggleChecked { uid });
        }
    }

    pub fn toggle_all(&mut self) {
        self.apply(SearchAction::ToggleAllChecked);
    }

    pub fn toggle_expand(&mut self) {
        if let Some(Row::Section(s)) = self.rows.get(self.selected).copied() {
            let uid = self.section(s).uid.clone();
            self.apply(SearchAction::ToggleSection { uid });
        }
    }

    pub fn apply(&mut self, action: SearchAction) {
        self.state.reduce(action);
        self.recompute();
    }

    pub fn replace_sections(&mut self, sections: Vec<DashboardSection>) {
        self.state = SearchState::new(sections);
        self.recompute();
    }

    pub fn deletion_request(&self) -> DeletionRequest {
        checked_uids(&self.state.sections)
    }

    pub fn toast(&mut self, msg: String) {
        self.toast = Some(msg);
        self.toast_ticks = 10; // ~2s at 200ms tick
    }

    pub fn toast_message(&self) -> Option<&str> { self.toast.as_deref() }

    pub fn tick(&mut self) {
        if self.toast_ticks > 0 {
            self.toast_ticks -= 1;
            if self.toast_ticks == 0 {
                self.toast = None;
            }
        }
    }

    fn recompute(&mut self) {
        self.rows.clear();
        for (s, section) in self.state.sections.iter().enumerate() {
            self.rows.push(Row::Section(s));
            if section.expanded {
                self.rows.extend((0..section.items.len()).map(|i| Row::Item(s, i)));
            }
        }
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }
}
