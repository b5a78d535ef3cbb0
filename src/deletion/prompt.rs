use crate::search::SelectionCounts;

pub const MODAL_TITLE: &str = "Delete";
pub const CONFIRM_TEXT: &str = "Delete";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletionPrompt {
    pub text: String,
    pub subtitle: Option<String>,
}

fn ending(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Builds the confirmation question for a bulk delete.
///
/// Mixed selections get a subtitle warning that folder contents go too. With
/// nothing selected the dashboard wording is used.
pub fn compose_prompt(counts: SelectionCounts) -> DeletionPrompt {
    let folder_ending = ending(counts.folders);
    let dash_ending = ending(counts.dashboards);

    if counts.folders > 0 && counts.dashboards > 0 {
        DeletionPrompt {
            text: format!(
                "Do you want to delete the selected folder{folder_ending} and dashboard{dash_ending}?"
            ),
            subtitle: Some(format!(
                "All dashboards of the selected folder{folder_ending} will also be deleted"
            )),
        }
    } else if counts.folders > 0 {
        DeletionPrompt {
            text: format!(
                "Do you want to delete the selected folder{folder_ending} and all its dashboards?"
            ),
            subtitle: None,
        }
    } else {
        DeletionPrompt {
            text: format!("Do you want to delete the selected dashboard{dash_ending}?"),
            subtitle: None,
        }
    }
}
