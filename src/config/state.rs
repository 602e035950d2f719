// src/config/state.rs
use super::consts::DEFAULT_ROSTER_FILE;
use super::options::AppOptions;

/// Which ranked list the table shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    MostCited,
    MostRecent,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::MostCited, Tab::MostRecent];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::MostCited => "Most Cited",
            Tab::MostRecent => "Most Recent",
        }
    }

    /// Row label in delimited exports.
    pub fn list_name(&self) -> &'static str {
        match self {
            Tab::MostCited => "cited",
            Tab::MostRecent => "recent",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub tab: Tab,

    /// Index into the subject's people; `None` shows the combined ranking.
    pub selected_person: Option<usize>,

    /// Text fields of the run bar.
    pub roster_path: String,
    pub subject_text: String,
    pub records_path: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            selected_person: None,
            roster_path: s!(DEFAULT_ROSTER_FILE),
            subject_text: s!(),
            records_path: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
