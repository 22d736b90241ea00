//! Local UI chrome state (navigation drawer). Never persisted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shell state shared by the header burger button and the sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
