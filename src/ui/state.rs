use std::cell::Cell;
use std::rc::Rc;

/// UI-local state that does not belong in the conversation store.
pub struct UiState {
    pub settings_open: bool,
    /// Path typed into the attachment field.
    pub image_path_input: String,
    pub show_image_input: bool,
    /// Set by the store listener when palette or mode changes.
    pub theme_dirty: Rc<Cell<bool>>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            settings_open: false,
            image_path_input: String::new(),
            show_image_input: false,
            // Apply the initial theme on the first frame.
            theme_dirty: Rc::new(Cell::new(true)),
        }
    }

    /// Returns whether the theme needs reapplying and clears the flag.
    pub fn take_theme_dirty(&self) -> bool {
        self.theme_dirty.replace(false)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
