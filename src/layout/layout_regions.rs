use ratatui::layout::Rect;

/// A clickable part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Input,
    List,
    /// Target button, by index into the configured targets
    Button(usize),
    Quit,
}

/// Where each component was rendered in the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    /// Inner area of the list, borders excluded
    pub list: Option<Rect>,
    pub buttons: Vec<Rect>,
    pub quit: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.input = None;
        self.list = None;
        self.buttons.clear();
        self.quit = None;
    }
}
