//! Colors and modifiers shared by the render functions

pub mod title {
    use ratatui::style::{Color, Modifier};

    pub const FG: Color = Color::LightBlue;
    pub const MODIFIER: Modifier = Modifier::BOLD;
}

pub mod input {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const PLACEHOLDER: Color = Color::DarkGray;
}

pub mod list {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::DarkGray;
    pub const ITEM_SELECTED_BG: Color = Color::Rgb(50, 55, 70);
    pub const ITEM_SELECTED_BAR: Color = Color::Cyan;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const ITEM_NORMAL_FG: Color = Color::Gray;
    pub const NO_MATCHES: Color = Color::DarkGray;
}

pub mod buttons {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::DarkGray;
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Magenta;
    pub const OTHER: Color = Color::Gray;
    pub const QUIT: Color = Color::Red;
}

pub mod hints {
    use ratatui::style::{Color, Modifier};

    pub const KEY: Color = Color::Yellow;
    pub const TEXT: Color = Color::Gray;
    pub const VERSION: Color = Color::DarkGray;
    pub const VERSION_MODIFIER: Modifier = Modifier::ITALIC;
}

pub mod notice {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Red;
    pub const TITLE: Color = Color::LightRed;
    pub const TEXT: Color = Color::White;
    pub const BACKGROUND: Color = Color::Black;
    pub const FOOTER: Color = Color::DarkGray;
}

pub mod notification {
    use ratatui::style::Color;

    pub const INFO: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const BACKGROUND: Color = Color::Black;
}
