use ratatui::style::{Color, Modifier, Style};

/// Resolved colors for every view. Views and widgets receive it as an
/// argument; nothing looks a theme up globally.
#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub selection: Color,
    pub danger: Color,
    /// Text color drawn on top of tag backgrounds.
    pub tag_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            primary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            selection: Color::Cyan,
            danger: Color::Red,
            tag_fg: Color::White,
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }
    pub fn normal_style(&self) -> Style { Style::default().fg(self.fg) }
    pub fn muted_style(&self) -> Style { Style::default().fg(self.muted) }
    pub fn selection_style(&self) -> Style { Style::default().fg(self.selection).add_modifier(Modifier::BOLD) }
    pub fn toast_style(&self) -> Style { Style::default().fg(self.accent).add_modifier(Modifier::BOLD) }
    pub fn danger_style(&self) -> Style { Style::default().fg(self.danger).add_modifier(Modifier::BOLD) }
    pub fn tag_text_style(&self) -> Style { Style::default().fg(self.tag_fg).add_modifier(Modifier::BOLD) }
}
