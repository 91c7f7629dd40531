use ratatui::style::Color;

/// Slate theme, after the original web palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub pivot: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),   // #0F172A
            surface: Color::Rgb(30, 41, 59),      // #1E293B
            text: Color::Rgb(226, 232, 240),      // #E2E8F0
            pivot: Color::Rgb(239, 68, 68),       // #EF4444
            dimmed: Color::Rgb(100, 116, 139),    // #64748B
        }
    }

    pub fn current() -> Self {
        Self::slate()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn pivot() -> Color {
        Theme::current().pivot
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
