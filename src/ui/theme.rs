use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub border: Color,
    pub status_bg: Color,
    pub bar_idle: Color,    // Untouched bars
    pub bar_compare: Color, // Source of the current step
    pub bar_placed: Color,  // Destination of the current step
    pub title: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    bar_idle: Color::Rgb(100, 100, 255),
    bar_compare: Color::Rgb(255, 100, 100),
    bar_placed: Color::Rgb(100, 255, 100),
    title: Color::Rgb(249, 226, 175), // Yellow
};
