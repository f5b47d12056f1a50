use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub bar: Color,         // Resting bar color
    pub highlight_a: Color, // First index of the reported pair
    pub highlight_b: Color, // Second index of the reported pair
    pub sorted: Color,      // Every bar once the trace is exhausted
    pub border_normal: Color,
    pub selected: Color,  // Highlighted menu entry
    pub status_bg: Color, // Status bar background
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(137, 180, 250),           // Blue for resting bars
    highlight_a: Color::Rgb(243, 139, 168),   // Red for the first index
    highlight_b: Color::Rgb(166, 227, 161),   // Green for the second index
    sorted: Color::Rgb(166, 227, 161),        // Green once fully sorted
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    selected: Color::Rgb(249, 226, 175),      // Yellow for the active menu entry
    status_bg: Color::Rgb(50, 50, 70),        // Slightly lighter BG for the status bar
};
