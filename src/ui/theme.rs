use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
    pub const SURFACE: Color = Color::Rgb(0x2a, 0x2a, 0x2e);
    pub const OVERLAY: Color = Color::Rgb(0x45, 0x47, 0x5a);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Table chrome
    pub const TABLE_BORDER: Color = Color::DarkGray;
    pub const TABLE_HEADER_BG: Color = Palette::SURFACE;
    pub const COLUMN_SEPARATOR: Color = Color::DarkGray;

    // Pinned columns while their overlay is shown
    pub const PINNED_BG: Color = Palette::DUCKBONES;
    pub const PINNED_EDGE: Color = Palette::OVERLAY;

    // Resize feedback
    pub const ARMED_EDGE: Color = Color::Yellow;
    pub const RESIZE_PROXY: Color = Color::Yellow;

    // Text
    pub const TEXT_ACCENT: Color = Color::Cyan;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    // Key chips
    pub const KEY_CHIP_BG: Color = Palette::OVERLAY;
    pub const KEY_CHIP_FG: Color = Color::White;
}
