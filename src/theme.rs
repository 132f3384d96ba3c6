use ratatui::style::Color;

use crate::menu::MenuVariant;

// Centralized menu colors. Kept as small helpers so a host theme can be
// swapped in one place without touching the renderer.

pub fn menu_bg() -> Color {
    Color::DarkGray
}
pub fn menu_fg() -> Color {
    Color::White
}
pub fn menu_selected_bg() -> Color {
    Color::Gray
}
pub fn menu_selected_fg() -> Color {
    Color::Black
}
pub fn menu_disabled_fg() -> Color {
    Color::DarkGray
}
pub fn description_fg() -> Color {
    Color::Gray
}

/// Accent color for a menu item's variant, applied to its icon and label
/// when the item is not selected.
pub fn variant_fg(variant: MenuVariant) -> Color {
    match variant {
        MenuVariant::Default => menu_fg(),
        MenuVariant::Danger => Color::Red,
        MenuVariant::Success => Color::Green,
        MenuVariant::Warning => Color::Yellow,
    }
}
