//! The menu-item list a popover positions.
//!
//! Items are action-typed: activating an enabled item hands its action value
//! back to the caller, which runs the action and then drives the
//! controller's close path. Disabled items yield nothing and leave the
//! panel open.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::events::Key;
use crate::geometry::PageRect;
use crate::placement::ComputedPosition;

/// Panel width class. The fixed classes map to the logical widths used by
/// pixel-unit hosts; `Auto` sizes to content with the same floor as `Sm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuWidth {
    Auto,
    #[default]
    Sm,
    Md,
    Lg,
}

impl MenuWidth {
    /// Fixed width in logical units, `None` for content-driven sizing.
    pub fn units(self) -> Option<i32> {
        match self {
            MenuWidth::Auto => None,
            MenuWidth::Sm => Some(192),
            MenuWidth::Md => Some(224),
            MenuWidth::Lg => Some(256),
        }
    }

    /// Resolve against a content width; `Auto` never drops below the
    /// `Sm` width.
    pub fn resolve(self, content_width: i32) -> i32 {
        match self.units() {
            Some(units) => units,
            None => content_width.max(192),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuVariant {
    #[default]
    Default,
    Danger,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct MenuItem<A> {
    pub label: String,
    pub icon: Option<&'static str>,
    pub action: A,
    pub variant: MenuVariant,
    pub disabled: bool,
    pub description: Option<String>,
}

impl<A> MenuItem<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action,
            variant: MenuVariant::Default,
            disabled: false,
            description: None,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn variant(mut self, variant: MenuVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug)]
pub struct Menu<A> {
    items: Vec<MenuItem<A>>,
    selected: usize,
    // Rect of the last render, in frame coordinates; hit tests resolve
    // against it.
    rendered: Option<Rect>,
}

impl<A> Menu<A> {
    pub fn new(items: Vec<MenuItem<A>>) -> Self {
        Self {
            items,
            selected: 0,
            rendered: None,
        }
    }

    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, selected: usize) {
        self.selected = selected.min(self.items.len().saturating_sub(1));
    }

    /// Move the selection up or down with wrap-around.
    pub fn move_selection(&mut self, delta: isize) {
        let total = self.items.len();
        if total == 0 {
            return;
        }
        if delta.is_negative() {
            let steps = delta.unsigned_abs() % total;
            self.selected = (self.selected + total - steps) % total;
        } else {
            self.selected = (self.selected + delta as usize) % total;
        }
    }

    /// Activate an item by index. Disabled or out-of-range items yield
    /// nothing; the caller closes the panel only on `Some`.
    pub fn activate(&self, index: usize) -> Option<A>
    where
        A: Copy,
    {
        let item = self.items.get(index)?;
        if item.disabled {
            return None;
        }
        Some(item.action)
    }

    /// Keyboard navigation: up/down move the selection, enter activates
    /// the current item.
    pub fn handle_key(&mut self, key: Key) -> Option<A>
    where
        A: Copy,
    {
        match key {
            Key::Up => {
                self.move_selection(-1);
                None
            }
            Key::Down => {
                self.move_selection(1);
                None
            }
            Key::Enter => self.activate(self.selected),
            _ => None,
        }
    }

    /// Resolve a pointer position (frame coordinates) to an item index
    /// against the last rendered rect.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        let rect = self.rendered?;
        let left = i32::from(rect.x);
        let top = i32::from(rect.y);
        if x < left + 1 || x >= left + i32::from(rect.width) - 1 {
            return None;
        }
        let row = y - (top + 1);
        if row < 0 {
            return None;
        }
        let index = row as usize;
        (index < self.items.len() && y < top + i32::from(rect.height) - 1).then_some(index)
    }

    /// Content-driven size in cells: one row per item plus the border, wide
    /// enough for the marker, widest icon and widest label including the
    /// description and its gap.
    pub fn measured_size(&self) -> (i32, i32) {
        let row_width = self
            .items
            .iter()
            .map(|item| {
                let label = item.label.chars().count() as i32;
                let description = item
                    .description
                    .as_ref()
                    .map_or(0, |text| text.chars().count() as i32 + 2);
                label + description
            })
            .max()
            .unwrap_or(1);
        let icon_width = self
            .items
            .iter()
            .map(|item| item.icon.map_or(0, |icon| icon.chars().count() as i32))
            .max()
            .unwrap_or(0);
        let width = row_width + icon_width + 6;
        let height = self.items.len() as i32 + 2;
        (width, height)
    }

    /// The panel rect a cell-unit host reports from its `LayoutProbe` once
    /// the menu is mounted.
    pub fn measured_rect(&self, left: i32, top: i32) -> PageRect {
        let (width, height) = self.measured_size();
        PageRect::from_origin_size(left, top, width, height)
    }

    /// Paint the menu at the controller's resolved position, clipped to
    /// `bounds`. Also records the drawn rect for later hit tests.
    pub fn render(&mut self, frame: &mut Frame, position: ComputedPosition, bounds: Rect) {
        self.rendered = None;
        if self.items.is_empty() || bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let (want_width, want_height) = self.measured_size();
        let max_x = i32::from(bounds.x) + i32::from(bounds.width);
        let max_y = i32::from(bounds.y) + i32::from(bounds.height);
        let start_x = position.left.max(i32::from(bounds.x));
        let start_y = position.top.max(i32::from(bounds.y));
        if start_x >= max_x || start_y >= max_y {
            return;
        }
        let width = want_width.min(max_x - start_x) as u16;
        let height = want_height.min(max_y - start_y) as u16;
        if width == 0 || height == 0 {
            return;
        }
        let rect = Rect {
            x: start_x as u16,
            y: start_y as u16,
            width,
            height,
        };
        let buffer = frame.buffer_mut();
        let clip = rect.intersection(buffer.area);
        if clip.width == 0 || clip.height == 0 {
            return;
        }
        let menu_style = Style::default()
            .bg(crate::theme::menu_bg())
            .fg(crate::theme::menu_fg());
        for y in clip.y..clip.y.saturating_add(clip.height) {
            for x in clip.x..clip.x.saturating_add(clip.width) {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    // Prevent color bleed-through from whatever was behind
                    cell.reset();
                    cell.set_symbol(" ");
                    cell.set_style(menu_style);
                }
            }
        }
        let selected_style = Style::default()
            .bg(crate::theme::menu_selected_bg())
            .fg(crate::theme::menu_selected_fg())
            .add_modifier(Modifier::BOLD);
        let inner_x = rect.x.saturating_add(1);
        let inner_width = rect.width.saturating_sub(2).max(1) as usize;
        for (idx, item) in self.items.iter().enumerate() {
            let y = rect.y.saturating_add(idx as u16 + 1);
            if y >= clip.y.saturating_add(clip.height) {
                break;
            }
            let selected = idx == self.selected;
            let marker = if selected { ">" } else { " " };
            let base = match item.icon {
                Some(icon) => format!("{marker} {icon} {label}", label = item.label),
                None => format!("{marker}   {label}", label = item.label),
            };
            let base_style = if selected {
                selected_style
            } else if item.disabled {
                Style::default()
                    .bg(crate::theme::menu_bg())
                    .fg(crate::theme::menu_disabled_fg())
                    .add_modifier(Modifier::DIM)
            } else {
                Style::default()
                    .bg(crate::theme::menu_bg())
                    .fg(crate::theme::variant_fg(item.variant))
            };
            buffer.set_stringn(inner_x, y, &base, inner_width, base_style);
            if let Some(description) = &item.description {
                // gap of two cells between label and description
                let used = base.chars().count().min(inner_width) + 2;
                if used < inner_width {
                    let description_style = if selected {
                        selected_style.add_modifier(Modifier::DIM)
                    } else {
                        Style::default()
                            .bg(crate::theme::menu_bg())
                            .fg(crate::theme::description_fg())
                            .add_modifier(Modifier::DIM)
                    };
                    buffer.set_stringn(
                        inner_x.saturating_add(used as u16),
                        y,
                        description,
                        inner_width - used,
                        description_style,
                    );
                }
            }
        }
        self.rendered = Some(rect);
    }
}
