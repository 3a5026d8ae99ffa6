//! Layout helpers
//!
//! Rectangle arithmetic for centring panels, scaling buttons and mouse
//! hit-testing.

use ratatui::layout::Rect;

/// Rect of at most `width` x `height` cells, centred in `r`
pub fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Scale a `base_width` x `base_height` box by `scale`, never going below
/// `min_width` x `min_height`, and centre it in `slot`.
///
/// The centre of the result depends only on `slot`, so scaling never moves
/// the box.
pub fn scaled_rect(
    slot: Rect,
    base_width: u16,
    base_height: u16,
    scale: f64,
    min_width: u16,
    min_height: u16,
) -> Rect {
    let scale_dim = |base: u16, min: u16| -> u16 {
        let scaled = (f64::from(base) * scale).round();
        let scaled = if scaled.is_finite() && scaled > 0.0 {
            scaled.min(f64::from(u16::MAX)) as u16
        } else {
            0
        };
        scaled.max(min)
    };
    centered_box(
        scale_dim(base_width, min_width),
        scale_dim(base_height, min_height),
        slot,
    )
}

/// Whether the cell at (`column`, `row`) lies inside `area`
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
