// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Place the displayed image inside the editor viewport.

use crate::app::model::ViewMode;
use crate::domain::geometry::{Orientation, Point, Rect, Size};

/// Displayed image rectangle inside a viewport of `container` size.
///
/// The image is shown turned by `orientation`, scaled per `view_mode` and
/// centered. `Fit` scales down to the viewport but never enlarges.
pub fn layout(
    image_size: Size,
    container: Size,
    orientation: Orientation,
    view_mode: ViewMode,
) -> Rect {
    let displayed = orientation.screen_size(image_size);
    if displayed.is_empty() || container.is_empty() {
        return Rect::default();
    }

    let scale = view_mode.zoom_factor().unwrap_or_else(|| {
        let scale_x = container.width / displayed.width;
        let scale_y = container.height / displayed.height;
        scale_x.min(scale_y).min(1.0)
    });

    let size = Size::new(displayed.width * scale, displayed.height * scale);
    let offset = Point::new(
        (container.width - size.width) / 2.0,
        (container.height - size.height) / 2.0,
    );
    Rect::from_origin_size(offset, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_scales_down_and_centers() {
        let rect = layout(
            Size::new(800.0, 400.0),
            Size::new(400.0, 400.0),
            Orientation::Deg0,
            ViewMode::Fit,
        );
        assert_eq!(rect, Rect::new(0.0, 100.0, 400.0, 300.0));
    }

    #[test]
    fn fit_never_enlarges() {
        let rect = layout(
            Size::new(100.0, 50.0),
            Size::new(400.0, 400.0),
            Orientation::Deg0,
            ViewMode::Fit,
        );
        assert_eq!(rect, Rect::new(150.0, 175.0, 250.0, 225.0));
    }

    #[test]
    fn quarter_turn_swaps_axes() {
        let rect = layout(
            Size::new(800.0, 400.0),
            Size::new(400.0, 400.0),
            Orientation::Deg270,
            ViewMode::Fit,
        );
        assert_eq!(rect, Rect::new(100.0, 0.0, 300.0, 400.0));
    }

    #[test]
    fn empty_container_yields_empty_rect() {
        let rect = layout(
            Size::new(800.0, 400.0),
            Size::new(0.0, 400.0),
            Orientation::Deg0,
            ViewMode::Fit,
        );
        assert!(rect.is_empty());
    }
}
