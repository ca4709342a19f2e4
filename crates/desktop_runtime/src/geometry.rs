//! Percentage-based window resizing anchored at one of four corners.

use crate::model::{PointerPosition, ResizeCorner, SizeBounds, Viewport, WindowSize};

/// Anchor recorded when a resize gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    pub corner: ResizeCorner,
    pub pointer_start: PointerPosition,
    pub size_start: WindowSize,
}

/// Tracks at most one resize gesture for a window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryController {
    gesture: Option<ResizeGesture>,
}

impl GeometryController {
    /// Records the gesture anchor. Refused while the window is maximized.
    ///
    /// A new anchor replaces any gesture that was never ended.
    pub fn begin_resize(
        &mut self,
        corner: ResizeCorner,
        pointer_start: PointerPosition,
        size_start: WindowSize,
        maximized: bool,
    ) -> bool {
        if maximized {
            return false;
        }
        self.gesture = Some(ResizeGesture {
            corner,
            pointer_start,
            size_start,
        });
        true
    }

    /// Recomputes the size from the fixed anchor for the current pointer position.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update_resize(
        &self,
        pointer: PointerPosition,
        viewport: Viewport,
        bounds: SizeBounds,
    ) -> Option<WindowSize> {
        let gesture = self.gesture?;
        let dx = pointer.x.saturating_sub(gesture.pointer_start.x);
        let dy = pointer.y.saturating_sub(gesture.pointer_start.y);
        Some(resize_size(
            gesture.size_start,
            gesture.corner,
            dx,
            dy,
            viewport,
            bounds,
        ))
    }

    /// Clears the anchor. Returns whether a gesture was active.
    pub fn end_resize(&mut self) -> bool {
        self.gesture.take().is_some()
    }

    pub fn gesture(&self) -> Option<ResizeGesture> {
        self.gesture
    }

    pub fn active_corner(&self) -> Option<ResizeCorner> {
        self.gesture.map(|gesture| gesture.corner)
    }
}

/// Applies pixel deltas for a corner drag to a percentage size and clamps the result.
pub fn resize_size(
    start: WindowSize,
    corner: ResizeCorner,
    dx: i32,
    dy: i32,
    viewport: Viewport,
    bounds: SizeBounds,
) -> WindowSize {
    let dw = corner.width_sign() * f64::from(dx) * 100.0 / viewport.safe_width();
    let dh = corner.height_sign() * f64::from(dy) * 100.0 / viewport.safe_height();
    bounds.clamp(
        WindowSize {
            width_percent: start.width_percent + dw,
            height_percent: start.height_percent + dh,
        },
        viewport.class(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ResponsiveSize, ViewportClass};

    const VIEWPORT: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    fn bounds() -> SizeBounds {
        SizeBounds {
            min: WindowSize::new(25.0, 25.0),
            max: ResponsiveSize {
                normal: WindowSize::new(75.0, 80.0),
                narrow: WindowSize::new(100.0, 80.0),
            },
        }
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn south_east_grows_with_positive_deltas() {
        let size = resize_size(
            WindowSize::new(50.0, 50.0),
            ResizeCorner::SouthEast,
            100,
            80,
            VIEWPORT,
            bounds(),
        );
        assert_eq!(size, WindowSize::new(60.0, 60.0));
    }

    #[test]
    fn north_west_grows_with_negative_deltas() {
        let size = resize_size(
            WindowSize::new(50.0, 50.0),
            ResizeCorner::NorthWest,
            -100,
            -80,
            VIEWPORT,
            bounds(),
        );
        assert_eq!(size, WindowSize::new(60.0, 60.0));
    }

    #[test]
    fn mixed_corners_combine_axis_signs() {
        let start = WindowSize::new(50.0, 50.0);
        assert_eq!(
            resize_size(start, ResizeCorner::NorthEast, 100, 80, VIEWPORT, bounds()),
            WindowSize::new(60.0, 40.0)
        );
        assert_eq!(
            resize_size(start, ResizeCorner::SouthWest, 100, 80, VIEWPORT, bounds()),
            WindowSize::new(40.0, 60.0)
        );
    }

    #[test]
    fn huge_deltas_stay_within_bounds_for_every_corner() {
        let deltas = [
            (i32::MAX / 2, i32::MAX / 2),
            (i32::MIN / 2, i32::MIN / 2),
            (100_000, -100_000),
            (-100_000, 100_000),
            (0, 0),
            (3, -7),
        ];
        for viewport in [VIEWPORT, Viewport::new(400.0, 700.0)] {
            let class = viewport.class();
            for corner in ResizeCorner::ALL {
                for (dx, dy) in deltas {
                    let size = resize_size(
                        WindowSize::new(50.0, 50.0),
                        corner,
                        dx,
                        dy,
                        viewport,
                        bounds(),
                    );
                    assert!(
                        bounds().contains(size, class),
                        "{corner:?} ({dx}, {dy}) in {class:?} produced {size:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn narrow_viewport_allows_full_width() {
        let size = resize_size(
            WindowSize::new(80.0, 50.0),
            ResizeCorner::SouthEast,
            4_000,
            0,
            Viewport::new(600.0, 800.0),
            bounds(),
        );
        assert_eq!(size.width_percent, 100.0);
        assert_eq!(Viewport::new(600.0, 800.0).class(), ViewportClass::Narrow);
    }

    #[test]
    fn updates_recompute_from_anchor_without_drift() {
        let mut controller = GeometryController::default();
        assert!(controller.begin_resize(
            ResizeCorner::SouthEast,
            pointer(500, 400),
            WindowSize::new(50.0, 50.0),
            false,
        ));

        for step in 1..=37 {
            controller.update_resize(pointer(500 + step * 3, 400 + step), VIEWPORT, bounds());
        }
        let back_home = controller
            .update_resize(pointer(500, 400), VIEWPORT, bounds())
            .expect("active gesture");
        assert_eq!(back_home, WindowSize::new(50.0, 50.0));
    }

    #[test]
    fn maximized_window_refuses_resize() {
        let mut controller = GeometryController::default();
        assert!(!controller.begin_resize(
            ResizeCorner::SouthEast,
            pointer(0, 0),
            WindowSize::new(75.0, 80.0),
            true,
        ));
        assert_eq!(
            controller.update_resize(pointer(50, 50), VIEWPORT, bounds()),
            None
        );
    }

    #[test]
    fn end_resize_clears_anchor() {
        let mut controller = GeometryController::default();
        controller.begin_resize(
            ResizeCorner::NorthEast,
            pointer(0, 0),
            WindowSize::new(50.0, 50.0),
            false,
        );
        assert_eq!(controller.active_corner(), Some(ResizeCorner::NorthEast));
        assert!(controller.end_resize());
        assert!(!controller.end_resize());
        assert_eq!(
            controller.update_resize(pointer(10, 10), VIEWPORT, bounds()),
            None
        );
    }

    #[test]
    fn new_gesture_replaces_stale_anchor() {
        let mut controller = GeometryController::default();
        controller.begin_resize(
            ResizeCorner::NorthWest,
            pointer(0, 0),
            WindowSize::new(30.0, 30.0),
            false,
        );
        controller.begin_resize(
            ResizeCorner::SouthEast,
            pointer(100, 100),
            WindowSize::new(50.0, 50.0),
            false,
        );
        let size = controller
            .update_resize(pointer(200, 180), VIEWPORT, bounds())
            .expect("active gesture");
        assert_eq!(size, WindowSize::new(60.0, 60.0));
    }
}
