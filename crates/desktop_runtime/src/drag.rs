//! Free-form titlebar dragging, bounded so the window never leaves the viewport.
//!
//! Windows rest centered in the viewport; the drag offset moves them away from that center.

use crate::model::{PointerPosition, Viewport, WindowPosition, WindowSize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

/// Tracks at most one drag gesture for a window. Independent of resizing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragController {
    gesture: Option<DragGesture>,
}

impl DragController {
    /// Records the drag anchor. Refused while the window is maximized.
    pub fn begin_drag(
        &mut self,
        pointer_start: PointerPosition,
        position_start: WindowPosition,
        maximized: bool,
    ) -> bool {
        if maximized {
            return false;
        }
        self.gesture = Some(DragGesture {
            pointer_start,
            position_start,
        });
        true
    }

    /// Returns the bounded position for `pointer`, or `None` without an active gesture.
    pub fn update_drag(
        &self,
        pointer: PointerPosition,
        viewport: Viewport,
        size: WindowSize,
    ) -> Option<WindowPosition> {
        let gesture = self.gesture?;
        let dx = pointer.x.saturating_sub(gesture.pointer_start.x);
        let dy = pointer.y.saturating_sub(gesture.pointer_start.y);
        Some(bound_position(
            gesture.position_start.offset(f64::from(dx), f64::from(dy)),
            viewport,
            size,
        ))
    }

    pub fn end_drag(&mut self) -> bool {
        self.gesture.take().is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }
}

/// Limits a centered window's offset so every edge stays inside the viewport.
///
/// A window larger than the viewport on an axis is pinned to center on that axis.
pub fn bound_position(
    position: WindowPosition,
    viewport: Viewport,
    size: WindowSize,
) -> WindowPosition {
    let (width_px, height_px) = size.to_pixels(viewport);
    let slack_x = ((viewport.safe_width() - width_px) / 2.0).max(0.0);
    let slack_y = ((viewport.safe_height() - height_px) / 2.0).max(0.0);
    WindowPosition {
        x: position.x.max(-slack_x).min(slack_x),
        y: position.y.max(-slack_y).min(slack_y),
    }
}
