//! Per-window lifecycle state machine with size memory.
//!
//! Transitions:
//!
//! | From                 | Event           | To                                      |
//! |----------------------|-----------------|-----------------------------------------|
//! | Closed               | open            | Open, default size                      |
//! | Minimized            | open            | Open, size unchanged                    |
//! | Open / MaximizedOpen | minimize        | Minimized                               |
//! | any but Closed       | close           | Closed, size memory discarded           |
//! | Open                 | toggle maximize | MaximizedOpen, previous size captured   |
//! | MaximizedOpen        | toggle maximize | Open, previous size restored            |
//!
//! Every other event is absorbed as a no-op. Mutators return whether anything changed.

use crate::{
    drag::{bound_position, DragController},
    geometry::GeometryController,
    model::{
        PointerPosition, ResizeCorner, Viewport, WindowDescriptor, WindowPosition, WindowSize,
        WindowState, WindowStatus,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowLifecycle {
    descriptor: WindowDescriptor,
    state: WindowState,
    geometry: GeometryController,
    drag: DragController,
}

impl WindowLifecycle {
    pub fn new(descriptor: WindowDescriptor) -> Self {
        let state = WindowState::closed(descriptor.default_size.normal);
        Self {
            descriptor,
            state,
            geometry: GeometryController::default(),
            drag: DragController::default(),
        }
    }

    pub fn descriptor(&self) -> &WindowDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn status(&self) -> WindowStatus {
        self.state.status
    }

    pub fn size(&self) -> WindowSize {
        self.state.size
    }

    pub fn position(&self) -> WindowPosition {
        self.state.position
    }

    pub fn is_visible(&self) -> bool {
        self.state.status.is_visible()
    }

    pub fn is_maximized(&self) -> bool {
        self.state.status == WindowStatus::MaximizedOpen
    }

    /// Corner of the resize gesture in progress, if any.
    pub fn resize_corner(&self) -> Option<ResizeCorner> {
        self.geometry.active_corner()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Open intent: shows a closed window at its default size or un-minimizes a hidden one.
    pub fn open(&mut self, viewport: Viewport) -> bool {
        match self.state.status {
            WindowStatus::Closed => {
                self.state = WindowState {
                    status: WindowStatus::Open,
                    size: self.descriptor.default_size_for(viewport),
                    previous_size: None,
                    position: WindowPosition::ORIGIN,
                };
                true
            }
            WindowStatus::Minimized => {
                self.state.status = WindowStatus::Open;
                true
            }
            WindowStatus::Open | WindowStatus::MaximizedOpen => false,
        }
    }

    pub fn minimize(&mut self) -> bool {
        if !self.state.status.is_visible() {
            return false;
        }
        self.end_gestures();
        self.state.status = WindowStatus::Minimized;
        true
    }

    /// Close intent: a status change back to the mount-time state, not a deallocation.
    pub fn close(&mut self) -> bool {
        if self.state.status == WindowStatus::Closed {
            return false;
        }
        self.end_gestures();
        self.state = WindowState::closed(self.descriptor.default_size.normal);
        true
    }

    pub fn toggle_maximize(&mut self, viewport: Viewport) -> bool {
        match self.state.status {
            WindowStatus::Open => {
                self.end_gestures();
                self.state.previous_size = Some(self.state.size);
                self.state.size = self.descriptor.maximized_size_for(viewport);
                self.state.position = WindowPosition::ORIGIN;
                self.state.status = WindowStatus::MaximizedOpen;
                true
            }
            WindowStatus::MaximizedOpen => {
                let restored = self
                    .state
                    .previous_size
                    .unwrap_or_else(|| self.descriptor.default_size_for(viewport));
                self.state.size = self
                    .descriptor
                    .bounds
                    .clamp(restored, viewport.class());
                self.state.status = WindowStatus::Open;
                true
            }
            WindowStatus::Closed | WindowStatus::Minimized => false,
        }
    }

    pub fn begin_resize(&mut self, corner: ResizeCorner, pointer: PointerPosition) -> bool {
        if self.state.status != WindowStatus::Open {
            return false;
        }
        self.geometry
            .begin_resize(corner, pointer, self.state.size, self.is_maximized())
    }

    pub fn update_resize(&mut self, pointer: PointerPosition, viewport: Viewport) -> bool {
        if self.state.status != WindowStatus::Open {
            return false;
        }
        let Some(size) = self
            .geometry
            .update_resize(pointer, viewport, self.descriptor.bounds)
        else {
            return false;
        };
        let position = bound_position(self.state.position, viewport, size);
        let changed = size != self.state.size || position != self.state.position;
        self.state.size = size;
        self.state.position = position;
        changed
    }

    pub fn end_resize(&mut self) -> bool {
        self.geometry.end_resize()
    }

    pub fn begin_drag(&mut self, pointer: PointerPosition) -> bool {
        if self.state.status != WindowStatus::Open {
            return false;
        }
        self.drag
            .begin_drag(pointer, self.state.position, self.is_maximized())
    }

    pub fn update_drag(&mut self, pointer: PointerPosition, viewport: Viewport) -> bool {
        if self.state.status != WindowStatus::Open {
            return false;
        }
        let Some(position) = self.drag.update_drag(pointer, viewport, self.state.size) else {
            return false;
        };
        let changed = position != self.state.position;
        self.state.position = position;
        changed
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.end_drag()
    }

    /// Re-applies size bounds and drag bounds after the viewport changed.
    pub fn refit(&mut self, viewport: Viewport) -> bool {
        let before = self.state;
        match self.state.status {
            WindowStatus::Closed => {}
            WindowStatus::MaximizedOpen => {
                self.state.size = self.descriptor.maximized_size_for(viewport);
            }
            WindowStatus::Open | WindowStatus::Minimized => {
                self.state.size = self
                    .descriptor
                    .bounds
                    .clamp(self.state.size, viewport.class());
            }
        }
        if self.state.status != WindowStatus::Closed {
            self.state.position = bound_position(self.state.position, viewport, self.state.size);
        }
        self.state != before
    }

    fn end_gestures(&mut self) {
        self.geometry.end_resize();
        self.drag.end_drag();
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ResponsiveSize, SizeBounds};

    const NORMAL: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };
    const NARROW: Viewport = Viewport {
        width: 400.0,
        height: 800.0,
    };

    fn terminal() -> WindowLifecycle {
        WindowLifecycle::new(WindowDescriptor {
            app_id: ApplicationId::trusted("system.terminal"),
            title: "zsh".to_string(),
            label: "Terminal".to_string(),
            icon: "terminal".to_string(),
            default_size: ResponsiveSize {
                normal: WindowSize::new(50.0, 50.0),
                narrow: WindowSize::new(100.0, 50.0),
            },
            maximized_size: ResponsiveSize {
                normal: WindowSize::new(75.0, 80.0),
                narrow: WindowSize::new(100.0, 80.0),
            },
            bounds: SizeBounds {
                min: WindowSize::new(25.0, 25.0),
                max: ResponsiveSize {
                    normal: WindowSize::new(75.0, 80.0),
                    narrow: WindowSize::new(100.0, 80.0),
                },
            },
        })
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn resize_to(window: &mut WindowLifecycle, target: WindowSize) {
        // Pixel deltas that move a NORMAL-viewport SE resize from the current size to `target`.
        let start = window.size();
        let dx = ((target.width_percent - start.width_percent) * NORMAL.width / 100.0) as i32;
        let dy = ((target.height_percent - start.height_percent) * NORMAL.height / 100.0) as i32;
        assert!(window.begin_resize(ResizeCorner::SouthEast, pointer(0, 0)));
        window.update_resize(pointer(dx, dy), NORMAL);
        assert!(window.end_resize());
    }

    #[test]
    fn starts_closed() {
        let window = terminal();
        assert_eq!(window.status(), WindowStatus::Closed);
        assert_eq!(window.state().previous_size, None);
    }

    #[test]
    fn open_uses_default_size_for_viewport_class() {
        let mut window = terminal();
        assert!(window.open(NARROW));
        assert_eq!(window.status(), WindowStatus::Open);
        assert_eq!(window.size(), WindowSize::new(100.0, 50.0));
    }

    #[test]
    fn open_while_open_is_idempotent() {
        let mut window = terminal();
        window.open(NORMAL);
        resize_to(&mut window, WindowSize::new(60.0, 40.0));
        let before = window.state();

        assert!(!window.open(NORMAL));
        assert_eq!(window.state(), before);
    }

    #[test]
    fn maximize_then_restore_round_trips_exactly() {
        let mut window = terminal();
        window.open(NORMAL);
        resize_to(&mut window, WindowSize::new(60.0, 40.0));
        assert_eq!(window.size(), WindowSize::new(60.0, 40.0));

        assert!(window.toggle_maximize(NORMAL));
        assert_eq!(window.status(), WindowStatus::MaximizedOpen);
        assert_eq!(window.size(), WindowSize::new(75.0, 80.0));
        assert_eq!(
            window.state().previous_size,
            Some(WindowSize::new(60.0, 40.0))
        );

        assert!(window.toggle_maximize(NORMAL));
        assert_eq!(window.status(), WindowStatus::Open);
        assert_eq!(window.size(), WindowSize::new(60.0, 40.0));
    }

    #[test]
    fn reopen_after_minimize_preserves_size() {
        let mut window = terminal();
        window.open(NORMAL);
        resize_to(&mut window, WindowSize::new(35.0, 65.0));

        assert!(window.minimize());
        assert_eq!(window.status(), WindowStatus::Minimized);
        assert!(window.open(NORMAL));
        assert_eq!(window.status(), WindowStatus::Open);
        assert_eq!(window.size(), WindowSize::new(35.0, 65.0));
    }

    #[test]
    fn minimized_maximized_window_reopens_open_at_same_size() {
        let mut window = terminal();
        window.open(NORMAL);
        window.toggle_maximize(NORMAL);
        window.minimize();
        assert_eq!(window.status(), WindowStatus::Minimized);

        assert!(window.open(NORMAL));
        assert_eq!(window.status(), WindowStatus::Open);
        assert_eq!(window.size(), WindowSize::new(75.0, 80.0));
    }

    #[test]
    fn resize_keeps_dragged_window_inside_viewport() {
        let mut window = terminal();
        window.open(NORMAL);
        window.begin_drag(pointer(0, 0));
        window.update_drag(pointer(10_000, 0), NORMAL);
        window.end_drag();
        assert_eq!(window.position().x, 250.0);

        resize_to(&mut window, WindowSize::new(75.0, 50.0));
        assert_eq!(window.size(), WindowSize::new(75.0, 50.0));

        let (width_px, _) = window.size().to_pixels(NORMAL);
        let right_edge = NORMAL.width / 2.0 + window.position().x + width_px / 2.0;
        assert!(right_edge <= NORMAL.width, "right edge at {right_edge}");
        assert_eq!(window.position().x, 125.0);
    }

    #[test]
    fn close_discards_size_and_maximize_memory() {
        let mut window = terminal();
        window.open(NORMAL);
        resize_to(&mut window, WindowSize::new(60.0, 40.0));
        window.toggle_maximize(NORMAL);

        assert!(window.close());
        assert_eq!(window.status(), WindowStatus::Closed);
        assert_eq!(window.state().previous_size, None);

        window.open(NORMAL);
        assert_eq!(window.size(), WindowSize::new(50.0, 50.0));
        assert!(!window.is_maximized());
    }

    #[test]
    fn closed_window_absorbs_chrome_and_gesture_events() {
        let mut window = terminal();
        assert!(!window.minimize());
        assert!(!window.close());
        assert!(!window.toggle_maximize(NORMAL));
        assert!(!window.begin_resize(ResizeCorner::SouthEast, pointer(0, 0)));
        assert!(!window.update_resize(pointer(100, 100), NORMAL));
        assert!(!window.begin_drag(pointer(0, 0)));
        assert_eq!(window.status(), WindowStatus::Closed);
    }

    #[test]
    fn maximized_window_refuses_resize_and_drag() {
        let mut window = terminal();
        window.open(NORMAL);
        window.toggle_maximize(NORMAL);
        assert!(!window.begin_resize(ResizeCorner::NorthWest, pointer(0, 0)));
        assert!(!window.begin_drag(pointer(0, 0)));
        assert_eq!(window.size(), WindowSize::new(75.0, 80.0));
    }

    #[test]
    fn restore_without_memory_falls_back_to_default() {
        let mut window = terminal();
        window.open(NORMAL);
        window.toggle_maximize(NORMAL);
        window.state.previous_size = None;

        window.toggle_maximize(NORMAL);
        assert_eq!(window.size(), WindowSize::new(50.0, 50.0));
    }

    #[test]
    fn minimize_ends_gesture_in_progress() {
        let mut window = terminal();
        window.open(NORMAL);
        window.begin_resize(ResizeCorner::SouthEast, pointer(0, 0));
        window.begin_drag(pointer(0, 0));
        window.minimize();
        assert_eq!(window.resize_corner(), None);
        assert!(!window.is_dragging());
    }

    #[test]
    fn maximize_recenters_window() {
        let mut window = terminal();
        window.open(NORMAL);
        window.begin_drag(pointer(0, 0));
        window.update_drag(pointer(80, 60), NORMAL);
        window.end_drag();
        assert_eq!(window.position(), WindowPosition { x: 80.0, y: 60.0 });

        window.toggle_maximize(NORMAL);
        assert_eq!(window.position(), WindowPosition::ORIGIN);
    }

    #[test]
    fn refit_clamps_to_new_viewport_class() {
        let mut window = terminal();
        window.open(NARROW);
        assert_eq!(window.size(), WindowSize::new(100.0, 50.0));

        assert!(window.refit(NORMAL));
        assert_eq!(window.size(), WindowSize::new(75.0, 50.0));
    }

    #[test]
    fn refit_resizes_maximized_window_to_class_target() {
        let mut window = terminal();
        window.open(NORMAL);
        window.toggle_maximize(NORMAL);
        window.refit(NARROW);
        assert_eq!(window.size(), WindowSize::new(100.0, 80.0));
    }

    #[test]
    fn any_intent_sequence_stays_in_a_single_status() {
        // Exhaustive over all sequences of length 5 drawn from the four chrome intents.
        let intents = ["open", "minimize", "close", "maximize"];
        let total = intents.len().pow(5);
        for mut code in 0..total {
            let mut window = terminal();
            let mut trace = Vec::new();
            for _ in 0..5 {
                let intent = intents[code % intents.len()];
                code /= intents.len();
                trace.push(intent);
                match intent {
                    "open" => window.open(NORMAL),
                    "minimize" => window.minimize(),
                    "close" => window.close(),
                    _ => window.toggle_maximize(NORMAL),
                };
                let state = window.state();
                match state.status {
                    WindowStatus::Closed => {
                        assert_eq!(state.previous_size, None, "{trace:?}")
                    }
                    WindowStatus::MaximizedOpen => {
                        assert!(state.previous_size.is_some(), "{trace:?}")
                    }
                    WindowStatus::Open | WindowStatus::Minimized => {}
                }
                assert!(
                    window
                        .descriptor()
                        .bounds
                        .contains(state.size, NORMAL.class()),
                    "{trace:?} left bounds with {:?}",
                    state.size
                );
            }
        }
    }
}
