use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

/// Viewports narrower than this (in CSS px) use the narrow size table.
pub const NARROW_VIEWPORT_BREAKPOINT_PX: f64 = 768.0;

/// Browser viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn class(self) -> ViewportClass {
        if self.width < NARROW_VIEWPORT_BREAKPOINT_PX {
            ViewportClass::Narrow
        } else {
            ViewportClass::Normal
        }
    }

    /// Width used as a divisor; never zero.
    pub(crate) fn safe_width(self) -> f64 {
        if self.width.is_finite() {
            self.width.max(1.0)
        } else {
            1.0
        }
    }

    /// Height used as a divisor; never zero.
    pub(crate) fn safe_height(self) -> f64 {
        if self.height.is_finite() {
            self.height.max(1.0)
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
    Normal,
    Narrow,
}

/// Window size as percentages (0-100) of the viewport width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width_percent: f64,
    pub height_percent: f64,
}

impl WindowSize {
    pub const fn new(width_percent: f64, height_percent: f64) -> Self {
        Self {
            width_percent,
            height_percent,
        }
    }

    /// Rendered size in CSS pixels for `viewport`.
    pub fn to_pixels(self, viewport: Viewport) -> (f64, f64) {
        (
            self.width_percent / 100.0 * viewport.safe_width(),
            self.height_percent / 100.0 * viewport.safe_height(),
        )
    }
}

/// A size that differs between normal and narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveSize {
    pub normal: WindowSize,
    pub narrow: WindowSize,
}

impl ResponsiveSize {
    pub fn for_class(self, class: ViewportClass) -> WindowSize {
        match class {
            ViewportClass::Normal => self.normal,
            ViewportClass::Narrow => self.narrow,
        }
    }
}

/// Per-window-type resize limits. The ceiling relaxes on narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min: WindowSize,
    pub max: ResponsiveSize,
}

impl SizeBounds {
    /// Clamps `size` into `[min, max]` for `class`.
    ///
    /// Written with `max`/`min` rather than `f64::clamp` so a NaN input lands on the floor and
    /// inverted bounds never panic.
    pub fn clamp(self, size: WindowSize, class: ViewportClass) -> WindowSize {
        let max = self.max.for_class(class);
        WindowSize {
            width_percent: size
                .width_percent
                .max(self.min.width_percent)
                .min(max.width_percent),
            height_percent: size
                .height_percent
                .max(self.min.height_percent)
                .min(max.height_percent),
        }
    }

    pub fn contains(self, size: WindowSize, class: ViewportClass) -> bool {
        self.clamp(size, class) == size
    }
}

/// Static description of one window type, loaded from its `window.manifest.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub app_id: ApplicationId,
    /// Titlebar text.
    pub title: String,
    /// Menu bar label shown while the window is active.
    pub label: String,
    /// Glyph identifier for the window's icon.
    pub icon: String,
    pub default_size: ResponsiveSize,
    pub maximized_size: ResponsiveSize,
    pub bounds: SizeBounds,
}

impl WindowDescriptor {
    pub fn default_size_for(&self, viewport: Viewport) -> WindowSize {
        self.default_size.for_class(viewport.class())
    }

    pub fn maximized_size_for(&self, viewport: Viewport) -> WindowSize {
        self.maximized_size.for_class(viewport.class())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowStatus {
    Closed,
    Open,
    Minimized,
    MaximizedOpen,
}

impl WindowStatus {
    /// Whether the window is on screen (Open or MaximizedOpen).
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Open | Self::MaximizedOpen)
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Minimized => "minimized",
            Self::MaximizedOpen => "maximized",
        }
    }
}

/// Drag offset in CSS pixels from the window's centered resting place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: f64,
    pub y: f64,
}

impl WindowPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub status: WindowStatus,
    pub size: WindowSize,
    /// Size captured when the window was last maximized.
    pub previous_size: Option<WindowSize>,
    pub position: WindowPosition,
}

impl WindowState {
    pub fn closed(default_size: WindowSize) -> Self {
        Self {
            status: WindowStatus::Closed,
            size: default_size,
            previous_size: None,
            position: WindowPosition::ORIGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Corner a resize gesture is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeCorner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl ResizeCorner {
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Sign applied to the horizontal pointer delta: east corners grow with `+dx`.
    pub fn width_sign(self) -> f64 {
        match self {
            Self::NorthEast | Self::SouthEast => 1.0,
            Self::NorthWest | Self::SouthWest => -1.0,
        }
    }

    /// Sign applied to the vertical pointer delta: south corners grow with `+dy`.
    pub fn height_sign(self) -> f64 {
        match self {
            Self::SouthEast | Self::SouthWest => 1.0,
            Self::NorthEast | Self::NorthWest => -1.0,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            Self::NorthWest => "Resize from top-left",
            Self::NorthEast => "Resize from top-right",
            Self::SouthWest => "Resize from bottom-left",
            Self::SouthEast => "Resize from bottom-right",
        }
    }
}

/// Which window, if any, currently owns the pointer gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<ApplicationId>,
    pub resizing: Option<ApplicationId>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none() && self.resizing.is_none()
    }
}
