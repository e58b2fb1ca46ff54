/// Page and renderer tuning constants for the web front end.
///
/// Free of web and wgpu types so host tests can include this file.

/// Bloom chain parameters for one page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomSettings {
    pub strength: f32,
    /// Luminance where the bright pass starts letting light through.
    pub threshold: f32,
    pub exposure: f32,
}

impl BloomSettings {
    /// Same tone mapping with no glow; the bright and blur passes are skipped.
    pub const fn disabled(self) -> Self {
        Self {
            strength: 0.0,
            ..self
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.strength > 0.0
    }
}

// Soft, wide glow around the heart
pub const HEART_BLOOM: BloomSettings = BloomSettings {
    strength: 1.8,
    threshold: 0.12,
    exposure: 1.0,
};

// Selective bloom so only the bright ornaments flare
pub const TREE_BLOOM: BloomSettings = BloomSettings {
    strength: 1.0,
    threshold: 0.6,
    exposure: 2.2,
};

// Bloom targets run at a fraction of the framebuffer size
pub const BLOOM_DOWNSCALE: u32 = 2;

// Touch devices narrower than this get the reduced scene
pub const MOBILE_MAX_WIDTH_CSS: f64 = 1024.0;

// WheelEvent.deltaMode scaling to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;

// DOM contract with the page
pub const CANVAS_ID: &str = "scene-canvas";
pub const SCENE_ATTR: &str = "data-scene";
pub const HINT_SELECTOR: &str = ".hint";
pub const HINT_PULSE_CLASS: &str = "pulse";

pub const HINT_DISPERSE: &str = "Tap to disperse · Swipe to orbit";
pub const HINT_CONVERGE: &str = "Tap to converge · Swipe to orbit";
