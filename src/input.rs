use crate::constants::{
    BloomSettings, HEART_BLOOM, HINT_CONVERGE, HINT_DISPERSE, MOBILE_MAX_WIDTH_CSS, TREE_BLOOM,
    WHEEL_LINE_PX, WHEEL_PAGE_PX,
};
use celestial_core::{BlendTarget, SceneConfig};

/// Which page the canvas belongs to, read from its `data-scene` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScenePreset {
    #[default]
    Heart,
    Christmas,
}

impl ScenePreset {
    /// Unknown or missing values fall back to the heart.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("christmas") || v.eq_ignore_ascii_case("tree") => {
                ScenePreset::Christmas
            }
            _ => ScenePreset::Heart,
        }
    }

    pub fn config(self, mobile: bool, seed: u64) -> SceneConfig {
        let base = match self {
            ScenePreset::Heart => SceneConfig::heart(),
            ScenePreset::Christmas => SceneConfig::christmas(),
        };
        let base = if mobile { base.mobile() } else { base };
        base.with_seed(seed)
    }

    /// Phones skip the bloom chain entirely.
    pub fn bloom(self, mobile: bool) -> BloomSettings {
        let bloom = match self {
            ScenePreset::Heart => HEART_BLOOM,
            ScenePreset::Christmas => TREE_BLOOM,
        };
        if mobile {
            bloom.disabled()
        } else {
            bloom
        }
    }
}

#[inline]
pub fn is_mobile(user_agent: &str, max_touch_points: i32, viewport_width: f64) -> bool {
    const MARKERS: [&str; 8] = [
        "android",
        "iphone",
        "ipad",
        "ipod",
        "webos",
        "blackberry",
        "iemobile",
        "opera mini",
    ];
    let ua = user_agent.to_ascii_lowercase();
    MARKERS.iter().any(|m| ua.contains(m))
        || (max_touch_points > 1 && viewport_width < MOBILE_MAX_WIDTH_CSS)
}

/// Normalise `WheelEvent.deltaY` to pixels whatever its `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        1 => WHEEL_LINE_PX,
        2 => WHEEL_PAGE_PX,
        _ => 1.0,
    };
    delta_y as f32 * scale
}

/// Canvas backing store size for a CSS size and the effective pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, pixel_ratio: f32) -> (u32, u32) {
    let pr = pixel_ratio as f64;
    let w = (css_width * pr).round().max(1.0) as u32;
    let h = (css_height * pr).round().max(1.0) as u32;
    (w, h)
}

/// Hint line shown under the scene; it always names the next tap's effect.
#[inline]
pub fn hint_text(target: BlendTarget) -> &'static str {
    match target {
        BlendTarget::Converged => HINT_DISPERSE,
        BlendTarget::Dispersed => HINT_CONVERGE,
    }
}

/// Seed from a `Math.random()` draw in [0, 1).
#[inline]
pub fn seed_from_unit(r: f64) -> u64 {
    (r.clamp(0.0, 1.0) * u32::MAX as f64) as u64
}
