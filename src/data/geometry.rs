// src/data/geometry.rs

//! Tracker geometry: mapping a Z coordinate to a detector layer.
//!
//! The tracker is ten layers stacked along the Z axis with a fixed pitch of
//! 1.5 cm. The top of layer 1 is at Z = 11.5 cm. These are physical constants
//! of the simulated detector.

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Index of a tracker layer. `1` is the top-most layer, `LAYER_COUNT` the
/// bottom-most. `0` means "not within any layer".
pub type LayerIndex = u8;

/// Z (cm) above which a point is within layer 1.
pub const LAYER_Z_TOP: f32 = 11.5;

/// Distance (cm) between consecutive layer thresholds.
pub const LAYER_PITCH: f32 = 1.5;

/// Number of tracker layers.
pub const LAYER_COUNT: LayerIndex = 10;

/// Layer value for a Z coordinate below every layer threshold.
pub const LAYER_NONE: LayerIndex = 0;

/// Return the tracker layer for a Z coordinate `z` (cm).
///
/// Layer `n` is the first layer, counting from the top, whose threshold
/// `LAYER_Z_TOP - (n - 1) * LAYER_PITCH` is _strictly_ less than `z`.
/// A `z` exactly on a threshold belongs to the next, deeper, layer.
///
/// Returns [`LAYER_NONE`] when no threshold is exceeded, i.e. `z <= -2.0`
/// or `z` is NaN.
pub fn layer_of(z: f32) -> LayerIndex {
    let mut z_limit: f32 = LAYER_Z_TOP;
    for layer in 1..=LAYER_COUNT {
        if z > z_limit {
            return layer;
        }
        z_limit -= LAYER_PITCH;
    }

    LAYER_NONE
}

/// Return the Z interval `(low, high]` (cm) covered by `layer`.
///
/// Layer 1 is unbounded above (`high` is `f32::INFINITY`).
/// Returns `None` for [`LAYER_NONE`] or a layer beyond [`LAYER_COUNT`].
pub fn layer_z_range(layer: LayerIndex) -> Option<(f32, f32)> {
    if layer == LAYER_NONE || layer > LAYER_COUNT {
        defñ!("layer {} out of range, return None", layer);
        return None;
    }
    // repeat the subtraction of `layer_of` so the bounds agree bit-for-bit
    let mut low: f32 = LAYER_Z_TOP;
    let mut high: f32 = f32::INFINITY;
    for _ in 1..layer {
        high = low;
        low -= LAYER_PITCH;
    }
    defñ!("layer {} return ({}, {}]", layer, low, high);

    Some((low, high))
}
