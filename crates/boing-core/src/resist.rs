//! Asymptotic drag resistance.
//!
//! While the knob is held, the raw pointer offset from rest length is bent
//! through `x / (1 + x / limit)`: linear near rest, never reaching `limit`.
//! Pulling and pushing use separate limits so compression feels stiffer.

/// Map a raw offset from rest length to the resisted offset.
///
/// Positive offsets (pulling away from the wall) approach `pull_limit`,
/// non-positive offsets (pushing in) approach `-push_limit`.
#[inline]
pub fn resist(offset: f64, pull_limit: f64, push_limit: f64) -> f64 {
    if offset > 0.0 {
        offset / (1.0 + offset / pull_limit)
    } else {
        let abs_offset = offset.abs();
        -(abs_offset / (1.0 + abs_offset / push_limit))
    }
}

