//! Bit and range helpers used by every report layout.

/// Returns `true` iff any bit of `mask` is set in `byte`.
#[inline]
pub const fn bit_mask(byte: u8, mask: u8) -> bool {
    byte & mask != 0
}

/// Affine remap of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// `in_min < in_max` is assumed. Values outside the input range map outside
/// the output range; nothing is clamped.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
