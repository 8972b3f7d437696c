//! Pure calculation functions for dimensions and pixel ramps.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;

/// Decide whether the encoder resizes.
///
/// Resizing happens only when *both* width and height are given. A lone
/// dimension is ignored rather than used to derive the other from the aspect
/// ratio; callers report that case to the user.
///
/// # Examples
/// ```
/// # use pixel_bridge::imaging::resize_target;
/// assert_eq!(resize_target(Some(128), Some(64)), Some((128, 64)));
/// assert_eq!(resize_target(Some(128), None), None);
/// assert_eq!(resize_target(None, None), None);
/// ```
pub fn resize_target(width: Option<u32>, height: Option<u32>) -> Option<(u32, u32)> {
    match (width, height) {
        (Some(w), Some(h)) => Some((w, h)),
        _ => None,
    }
}

/// Canvas size for two images placed side by side with a gutter between them.
///
/// Width is `left.width + gutter + right.width`; height is the taller of the two.
/// Returns `None` when the width does not fit in a `u32`.
///
/// # Examples
/// ```
/// # use pixel_bridge::imaging::{Dimensions, comparison_canvas};
/// let d = Dimensions { width: 64, height: 64 };
/// assert_eq!(comparison_canvas(d, d, 20), Some(Dimensions { width: 148, height: 64 }));
/// assert_eq!(comparison_canvas(d, d, u32::MAX), None);
/// ```
pub fn comparison_canvas(left: Dimensions, right: Dimensions, gutter: u32) -> Option<Dimensions> {
    Some(Dimensions {
        width: right_offset(left, gutter)?.checked_add(right.width)?,
        height: left.height.max(right.height),
    })
}

/// Horizontal offset of the right-hand image on the comparison canvas.
pub fn right_offset(left: Dimensions, gutter: u32) -> Option<u32> {
    left.width.checked_add(gutter)
}

/// Value `index` of `count` evenly spaced steps from 0 to 255, truncated.
///
/// The first step is exactly 0 and the last exactly 255. Integer arithmetic
/// keeps the ramp bit-identical across platforms.
pub fn ramp_value(index: usize, count: usize) -> u8 {
    if count <= 1 {
        return 0;
    }
    let index = index.min(count - 1) as u64;
    (index * 255 / (count as u64 - 1)) as u8
}
