use crate::core::PricePoint;

/// Returns the stride used to reduce `len` samples to roughly one per pixel.
#[must_use]
pub fn sample_stride(len: usize, width_px: u32) -> usize {
    if len == 0 || width_px == 0 {
        return 1;
    }
    len.div_ceil(width_px as usize).max(1)
}

/// Reduces a series to roughly one point per horizontal pixel.
///
/// Keeps every `ceil(N / W)`-th element in original order, always including
/// index 0, so the output length is bounded by the pixel width while the
/// first timestamp survives sampling. When `N <= W` every point is kept.
#[must_use]
pub fn sample_for_width(values: &[PricePoint], width_px: u32) -> Vec<PricePoint> {
    if values.is_empty() || width_px == 0 {
        return Vec::new();
    }

    let stride = sample_stride(values.len(), width_px);
    values.iter().copied().step_by(stride).collect()
}
