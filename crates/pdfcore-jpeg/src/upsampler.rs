//! Chroma upsampling back to the luma plane's resolution.
//!
//! Baseline JPEGs almost always subsample chroma (4:2:0 or 4:2:2); a
//! component's sampling factor tells us by how much. This uses simple
//! nearest-neighbour replication rather than a smoothing filter: it is
//! exact for 1x and correct, if blocky, for any other ratio, which is
//! enough for extracting image data out of a PDF XObject.

/// Upsample a single-plane `width x height` image horizontally and/or
/// vertically by integer sampling-factor ratios, producing a plane the
/// size of the full-resolution luma plane.
pub fn upsample_plane(plane: &[u8], width: usize, height: usize, h_ratio: usize, v_ratio: usize) -> Vec<u8>
{
    if h_ratio <= 1 && v_ratio <= 1
    {
        return plane.to_vec();
    }

    let out_width = width * h_ratio;
    let out_height = height * v_ratio;
    let mut out = vec![0u8; out_width * out_height];

    for y in 0..out_height
    {
        let src_y = (y / v_ratio).min(height.saturating_sub(1));
        for x in 0..out_width
        {
            let src_x = (x / h_ratio).min(width.saturating_sub(1));
            out[y * out_width + x] = plane[src_y * width + src_x];
        }
    }

    out
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn no_op_when_ratios_are_one()
    {
        let plane = vec![1, 2, 3, 4];
        assert_eq!(upsample_plane(&plane, 2, 2, 1, 1), plane);
    }

    #[test]
    fn doubles_each_axis()
    {
        let plane = vec![1u8, 2, 3, 4];
        let out = upsample_plane(&plane, 2, 2, 2, 2);
        assert_eq!(out, vec![1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]);
    }
}
