//! Frame component (channel) bookkeeping.

/// One component (channel) of a frame, as declared in SOF and referenced
/// by id from SOS.
#[derive(Clone, Debug)]
pub struct Component
{
    /// Component identifier as it appears in SOF (not necessarily 0-based).
    pub id: u8,
    /// Horizontal sampling factor, 1-4.
    pub horizontal_sample: u8,
    /// Vertical sampling factor, 1-4.
    pub vertical_sample: u8,
    /// Index into the frame's quantization tables.
    pub quantization_table: u8,
    /// Index into the frame's DC Huffman tables, set by SOS.
    pub dc_huffman_table: u8,
    /// Index into the frame's AC Huffman tables, set by SOS.
    pub ac_huffman_table: u8,
    /// Number of 8x8 blocks this component contributes to one MCU,
    /// `horizontal_sample * vertical_sample`.
    pub blocks_per_mcu: usize,
    /// DC coefficient predictor, reset to 0 at the start of each scan and
    /// at every restart marker.
    pub dc_pred: i32
}

impl Component
{
    pub fn new(id: u8, horizontal_sample: u8, vertical_sample: u8, quantization_table: u8) -> Component
    {
        Component {
            id,
            horizontal_sample,
            vertical_sample,
            quantization_table,
            dc_huffman_table: 0,
            ac_huffman_table: 0,
            blocks_per_mcu: usize::from(horizontal_sample) * usize::from(vertical_sample),
            dc_pred: 0
        }
    }

    pub fn reset_dc_prediction(&mut self)
    {
        self.dc_pred = 0;
    }
}
