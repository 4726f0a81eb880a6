//! Frame style constants

/// Frame layout constants shared with the renderer
///
/// Hit testing uses these values, so the renderer must lay the frame out
/// with the same numbers.
pub struct FrameStyle {
    /// Height of the draggable header strip
    pub header_height: f32,
    /// Horizontal padding inside the header
    pub header_padding_x: f32,
    /// Width of the resize strip along the right edge
    pub resize_handle_width: f32,
    /// Width and height of a header control button
    pub button_size: f32,
    /// Gap between header control buttons
    pub button_spacing: f32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    header_height: 46.0,
    header_padding_x: 20.0,
    resize_handle_width: 10.0,
    button_size: 22.0,
    button_spacing: 10.0,
};
