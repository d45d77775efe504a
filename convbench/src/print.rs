use std::fmt::Write;

use separable_conv::ImageShape;

/// Formats every channel of planar image as a separate matrix.
pub fn format_planar_image(src: &[f32], shape: ImageShape) -> String {
    let mut res = String::new();
    for channel in 0..shape.channels {
        let _ = writeln!(res, "Channel {}", channel);
        for row in 0..shape.height {
            res.push_str("{ ");
            for col in 0..shape.width {
                let _ = write!(res, "{}, ", src[shape.planar_index(channel, row, col)]);
            }
            res.push_str(" }\n");
        }
    }
    res
}

/// Formats interleaved image as rows of pixels.
pub fn format_interleaved_image(src: &[f32], shape: ImageShape) -> String {
    let mut res = String::new();
    for row in 0..shape.height {
        res.push_str("[ ");
        for col in 0..shape.width {
            res.push_str("{ ");
            for channel in 0..shape.channels {
                let _ = write!(res, "{}, ", src[shape.interleaved_index(channel, row, col)]);
            }
            res.push_str("}, ");
        }
        res.push_str("]\n");
    }
    res
}
