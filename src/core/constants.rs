use glam::Vec3;

// Scene palette shared by the formation engine and any renderer.

// Scene tints per gesture (0xRRGGBB)
pub const TINT_NONE_HEX: u32 = 0x88ddff; // cyan
pub const TINT_FIST_HEX: u32 = 0xffb66b; // warm gold
pub const TINT_OPEN_HEX: u32 = 0x6fe8d1; // mint
pub const TINT_PEACE_HEX: u32 = 0xa58bff; // purple
pub const TINT_METAL_HEX: u32 = 0xff6fa2; // pink

// Text shown by a glyph renderer when the user has not supplied any
pub const DEFAULT_CUSTOM_TEXT: &str = "I LOVE U";

// MediaPipe-style hand landmark indices
pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

/// Convert a packed 0xRRGGBB color into 0..1 RGB components.
#[inline]
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}
