// src/browser/thumbnail.rs
// Placeholder thumbnails for image entries

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// A 1x1 transparent PNG. Every image entry carries this fixed
/// placeholder; a real renderer could replace this routine without
/// changing the entry shape.
const PLACEHOLDER_PNG: [u8; 70] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Data URI for the placeholder thumbnail. Both the directory lister and
/// the thumbnail endpoint go through this single routine.
pub fn placeholder_data_uri() -> String {
    format!("data:image/png;base64,{}", BASE64.encode(PLACEHOLDER_PNG))
}
