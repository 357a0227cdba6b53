//! Locally picked images become data URLs so they can be stored on a
//! legend or moment and rendered without a file server.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Mime type guessed from the file extension.
pub fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

pub fn read_as_data_url(file_name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for(file_name), STANDARD.encode(bytes))
}
