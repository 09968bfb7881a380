use httpmock::MockServer;
use serde_json::{json, Value};
use std::path::Path;

/// JPEG start/end markers; the client never decodes what it downloads.
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0xFF, 0xD9];

/// A hit whose large image is served by `server` at `/get/<slug>.<ext>`.
pub fn hit(server: &MockServer, slug: &str, ext: &str, user: &str, user_id: u64) -> Value {
    json!({
        "id": user_id * 1000,
        "pageURL": format!("https://pixabay.com/photos/{}/", slug),
        "type": "photo",
        "tags": "ocean, wave, sea",
        "largeImageURL": server.url(format!("/get/{}.{}", slug, ext)),
        "imageWidth": 4000,
        "imageHeight": 3000,
        "user_id": user_id,
        "user": user,
    })
}

pub fn search_body(total_hits: u64, hits: Vec<Value>) -> Value {
    json!({
        "total": total_hits * 3,
        "totalHits": total_hits,
        "hits": hits,
    })
}

/// Writes `hits` as the results snapshot for `slug` under `data`.
pub fn write_snapshot(data: &Path, slug: &str, hits: &[Value]) {
    let dir = data.join(slug);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("__results.json"), serde_json::to_vec_pretty(hits).unwrap()).unwrap();
}
