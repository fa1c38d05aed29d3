#![allow(dead_code)]

use pexels::Client;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

pub fn client(server: &MockServer) -> Client {
    client_with_seed(server, 42)
}

pub fn client_with_seed(server: &MockServer, seed: u64) -> Client {
    Client::builder(API_KEY)
        .photos_url(format!("{}/v1", server.uri()))
        .videos_url(format!("{}/videos/", server.uri()))
        .rng_seed(seed)
        .build()
        .unwrap()
}

/// Client whose endpoints point at a port nothing listens on.
pub fn unreachable_client() -> Client {
    Client::builder(API_KEY)
        .photos_url("http://127.0.0.1:1/v1/")
        .videos_url("http://127.0.0.1:1/videos/")
        .build()
        .unwrap()
}

pub fn photo_json(id: u64, cdn: &str) -> Value {
    let src = |name: &str| format!("{cdn}/photos/{id}/{name}.jpeg");

    json!({
        "id": id,
        "width": 5184,
        "height": 3456,
        "url": format!("https://www.pexels.com/photo/{id}/"),
        "photographer": "Pixabay",
        "photographer_url": "https://www.pexels.com/@pixabay",
        "photographer_id": 2659,
        "avg_color": "#4E5A4B",
        "src": {
            "original": src("original"),
            "large": src("large"),
            "large2x": src("large2x"),
            "medium": src("medium"),
            "small": src("small"),
            "portrait": src("portrait"),
            "square": src("square"),
            "landscape": src("landscape"),
            "tiny": src("tiny"),
        },
        "liked": false,
        "alt": "Blue and green peacock"
    })
}

pub fn video_json(id: u64) -> Value {
    json!({
        "id": id,
        "width": 3840,
        "height": 2160,
        "url": format!("https://www.pexels.com/video/{id}/"),
        "image": format!("https://images.pexels.com/videos/{id}/preview.jpg"),
        "full_res": null,
        "tags": [],
        "duration": 15,
        "user": {
            "id": 1583460,
            "name": "Pressmaster",
            "url": "https://www.pexels.com/@pressmaster"
        },
        "video_files": [
            {
                "id": 125004,
                "quality": "uhd",
                "file_type": "video/mp4",
                "width": 3840,
                "height": 2160,
                "fps": 25,
                "link": format!("https://player.vimeo.com/external/{id}.uhd.mp4")
            }
        ],
        "video_pictures": [
            {
                "id": 308178,
                "picture": format!("https://images.pexels.com/videos/{id}/pictures/preview-0.jpg"),
                "nr": 0
            }
        ]
    })
}

pub async fn requested_page(server: &MockServer) -> u32 {
    let requests = server.received_requests().await.unwrap();
    let request = requests.last().unwrap();

    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.parse().unwrap())
        .unwrap()
}
