use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: u64,
    name: String,
    url: String,
}

impl User {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFile {
    id: u64,
    quality: Option<String>,
    file_type: String,
    width: Option<u32>,
    height: Option<u32>,
    #[serde(default)]
    fps: Option<f64>,
    link: String,
}

impl VideoFile {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `"hd"`, `"sd"` or `"hls"`; null for some legacy uploads.
    pub fn quality(&self) -> Option<&str> {
        self.quality.as_deref()
    }

    /// MIME type, e.g. `video/mp4`.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn fps(&self) -> Option<f64> {
        self.fps
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPicture {
    id: u64,
    picture: String,
    nr: u32,
}

impl VideoPicture {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn picture(&self) -> &str {
        &self.picture
    }

    pub fn nr(&self) -> u32 {
        self.nr
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    id: u64,
    url: String,
    width: u32,
    height: u32,
    image: String,
    duration: f64,
    #[serde(default)]
    full_res: Value,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    user: Option<User>,
    video_files: Vec<VideoFile>,
    video_pictures: Vec<VideoPicture>,
}

impl Video {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Thumbnail image.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Full resolution descriptor. The service does not fix its shape, so it
    /// is kept as raw JSON and is `Value::Null` when not provided.
    pub fn full_res(&self) -> &Value {
        &self.full_res
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn video_files(&self) -> &[VideoFile] {
        &self.video_files
    }

    pub fn video_pictures(&self) -> &[VideoPicture] {
        &self.video_pictures
    }
}

/// One page of `GET /videos/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSearchResult {
    page: u32,
    per_page: u32,
    total_results: u64,
    #[serde(default)]
    next_page: Option<String>,
    videos: Vec<Video>,
}

impl VideoSearchResult {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn into_videos(self) -> Vec<Video> {
        self.videos
    }
}

/// One page of `GET /videos/popular`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularVideosResult {
    page: u32,
    per_page: u32,
    total_results: u64,
    url: String,
    videos: Vec<Video>,
}

impl PopularVideosResult {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn into_videos(self) -> Vec<Video> {
        self.videos
    }
}
