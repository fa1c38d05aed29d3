use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rendition {
    #[default]
    Original,
    Large,
    Large2x,
    Medium,
    Small,
    Portrait,
    Square,
    Landscape,
    Tiny,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSource {
    original: String,
    large: String,
    large2x: String,
    medium: String,
    small: String,
    portrait: String,
    square: String,
    landscape: String,
    tiny: String,
}

impl PhotoSource {
    pub fn url(&self, rendition: Rendition) -> &str {
        match rendition {
            Rendition::Original => &self.original,
            Rendition::Large => &self.large,
            Rendition::Large2x => &self.large2x,
            Rendition::Medium => &self.medium,
            Rendition::Small => &self.small,
            Rendition::Portrait => &self.portrait,
            Rendition::Square => &self.square,
            Rendition::Landscape => &self.landscape,
            Rendition::Tiny => &self.tiny,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    id: u64,
    width: u32,
    height: u32,
    url: String,
    photographer: String,
    photographer_url: String,
    #[serde(default)]
    photographer_id: Option<u64>,
    #[serde(default)]
    avg_color: Option<String>,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    liked: bool,
    src: PhotoSource,
}

impl Photo {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Page of the photo on pexels.com.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn photographer(&self) -> &str {
        &self.photographer
    }

    pub fn photographer_url(&self) -> &str {
        &self.photographer_url
    }

    pub fn photographer_id(&self) -> Option<u64> {
        self.photographer_id
    }

    /// Average color as a `#rrggbb` hex string.
    pub fn avg_color(&self) -> Option<&str> {
        self.avg_color.as_deref()
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn src(&self) -> &PhotoSource {
        &self.src
    }

    pub fn file_url(&self, rendition: Rendition) -> &str {
        self.src.url(rendition)
    }
}

/// One page of `GET /v1/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    page: u32,
    per_page: u32,
    #[serde(alias = "total_Results")]
    total_results: u64,
    #[serde(default)]
    next_page: Option<String>,
    photos: Vec<Photo>,
}

impl SearchResult {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    /// URL of the following page, absent on the last one.
    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }
}

/// One page of `GET /v1/curated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedResult {
    page: u32,
    per_page: u32,
    #[serde(default)]
    next_page: Option<String>,
    photos: Vec<Photo>,
}

impl CuratedResult {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }
}
