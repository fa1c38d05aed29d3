mod photo;
mod video;

pub use photo::{CuratedResult, Photo, PhotoSource, Rendition, SearchResult};
pub use video::{PopularVideosResult, User, Video, VideoFile, VideoPicture, VideoSearchResult};
