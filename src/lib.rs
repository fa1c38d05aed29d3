pub mod pexels;

pub use pexels::{
    models::{
        CuratedResult, Photo, PhotoSource, PopularVideosResult, Rendition, SearchResult, User,
        Video, VideoFile, VideoPicture, VideoSearchResult,
    },
    Client, ClientBuilder, Error, RateLimit, Result,
};
