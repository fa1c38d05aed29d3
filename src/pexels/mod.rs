use std::sync::{Arc, Mutex, PoisonError};

use bytes::Bytes;
use rand::{rngs::StdRng, Rng, SeedableRng};
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Client as HttpClient, Method, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Deserialize};

pub mod error;
pub mod models;
pub mod rate_limit;
pub mod result;

pub use error::Error;
pub use rate_limit::RateLimit;
pub use result::Result;

use models::{
    CuratedResult, Photo, PopularVideosResult, Rendition, SearchResult, Video, VideoSearchResult,
};

pub const PHOTOS_API: &str = "https://api.pexels.com/v1/";
pub const VIDEOS_API: &str = "https://api.pexels.com/videos/";

const API_KEY_VAR: &str = "PEXELS_API_KEY";

/// Highest page picked by the random helpers, inclusive.
const RANDOM_PAGE_MAX: u32 = 1000;

macro_rules! query_params {
    ($($key:expr => $value:expr),+ $(,)?) => {
        &[
            $(($key, $value.to_string())),+
        ]
    };
}

/// Pexels API client.
///
/// Clones share the HTTP connection pool, the rate limit counters and the
/// random page generator.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    auth: HeaderValue,
    photos_api: Url,
    videos_api: Url,
    rate_limit: Arc<Mutex<RateLimit>>,
    rng: Arc<Mutex<StdRng>>,
}

pub struct ClientBuilder {
    api_key: String,
    photos_api: String,
    videos_api: String,
    http: Option<HttpClient>,
    rng_seed: Option<u64>,
}

impl ClientBuilder {
    /// Overrides the photo endpoints root, `https://api.pexels.com/v1/` by default.
    pub fn photos_url<T: Into<String>>(mut self, url: T) -> Self {
        self.photos_api = url.into();
        self
    }

    /// Overrides the video endpoints root, `https://api.pexels.com/videos/` by default.
    pub fn videos_url<T: Into<String>>(mut self, url: T) -> Self {
        self.videos_api = url.into();
        self
    }

    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Makes random page selection deterministic.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Client> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidApiKey);
        }

        let mut auth = HeaderValue::from_str(&self.api_key).map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);

        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder().build().map_err(Error::Request)?,
        };

        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Client {
            http,
            auth,
            photos_api: parse_base_url(self.photos_api)?,
            videos_api: parse_base_url(self.videos_api)?,
            rate_limit: Arc::default(),
            rng: Arc::new(Mutex::new(rng)),
        })
    }
}

impl Client {
    pub fn new<T: AsRef<str>>(api_key: T) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Reads the API key from `PEXELS_API_KEY`.
    pub fn new_from_env() -> Result<Self> {
        let api_key = required_api_key(std::env::var(API_KEY_VAR).ok())?;

        Self::new(api_key)
    }

    pub fn builder<T: AsRef<str>>(api_key: T) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.as_ref().to_owned(),
            photos_api: PHOTOS_API.to_owned(),
            videos_api: VIDEOS_API.to_owned(),
            http: None,
            rng_seed: None,
        }
    }

    pub async fn search_photos<T: AsRef<str>>(
        &self,
        query: T,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResult> {
        let url = endpoint(
            &self.photos_api,
            "search",
            query_params!(
                "query" => query.as_ref(),
                "per_page" => per_page,
                "page" => page,
            ),
        )?;

        self.fetch(url).await
    }

    pub async fn curated_photos(&self, per_page: u32, page: u32) -> Result<CuratedResult> {
        let url = endpoint(
            &self.photos_api,
            "curated",
            query_params!(
                "per_page" => per_page,
                "page" => page,
            ),
        )?;

        self.fetch(url).await
    }

    pub async fn photo(&self, id: u64) -> Result<Photo> {
        let url = endpoint(&self.photos_api, &format!("photos/{id}"), &[])?;

        self.fetch(url).await
    }

    /// Picks a curated photo from a random page.
    ///
    /// Returns `Ok(None)` when that page does not hold exactly one photo.
    pub async fn random_photo(&self) -> Result<Option<Photo>> {
        let page = self.random_page();
        let photos = self.curated_photos(1, page).await?.into_photos();

        Ok(single(photos, page))
    }

    pub async fn search_videos<T: AsRef<str>>(
        &self,
        query: T,
        per_page: u32,
        page: u32,
    ) -> Result<VideoSearchResult> {
        let url = endpoint(
            &self.videos_api,
            "search",
            query_params!(
                "query" => query.as_ref(),
                "per_page" => per_page,
                "page" => page,
            ),
        )?;

        self.fetch(url).await
    }

    pub async fn popular_videos(&self, per_page: u32, page: u32) -> Result<PopularVideosResult> {
        let url = endpoint(
            &self.videos_api,
            "popular",
            query_params!(
                "per_page" => per_page,
                "page" => page,
            ),
        )?;

        self.fetch(url).await
    }

    pub async fn video(&self, id: u64) -> Result<Video> {
        let url = endpoint(&self.videos_api, &format!("videos/{id}"), &[])?;

        self.fetch(url).await
    }

    /// Picks a popular video from a random page.
    ///
    /// Returns `Ok(None)` when that page does not hold exactly one video.
    pub async fn random_video(&self) -> Result<Option<Video>> {
        let page = self.random_page();
        let videos = self.popular_videos(1, page).await?.into_videos();

        Ok(single(videos, page))
    }

    /// Downloads one rendition of a photo. The CDN links are public, so no
    /// credential is sent.
    pub async fn download_photo(&self, photo: &Photo, rendition: Rendition) -> Result<Bytes> {
        let url = photo.file_url(rendition);
        tracing::debug!(id = photo.id(), ?rendition, url, "downloading photo");

        let response = self.http.get(url).send().await.map_err(Error::Request)?;
        let status = response.status();
        let body = response.bytes().await.map_err(Error::Request)?;

        check_status(status, &body)?;

        Ok(body)
    }

    /// Requests left in the current window, as of the last response that
    /// carried `X-Ratelimit-Remaining`.
    pub fn remaining_requests(&self) -> Option<u32> {
        self.rate_limit().remaining()
    }

    pub fn rate_limit(&self) -> RateLimit {
        *self.rate_limit.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let (status, body) = self.request_with_auth(Method::GET, url).await?;

        check_status(status, &body)?;

        serde_json::from_slice(&body).map_err(Error::InvalidResponse)
    }

    /// Sends one authenticated request and reads the whole body. Rate limit
    /// counters are refreshed once the body is read, whatever the status.
    async fn request_with_auth(&self, method: Method, url: Url) -> Result<(StatusCode, Bytes)> {
        tracing::debug!(%method, %url, "sending request");

        let response = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.auth.clone())
            .send()
            .await
            .map_err(Error::Request)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::Request)?;

        self.rate_limit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .update(&headers);

        tracing::debug!(%status, remaining = ?self.remaining_requests(), "received response");

        Ok((status, body))
    }

    fn random_page(&self) -> u32 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..=RANDOM_PAGE_MAX)
    }
}

fn required_api_key(value: Option<String>) -> Result<String> {
    value.ok_or(Error::MissingApiKey)
}

fn parse_base_url(mut url: String) -> Result<Url> {
    if !url.ends_with('/') {
        url.push('/');
    }

    let url = Url::parse(&url).map_err(|_| Error::InvalidBaseUrl)?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl);
    }

    Ok(url)
}

fn endpoint(base: &Url, path: &str, params: &[(&str, String)]) -> Result<Url> {
    let mut url = base.join(path).map_err(|_| Error::InvalidBaseUrl)?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

fn check_status(status: StatusCode, body: &[u8]) -> Result<()> {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(alias = "code")]
        error: String,
    }

    if status.is_success() {
        return Ok(());
    }

    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(body) => body.error,
        Err(_) => String::from_utf8_lossy(body).trim().to_owned(),
    };

    tracing::warn!(%status, %message, "request failed");

    Err(Error::Status { status, message })
}

fn single<T>(mut items: Vec<T>, page: u32) -> Option<T> {
    if items.len() != 1 {
        tracing::debug!(page, count = items.len(), "random page did not hold exactly one item");
        return None;
    }

    items.pop()
}
