use std::{
    fs, io,
    path::{Path, PathBuf},
};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

use pexels::{Client, Photo, Rendition};

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Pexels(#[from] pexels::Error),

    #[error("{0}")]
    Env(#[from] dotenvy::Error),

    #[error("Could not locate the {0} directory")]
    MissingDir(&'static str),

    #[error("A default configuration has been created in {0}, please review it before proceeding")]
    RequiresConfigure(PathBuf),
}

type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    folder: PathBuf,
    /// Empty means one random curated photo.
    query: String,
    per_page: u32,
    rendition: Rendition,
}

impl Default for Config {
    fn default() -> Self {
        let folder = dirs::picture_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Pexels");

        Self {
            folder,
            query: String::new(),
            per_page: 15,
            rendition: Rendition::Large2x,
        }
    }
}

async fn select_photos(client: &Client, config: &Config) -> Result<Vec<Photo>> {
    if config.query.is_empty() {
        let photo = client.random_photo().await?;
        if photo.is_none() {
            tracing::info!("random curated page was empty");
        }

        return Ok(photo.into_iter().collect());
    }

    let result = client
        .search_photos(&config.query, config.per_page, 1)
        .await?;

    tracing::info!(
        query = %config.query,
        total = result.total_results(),
        "found photos"
    );

    Ok(result.into_photos())
}

async fn download_photos(config: &Config) -> Result<()> {
    let client = Client::new_from_env()?;

    let photos = select_photos(&client, config).await?;

    let mut tasks = JoinSet::<pexels::Result<(Photo, Bytes)>>::new();
    for photo in photos {
        let client = client.clone();
        let rendition = config.rendition;

        tasks.spawn(async move {
            let data = client.download_photo(&photo, rendition).await?;

            Ok((photo, data))
        });
    }

    fs::create_dir_all(&config.folder)?;

    let photos = tasks.join_all().await;
    for photo in photos {
        let (photo, data) = photo?;

        let path = config
            .folder
            .join(format!("{}.{}", photo.id(), extension(&photo, config.rendition)));

        fs::write(&path, &data)?;
        tracing::info!(id = photo.id(), path = %path.display(), "saved photo");
    }

    if let Some(remaining) = client.remaining_requests() {
        tracing::info!(remaining, "requests left in the current window");
    }

    Ok(())
}

fn extension(photo: &Photo, rendition: Rendition) -> &str {
    let url = photo.file_url(rendition);
    let path = url.split(['?', '#']).next().unwrap_or(url);

    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("jpeg")
}

fn configure<P: AsRef<Path>>(config_folder: P) -> Result<Config> {
    let config_folder = config_folder.as_ref();

    fs::create_dir_all(config_folder)?;

    let env_path = config_folder.join(".env");
    let config_path = config_folder.join("config.json");
    let requires_config = !env_path.exists() || !config_path.exists();

    if requires_config {
        if !env_path.exists() {
            fs::write(&env_path, include_str!("../../.env.example"))?;
        }

        if !config_path.exists() {
            let config = Config::default();
            let content = serde_json::to_string_pretty(&config).map_err(io::Error::from)?;

            fs::write(&config_path, &content)?;
        }

        return Err(Error::RequiresConfigure(config_folder.to_path_buf()));
    }

    dotenvy::from_path(env_path)?;

    let config = {
        let content = fs::read_to_string(&config_path)?;

        serde_json::from_str(&content).map_err(io::Error::from)?
    };

    Ok(config)
}

#[tokio::main]
async fn main() {
    async fn run() -> Result<()> {
        let path = dirs::config_dir()
            .ok_or(Error::MissingDir("config"))?
            .join("pexels-fetch");

        let config = configure(&path)?;

        download_photos(&config).await
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("{}", e);
    }
}
