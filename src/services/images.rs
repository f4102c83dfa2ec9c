use crate::error::GenerateError;
use crate::models::StockImage;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[async_trait]
pub trait PhotoProvider: Send + Sync {
    async fn search_photos(
        &self,
        keyword: &str,
        count: usize,
    ) -> Result<Vec<StockImage>, GenerateError>;
}

pub struct UnsplashClient {
    client: reqwest::Client,
    access_key: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
    user: Photographer,
    links: PhotoLinks,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct Photographer {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PhotoLinks {
    html: String,
}

impl From<Photo> for StockImage {
    fn from(photo: Photo) -> Self {
        StockImage {
            image_url: photo.urls.regular,
            photographer_name: photo.user.name,
            photographer_profile_url: photo.links.html,
        }
    }
}

impl UnsplashClient {
    const SEARCH_URL: &'static str = "https://api.unsplash.com/search/photos";

    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_key: access_key.into(),
        }
    }
}

#[async_trait]
impl PhotoProvider for UnsplashClient {
    async fn search_photos(
        &self,
        keyword: &str,
        count: usize,
    ) -> Result<Vec<StockImage>, GenerateError> {
        let photo_error = |err: reqwest::Error| GenerateError::Photo {
            message: err.to_string(),
        };

        let response = self
            .client
            .get(Self::SEARCH_URL)
            .query(&[
                ("query", keyword.to_string()),
                ("per_page", count.to_string()),
                ("client_id", self.access_key.clone()),
            ])
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(photo_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Photo {
                message: format!("{} - {}", status, crate::utils::truncate_chars(&body, 100)),
            });
        }

        let body = response.text().await.map_err(photo_error)?;
        parse_search(&body)
    }
}

fn parse_search(body: &str) -> Result<Vec<StockImage>, GenerateError> {
    let parsed: SearchResponse = serde_json::from_str(body).map_err(|err| GenerateError::Photo {
        message: format!("unreadable photo search response: {err}"),
    })?;
    Ok(parsed.results.into_iter().map(StockImage::from).collect())
}

pub fn image_html(image: &StockImage) -> String {
    let src = html_escape::encode_double_quoted_attribute(&image.image_url);
    let profile = html_escape::encode_double_quoted_attribute(&image.photographer_profile_url);
    let name = html_escape::encode_text(&image.photographer_name);
    format!(
        r#"<div style="margin:30px 0; text-align:center;">
<img src="{src}" alt="관련 이미지" style="max-width:100%; border-radius:8px; box-shadow:0 4px 8px rgba(0,0,0,0.1);">
<p style="font-size:12px; color:#666; margin-top:8px;">
Photo by <a href="{profile}" target="_blank" style="color:#666; text-decoration:underline;">{name}</a> on <a href="https://unsplash.com" target="_blank" style="color:#666; text-decoration:underline;">Unsplash</a>
</p></div>"#
    )
}

#[cfg(test)]
pub mod fakes {
    use super::*;

    pub struct FakePhotos {
        pub images: Vec<StockImage>,
    }

    impl FakePhotos {
        pub fn with_count(count: usize) -> Self {
            Self {
                images: (0..count)
                    .map(|i| StockImage {
                        image_url: format!("https://images.example/{i}.jpg"),
                        photographer_name: format!("Photographer {i}"),
                        photographer_profile_url: format!("https://unsplash.com/@p{i}"),
                    })
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl PhotoProvider for FakePhotos {
        async fn search_photos(
            &self,
            _keyword: &str,
            count: usize,
        ) -> Result<Vec<StockImage>, GenerateError> {
            Ok(self.images.iter().take(count).cloned().collect())
        }
    }
}
