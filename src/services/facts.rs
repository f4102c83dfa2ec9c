use crate::models::{SearchMode, SearchSnippet};
use crate::services::catalog::FACTS_FALLBACK;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(
        &self,
        keyword: &str,
        mode: SearchMode,
        max_results: usize,
    ) -> anyhow::Result<Vec<SearchSnippet>>;
}

pub async fn gather_facts(
    provider: &dyn SearchProvider,
    keyword: &str,
    max_results: usize,
) -> String {
    let results = match provider
        .search(keyword, SearchMode::RecentNews, max_results)
        .await
    {
        Ok(results) if results.is_empty() => {
            provider
                .search(keyword, SearchMode::BroadText, max_results)
                .await
        }
        other => other,
    };

    match results {
        Ok(results) => {
            let context = format_snippets(&results);
            if context.is_empty() {
                tracing::warn!(keyword, "search returned nothing, using fallback facts");
                FACTS_FALLBACK.to_string()
            } else {
                context
            }
        }
        Err(e) => {
            tracing::warn!(keyword, "search failed, using fallback facts: {}", e);
            FACTS_FALLBACK.to_string()
        }
    }
}

fn format_snippets(snippets: &[SearchSnippet]) -> String {
    snippets
        .iter()
        .map(|s| format!("정보원: {}\n핵심내용: {}\n\n", s.title, s.body))
        .collect()
}

pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    region: String,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    results: Vec<NewsItem>,
}

#[derive(Debug, Deserialize)]
struct NewsItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    excerpt: String,
}

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "Heading", default)]
    heading: String,
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<serde_json::Value>,
}

static VQD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"vqd=["']?([\d-]+)"#).expect("valid regex"));

impl DuckDuckGoSearch {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            region: region.into(),
        }
    }

    // news.js needs the vqd token from the search page
    async fn vqd_token(&self, keyword: &str) -> anyhow::Result<String> {
        let page = self
            .client
            .get("https://duckduckgo.com/")
            .query(&[("q", keyword)])
            .send()
            .await?
            .text()
            .await?;
        extract_vqd(&page).ok_or_else(|| anyhow::anyhow!("search token not found"))
    }

    async fn news(&self, keyword: &str, max_results: usize) -> anyhow::Result<Vec<SearchSnippet>> {
        let vqd = self.vqd_token(keyword).await?;
        let response: NewsResponse = self
            .client
            .get("https://duckduckgo.com/news.js")
            .query(&[
                ("l", self.region.as_str()),
                ("o", "json"),
                ("noamp", "1"),
                ("q", keyword),
                ("vqd", vqd.as_str()),
                ("p", "-2"),
                ("df", "w"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .results
            .into_iter()
            .take(max_results)
            .map(|item| SearchSnippet {
                title: item.title,
                body: item.excerpt,
            })
            .collect())
    }

    async fn text(&self, keyword: &str, max_results: usize) -> anyhow::Result<Vec<SearchSnippet>> {
        let answer: InstantAnswer = self
            .client
            .get("https://api.duckduckgo.com/")
            .query(&[
                ("q", keyword),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
                ("kl", self.region.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(instant_answer_snippets(answer, max_results))
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    async fn search(
        &self,
        keyword: &str,
        mode: SearchMode,
        max_results: usize,
    ) -> anyhow::Result<Vec<SearchSnippet>> {
        match mode {
            SearchMode::RecentNews => self.news(keyword, max_results).await,
            SearchMode::BroadText => self.text(keyword, max_results).await,
        }
    }
}

fn extract_vqd(page: &str) -> Option<String> {
    VQD.captures(page).map(|caps| caps[1].to_string())
}

fn instant_answer_snippets(answer: InstantAnswer, max_results: usize) -> Vec<SearchSnippet> {
    let mut snippets = Vec::new();
    if !answer.abstract_text.is_empty() {
        snippets.push(SearchSnippet {
            title: answer.heading.clone(),
            body: answer.abstract_text,
        });
    }

    for topic in &answer.related_topics {
        // Category groups nest their entries under "Topics".
        let entries = match topic["Topics"].as_array() {
            Some(nested) => nested.iter().collect::<Vec<_>>(),
            None => vec![topic],
        };
        for entry in entries {
            if let Some(text) = entry["Text"].as_str() {
                let title = text.split(" - ").next().unwrap_or(text);
                snippets.push(SearchSnippet {
                    title: title.to_string(),
                    body: text.to_string(),
                });
            }
        }
    }

    snippets.truncate(max_results);
    snippets
}


#[cfg(test)]
mod tests {
    use super::fakes::FakeSearch;
    use super::*;

    fn snippet(title: &str, body: &str) -> SearchSnippet {
        SearchSnippet {
            title: title.into(),
            body: body.into(),
        }
    }

    #[tokio::test]
    async fn formats_news_results() {
        let search = FakeSearch::with_news(vec![snippet("청소기 출시", "신제품 공개")]);
        let facts = gather_facts(&search, "무선 청소기", 6).await;
        assert_eq!(facts, "정보원: 청소기 출시\n핵심내용: 신제품 공개\n\n");
        assert_eq!(*search.calls.lock().unwrap(), vec![SearchMode::RecentNews]);
    }

    #[tokio::test]
    async fn falls_back_to_text_search_only_when_news_is_empty() {
        let mut search = FakeSearch::with_news(Vec::new());
        search.text = Ok(vec![snippet("위키", "설명")]);
        let facts = gather_facts(&search, "k", 6).await;
        assert!(facts.contains("위키"));
        assert_eq!(
            *search.calls.lock().unwrap(),
            vec![SearchMode::RecentNews, SearchMode::BroadText]
        );
    }

    #[tokio::test]
    async fn failures_and_empty_results_use_fallback() {
        let failing = FakeSearch::failing();
        assert_eq!(gather_facts(&failing, "k", 6).await, FACTS_FALLBACK);
        assert_eq!(*failing.calls.lock().unwrap(), vec![SearchMode::RecentNews]);

        let empty = FakeSearch::with_news(Vec::new());
        assert_eq!(gather_facts(&empty, "k", 6).await, FACTS_FALLBACK);
    }

    #[tokio::test]
    async fn text_search_failure_after_empty_news_uses_fallback() {
        let mut search = FakeSearch::with_news(Vec::new());
        search.text = Err(anyhow::anyhow!("instant answer unavailable"));
        assert_eq!(gather_facts(&search, "k", 6).await, FACTS_FALLBACK);
        assert_eq!(
            *search.calls.lock().unwrap(),
            vec![SearchMode::RecentNews, SearchMode::BroadText]
        );
    }

    #[test]
    fn finds_vqd_token() {
        let page = r#"<script>DDG.deep.initialize('/d.js?q=x&vqd=4-1234567890&kl=wt-wt');</script>"#;
        assert_eq!(extract_vqd(page).as_deref(), Some("4-1234567890"));
        assert_eq!(extract_vqd(r#"vqd="4-99""#).as_deref(), Some("4-99"));
        assert!(extract_vqd("<html></html>").is_none());
    }

    #[test]
    fn flattens_instant_answer_topics() {
        let answer: InstantAnswer = serde_json::from_str(
            r#"{
                "Heading": "Dyson",
                "AbstractText": "Dyson is a company.",
                "RelatedTopics": [
                    {"Text": "Dyson V15 - cordless vacuum", "FirstURL": "https://x"},
                    {"Name": "Products", "Topics": [
                        {"Text": "Airwrap - hair styler"},
                        {"Text": "Supersonic - hair dryer"}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        let snippets = instant_answer_snippets(answer, 3);
        assert_eq!(snippets.len(), 3);
        assert_eq!(snippets[0].title, "Dyson");
        assert_eq!(snippets[1].title, "Dyson V15");
        assert_eq!(snippets[2].body, "Airwrap - hair styler");
    }
}
