use crate::error::GenerateError;
use crate::models::{
    GenerationInput, GenerationReport, GenerationRequest, GeneratorKind, InfoType, Layout,
    RenderedPost, StockImage,
};
use crate::services::catalog::{self, FACTS_FALLBACK, NAVER_PROFIT_STRUCTURES};
use crate::services::facts::{SearchProvider, gather_facts};
use crate::services::images::PhotoProvider;
use crate::services::llm::TextGenerator;
use crate::services::parser::{FieldDefaults, parse_generation};
use crate::services::postprocess::{PostContext, plain_text_mirror, render_document};
use crate::services::prompt::build_prompt;
use crate::utils::{RandomSource, choose, clipboard_payload, copy_button};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

const NAVER_PROFIT_COPY_STYLE: &str = "width:100%; padding:20px; background:#111; color:#00FF7F; border:2px solid #00FF7F; border-radius:12px; font-weight:bold; cursor:pointer; font-size:18px;";
const NAVER_INFO_COPY_STYLE: &str = "width:100%; padding:20px; background:#03cf5d; color:white; border:none; border-radius:12px; font-weight:bold; cursor:pointer; font-size:18px;";

pub struct Pipeline {
    llm: Arc<dyn TextGenerator>,
    search: Arc<dyn SearchProvider>,
    photos: Option<Arc<dyn PhotoProvider>>,
    image_count: usize,
    search_max_results: usize,
}

impl Pipeline {
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        search: Arc<dyn SearchProvider>,
        photos: Option<Arc<dyn PhotoProvider>>,
    ) -> Self {
        Self {
            llm,
            search,
            photos,
            image_count: 7,
            search_max_results: 6,
        }
    }

    pub fn with_limits(mut self, image_count: usize, search_max_results: usize) -> Self {
        self.image_count = image_count;
        self.search_max_results = search_max_results;
        self
    }

    pub async fn run<R>(
        &self,
        kind: GeneratorKind,
        input: &GenerationInput,
        rng: &mut R,
    ) -> Result<GenerationReport, GenerateError>
    where
        R: RandomSource + Send + ?Sized,
    {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("generate", %run_id, kind = kind.slug());
        self.run_inner(run_id, kind, input, rng).instrument(span).await
    }

    async fn run_inner<R>(
        &self,
        run_id: Uuid,
        kind: GeneratorKind,
        input: &GenerationInput,
        rng: &mut R,
    ) -> Result<GenerationReport, GenerateError>
    where
        R: RandomSource + Send + ?Sized,
    {
        validate(kind, input)?;

        let keyword = input.keyword.trim();
        let product = if kind.needs_product() { input.product() } else { "" };
        let url = if kind.needs_product() { input.url() } else { "" };
        let mut notices = Vec::new();

        // Step 1: Pick the voice and outline for this run
        let persona = choose(rng, catalog::personas(kind));
        let layout = match kind {
            GeneratorKind::NaverProfit => Layout::Structure(choose(rng, &NAVER_PROFIT_STRUCTURES)),
            GeneratorKind::NaverInfo => Layout::InfoType {
                info_type: *choose(rng, &InfoType::ALL),
            },
            GeneratorKind::TistoryInfo | GeneratorKind::TistoryProfit => Layout::Fixed,
        };

        // Step 2: Ground the prompt in recent search results
        let facts = gather_facts(self.search.as_ref(), keyword, self.search_max_results).await;
        if facts == FACTS_FALLBACK {
            notices.push("실시간 정보를 찾지 못해 트렌드 분석 기반으로 작성합니다.".to_string());
        }

        let request = GenerationRequest {
            kind,
            keyword: keyword.to_string(),
            product: product.to_string(),
            affiliate_url: url.to_string(),
            persona,
            layout: layout.clone(),
            facts,
        };
        let prompt = build_prompt(&request);
        tracing::info!(persona = persona.role, layout = %layout.describe(), "prompt ready");

        // Step 3: Single generation attempt
        let raw = self.llm.generate(&prompt).await.inspect_err(|e| {
            tracing::error!("generation call failed: {}", e);
        })?;

        let defaults = FieldDefaults::for_keyword(default_title(kind, keyword, product), keyword);
        let result = parse_generation(&raw, &defaults).inspect_err(|e| {
            tracing::error!("could not decode model response: {}", e);
        })?;

        // Step 4: Images only decorate the Naver informational post
        let images = if kind == GeneratorKind::NaverInfo {
            self.fetch_images(keyword, &mut notices).await
        } else {
            Vec::new()
        };

        let ctx = PostContext {
            kind,
            keyword,
            product,
            url,
            banner: input.banner(),
        };
        let document = render_document(&ctx, &result, &images, rng);
        let preview = plain_text_mirror(&document.html);

        let (clipboard_html, copy_snippet) = match kind {
            GeneratorKind::NaverProfit => {
                let payload = clipboard_payload(&document.html);
                let snippet = copy_button(&payload, "📋 네이버 블로그 서식 포함 복사", NAVER_PROFIT_COPY_STYLE);
                (Some(payload), Some(snippet))
            }
            GeneratorKind::NaverInfo => {
                let payload = clipboard_payload(&document.html);
                let snippet = copy_button(&payload, "🟢 전문가 칼럼 복사하기", NAVER_INFO_COPY_STYLE);
                (Some(payload), Some(snippet))
            }
            GeneratorKind::TistoryInfo | GeneratorKind::TistoryProfit => (None, None),
        };

        tracing::info!(title = %document.title, notices = notices.len(), "post rendered");

        Ok(GenerationReport {
            status: "ready",
            run_id,
            kind,
            persona,
            layout,
            input_fingerprint: input.fingerprint(),
            post: RenderedPost {
                title: document.title,
                html: document.html,
                preview,
                clipboard_html,
                copy_snippet,
                notices,
            },
        })
    }

    async fn fetch_images(&self, keyword: &str, notices: &mut Vec<String>) -> Vec<StockImage> {
        let Some(photos) = &self.photos else {
            tracing::warn!("UNSPLASH_ACCESS_KEY is not set, skipping images");
            notices.push("⚠️ UNSPLASH_ACCESS_KEY가 설정되지 않아 이미지를 생략했습니다.".to_string());
            return Vec::new();
        };

        match photos.search_photos(keyword, self.image_count).await {
            Ok(images) if images.is_empty() => {
                tracing::warn!(keyword, "no images found");
                notices.push(format!("💡 '{keyword}' 키워드로 이미지를 찾지 못했습니다."));
                images
            }
            Ok(images) => {
                tracing::info!(count = images.len(), "images found");
                images
            }
            Err(e) => {
                tracing::warn!("image search failed: {}", e);
                notices.push(format!("❌ 이미지 검색 오류: {e}"));
                Vec::new()
            }
        }
    }
}

fn validate(kind: GeneratorKind, input: &GenerationInput) -> Result<(), GenerateError> {
    if input.keyword.trim().is_empty() {
        return Err(GenerateError::InvalidInput {
            message: "키워드를 입력해주세요.".to_string(),
        });
    }
    if kind.needs_product() && (input.product().is_empty() || input.url().is_empty()) {
        return Err(GenerateError::InvalidInput {
            message: "모든 정보를 입력해주세요.".to_string(),
        });
    }
    Ok(())
}

fn default_title(kind: GeneratorKind, keyword: &str, product: &str) -> String {
    match kind {
        GeneratorKind::NaverProfit => format!("{keyword} 후기"),
        GeneratorKind::NaverInfo => format!("{keyword} 완전 정리"),
        GeneratorKind::TistoryInfo => format!("{keyword} 완전 분석"),
        GeneratorKind::TistoryProfit => format!("{product} 솔직 후기"),
    }
}
