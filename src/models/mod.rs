use serde::{Deserialize, Serialize};

/// The four post generators, one per platform and intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    NaverProfit,
    NaverInfo,
    TistoryInfo,
    TistoryProfit,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 4] = [
        GeneratorKind::NaverProfit,
        GeneratorKind::NaverInfo,
        GeneratorKind::TistoryInfo,
        GeneratorKind::TistoryProfit,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            GeneratorKind::NaverProfit => "naver-profit",
            GeneratorKind::NaverInfo => "naver-info",
            GeneratorKind::TistoryInfo => "tistory-info",
            GeneratorKind::TistoryProfit => "tistory-profit",
        }
    }

    /// Profit variants need a product name and an affiliate link.
    pub fn needs_product(self) -> bool {
        matches!(self, GeneratorKind::NaverProfit | GeneratorKind::TistoryProfit)
    }

    pub fn is_naver(self) -> bool {
        matches!(self, GeneratorKind::NaverProfit | GeneratorKind::NaverInfo)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    pub role: &'static str,
    pub tone: &'static str,
    pub keywords: &'static [&'static str],
    pub emoji_style: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Structure {
    pub id: u8,
    pub name: &'static str,
    pub sections: &'static [&'static str],
}

/// Body shape asked of the Naver informational generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InfoType {
    #[serde(rename = "문장형_체크리스트")]
    SentenceChecklist,
    #[serde(rename = "표_위주")]
    TableFirst,
    #[serde(rename = "단답형_리스트")]
    ShortList,
    #[serde(rename = "박스형_QA강조")]
    BoxedQa,
    #[serde(rename = "번호목록_속성표")]
    NumberedWithTable,
}

impl InfoType {
    pub const ALL: [InfoType; 5] = [
        InfoType::SentenceChecklist,
        InfoType::TableFirst,
        InfoType::ShortList,
        InfoType::BoxedQa,
        InfoType::NumberedWithTable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InfoType::SentenceChecklist => "문장형_체크리스트",
            InfoType::TableFirst => "표_위주",
            InfoType::ShortList => "단답형_리스트",
            InfoType::BoxedQa => "박스형_QA강조",
            InfoType::NumberedWithTable => "번호목록_속성표",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            InfoType::SentenceChecklist => "☑️ 항목1입니다. 설명을 2-3문장으로...",
            InfoType::TableFirst => "<table>로 체크리스트와 속성을 정리",
            InfoType::ShortList => "✅ 항목1 (1줄로 짧게)",
            InfoType::BoxedQa => "<div> 박스에 체크리스트 + Q&A 5개",
            InfoType::NumberedWithTable => "1. 항목1\n2. 항목2 + <table>속성표</table>",
        }
    }
}

/// Outline the model is asked to follow.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layout {
    Structure(&'static Structure),
    InfoType { info_type: InfoType },
    Fixed,
}

impl Layout {
    pub fn describe(&self) -> String {
        match self {
            Layout::Structure(structure) => structure.name.to_string(),
            Layout::InfoType { info_type } => info_type.label().to_string(),
            Layout::Fixed => "기본 구성".to_string(),
        }
    }
}

/// Fields entered by the user for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationInput {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Raw HTML placed before the first heading of a Tistory profit post.
    #[serde(default)]
    pub banner: Option<String>,
}

impl GenerationInput {
    pub fn product(&self) -> &str {
        self.product.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner
            .as_deref()
            .map(str::trim)
            .filter(|banner| !banner.is_empty())
    }

    /// Identity of the inputs; a stored post is stale once this changes.
    pub fn fingerprint(&self) -> String {
        format!("{}_{}_{}", self.keyword.trim(), self.product(), self.url())
    }
}

/// Everything needed to render one prompt.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub kind: GeneratorKind,
    pub keyword: String,
    pub product: String,
    pub affiliate_url: String,
    pub persona: &'static Persona,
    pub layout: Layout,
    pub facts: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub title: String,
    pub content: String,
    pub hashtags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    RecentNews,
    BroadText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockImage {
    pub image_url: String,
    pub photographer_name: String,
    pub photographer_profile_url: String,
}

/// Final output of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPost {
    pub title: String,
    pub html: String,
    pub preview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipboard_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_snippet: Option<String>,
    /// Degraded steps the user should know about.
    pub notices: Vec<String>,
}

/// What a successful run hands back to the caller, who owns it from here on.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub status: &'static str,
    pub run_id: uuid::Uuid,
    pub kind: GeneratorKind,
    pub persona: &'static Persona,
    pub layout: Layout,
    pub input_fingerprint: String,
    #[serde(flatten)]
    pub post: RenderedPost,
}
