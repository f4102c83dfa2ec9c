use crate::models::{GenerationResult, GeneratorKind, StockImage};
use crate::services::catalog::{
    BUTTON_PHRASES, DISCLOSURES, DIVIDERS, GENERIC_DISCLOSURE, NAVER_CTA_HOOKS,
    NAVER_INFO_HEADING_STYLES, TISTORY_CTA_CSS, TISTORY_CTA_HOOKS, TISTORY_INFO_HEADING_STYLES,
    TISTORY_PROFIT_HEADING_STYLES,
};
use crate::services::images::image_html;
use crate::utils::{RandomSource, choose, choose_pair, dark_color, truncate_chars};
use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_IMAGE_SECTIONS: usize = 5;

static SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[H3\](.*?)\[/H3\]").expect("valid regex"));
static PLAIN_H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h3>(.*?)</h3>").expect("valid regex"));
static NAVER_CTA_LEFTOVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[CTA_\d+\]\]").expect("valid regex"));
static TISTORY_CTA_LEFTOVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[CTA_\d+\]").expect("valid regex"));
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<style[^>]*>.*?</style>").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

#[derive(Debug, Clone)]
pub struct PostContext<'a> {
    pub kind: GeneratorKind,
    pub keyword: &'a str,
    pub product: &'a str,
    pub url: &'a str,
    pub banner: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub html: String,
}

// Literal removal, not a markdown parser
pub fn strip_markdown(text: &str) -> String {
    text.replace('#', "")
        .replace('*', "")
        .replace("**", "")
        .replace("__", "")
}

pub fn style_headings<R: RandomSource + ?Sized>(
    content: &str,
    kind: GeneratorKind,
    rng: &mut R,
) -> (String, Vec<String>) {
    let marker: &Regex = match kind {
        GeneratorKind::TistoryProfit => &*PLAIN_H3,
        _ => &*SECTION_MARKER,
    };

    let mut styled = Vec::new();
    let expanded = marker.replace_all(content, |caps: &regex::Captures| {
        let heading = heading_html(kind, &caps[1], rng);
        styled.push(heading.clone());
        heading
    });
    (expanded.into_owned(), styled)
}

fn heading_html<R: RandomSource + ?Sized>(kind: GeneratorKind, text: &str, rng: &mut R) -> String {
    match kind {
        GeneratorKind::NaverProfit => format!(
            "\n\n{}\n<span style=\"font-size: 19px; font-weight: bold; color: #000000;\">📍 {}</span>\n\n",
            choose(rng, &DIVIDERS),
            text
        ),
        GeneratorKind::NaverInfo => format!(
            "\n\n<h3 style='font-size:19px; font-weight:bold; color:#111; {}'>{}</h3>\n\n",
            choose(rng, &NAVER_INFO_HEADING_STYLES),
            text
        ),
        GeneratorKind::TistoryInfo => {
            let style = colored_style(rng, &TISTORY_INFO_HEADING_STYLES);
            format!("<br><h3 style='{style}'>{text}</h3>")
        }
        GeneratorKind::TistoryProfit => {
            let style = colored_style(rng, &TISTORY_PROFIT_HEADING_STYLES);
            format!("<br><h3 style=\"{style}\">{text}</h3>")
        }
    }
}

fn colored_style<R: RandomSource + ?Sized>(rng: &mut R, styles: &[&str]) -> String {
    let color = dark_color(rng);
    choose(rng, styles).replace("{color}", &color)
}

pub fn insert_banner(content: &str, banner: Option<&str>, first_heading: Option<&str>) -> String {
    match (banner, first_heading) {
        (Some(banner), Some(heading)) if content.contains(heading) => {
            let wrapped = format!(
                "<div style=\"text-align:center;\"><div class=\"banner-wrapper\">{banner}</div></div>"
            );
            content.replacen(heading, &format!("{wrapped}{heading}"), 1)
        }
        _ => content.to_string(),
    }
}

pub fn inject_ctas<R: RandomSource + ?Sized>(
    content: &str,
    kind: GeneratorKind,
    product: &str,
    url: &str,
    rng: &mut R,
) -> String {
    let (tokens, leftover, hooks): ([&str; 2], &Regex, &[&str]) = match kind {
        GeneratorKind::TistoryProfit => (
            ["[CTA_1]", "[CTA_2]"],
            &*TISTORY_CTA_LEFTOVER,
            &TISTORY_CTA_HOOKS[..],
        ),
        _ => (
            ["[[CTA_1]]", "[[CTA_2]]"],
            &*NAVER_CTA_LEFTOVER,
            &NAVER_CTA_HOOKS[..],
        ),
    };

    let (first_hook, second_hook) = choose_pair(rng, hooks);
    let mut content = content.to_string();
    for (idx, (token, hook)) in tokens.iter().zip([first_hook, second_hook]).enumerate() {
        if content.contains(token) {
            let block = cta_html(kind, hook, idx, product, url, rng);
            content = content.replacen(token, &block, 1);
        }
    }
    leftover.replace_all(&content, "").into_owned()
}

fn cta_html<R: RandomSource + ?Sized>(
    kind: GeneratorKind,
    hook: &str,
    idx: usize,
    product: &str,
    url: &str,
    rng: &mut R,
) -> String {
    let href = encode_double_quoted_attribute(url);
    let product = encode_text(product);

    match kind {
        GeneratorKind::TistoryProfit => {
            let phrase = choose(rng, &BUTTON_PHRASES);
            let mut chars = phrase.chars();
            let emoji = chars.next().map(String::from).unwrap_or_default();
            let label = chars.as_str().trim();
            format!(
                r#"
<div class="blink-border">
    <span class="highlight-text animate-text">{hook}</span><br />
    <div style="margin-top: 12px;">
        <span class="animate-emoji">{emoji}</span>
        <a class="highlight-link" href="{href}" target="_blank" rel="noopener">
            {label} ({product})
        </a>
    </div>
</div>
"#
            )
        }
        _ => {
            let action = if idx == 0 {
                "최저가 & 혜택 확인하기"
            } else {
                "지금 바로 구매하기"
            };
            let link_text = encode_text(truncate_chars(url, 50));
            format!(
                r#"<div style="margin: 30px 0; padding: 20px; border: 3px solid #000; border-radius: 5px;"><p style="font-size: 15px; color: #000; margin: 0 0 10px 0; font-weight: bold;">{hook}</p><p style="font-size: 16px; color: #000; margin: 0 0 10px 0; font-weight: bold;">👉 {product} {action}</p><p style="font-size: 14px; margin: 0;"><a href="{href}" target="_blank" style="color: #000; text-decoration: underline;">🔗 {link_text}...</a></p></div>"#
            )
        }
    }
}

pub fn disclosure_for(url: &str) -> &'static str {
    let url = url.trim();
    if url.is_empty() {
        return "";
    }
    let lowered = url.to_lowercase();
    DISCLOSURES
        .iter()
        .find(|(signatures, _)| signatures.iter().any(|sig| lowered.contains(sig)))
        .map(|(_, sentence)| *sentence)
        .unwrap_or(GENERIC_DISCLOSURE)
}

pub fn interleave_images(content: &str, images: &[StockImage]) -> String {
    let closes = content.matches("</h3>").count();
    if images.is_empty() || closes < MIN_IMAGE_SECTIONS {
        return content.to_string();
    }

    let segments: Vec<&str> = content.split("</h3>").collect();
    let (last, body) = match segments.split_last() {
        Some(parts) => parts,
        None => return content.to_string(),
    };

    let mut result = String::with_capacity(content.len() + images.len() * 512);
    for (i, segment) in body.iter().enumerate() {
        result.push_str(segment);
        result.push_str("</h3>");
        if let Some(image) = images.get(i) {
            result.push_str(&image_html(image));
        }
    }
    result.push_str(last);
    result
}

pub fn render_document<R: RandomSource + ?Sized>(
    ctx: &PostContext<'_>,
    result: &GenerationResult,
    images: &[StockImage],
    rng: &mut R,
) -> Document {
    // Step 1: Naver renders markdown characters literally
    let (title, content) = if ctx.kind.is_naver() {
        (strip_markdown(&result.title), strip_markdown(&result.content))
    } else {
        (result.title.clone(), result.content.clone())
    };

    // Step 2: Headings, banner and CTA blocks
    let (mut content, headings) = style_headings(&content, ctx.kind, rng);

    if ctx.kind.needs_product() {
        if ctx.kind == GeneratorKind::TistoryProfit {
            content = insert_banner(&content, ctx.banner, headings.first().map(String::as_str));
        }
        content = inject_ctas(&content, ctx.kind, ctx.product, ctx.url, rng);
    }

    let disclosure = disclosure_for(ctx.url);

    // Step 3: Images between sections
    if ctx.kind == GeneratorKind::NaverInfo {
        content = interleave_images(&content, images);
    }

    let html = assemble(ctx, &title, disclosure, &content, &result.hashtags);
    Document { title, html }
}

fn assemble(
    ctx: &PostContext<'_>,
    title: &str,
    disclosure: &str,
    content: &str,
    hashtags: &str,
) -> String {
    match ctx.kind {
        GeneratorKind::NaverProfit => format!(
            r#"<div style="font-family: 'Nanum Gothic', sans-serif; font-size: 15px; line-height: 1.8; color: #000;">
{disclosure}

<h1 style="font-size: 24px; font-weight: bold; color: #000; margin: 20px 0; padding-bottom: 10px; border-bottom: 2px solid #000;">{title}</h1>

{content}

<div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; color: #000; font-weight: bold;">{hashtags}</div>
</div>"#
        ),
        GeneratorKind::NaverInfo => format!(
            r#"<div style="font-family: 'Nanum Gothic', sans-serif; font-size: 15px; line-height: 1.8; color: #000;">
<h1 style="font-size: 24px; font-weight: bold; color: #000; margin: 20px 0; padding-bottom: 10px; border-bottom: 2px solid #2c5aa0;">{title}</h1>

{content}

<div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; color: #000; font-weight: bold;">{hashtags}</div>
</div>"#
        ),
        GeneratorKind::TistoryInfo => {
            let keyword = encode_text(ctx.keyword);
            format!(
                r#"<div style="font-family: 'Noto Sans KR', sans-serif; font-size: 16px; line-height: 1.8; color: #333; max-width: 800px; margin: auto;">
<h1 style="font-size: 32px; font-weight: bold; color: #222; margin: 30px 0; text-align: center;">{title}</h1>

<div style="padding: 15px; background: #f1f3f5; border-radius: 8px; margin: 20px 0;">
<b style="color: #495057;">💡 핵심 요약:</b> {keyword}에 대한 심층 분석
</div>

{content}

<div style="margin-top: 40px; padding-top: 20px; border-top: 2px solid #dee2e6; color: #6c757d; font-size: 14px;">{hashtags}</div>
</div>"#
            )
        }
        GeneratorKind::TistoryProfit => format!(
            r#"
<div style='font-family: sans-serif; line-height: 2; color: #333; max-width: 800px; margin: auto; word-break: keep-all;'>
    {TISTORY_CTA_CSS}
    <p style='color: #888; font-size: 13px;'>{disclosure}</p><hr>
    <h1 style='font-size: 1.7em; line-height: 1.4; color: #000; margin-bottom: 20px;'>{title}</h1>
    {content}
    <br><div style='color: #aaa; margin-top: 40px; border-top: 1px solid #eee; padding-top: 20px;'>{hashtags}</div>
</div>
"#
        ),
    }
}

pub fn plain_text_mirror(html: &str) -> String {
    let without_styles = STYLE_BLOCK.replace_all(html, "");
    let without_tags = TAG.replace_all(&without_styles, "");
    let decoded = html_escape::decode_html_entities(&without_tags);
    decoded
        .replace("**", "")
        .replace("__", "")
        .replace('*', "")
        .replace('#', "")
        .trim()
        .to_string()
}
