use crate::models::{GeneratorKind, Persona, Structure};

pub static NAVER_PROFIT_PERSONAS: [Persona; 5] = [
    Persona {
        role: "30대 워킹맘",
        tone: "친근한 존댓말",
        keywords: &["진짜", "완전", "대박", "리얼", "솔직히"],
        emoji_style: "😊 💕 👍 ✨ 🔥",
    },
    Persona {
        role: "20대 직장인",
        tone: "가벼운 반말",
        keywords: &["ㅇㅁ", "가성비", "꿀템", "핵이득", "존맛"],
        emoji_style: "🔥 💯 ✅ 💸 ⚡",
    },
    Persona {
        role: "40대 구매 전문가",
        tone: "정중한 존댓말",
        keywords: &["실제로", "확실히", "분명", "경험상", "추천드립니다"],
        emoji_style: "✅ 💡 📊 👌 ⭐",
    },
    Persona {
        role: "블로그 마니아",
        tone: "설명형 존댓말",
        keywords: &["정리해드릴게요", "알려드립니다", "확인해보세요", "참고하세요"],
        emoji_style: "📌 ✏️ 💬 🎯 📝",
    },
    Persona {
        role: "소비 분석가",
        tone: "분석적 존댓말",
        keywords: &["비교해보면", "데이터상", "실측", "결과적으로"],
        emoji_style: "📈 🔍 💰 🎓 ⚖️",
    },
];

pub static NAVER_INFO_PERSONAS: [Persona; 3] = [
    Persona {
        role: "전문 칼럼니스트",
        tone: "정중한 존댓말",
        keywords: &["분석하면", "살펴보면", "알 수 있습니다"],
        emoji_style: "",
    },
    Persona {
        role: "정보 큐레이터",
        tone: "친절한 설명",
        keywords: &["정리하면", "핵심은", "중요한 점은"],
        emoji_style: "",
    },
    Persona {
        role: "업계 전문가",
        tone: "전문적 존댓말",
        keywords: &["실제로", "데이터상", "경험상"],
        emoji_style: "",
    },
];

pub static TISTORY_INFO_PERSONAS: [Persona; 3] = [
    Persona {
        role: "트렌드 분석가",
        tone: "세련된 존댓말",
        keywords: &[],
        emoji_style: "",
    },
    Persona {
        role: "콘텐츠 큐레이터",
        tone: "친근한 존댓말",
        keywords: &[],
        emoji_style: "",
    },
    Persona {
        role: "정보 전문가",
        tone: "전문적 존댓말",
        keywords: &[],
        emoji_style: "",
    },
];

pub static TISTORY_PROFIT_PERSONAS: [Persona; 1] = [Persona {
    role: "구매 심리 마케팅 전문가",
    tone: "단호한 존댓말",
    keywords: &[],
    emoji_style: "",
}];

pub static NAVER_PROFIT_STRUCTURES: [Structure; 5] = [
    Structure {
        id: 1,
        name: "스토리텔링형",
        sections: &["개인 경험담", "문제 발견", "제품 만남", "사용 과정", "결과/변화"],
    },
    Structure {
        id: 2,
        name: "데이터 분석형",
        sections: &["시장 현황", "수치 비교", "스펙 분석", "가격 분석", "종합 평가"],
    },
    Structure {
        id: 3,
        name: "비교 대결형",
        sections: &["경쟁 제품들", "1차 비교", "심층 비교", "상황별 추천", "최종 승자"],
    },
    Structure {
        id: 4,
        name: "폭로 고발형",
        sections: &["충격 사실", "업계 속사정", "진실 분석", "대안 제시", "행동 촉구"],
    },
    Structure {
        id: 5,
        name: "Q&A 해결형",
        sections: &["베스트 질문", "오해 바로잡기", "핵심 답변", "추가 팁", "최종 정리"],
    },
];

pub fn personas(kind: GeneratorKind) -> &'static [Persona] {
    match kind {
        GeneratorKind::NaverProfit => &NAVER_PROFIT_PERSONAS,
        GeneratorKind::NaverInfo => &NAVER_INFO_PERSONAS,
        GeneratorKind::TistoryInfo => &TISTORY_INFO_PERSONAS,
        GeneratorKind::TistoryProfit => &TISTORY_PROFIT_PERSONAS,
    }
}

pub const NAVER_CTA_HOOKS: [&str; 8] = [
    "🚨 이거 모르고 사면 손해!",
    "⏰ 지금만 이 가격! 내일부터 인상",
    "💡 알 사람만 아는 숨겨진 혜택",
    "🚨 뒤늦게 알고 후회하지 마세요",
    "⚡ 지금 안 보면 기회 날아갑니다",
    "🔥 놓치면 후회할 특가!",
    "✨ 현명한 선택은 지금!",
    "💝 최저가 타이밍 놓치지 마세요",
];

pub const TISTORY_CTA_HOOKS: [&str; 10] = [
    "⚠️ 재고 비상! 지금 망설이면 품절각",
    "⏳ 오늘만 이 가격! 내일이면 정상가",
    "🚨 긴급 물량 확보! 소량 입고",
    "⚡ 품절 대란템, 보일 때 잡으세요",
    "💡 삶의 질 수직 상승! 강력 추천",
    "✨ 고민은 배송만 늦출 뿐",
    "💯 후기가 증명합니다",
    "💰 이 스펙에 이 가격? 사장님 미쳤어요",
    "👀 이 가격은 여기뿐! 최저가 좌표",
    "🔥 맘카페 난리 난 바로 그 제품",
];

// Emoji first, then the label
pub const BUTTON_PHRASES: [&str; 9] = [
    "👉 실시간 혜택 확인하기",
    "👉 역대급 특가 정보 보기",
    "👉 품절 전 재고 선점하기",
    "👉 공식몰 프로모션 확인",
    "👉 오늘만 진행되는 할인 보기",
    "👉 사용자 리얼 후기 확인",
    "👉 놓치면 후회할 최저가 좌표",
    "👉 지금 바로 상세 정보 확인",
    "👉 혜택 적용된 최종가 보기",
];

pub const DIVIDERS: [&str; 4] = [
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
    "────────────────────────────",
    "◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈◈",
    "============================================",
];

pub const NAVER_INFO_HEADING_STYLES: [&str; 3] = [
    "border-left: 10px solid #2c5aa0; padding-left: 15px; border-bottom: 1px solid #eee; margin: 40px 0 20px 0;",
    "border-top: 4px solid #2c5aa0; padding: 15px; border-bottom: 1px solid #eee; margin: 40px 0 20px 0;",
    "display: inline-block; padding: 5px 15px; border: 2px solid #2c5aa0; color: #2c5aa0; border-radius: 20px; margin: 40px 0 20px 0; font-weight: bold;",
];

pub const TISTORY_INFO_HEADING_STYLES: [&str; 4] = [
    "border-left: 15px solid {color}; border-bottom: 2px solid {color}; padding: 10px 15px; background: #f8f9fa; font-weight: bold;",
    "background: linear-gradient(to right, {color}, white); color: white; padding: 12px 20px; border-radius: 5px; box-shadow: 3px 3px 5px rgba(0,0,0,0.1);",
    "border: 2px solid {color}; padding: 15px; border-left: 10px solid {color}; border-radius: 0 10px 10px 0; background: #ffffff;",
    "border-top: 1px solid #ddd; border-bottom: 3px double {color}; padding: 10px 0; font-size: 1.5em;",
];

pub const TISTORY_PROFIT_HEADING_STYLES: [&str; 4] = [
    "border-left: 10px solid {color}; border-bottom: 2px solid {color}; padding: 5px 15px; margin: 40px 0 15px 0; font-weight: bold; font-size: 1.3em; display: block;",
    "background-color: {color}; color: white; padding: 10px 18px; margin: 40px 0 15px 0; font-weight: bold; border-radius: 5px; display: block;",
    "border-bottom: 5px double {color}; padding-bottom: 8px; margin: 40px 0 15px 0; font-weight: bold; font-size: 1.4em; display: block;",
    "border: 2px solid {color}; padding: 15px; border-left: 10px solid {color}; border-radius: 0 10px 10px 0; background: #ffffff; margin: 40px 0 15px 0; font-weight: bold; display: block;",
];

pub const DISCLOSURES: [(&[&str], &str); 3] = [
    (
        &["coupang"],
        "이 포스팅은 쿠팡 파트너스 활동의 일환으로, 이에 따른 일정액의 수수료를 제공받습니다.",
    ),
    (
        &["naver", "smartstore"],
        "이 포스팅은 네이버 쇼핑커넥트 활동의 일환으로, 판매 발생 시 수수료를 제공받습니다.",
    ),
    (
        &["oliveyoung"],
        "이 포스팅은 올리브영 쇼핑 큐레이터 활동의 일환으로, 판매 발생시 수수료를 제공받습니다.",
    ),
];

pub const GENERIC_DISCLOSURE: &str = "이 포스팅은 제휴 마케팅 활동의 일환으로 커미션를 받습니다.";

pub const FACTS_FALLBACK: &str = "최신 트렌드 분석을 기반으로 집필합니다.";

pub const TISTORY_CTA_CSS: &str = r#"<style>
.blink-border {
  background: #fbf0f6;
  border: 3px solid red;
  border-radius: 11px;
  padding: 18px 16px;
  margin: 25px 0;
  font-family: 'Nanum Gothic', sans-serif;
  line-height: 1.5;
  animation: border-blink 0.5s steps(1, end) infinite;
}
.banner-wrapper {
  display: inline-block;
  border: 3px solid red;
  padding: 5px;
  margin: 20px 0;
  animation: border-blink 0.5s steps(1, end) infinite;
}
@keyframes border-blink {
  0%   { border-color: red; }
  50%  { border-color: transparent; }
  100% { border-color: red; }
}
.highlight-text {
  font-weight: 900;
  font-size: 1.2em;
}
.animate-text {
  display: inline-block;
  animation: pulseText 1s infinite alternate;
}
@keyframes pulseText {
  from { color: #000; transform: scale(1); }
  to { color: #e60000; transform: scale(1.1); }
}
.animate-emoji {
  display: inline-block;
  animation: bounceEmoji 0.8s infinite alternate;
  font-size: 1.4em;
  margin-right: 5px;
}
@keyframes bounceEmoji {
  from { transform: scale(1); }
  to { transform: scale(1.6); }
}
.highlight-link {
  color: #1a3d7c;
  font-weight: bold;
  text-decoration: underline;
  font-size: 1.05em;
}
</style>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_ids_are_sequential() {
        for (idx, structure) in NAVER_PROFIT_STRUCTURES.iter().enumerate() {
            assert_eq!(structure.id as usize, idx + 1);
            assert_eq!(structure.sections.len(), 5);
        }
    }

    #[test]
    fn hook_catalogs_have_no_duplicates() {
        for hooks in [&NAVER_CTA_HOOKS[..], &TISTORY_CTA_HOOKS[..]] {
            let mut sorted = hooks.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), hooks.len());
        }
    }

    #[test]
    fn every_generator_has_personas() {
        for kind in GeneratorKind::ALL {
            assert!(!personas(kind).is_empty());
        }
    }
}
