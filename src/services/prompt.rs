use crate::models::{GenerationRequest, GeneratorKind, InfoType, Layout, Persona, Structure};
use crate::services::catalog::NAVER_PROFIT_STRUCTURES;

pub fn build_prompt(request: &GenerationRequest) -> String {
    let keyword = request.keyword.as_str();
    let persona = request.persona;
    let facts = request.facts.as_str();

    match request.kind {
        GeneratorKind::NaverProfit => {
            let structure = match &request.layout {
                Layout::Structure(structure) => *structure,
                _ => &NAVER_PROFIT_STRUCTURES[0],
            };
            naver_profit(
                keyword,
                &request.product,
                &request.affiliate_url,
                facts,
                persona,
                structure,
            )
        }
        GeneratorKind::NaverInfo => {
            let info_type = match &request.layout {
                Layout::InfoType { info_type } => *info_type,
                _ => InfoType::SentenceChecklist,
            };
            naver_info(keyword, facts, persona, info_type)
        }
        GeneratorKind::TistoryInfo => tistory_info(keyword, facts, persona),
        GeneratorKind::TistoryProfit => tistory_profit(keyword, &request.product, facts, persona),
    }
}

fn naver_profit(
    keyword: &str,
    product: &str,
    url: &str,
    facts: &str,
    persona: &Persona,
    structure: &Structure,
) -> String {
    let sections = structure.sections.join(", ");
    format!(
        r#"
당신은 지금 {role}입니다.

[철칙 - 위반 시 즉시 폐기]
1. 마크다운(#, *, **) 절대 금지. 오직 <b>태그만!
2. "안녕하세요", "오늘은", "알아보겠습니다" 금지
3. 자기소개 절대 금지
4. 쿠팡 언급 절대 금지
5. 마무리 멘트 절대 금지 ("결론", "마무리", "마치며")
6. 날짜 노출 절대 금지

[작성 정보]
- 키워드: {keyword}
- 제품: {product}
- 링크: {url}
- 실시간 이슈: {facts}
- 말투: {tone}
- 자주 쓰는 표현: {expressions}
- 이모지: {emoji}

[글자수] 정확히 1800~2400자

[JSON 응답]
{{
    "title": "제목",
    "content": "본문",
    "hashtags": "7개"
}}

[제목 작성법 - 다양한 후킹!]
반드시 아래 8가지 중 1개 (골고루 사용):
1. "{keyword} 이거 모르면 손해"
2. "알 사람만 아는 {keyword} 숨겨진 진실"
3. "{keyword} 샀다가 멘붕 온 이유"
4. "업계 10년이 폭로하는 {keyword} 비밀"
5. "{keyword} vs {{경쟁품}}, 충격적 결과"
6. "{keyword} 기대했는데 완전 반전"
7. "{keyword} 지금 안 보면 후회합니다"
8. "{keyword} 진실은 이것, 놓치지 마세요"

제목 규칙:
- {keyword} 반드시 포함
- 손해/후회/충격/진실/비밀 단어 포함
- 15-25자
- 이모지 금지

[절대 금지 - 자기소개!]
❌ "안녕하세요"
❌ "저는 ~입니다"
❌ "40대", "20대", "전문가", "블로거" 단어
❌ "~로서", "~로써"
❌ 본인 역할/나이/직업 언급
→ 바로 본론 시작!

[도입부] 첫 5문장이 생명!
- 첫 문장 5단어 이내
- 구체적 숫자 2개+
- 이모지 1~2개
- 자기소개 없이 바로 팩트!

[본문 구성]
{sections}로 전개

각 섹션:
- 소제목: [H3]제목[/H3]
- 이모지 자연스럽게

[CTA 배치]
[[CTA_1]]을 3번째 섹션 후
[[CTA_2]]를 FAQ 직전
총 2번

[FAQ 필수 3개]
Q1: 가장 큰 실수
Q2: 꼭 확인할 것
Q3: 지금 사야 하는 이유

[마무리]
FAQ 후 2~3문장:
"지금 안 하면 후회", "{{금액}}원 날리기 싫으면 지금"
→ 행동 촉구만! 정리/요약 금지!

[해시태그] 7개 (이모지 없이)

JSON만 출력하세요.
"#,
        role = persona.role,
        tone = persona.tone,
        expressions = persona.keywords.join(", "),
        emoji = persona.emoji_style,
    )
}

fn naver_info(keyword: &str, facts: &str, persona: &Persona, info_type: InfoType) -> String {
    format!(
        r#"
당신은 {role}입니다.

[철칙]
1. 마크다운(#, *, **) 절대 금지
2. AI 인사말 금지
3. 자기소개 금지 ("안녕하세요", "저는", "~입니다" 금지)
4. 마무리 멘트 금지
5. 날짜 노출 금지
6. 배경색 절대 금지! (네이버 깨짐)

[작성 정보]
- 키워드: {keyword}
- 정보: {facts}
- 말투: {tone}
- 자주 쓰는 표현: {expressions}
- 형태: {label}

[글자수] 정확히 1800~2400자

[제목 - 정보성 후킹!]
돈 금액 사용 금지! 아래 패턴 사용:
- "{keyword} 완전 정리 (이것만 알면 끝)"
- "{keyword} 핵심 총정리"
- "{keyword} 꼭 알아야 할 모든 것"
- "{keyword} 처음부터 끝까지"
- "{keyword} 이것만 보세요"
예: "건강보험 완전 정리 (이것만 알면 끝)"

[형태: {label}]
{instruction}

[소제목 형식 - 반드시 준수!]
모든 소제목은 [H3]제목내용[/H3] 형식으로 작성하세요.
예: [H3]핵심 체크리스트[/H3]
    [H3]속성 비교표[/H3]

[키워드 강조]
{keyword} 단어가 나올 때마다 <b>{keyword}</b>로 강조하세요.

[필수 섹션]
1. 체크리스트 (형태에 맞게)
   ⚠️ 배경색 절대 금지!

2. 속성표 (형태에 맞게)
   <table style="width:100%; border-collapse:collapse; margin:20px 0;">
   <tr><th style="border:1px solid #ddd; padding:10px;">항목</th></tr>
   ⚠️ 배경색 절대 금지!

3. Q&A 3~5개
   [H3]자주 듣는 질문[/H3] 다음 줄바꿈 후:

   <b style="color:#2c5aa0;">Q1. 질문?</b><br>
   A1. 답변...

   반드시 소제목 닫은 후 2줄 띄우고 Q1 시작!

[JSON 응답]
{{
    "title": "강력한 후킹 제목",
    "content": "본문",
    "hashtags": "7개"
}}

JSON만 출력하세요.
"#,
        role = persona.role,
        tone = persona.tone,
        expressions = persona.keywords.join(", "),
        label = info_type.label(),
        instruction = info_type.instruction(),
    )
}

fn tistory_info(keyword: &str, facts: &str, persona: &Persona) -> String {
    format!(
        r#"
당신은 {keyword}에 대한 {role}입니다.

[절대 규칙 - 매우 중요!]
1. 🚫 {keyword} 주제에서 절대 벗어나지 마세요
2. 🚫 관련 없는 경제/투자/전략 이야기 금지
   예시 금지:
   - 연예인 은퇴 → 경제/투자 ❌
   - 건강보험 → 부동산 ❌
   - 요리 레시피 → 주식 전망 ❌
3. 🚫 도입부부터 {keyword}만 다루세요
4. 🚫 억지로 미래 예측 넣지 마세요
5. 🚫 글자수 채우려고 주제 벗어나지 마세요

[작성 정보]
- 주제: {keyword} (이것만!)
- 정보: {facts}
- 말투: {tone}

[글자수] 정확히 1800~2400자

[제목 - 강력한 후킹!]
예: "{keyword} 이거 모르면 못 삽니다"

[구조]
도입: {keyword} 관련 후킹
본문: 5개 소제목 [H3]제목[/H3]
- {keyword}와 직접 관련된 내용만
- <b>태그</b> 강조

[JSON 응답]
{{
    "title": "강력한 후킹 제목",
    "content": "본문",
    "hashtags": "7개"
}}

JSON만 출력하세요.
"#,
        role = persona.role,
        tone = persona.tone,
    )
}

fn tistory_profit(keyword: &str, product: &str, facts: &str, persona: &Persona) -> String {
    format!(
        r#"
당신은 {role}입니다.

[절대 준수]
1. 자기소개 절대 금지 ("안녕하세요", "저는", "~입니다" 금지)
2. 제목: {product} 포함, 20자 내외, 다양한 후킹
   다음 중 하나 사용:
   - "{product} 샀다가 멘붕 온 이유"
   - "{product} 이거 모르면 손해"
   - "{product} 진실 알려드립니다"
   - "{product} vs 경쟁 제품 비교"
   - "{product} 숨겨진 비밀"
   - "{product} 지금 안 사면 후회"
3. 첫 줄부터 팩트로 공격 (자기소개 없이!)
4. 5개 소제목 반드시 <h3>태그 사용!
   예: <h3>첫 번째 소제목</h3>
       <h3>두 번째 소제목</h3>
5. 중간 [CTA_1], 끝 [CTA_2]
6. 이미지 금지
7. 말투: {tone}

[정보]
- 키워드: {keyword}
- 제품: {product}
- 뉴스: {facts}

[글자수] 2500자 이상

[JSON 응답]
{{
    "title": "강력한 후킹 제목 20자",
    "content": "본문",
    "hashtags": "7개"
}}

JSON만 출력하세요.
"#,
        role = persona.role,
        tone = persona.tone,
    )
}
