use crate::error::GenerateError;
use crate::models::GenerationResult;
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct FieldDefaults {
    pub title: String,
    pub hashtags: String,
}

impl FieldDefaults {
    pub fn for_keyword(title: impl Into<String>, keyword: &str) -> Self {
        Self {
            title: title.into(),
            hashtags: keyword_hashtag(keyword),
        }
    }
}

pub fn keyword_hashtag(keyword: &str) -> String {
    let tag: String = keyword.chars().filter(|c| !c.is_whitespace()).collect();
    if tag.is_empty() {
        String::new()
    } else {
        format!("#{tag}")
    }
}

pub fn parse_generation(raw: &str, defaults: &FieldDefaults) -> Result<GenerationResult, GenerateError> {
    let object = locate_object(raw)?;

    let title = match object.get("title") {
        Some(Value::String(title)) => title.clone(),
        _ => defaults.title.clone(),
    };
    let content = match object.get("content") {
        Some(Value::String(content)) => content.clone(),
        _ => String::new(),
    };
    let hashtags = match object.get("hashtags") {
        Some(Value::String(tags)) => tags.clone(),
        Some(Value::Array(tags)) => {
            let joined = tags
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            if joined.is_empty() {
                defaults.hashtags.clone()
            } else {
                joined
            }
        }
        _ => defaults.hashtags.clone(),
    };

    Ok(GenerationResult {
        title,
        content,
        hashtags,
    })
}

fn locate_object(raw: &str) -> Result<Map<String, Value>, GenerateError> {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(raw.trim()) {
        return Ok(object);
    }

    let start = raw.find('{');
    let end = raw.rfind('}');
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(GenerateError::MalformedResponse {
                details: "no JSON object in model response".to_string(),
            });
        }
    };

    // Widest span first, then the first value that decodes from the opening brace.
    let decoded = serde_json::from_str::<Value>(&raw[start..=end]).or_else(|_| {
        serde_json::Deserializer::from_str(&raw[start..])
            .into_iter::<Value>()
            .next()
            .unwrap_or_else(|| serde_json::from_str::<Value>(""))
    });

    match decoded {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(GenerateError::MalformedResponse {
            details: format!("expected a JSON object, found {}", kind_of(&other)),
        }),
        Err(err) => Err(GenerateError::MalformedResponse {
            details: err.to_string(),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> FieldDefaults {
        FieldDefaults::for_keyword("무선 청소기 후기", "무선 청소기")
    }

    #[test]
    fn well_formed_triple_passes_through() {
        let expected = GenerationResult {
            title: "무선 청소기 이거 모르면 손해".into(),
            content: "본문 [H3]소제목[/H3] \"따옴표\" {중괄호}".into(),
            hashtags: "#청소기 #다이슨".into(),
        };
        let raw = serde_json::to_string(&expected).unwrap();
        assert_eq!(parse_generation(&raw, &defaults()).unwrap(), expected);
    }

    #[test]
    fn tolerates_fences_and_chatter() {
        let raw = "물론입니다!\n```json\n{\"title\": \"t\", \"content\": \"c\", \"hashtags\": \"#h\"}\n```";
        let result = parse_generation(raw, &defaults()).unwrap();
        assert_eq!(result.title, "t");
        assert_eq!(result.content, "c");
    }

    #[test]
    fn trailing_braces_after_object_are_ignored() {
        let raw = r##"{"title": "t", "content": "c", "hashtags": "#h"} 참고: {끝}"##;
        let result = parse_generation(raw, &defaults()).unwrap();
        assert_eq!(result.hashtags, "#h");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let result = parse_generation(r#"{"content": "본문만"}"#, &defaults()).unwrap();
        assert_eq!(result.title, "무선 청소기 후기");
        assert_eq!(result.content, "본문만");
        assert_eq!(result.hashtags, "#무선청소기");
    }

    #[test]
    fn hashtag_lists_are_joined() {
        let raw = r##"{"title": "t", "content": "c", "hashtags": ["#a", "#b"]}"##;
        assert_eq!(parse_generation(raw, &defaults()).unwrap().hashtags, "#a #b");
    }

    #[test]
    fn empty_fields_are_kept() {
        let raw = r#"{"title":"","content":"c","hashtags":""}"#;
        let expected = GenerationResult {
            title: String::new(),
            content: "c".into(),
            hashtags: String::new(),
        };
        assert_eq!(parse_generation(raw, &defaults()).unwrap(), expected);
    }

    #[test]
    fn non_string_hashtags_take_default() {
        let raw = r#"{"title": "t", "content": "c", "hashtags": [1, 2]}"#;
        assert_eq!(parse_generation(raw, &defaults()).unwrap().hashtags, "#무선청소기");

        let raw = r#"{"title": "t", "content": "c", "hashtags": 7}"#;
        assert_eq!(parse_generation(raw, &defaults()).unwrap().hashtags, "#무선청소기");
    }

    #[test]
    fn no_object_is_malformed() {
        for raw in ["", "죄송합니다. 도와드릴 수 없습니다.", "} backwards {", "[1, 2]"] {
            let err = parse_generation(raw, &defaults()).unwrap_err();
            assert!(matches!(err, GenerateError::MalformedResponse { .. }), "{raw}");
        }
    }

    #[test]
    fn broken_object_is_malformed() {
        let err = parse_generation(r#"{"title": "t", "content": }"#, &defaults()).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse { .. }));
    }
}
