//! Content fetch and normalize pipeline.
//!
//! One call to [`fetch_batch`] asks the provider for a full front page, repairs
//! and parses the reply, and normalizes it into a [`Batch`]. Every failure is
//! absorbed here: the caller always receives a non-empty batch, falling back to
//! a single "connection interrupted" notice.

use crate::article::{Article, Batch};
use crate::config::Config;
use crate::error::FetchError;
use crate::gemini;
use crate::i18n::{english_long_date, LocalizedText};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, error, info, warn};

/// Categories the editor may assign
pub const CATEGORIES: [&str; 6] = ["World", "Politics", "Finance", "Technology", "Science", "Sports"];

/// Stories requested per edition: 1 hero, 2 major, 4 minor
pub const ARTICLES_PER_EDITION: usize = 7;

const IMAGE_SERVICE: &str = "https://picsum.photos/seed";

/// Article as the provider returns it, before normalization.
///
/// Fields are decoded leniently: a value of the wrong shape is treated as
/// absent so one bad field never costs the rest of the edition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default, deserialize_with = "lenient_text")]
    pub headline: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subheadline: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image_caption: Option<LocalizedText>,
    /// Image generation description; requested but not used for rendering
    #[serde(default)]
    pub image_prompt: Option<Value>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<LocalizedText>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(localized_from_value(&value))
}

/// Bilingual text from an `{ "en", "zh" }` object; anything else is `None`
fn localized_from_value(value: &Value) -> Option<LocalizedText> {
    let object = value.as_object()?;
    let en = object.get("en").and_then(Value::as_str).unwrap_or_default();
    let zh = object
        .get("zh")
        .and_then(Value::as_str)
        .filter(|zh| !zh.is_empty());

    if en.is_empty() && zh.is_none() {
        return None;
    }
    Some(LocalizedText {
        en: en.to_string(),
        zh: zh.map(str::to_string),
    })
}

// ==================== Prompts ====================

/// Build the editor persona and house rules
pub fn build_system_instruction() -> String {
    format!(
        r#"You are the Chief Editor of "The Daily Chronicle" (每日纪事报), a prestigious, old-school newspaper.
Your goal is to produce a daily edition containing current real-world news in BOTH English and Chinese.

Adhere to these rules:
1. Content must be written in a formal, journalistic, broadsheet style.
2. For Chinese (zh), use a formal, written style (书面语) suitable for a serious newspaper.
3. Avoid "clickbait". Use clear, descriptive, bold headlines.
4. Provide SUBSTANTIAL content. Each article should be between 150-300 words (English) or 250-500 characters (Chinese).
5. Categorize stories into: {}.
6. Return the data strictly as a JSON object containing bilingual fields."#,
        CATEGORIES.join(", ")
    )
}

/// Build the front-page request for `date`
pub fn build_prompt(date: NaiveDate) -> String {
    format!(
        r#"Generate the front-page content for {date}.
Use Google Search to find the most important real news events happening right now or in the last 24 hours.

Create {count} distinct articles:
- 1 "Hero" story (The most important global event).
- 2 Major stories.
- 4 Minor stories (mix of Tech, Sports, Science).

Format the output as a JSON object with a key "articles" containing an array of objects.
Do NOT use Markdown formatting in the response (no ```json). Just the raw JSON string.
Separate paragraphs inside "content" with newline characters.

Schema for each article object:
{{
  "headline": {{ "en": "String", "zh": "String" }},
  "subheadline": {{ "en": "String", "zh": "String" }},
  "category": {{ "en": "One of {categories}", "zh": "String" }},
  "author": {{ "en": "String", "zh": "String" }},
  "location": {{ "en": "String", "zh": "String" }},
  "content": {{ "en": "String (full text)", "zh": "String (full text)" }},
  "imageCaption": {{ "en": "String", "zh": "String" }},
  "imagePrompt": "String (Description for image generation, English only)"
}}"#,
        date = english_long_date(date),
        count = ARTICLES_PER_EDITION,
        categories = CATEGORIES.join("|"),
    )
}

// ==================== Payload Repair ====================

static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Remove every code fence marker (```` ```json ```` or ```` ``` ````) and trim
pub fn strip_fences(text: &str) -> String {
    let regex = FENCE_REGEX.get_or_init(|| Regex::new(r"```(?:json)?").expect("valid regex"));
    regex.replace_all(text, "").trim().to_string()
}

/// Substring from the first `{` to the last `}`, inclusive
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Parse provider text into raw articles.
///
/// Tries the fence-stripped text directly, then the largest object-shaped
/// substring. The result must carry an `articles` array of objects.
pub fn parse_payload(text: &str) -> Result<Vec<RawArticle>, FetchError> {
    let cleaned = strip_fences(text);

    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            debug!("Direct JSON parse failed ({}), extracting object", e);
            let candidate = extract_object(&cleaned).ok_or_else(|| {
                FetchError::MalformedResponse("no JSON object in response".to_string())
            })?;
            serde_json::from_str(candidate).map_err(|e| {
                FetchError::MalformedResponse(format!("invalid JSON after extraction: {}", e))
            })?
        }
    };

    let articles = value
        .get("articles")
        .and_then(|a| a.as_array())
        .ok_or_else(|| {
            FetchError::MalformedResponse("missing \"articles\" array".to_string())
        })?;

    articles
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            if !raw.is_object() {
                return Err(FetchError::MalformedResponse(format!(
                    "article {} is not an object",
                    index
                )));
            }
            RawArticle::deserialize(raw).map_err(|e| {
                FetchError::MalformedResponse(format!("article {}: {}", index, e))
            })
        })
        .collect()
}

// ==================== Normalization ====================

fn default_author() -> LocalizedText {
    LocalizedText::new("Staff Writer", "本报记者")
}

fn default_location() -> LocalizedText {
    LocalizedText::new("Unknown", "未知")
}

/// Placeholder image for a slot.
///
/// Stable for a given index, category and date; not topically related.
pub fn image_url(index: usize, category: Option<&LocalizedText>, date: NaiveDate) -> String {
    let category = category
        .map(|c| c.en.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or("news");
    let seed = format!("{}{}{}", index, category, english_long_date(date));
    format!("{}/{}/800/600", IMAGE_SERVICE, urlencoding::encode(&seed))
}

/// Turn raw provider articles into a batch, preserving order.
pub fn normalize(raw: Vec<RawArticle>, date: NaiveDate, fetched_at: DateTime<Utc>) -> Batch {
    let stamp = fetched_at.timestamp_millis();

    raw.into_iter()
        .enumerate()
        .map(|(index, article)| Article {
            id: format!("article-{}-{}", index, stamp),
            image_url: Some(image_url(index, article.category.as_ref(), date)),
            headline: article.headline.unwrap_or_default(),
            subheadline: article.subheadline,
            category: article.category.unwrap_or_default(),
            author: article.author.unwrap_or_else(default_author),
            location: article.location.unwrap_or_else(default_location),
            content: article.content.unwrap_or_default(),
            image_caption: article.image_caption,
            is_hero: index == 0,
        })
        .collect()
}

/// The single-article edition shown when the newsroom cannot be reached
pub fn fallback_batch() -> Batch {
    vec![Article {
        id: "error-1".to_string(),
        headline: LocalizedText::new("Connection Interrupted", "连接中断"),
        subheadline: Some(LocalizedText::new("Newsroom Offline", "编辑部离线")),
        category: LocalizedText::new("Technology", "科技"),
        author: LocalizedText::new("System Admin", "系统管理员"),
        location: LocalizedText::new("Server Room", "服务器机房"),
        content: LocalizedText::new(
            "We are currently experiencing difficulties communicating with our foreign correspondents (The Gemini API). Please try refreshing the page in a few moments.\n\nJournalism never sleeps, but sometimes servers do.",
            "我们目前在与前线记者（Gemini API）通讯时遇到困难。请稍后刷新页面再试。\n\n新闻永不眠，但服务器偶尔需要休息。",
        ),
        image_url: Some(format!("{}/error/800/600", IMAGE_SERVICE)),
        image_caption: Some(LocalizedText::new("Technical difficulties", "技术故障")),
        is_hero: true,
    }]
}

// ==================== Pipeline ====================

async fn try_fetch_batch(
    client: &reqwest::Client,
    config: &Config,
    date: NaiveDate,
) -> Result<Batch, FetchError> {
    let text = gemini::generate_grounded(
        client,
        config,
        &build_system_instruction(),
        &build_prompt(date),
    )
    .await?;

    let raw = parse_payload(&text)?;
    if raw.is_empty() {
        return Err(FetchError::MalformedResponse(
            "\"articles\" array is empty".to_string(),
        ));
    }
    Ok(normalize(raw, date, Utc::now()))
}

/// Fetch the edition for `date`.
///
/// Makes exactly one provider call. Never fails: transport and payload errors
/// are logged here and replaced by [`fallback_batch`].
pub async fn fetch_batch(client: &reqwest::Client, config: &Config, date: NaiveDate) -> Batch {
    info!("Fetching edition for {}", date);

    match try_fetch_batch(client, config, date).await {
        Ok(batch) => {
            if batch.len() != ARTICLES_PER_EDITION {
                warn!(
                    "Edition for {} has {} articles (expected {})",
                    date,
                    batch.len(),
                    ARTICLES_PER_EDITION
                );
            }
            info!("✓ Fetched {} articles for {}", batch.len(), date);
            batch
        }
        Err(e) => {
            error!("Failed to fetch edition for {}: {}", date, e);
            fallback_batch()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::theme::Theme;
    use chrono::TimeZone;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn create_test_config(api_url: &str) -> Config {
        Config {
            gemini_api_key: "test-gemini-key".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_api_url: api_url.to_string(),
            gemini_temperature: 0.3,
            default_language: Language::Zh,
            default_theme: Theme::Classic,
            api_key: None,
            schedule_times: vec![],
            port: 8080,
        }
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn raw_article_json(n: usize) -> serde_json::Value {
        serde_json::json!({
            "headline": { "en": format!("Headline {}", n), "zh": format!("标题 {}", n) },
            "subheadline": { "en": "Sub", "zh": "副标题" },
            "category": { "en": CATEGORIES[n % CATEGORIES.len()], "zh": "类别" },
            "author": { "en": "Jane Doe", "zh": "某记者" },
            "location": { "en": "London", "zh": "伦敦" },
            "content": { "en": "First paragraph.\n\nSecond paragraph.", "zh": "第一段。\n\n第二段。" },
            "imageCaption": { "en": "Caption", "zh": "说明" },
            "imagePrompt": "A skyline at dusk"
        })
    }

    fn payload(count: usize) -> String {
        let articles: Vec<_> = (0..count).map(raw_article_json).collect();
        serde_json::json!({ "articles": articles }).to_string()
    }

    fn gemini_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        })
    }

    async fn mount_reply(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .respond_with(template)
            .expect(1)
            .mount(server)
            .await;
    }

    fn assert_is_fallback(batch: &Batch) {
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0], fallback_batch()[0]);
        assert!(batch[0].is_hero);
    }

    // ==================== Prompt Tests ====================

    #[test]
    fn test_system_instruction_content() {
        let instruction = build_system_instruction();
        assert!(instruction.contains("The Daily Chronicle"));
        assert!(instruction.contains("每日纪事报"));
        assert!(instruction.contains("书面语"));
        assert!(instruction.contains("World, Politics, Finance, Technology, Science, Sports"));
    }

    #[test]
    fn test_prompt_includes_date_and_composition() {
        let prompt = build_prompt(sample_date());
        assert!(prompt.contains("Monday, October 19, 2026"));
        assert!(prompt.contains("Create 7 distinct articles"));
        assert!(prompt.contains("1 \"Hero\" story"));
        assert!(prompt.contains("2 Major stories"));
        assert!(prompt.contains("4 Minor stories"));
        assert!(prompt.contains("\"articles\""));
        assert!(prompt.contains("\"imagePrompt\""));
        assert!(prompt.contains("\"imageCaption\""));
    }

    // ==================== Fence Stripping Tests ====================

    #[test]
    fn test_strip_fences_json_block() {
        let text = "```json\n{\"articles\": []}\n```";
        assert_eq!(strip_fences(text), "{\"articles\": []}");
    }

    #[test]
    fn test_strip_fences_plain_block() {
        assert_eq!(strip_fences("```\n{}\n```\n"), "{}");
    }

    #[test]
    fn test_strip_fences_no_fences() {
        assert_eq!(strip_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    // ==================== Object Extraction Tests ====================

    #[test]
    fn test_extract_object_with_surrounding_prose() {
        let text = "Here is today's paper: {\"articles\": [{}]} Enjoy!";
        assert_eq!(extract_object(text), Some("{\"articles\": [{}]}"));
    }

    #[test]
    fn test_extract_object_none_without_braces() {
        assert_eq!(extract_object("no json here"), None);
        assert_eq!(extract_object("} backwards {"), None);
    }

    // ==================== parse_payload Tests ====================

    #[test]
    fn test_parse_payload_direct() {
        let raw = parse_payload(&payload(7)).expect("Should parse");
        assert_eq!(raw.len(), 7);
        assert_eq!(raw[0].headline.as_ref().unwrap().en, "Headline 0");
        assert_eq!(raw[3].image_prompt, Some(serde_json::json!("A skyline at dusk")));
    }

    #[test]
    fn test_parse_payload_fenced() {
        let text = format!("```json\n{}\n```", payload(2));
        let raw = parse_payload(&text).expect("Should parse");
        assert_eq!(raw.len(), 2);
        assert_eq!(
            raw[1].content.as_ref().unwrap().en,
            "First paragraph.\n\nSecond paragraph."
        );
    }

    #[test]
    fn test_parse_payload_recovers_embedded_object() {
        let text = format!("Sure! Here is the edition:\n{}\nLet me know.", payload(3));
        let raw = parse_payload(&text).expect("Should recover");
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn test_parse_payload_garbage() {
        let err = parse_payload("The newsroom is closed today.").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_payload_broken_object() {
        let err = parse_payload("{\"articles\": [ {\"headline\": }").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_payload_null_articles() {
        let err = parse_payload(r#"{"articles": null}"#).unwrap_err();
        assert!(err.to_string().contains("articles"));
    }

    #[test]
    fn test_parse_payload_missing_articles() {
        assert!(parse_payload(r#"{"stories": []}"#).is_err());
    }

    #[test]
    fn test_parse_payload_articles_not_array() {
        assert!(parse_payload(r#"{"articles": {"headline": "x"}}"#).is_err());
    }

    #[test]
    fn test_parse_payload_non_object_element() {
        let err = parse_payload(r#"{"articles": ["just a string"]}"#).unwrap_err();
        assert!(err.to_string().contains("article 0"));
    }

    #[test]
    fn test_parse_payload_tolerates_off_shape_fields() {
        let mut articles: Vec<_> = (0..7).map(raw_article_json).collect();
        articles[3]["subheadline"] = serde_json::json!({ "en": null, "zh": "副标题" });
        articles[5]["location"] = serde_json::json!("Paris");
        articles[6]["imagePrompt"] = serde_json::json!({ "en": "skyline" });
        articles[2]["headline"] = serde_json::json!(42);
        let text = serde_json::json!({ "articles": articles }).to_string();

        let raw = parse_payload(&text).expect("Should parse");
        assert_eq!(raw.len(), 7);
        assert_eq!(raw[3].subheadline.as_ref().unwrap().en, "");
        assert_eq!(
            raw[3].subheadline.as_ref().unwrap().get(Language::Zh),
            "副标题"
        );
        assert!(raw[5].location.is_none());
        assert!(raw[2].headline.is_none());
        assert_eq!(raw[6].image_prompt, Some(serde_json::json!({ "en": "skyline" })));

        let batch = normalize(raw, sample_date(), Utc::now());
        assert_eq!(batch.len(), 7);
        assert_eq!(batch[5].location.get(Language::En), "Unknown");
        assert_eq!(batch[2].headline.get(Language::En), "");
        assert_eq!(batch[0].headline.get(Language::En), "Headline 0");
    }

    #[test]
    fn test_parse_payload_empty_localized_object_is_absent() {
        let raw = parse_payload(r#"{"articles": [{"author": {"en": "", "zh": null}}]}"#)
            .expect("Should parse");
        assert!(raw[0].author.is_none());
        let batch = normalize(raw, sample_date(), Utc::now());
        assert_eq!(batch[0].author.get(Language::Zh), "本报记者");
    }

    #[test]
    fn test_parse_payload_empty_array() {
        let raw = parse_payload(r#"{"articles": []}"#).expect("Should parse");
        assert!(raw.is_empty());
    }

    // ==================== Normalization Tests ====================

    #[test]
    fn test_normalize_sets_hero_on_first_only() {
        let raw = parse_payload(&payload(7)).unwrap();
        let batch = normalize(raw, sample_date(), Utc::now());

        assert_eq!(batch.len(), 7);
        assert!(batch[0].is_hero);
        assert!(batch[1..].iter().all(|a| !a.is_hero));
    }

    #[test]
    fn test_normalize_ids_unique_and_stamped() {
        let fetched_at = Utc.with_ymd_and_hms(2026, 10, 19, 6, 0, 0).unwrap();
        let raw = parse_payload(&payload(3)).unwrap();
        let batch = normalize(raw, sample_date(), fetched_at);

        let stamp = fetched_at.timestamp_millis();
        assert_eq!(batch[0].id, format!("article-0-{}", stamp));
        assert_eq!(batch[2].id, format!("article-2-{}", stamp));
    }

    #[test]
    fn test_normalize_defaults_author_and_location() {
        let raw = vec![RawArticle {
            headline: Some(LocalizedText::new("H", "标")),
            ..Default::default()
        }];
        let batch = normalize(raw, sample_date(), Utc::now());

        assert_eq!(batch[0].author, LocalizedText::new("Staff Writer", "本报记者"));
        assert_eq!(batch[0].location, LocalizedText::new("Unknown", "未知"));
        assert!(batch[0].subheadline.is_none());
    }

    #[test]
    fn test_normalize_preserves_fields_and_order() {
        let raw = parse_payload(&payload(4)).unwrap();
        let batch = normalize(raw, sample_date(), Utc::now());

        for (i, article) in batch.iter().enumerate() {
            assert_eq!(article.headline.en, format!("Headline {}", i));
            assert_eq!(article.author.en, "Jane Doe");
            assert_eq!(article.location.get(Language::Zh), "伦敦");
        }
    }

    #[test]
    fn test_image_url_is_deterministic() {
        let category = LocalizedText::new("Finance", "财经");
        let first = image_url(2, Some(&category), sample_date());
        let second = image_url(2, Some(&category), sample_date());
        assert_eq!(first, second);
        assert_eq!(
            first,
            "https://picsum.photos/seed/2FinanceMonday%2C%20October%2019%2C%202026/800/600"
        );
    }

    #[test]
    fn test_image_url_without_category_uses_news() {
        let url = image_url(0, None, sample_date());
        assert!(url.starts_with("https://picsum.photos/seed/0newsMonday"));

        let empty = LocalizedText::new("", "");
        assert_eq!(image_url(0, Some(&empty), sample_date()), url);
    }

    #[test]
    fn test_image_url_varies_by_slot() {
        let category = LocalizedText::english("World");
        assert_ne!(
            image_url(0, Some(&category), sample_date()),
            image_url(1, Some(&category), sample_date())
        );
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_fallback_batch_content() {
        let batch = fallback_batch();
        assert_eq!(batch.len(), 1);

        let article = &batch[0];
        assert!(article.is_hero);
        assert_eq!(article.id, "error-1");
        assert_eq!(article.headline.get(Language::En), "Connection Interrupted");
        assert_eq!(article.headline.get(Language::Zh), "连接中断");
        assert_eq!(article.paragraphs(Language::En).len(), 2);
        assert_eq!(article.paragraphs(Language::Zh).len(), 2);
        assert_eq!(
            article.image_url.as_deref(),
            Some("https://picsum.photos/seed/error/800/600")
        );
    }

    // ==================== fetch_batch Tests ====================

    #[tokio::test]
    async fn test_fetch_batch_success_seven_articles() {
        let mock_server = MockServer::start().await;
        mount_reply(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(gemini_body(&payload(7))),
        )
        .await;

        let config = create_test_config(&mock_server.uri());
        let batch = fetch_batch(&reqwest::Client::new(), &config, sample_date()).await;

        assert_eq!(batch.len(), 7);
        assert!(batch[0].is_hero);
        assert_eq!(batch.iter().filter(|a| a.is_hero).count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_batch_fenced_payload() {
        let mock_server = MockServer::start().await;
        let fenced = format!("```json\n{}\n```", payload(7));
        mount_reply(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(gemini_body(&fenced)),
        )
        .await;

        let config = create_test_config(&mock_server.uri());
        let batch = fetch_batch(&reqwest::Client::new(), &config, sample_date()).await;

        assert_eq!(batch.len(), 7);
        assert_eq!(batch[5].headline, LocalizedText::new("Headline 5", "标题 5"));
        assert_eq!(
            batch[5].content.get(Language::En),
            "First paragraph.\n\nSecond paragraph."
        );
    }

    #[tokio::test]
    async fn test_fetch_batch_provider_error_falls_back() {
        let mock_server = MockServer::start().await;
        mount_reply(
            &mock_server,
            ResponseTemplate::new(500).set_body_string("internal error"),
        )
        .await;

        let config = create_test_config(&mock_server.uri());
        let batch = fetch_batch(&reqwest::Client::new(), &config, sample_date()).await;

        // The expectation of exactly one request also asserts no retry
        assert_is_fallback(&batch);
    }

    #[tokio::test]
    async fn test_fetch_batch_unreachable_falls_back() {
        let config = create_test_config("http://127.0.0.1:1");
        let batch = fetch_batch(&reqwest::Client::new(), &config, sample_date()).await;
        assert_is_fallback(&batch);
    }

    #[tokio::test]
    async fn test_fetch_batch_malformed_json_falls_back() {
        let mock_server = MockServer::start().await;
        mount_reply(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(gemini_body("{\"articles\": [ oops")),
        )
        .await;

        let config = create_test_config(&mock_server.uri());
        let batch = fetch_batch(&reqwest::Client::new(), &config, sample_date()).await;
        assert_is_fallback(&batch);
    }

    #[tokio::test]
    async fn test_fetch_batch_null_articles_falls_back() {
        let mock_server = MockServer::start().await;
        mount_reply(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(gemini_body(r#"{"articles": null}"#)),
        )
        .await;

        let config = create_test_config(&mock_server.uri());
        let batch = fetch_batch(&reqwest::Client::new(), &config, sample_date()).await;
        assert_is_fallback(&batch);
    }

    #[tokio::test]
    async fn test_fetch_batch_empty_articles_falls_back() {
        let mock_server = MockServer::start().await;
        mount_reply(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(gemini_body(r#"{"articles": []}"#)),
        )
        .await;

        let config = create_test_config(&mock_server.uri());
        let batch = fetch_batch(&reqwest::Client::new(), &config, sample_date()).await;
        assert_is_fallback(&batch);
    }

    #[tokio::test]
    async fn test_fetch_batch_empty_candidates_falls_back() {
        let mock_server = MockServer::start().await;
        mount_reply(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .await;

        let config = create_test_config(&mock_server.uri());
        let batch = fetch_batch(&reqwest::Client::new(), &config, sample_date()).await;
        assert_is_fallback(&batch);
    }
}
