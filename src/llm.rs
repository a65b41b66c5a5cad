use reqwest::header::AUTHORIZATION;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::env;

#[derive(Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

/// Raw tweet record as the model emits it, before conversion into the
/// domain `Tweet` shape.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedTweet {
    pub id: String,
    pub author_name: String,
    pub author_handle: String,
    #[serde(default)]
    pub author_verified: bool,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub retweets: u64,
    #[serde(default)]
    pub views: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedReply {
    pub content: String,
}

impl LlmClient {
    pub fn from_env(model_override: Option<String>) -> Option<Self> {
        let api_key = env::var("OPENAI_API_KEY").ok()?;
        let api_base =
            env::var("OPENAI_API_BASE").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = model_override
            .or_else(|| env::var("OPENAI_MODEL").ok())
            .unwrap_or_else(|| "gpt-4o".to_string());
        let client = reqwest::Client::new();
        Some(Self {
            client,
            api_key,
            api_base,
            model,
        })
    }

    pub async fn generate_tweets(&self, prompt: &str) -> Result<Vec<GeneratedTweet>, String> {
        self.complete(tweet_system_prompt(), prompt).await
    }

    pub async fn generate_replies(&self, prompt: &str) -> Result<Vec<GeneratedReply>, String> {
        self.complete(reply_system_prompt(), prompt).await
    }

    async fn complete<T: DeserializeOwned>(
        &self,
        system: &str,
        user: &str,
    ) -> Result<Vec<T>, String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: 0.7,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|err| format!("llm request failed: {}", err))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| String::new());
            let detail = error_body.trim();
            if detail.is_empty() {
                return Err(format!("llm API error: {}", status));
            }
            return Err(format!("llm API error: {} {}", status, detail));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| format!("llm response parse failed: {}", err))?;

        let content = body
            .choices
            .first()
            .ok_or_else(|| "llm response missing choices".to_string())?
            .message
            .content
            .trim()
            .to_string();

        let json =
            extract_json_array(&content).ok_or_else(|| "llm response missing JSON array".to_string())?;
        serde_json::from_str(&json).map_err(|err| format!("llm JSON parse failed: {}", err))
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

fn tweet_system_prompt() -> &'static str {
    r#"You are a Twitter search and analysis expert generating realistic tweets.
Return a single JSON array of tweet objects with these fields:
- id (string, unique)
- author_name (string)
- author_handle (string, no @)
- author_verified (boolean, about 20% true)
- content (string, on-topic for the search query, authentic, under 280 chars)
- timestamp (string, relative and recent, e.g. "12 minutes ago" or "3 hours ago")
- likes, replies, retweets, views (non-negative integers, realistic and varied)
Rules:
- Output JSON only, no markdown or commentary.
"#
}

fn reply_system_prompt() -> &'static str {
    r#"You are a Reply Guy expert, specialized in high-engagement tweet replies.
Return a single JSON array of reply objects with one field:
- content (string, under 280 characters)
Guidelines:
- Ask thoughtful questions related to the tweet.
- Add value or insight; avoid generic praise and self-promotion.
- Be authentic and conversational; match the tone of the original tweet.
- Vary the reply types (questions, insights, related experiences).
Rules:
- Output JSON only, no markdown or commentary.
"#
}

fn extract_json_array(text: &str) -> Option<String> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if start >= end {
        return None;
    }
    Some(text[start..=end].to_string())
}
