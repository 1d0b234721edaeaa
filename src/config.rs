// src/config.rs
use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.deepseek.com/chat/completions";
const DEFAULT_PORT: u16 = 8080;

const SYSTEM_PROMPT: &str = "\
You are the NeuraServe AI assistant. NeuraServe is an enterprise-grade AI \
solutions provider.

Answer like this:
1. Be professional and friendly when introducing NeuraServe products.
2. If the user asks about concrete pricing, point them to the contact \
details at the bottom of the page.
3. Highlight the 99.2% accuracy rate, 24/7 availability and fast deployment.

Contact details to remember:
- Email: 1850859427@qq.com
- WeChat: Jr_gyh
- Phone: 139-5203-6081
";

/// Everything the pipeline needs, read from the environment exactly once at
/// startup. Handlers only ever see this behind an `Arc`, never raw env vars.
#[derive(Clone, Debug)]
pub struct Config {
    /// `DEEPSEEK_API_KEY`. `None` is not a startup error; it surfaces as a
    /// credential-not-configured response on every chat request.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key = env::var("DEEPSEEK_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let api_url =
            env::var("DEEPSEEK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            api_key,
            api_url,
            model: "deepseek-chat".to_string(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            max_tokens: 500,
            temperature: 0.7,
            request_timeout: Duration::from_secs(30),
            port,
        }
    }
}
