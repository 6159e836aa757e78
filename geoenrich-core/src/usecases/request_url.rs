pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

const KEY_PARAM: &str = "&key=";
const REDACTED_KEY: &str = "***";

/// Where and how to reach the geocoding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub api_key: String,
}

impl Endpoint {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// The complete request URL for an already encoded `address` query value.
    pub fn request_url(&self, address_query: &str) -> String {
        let Self { base_url, api_key } = self;
        let base_url = base_url.trim_end_matches('/');
        format!("{base_url}/geocode/json?address={address_query}{KEY_PARAM}{api_key}")
    }

    /// Hides the value of the `key` query parameter of request URLs
    /// within `text` before it is logged or reported.
    ///
    /// Any other occurrence of the API key is left untouched.
    pub fn redact(&self, text: &str) -> String {
        if self.api_key.is_empty() {
            return text.to_string();
        }
        let needle = format!("{KEY_PARAM}{}", self.api_key);
        let mut redacted = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(pos) = rest.find(&needle) {
            let (head, tail) = rest.split_at(pos + needle.len());
            let value_ends = tail.chars().next().map_or(true, |c| !is_query_value_char(c));
            if value_ends {
                redacted.push_str(&head[..pos]);
                redacted.push_str(KEY_PARAM);
                redacted.push_str(REDACTED_KEY);
            } else {
                redacted.push_str(head);
            }
            rest = tail;
        }
        redacted.push_str(rest);
        redacted
    }
}

fn is_query_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '%' | '+')
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new("")
    }
}
