use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://leetcode-api-faisalshohag.vercel.app/{username}";
const PLACEHOLDER: &str = "{username}";

/// Fixed URL template the trimmed username is interpolated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate {
    template: String,
}

impl EndpointTemplate {
    /// A template without `{username}` gets `/{username}` appended.
    pub fn new(template: &str) -> Self {
        let template = template.trim();
        let template = if template.contains(PLACEHOLDER) {
            template.to_string()
        } else {
            format!("{}/{PLACEHOLDER}", template.trim_end_matches('/'))
        };
        Self { template }
    }

    pub fn url_for(&self, username: &str) -> String {
        self.template.replace(PLACEHOLDER, username.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for EndpointTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_targets_public_api() {
        let endpoint = EndpointTemplate::default();
        assert_eq!(
            endpoint.url_for("  alice "),
            "https://leetcode-api-faisalshohag.vercel.app/alice"
        );
    }

    #[test]
    fn base_url_without_placeholder_gets_username_path() {
        let endpoint = EndpointTemplate::new("http://127.0.0.1:4010/");
        assert_eq!(endpoint.as_str(), "http://127.0.0.1:4010/{username}");
        assert_eq!(endpoint.url_for("bob"), "http://127.0.0.1:4010/bob");
    }

    #[test]
    fn placeholder_may_sit_mid_path() {
        let endpoint = EndpointTemplate::new("https://stats.example/u/{username}/profile");
        assert_eq!(
            endpoint.url_for("carol"),
            "https://stats.example/u/carol/profile"
        );
    }
}
