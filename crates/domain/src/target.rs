use crate::DomainError;
use std::fmt;
use url::Url;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A download or probe target: an `http`/`https` URL with a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(Url);

impl TargetUrl {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let url = Url::parse(raw.trim())
            .map_err(|e| DomainError::InvalidTargetUrl(format!("{}: {}", raw, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DomainError::InvalidTargetUrl(format!(
                "{}: scheme must be http or https",
                raw
            )));
        }

        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(Self(url)),
            _ => Err(DomainError::InvalidTargetUrl(format!(
                "{}: missing host",
                raw
            ))),
        }
    }

    /// Accepts either a full URL or a bare domain, which is probed over https.
    pub fn from_domain_or_url(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if raw.contains("://") {
            return Self::parse(raw);
        }
        if !is_valid_domain(raw) {
            return Err(DomainError::InvalidDomainName(raw.to_string()));
        }
        Self::parse(&format!("https://{}", raw))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Hostname check: at least two labels, each 1-63 alphanumerics or hyphens
/// not starting or ending with a hyphen, 253 characters overall.
pub fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
