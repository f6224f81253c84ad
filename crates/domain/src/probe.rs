use crate::DnsServerAddress;
use std::fmt;

/// HTTP status code treated as "reachable".
pub const STATUS_OK: u16 = 200;

/// A parsed HTTP status line such as `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u16,
    pub text: String,
}

impl StatusLine {
    /// Splits `"<code> <reason>"`. Returns `None` when the separator is
    /// missing or the code is not numeric.
    pub fn parse(raw: &str) -> Option<Self> {
        let (code, text) = raw.trim().split_once(' ')?;
        let code = code.parse::<u16>().ok()?;
        Some(Self {
            code,
            text: text.trim().to_string(),
        })
    }

    pub fn is_ok(&self) -> bool {
        self.code == STATUS_OK
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnreachableCause {
    /// Connection, DNS, TLS or any other error before a status arrived.
    RequestFailed(String),
    UnexpectedStatus { code: u16, text: String },
    InvalidStatusLine(String),
}

impl fmt::Display for UnreachableCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed(reason) => write!(f, "request failed: {}", reason),
            Self::UnexpectedStatus { code, text } => write!(f, "status {} {}", code, text),
            Self::InvalidStatusLine(raw) => write!(f, "invalid status line '{}'", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable { status_code: u16, status_text: String },
    Unreachable(UnreachableCause),
}

impl ProbeOutcome {
    /// Classifies a raw status line: only a parsable `200` is reachable.
    pub fn classify(status_line: &str) -> Self {
        match StatusLine::parse(status_line) {
            Some(status) if status.is_ok() => Self::Reachable {
                status_code: status.code,
                status_text: status.text,
            },
            Some(status) => Self::Unreachable(UnreachableCause::UnexpectedStatus {
                code: status.code,
                text: status.text,
            }),
            None => Self::Unreachable(UnreachableCause::InvalidStatusLine(
                status_line.to_string(),
            )),
        }
    }

    pub fn request_failed(reason: impl Into<String>) -> Self {
        Self::Unreachable(UnreachableCause::RequestFailed(reason.into()))
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }

    /// Short status label for tabular output.
    pub fn label(&self) -> &str {
        match self {
            Self::Reachable { status_text, .. } => status_text,
            Self::Unreachable(UnreachableCause::UnexpectedStatus { text, .. }) => text,
            Self::Unreachable(UnreachableCause::RequestFailed(_)) => "Error",
            Self::Unreachable(UnreachableCause::InvalidStatusLine(_)) => "Invalid",
        }
    }
}

/// Outcome of probing one server. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub server: DnsServerAddress,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn new(server: DnsServerAddress, outcome: ProbeOutcome) -> Self {
        Self { server, outcome }
    }

    pub fn is_reachable(&self) -> bool {
        self.outcome.is_reachable()
    }
}
