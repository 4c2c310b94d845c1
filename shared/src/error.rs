use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[error("사용자를 찾을 수 없습니다.")]
    NotFoundMember,
    #[error("존재하지 않는 RSS Feed입니다.")]
    NotFoundRssFeed,
    #[error("구독 정보를 찾을 수 없습니다.")]
    SubscriptionNotFound,
    #[error("이미 구독한 RSS Feed입니다.")]
    AlreadySubscribedRss,
    #[error("유효하지 않은 토큰입니다.")]
    InvalidToken,
    #[error("유효하지 않은 인증 코드입니다.")]
    InvalidVerificationToken,
    #[error("이메일 인증이 필요합니다. 인증 후 30분 이내에 다시 시도해 주세요")]
    EmailNotVerified,
    #[error("이미 인증 이메일을 보냈습니다. 잠시 후 다시 시도하세요.")]
    AlreadySentVerification,
    #[error("이메일 전송에 실패했습니다.")]
    EmailSendFailed,
    #[error("RSS 피드 서버에 연결할 수 없습니다.")]
    RssFeedConnectionError,
    #[error("잘못된 RSS 피드 형식입니다.")]
    RssFeedInvalidFormat,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::NotFoundMember,
        ErrorCode::NotFoundRssFeed,
        ErrorCode::SubscriptionNotFound,
        ErrorCode::AlreadySubscribedRss,
        ErrorCode::InvalidToken,
        ErrorCode::InvalidVerificationToken,
        ErrorCode::EmailNotVerified,
        ErrorCode::AlreadySentVerification,
        ErrorCode::EmailSendFailed,
        ErrorCode::RssFeedConnectionError,
        ErrorCode::RssFeedInvalidFormat,
    ];

    /// Wire name, same as the serialized form.
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorCode::NotFoundMember => "NOT_FOUND_MEMBER",
            ErrorCode::NotFoundRssFeed => "NOT_FOUND_RSS_FEED",
            ErrorCode::SubscriptionNotFound => "SUBSCRIPTION_NOT_FOUND",
            ErrorCode::AlreadySubscribedRss => "ALREADY_SUBSCRIBED_RSS",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::InvalidVerificationToken => "INVALID_VERIFICATION_TOKEN",
            ErrorCode::EmailNotVerified => "EMAIL_NOT_VERIFIED",
            ErrorCode::AlreadySentVerification => "ALREADY_SENT_VERIFICATION",
            ErrorCode::EmailSendFailed => "EMAIL_SEND_FAILED",
            ErrorCode::RssFeedConnectionError => "RSS_FEED_CONNECTION_ERROR",
            ErrorCode::RssFeedInvalidFormat => "RSS_FEED_INVALID_FORMAT",
        }
    }

    pub const fn status(&self) -> u16 {
        match self {
            ErrorCode::NotFoundMember
            | ErrorCode::NotFoundRssFeed
            | ErrorCode::SubscriptionNotFound => 404,
            ErrorCode::AlreadySubscribedRss => 409,
            ErrorCode::InvalidToken
            | ErrorCode::InvalidVerificationToken
            | ErrorCode::EmailNotVerified => 401,
            ErrorCode::AlreadySentVerification => 429,
            ErrorCode::EmailSendFailed => 500,
            ErrorCode::RssFeedConnectionError => 503,
            ErrorCode::RssFeedInvalidFormat => 400,
        }
    }
}

/// Body of every non-2xx response from the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub validation: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn add_validation(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.validation.insert(field.into(), message.into());
    }
}

impl From<ErrorCode> for ErrorResponse {
    fn from(code: ErrorCode) -> Self {
        Self::new(code.status(), code.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code.name(), self.message, details)
        } else {
            write!(f, "{}: {}", self.code.name(), self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl From<Error> for ErrorResponse {
    fn from(error: Error) -> Self {
        Self {
            code: error.code.status(),
            message: error.message,
            detail: error.details,
            validation: HashMap::new(),
        }
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Self::new(code, code.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
