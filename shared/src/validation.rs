pub const EMAIL_REGEX: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
pub const MAX_EMAIL_LENGTH: usize = 255;
pub const VERIFICATION_CODE_LENGTH: usize = 6;
pub const MAX_URL_LENGTH: usize = 4096;
pub const MAX_SITE_NAME_LENGTH: usize = 255;

/// Field-level messages the server attaches to `ErrorResponse::validation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("올바른 이메일 형식이 아닙니다.")]
    InvalidEmail,
    #[error("올바른 URL 형식이 아닙니다.")]
    InvalidUrl,
    #[error("유효하지 않은 인증 코드입니다.")]
    InvalidVerificationCode,
    #[error("이메일은 필수 입력 값입니다.")]
    EmptyEmail,
    #[error("RSS URL은 필수 입력 값입니다.")]
    EmptyUrl,
    #[error("사이트 이름은 필수 입력 값입니다.")]
    EmptySiteName,
    #[error("인증 코드를 입력 해주세요.")]
    EmptyCode,
    #[error("유효한 토큰이 필요합니다.")]
    EmptyToken,
    #[error("최대 255자까지 입력 가능합니다.")]
    MaxLength,
    #[error("URL은 최대 4096자까지 입력 가능합니다.")]
    UrlMaxLength,
}

impl ValidationError {
    pub const GENERIC_MESSAGE: &'static str = "입력 데이터의 유효성을 검사하던 중 문제가 발생했습니다.";

    pub const ALL: [ValidationError; 10] = [
        ValidationError::InvalidEmail,
        ValidationError::InvalidUrl,
        ValidationError::InvalidVerificationCode,
        ValidationError::EmptyEmail,
        ValidationError::EmptyUrl,
        ValidationError::EmptySiteName,
        ValidationError::EmptyCode,
        ValidationError::EmptyToken,
        ValidationError::MaxLength,
        ValidationError::UrlMaxLength,
    ];

    /// Maps a message received from the server back to its variant.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.to_string() == message)
    }
}
