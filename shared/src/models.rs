use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerificationSendRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerificationConfirmRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RssSubscriptionRequest {
    pub email: String,
    pub rss_url: String,
    pub site_name: String,
}

/// Subscribe from the management page, authenticated by the emailed token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RssSubscriptionByEmailRequest {
    pub token: String,
    pub rss_url: String,
    pub site_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RssUnsubscribeRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RssSubscriptionResponse {
    pub id: i64,
    pub rss_url: String,
    pub site_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RssSubscriptionPageResponse {
    pub subscriptions: Vec<RssSubscriptionResponse>,
    pub total_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub const SUCCESS: &'static str = "success";

    pub fn success(code: u16) -> Self {
        Self {
            code,
            message: Self::SUCCESS.to_string(),
            data: None,
        }
    }

    pub fn success_with(code: u16, data: T) -> Self {
        Self {
            code,
            message: Self::SUCCESS.to_string(),
            data: Some(data),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
