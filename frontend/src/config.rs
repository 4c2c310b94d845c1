use serde::Serialize;
use shared::validation::{
    EMAIL_REGEX, MAX_EMAIL_LENGTH, MAX_SITE_NAME_LENGTH, MAX_URL_LENGTH, VERIFICATION_CODE_LENGTH,
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub api: ApiConfig,
    pub service: ServiceInfo,
    pub validation: ValidationRules,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub email_verification: EmailVerificationEndpoints,
    pub subscriptions: SubscriptionEndpoints,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerificationEndpoints {
    pub send: &'static str,
    pub verify: &'static str,
}

/// `delete` is derived from `manage` and is not serialized; the global
/// binding exposes it as a function.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionEndpoints {
    pub create: &'static str,
    pub manage: &'static str,
}

impl SubscriptionEndpoints {
    /// `{manage}/{id}`. The id is not checked; an empty id yields a trailing slash.
    pub fn delete(&self, id: &str) -> String {
        format!("{}/{}", self.manage, id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    pub email: EmailRules,
    pub verification_code: VerificationCodeRules,
    pub url: UrlRules,
    pub site_name: SiteNameRules,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailRules {
    pub pattern: &'static str,
    pub max_length: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCodeRules {
    pub length: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlRules {
    pub max_length: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteNameRules {
    pub max_length: usize,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api",
                endpoints: Endpoints {
                    email_verification: EmailVerificationEndpoints {
                        send: "/email-verification/send",
                        verify: "/email-verification/verify",
                    },
                    subscriptions: SubscriptionEndpoints {
                        create: "/subscriptions",
                        manage: "/subscriptions/manage",
                    },
                },
            },
            service: ServiceInfo {
                name: "FeedPing",
                description: "RSS 피드를 통한 스마트한 정보 구독 서비스",
                copyright: "© 2024 FeedPing. All rights reserved.",
            },
            validation: ValidationRules {
                email: EmailRules {
                    pattern: EMAIL_REGEX,
                    max_length: MAX_EMAIL_LENGTH,
                },
                verification_code: VerificationCodeRules {
                    length: VERIFICATION_CODE_LENGTH,
                },
                url: UrlRules {
                    max_length: MAX_URL_LENGTH,
                },
                site_name: SiteNameRules {
                    max_length: MAX_SITE_NAME_LENGTH,
                },
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

pub const CONFIG: Config = Config::new();

pub fn endpoint_for_subscription_deletion(id: &str) -> String {
    CONFIG.api.endpoints.subscriptions.delete(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_deletion_endpoint() {
        assert_eq!(endpoint_for_subscription_deletion("42"), "/subscriptions/manage/42");
        assert_eq!(endpoint_for_subscription_deletion(""), "/subscriptions/manage/");
        assert_eq!(endpoint_for_subscription_deletion("a/b?c"), "/subscriptions/manage/a/b?c");
    }

    #[test]
    fn test_json_shape() {
        let value: Value = serde_json::from_str(&CONFIG.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({
            "api": {
                "baseUrl": "http://localhost:8080/api",
                "endpoints": {
                    "emailVerification": {
                        "send": "/email-verification/send",
                        "verify": "/email-verification/verify"
                    },
                    "subscriptions": {
                        "create": "/subscriptions",
                        "manage": "/subscriptions/manage"
                    }
                }
            },
            "service": {
                "name": "FeedPing",
                "description": "RSS 피드를 통한 스마트한 정보 구독 서비스",
                "copyright": "© 2024 FeedPing. All rights reserved."
            },
            "validation": {
                "email": {
                    "pattern": "^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\\.[A-Za-z]{2,}$",
                    "maxLength": 255
                },
                "verificationCode": { "length": 6 },
                "url": { "maxLength": 4096 },
                "siteName": { "maxLength": 255 }
            }
        }));
    }

    #[test]
    fn test_default_matches_const() {
        assert_eq!(Config::default(), CONFIG);
    }
}
