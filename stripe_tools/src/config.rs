use log::*;
use mns_common::Secret;

#[derive(Debug, Clone, Default)]
pub struct StripeConfig {
    pub secret_key: Secret<String>,
    pub api_version: String,
}

impl StripeConfig {
    pub fn new_from_env_or_default() -> Self {
        let secret_key = Secret::new(std::env::var("MNS_STRIPE_SECRET_KEY").unwrap_or_else(|_| {
            warn!("MNS_STRIPE_SECRET_KEY not set, using (probably useless) default");
            "sk_test_00000000000000".to_string()
        }));
        let api_version = std::env::var("MNS_STRIPE_API_VERSION").unwrap_or_else(|_| {
            warn!("MNS_STRIPE_API_VERSION not set, using 2024-04-10 as default");
            "2024-04-10".to_string()
        });
        Self { secret_key, api_version }
    }
}
