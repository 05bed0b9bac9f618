use std::sync::Arc;

use log::*;
use mns_common::{UsdAmount, USD_CURRENCY_CODE_LOWER};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
    Method,
};
use serde::de::DeserializeOwned;

use crate::{config::StripeConfig, data_objects::PaymentIntent, StripeApiError};

/// Client for the parts of the Stripe REST API the server uses. Credentials and the pinned API version are baked
/// into the client's default headers at construction.
#[derive(Clone)]
pub struct StripeApi {
    client: Arc<Client>,
}

impl StripeApi {
    pub fn new(config: StripeConfig) -> Result<Self, StripeApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let mut val = HeaderValue::from_str(&format!("Bearer {}", config.secret_key.reveal()))
            .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        val.set_sensitive(true);
        headers.insert(AUTHORIZATION, val);
        let version = HeaderValue::from_str(config.api_version.as_str())
            .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        headers.insert("Stripe-Version", version);
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        Ok(Self { client: Arc::new(client) })
    }

    /// Sends a form-encoded request to the Stripe API and deserializes the JSON response. Stripe only accepts
    /// form-encoded request bodies.
    pub async fn form_query<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, StripeApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if !params.is_empty() {
            req = req.form(&params);
        }
        let response = req.send().await.map_err(|e| StripeApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| StripeApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| StripeApiError::RestResponseError(e.to_string()))?;
            Err(StripeApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("https://api.stripe.com/v1{path}")
    }

    /// Requests a card payment intent for the given amount and returns it, client secret included.
    pub async fn create_payment_intent(&self, amount: UsdAmount) -> Result<PaymentIntent, StripeApiError> {
        let cents = amount.value().to_string();
        let params =
            [("amount", cents.as_str()), ("currency", USD_CURRENCY_CODE_LOWER), ("payment_method_types[]", "card")];
        debug!("Creating payment intent for {amount}");
        let intent = self.form_query::<PaymentIntent>(Method::POST, "/payment_intents", &params).await?;
        info!("Created payment intent {} ({})", intent.id, intent.status);
        Ok(intent)
    }
}
