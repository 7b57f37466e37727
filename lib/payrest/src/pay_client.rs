//! Entry point bundling every resource façade.

use payrest_core::Transport;

use crate::{
    ApiClient, ClientConfig, CustomerClient, HyperTransport, InvoiceClient, OrderClient,
    PaymentClient, RefundClient, Result,
};

/// One dispatcher shared by every resource façade.
///
/// # Example
///
/// ```ignore
/// use payrest::PayClient;
///
/// let client = PayClient::new("rzp_test_key", "secret")?;
/// let invoice = client.invoices().fetch("inv_DAweOiQ7amIUVd").await?;
/// let refunds = client.payments().fetch_refunds("pay_29QQoUBi66xm2f").await?;
/// ```
#[derive(Debug, Clone)]
pub struct PayClient<C = HyperTransport> {
    api: ApiClient<C>,
}

impl PayClient<HyperTransport> {
    /// Client for the production API, authenticated with the key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed.
    pub fn new(key_id: impl AsRef<str>, key_secret: impl AsRef<str>) -> Result<Self> {
        Self::with_config(key_id, key_secret, &ClientConfig::default())
    }

    /// Client with custom configuration, authenticated with the key pair.
    ///
    /// The transport logs every exchange at info level.
    ///
    /// # Errors
    ///
    /// Returns an error if `config.base_url` cannot be parsed.
    pub fn with_config(
        key_id: impl AsRef<str>,
        key_secret: impl AsRef<str>,
        config: &ClientConfig,
    ) -> Result<Self> {
        let transport = HyperTransport::builder()
            .config(config)
            .with_defaults()
            .with_basic_auth(key_id, key_secret)
            .build();

        Ok(Self {
            api: ApiClient::new(transport, &config.base_url)?,
        })
    }
}

impl<C> PayClient<C> {
    /// Wrap an existing dispatcher.
    #[must_use]
    pub const fn from_api(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// The shared dispatcher, for routes without a façade.
    #[must_use]
    pub const fn api(&self) -> &ApiClient<C> {
        &self.api
    }
}

impl<C> From<ApiClient<C>> for PayClient<C> {
    fn from(api: ApiClient<C>) -> Self {
        Self::from_api(api)
    }
}

impl<C: Transport> PayClient<C> {
    /// Invoice operations.
    #[must_use]
    pub const fn invoices(&self) -> InvoiceClient<'_, C> {
        InvoiceClient::new(&self.api)
    }

    /// Payment operations.
    #[must_use]
    pub const fn payments(&self) -> PaymentClient<'_, C> {
        PaymentClient::new(&self.api)
    }

    /// Refund lookups.
    #[must_use]
    pub const fn refunds(&self) -> RefundClient<'_, C> {
        RefundClient::new(&self.api)
    }

    /// Order operations.
    #[must_use]
    pub const fn orders(&self) -> OrderClient<'_, C> {
        OrderClient::new(&self.api)
    }

    /// Customer operations.
    #[must_use]
    pub const fn customers(&self) -> CustomerClient<'_, C> {
        CustomerClient::new(&self.api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_production() {
        let client = PayClient::new("rzp_test_key", "secret").expect("client");
        assert_eq!(client.api().base_url().as_str(), "https://api.razorpay.com/v1/");
    }

    #[test]
    fn custom_base_url() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8080/v1")
            .build();
        let client = PayClient::with_config("key", "secret", &config).expect("client");
        assert_eq!(client.api().base_url().as_str(), "http://localhost:8080/v1/");
    }

    #[test]
    fn invalid_base_url() {
        let config = ClientConfig::builder().base_url("::nope").build();
        assert!(PayClient::with_config("key", "secret", &config).is_err());
    }
}
