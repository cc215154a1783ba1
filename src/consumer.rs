use std::borrow::Cow;
use std::collections::HashMap;

use serde::Deserialize;
use url::Url;

use crate::ConfigError;

/// Callback value for clients that cannot receive a redirect (out-of-band).
pub const OUT_OF_BAND_CALLBACK: &str = "oob";

/// Credentials and endpoints of an OAuth consumer registered at a Service Provider.
#[derive(Debug, Clone, Deserialize)]
pub struct Consumer<'a> {
    consumer_key: Cow<'a, str>,
    consumer_secret: Cow<'a, str>,
    request_token_url: Cow<'a, str>,
    #[serde(default)]
    callback_url: Option<Cow<'a, str>>,
    #[serde(default)]
    additional_params: HashMap<String, String>,
}

impl<'a> Consumer<'a> {
    pub fn new<TKey, TSecret, TUrl>(
        consumer_key: TKey,
        consumer_secret: TSecret,
        request_token_url: TUrl,
    ) -> Self
    where
        TKey: Into<Cow<'a, str>>,
        TSecret: Into<Cow<'a, str>>,
        TUrl: Into<Cow<'a, str>>,
    {
        Consumer {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            request_token_url: request_token_url.into(),
            callback_url: None,
            additional_params: HashMap::new(),
        }
    }

    /// set the oauth_callback value
    pub fn callback<T>(self, callback_url: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Consumer {
            callback_url: Some(callback_url.into()),
            ..self
        }
    }

    /// add a parameter sent with the request token request and covered by the signature
    pub fn param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.additional_params.insert(key.into(), value.into());
        self
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    pub fn request_token_url(&self) -> &str {
        &self.request_token_url
    }

    /// Returns the callback url, or `oob` when none is configured.
    pub fn callback_url(&self) -> &str {
        self.callback_url
            .as_deref()
            .unwrap_or(OUT_OF_BAND_CALLBACK)
    }

    pub fn additional_params(&self) -> &HashMap<String, String> {
        &self.additional_params
    }

    /// Checks the required fields and parses the request token url.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        if self.consumer_key.is_empty() {
            return Err(ConfigError::Missing("consumer_key"));
        }
        if self.consumer_secret.is_empty() {
            return Err(ConfigError::Missing("consumer_secret"));
        }
        if self.request_token_url.is_empty() {
            return Err(ConfigError::Missing("request_token_url"));
        }
        let url = Url::parse(&self.request_token_url).map_err(|source| {
            ConfigError::InvalidUrl {
                url: self.request_token_url.to_string(),
                source,
            }
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ConfigError::UnsupportedScheme(scheme.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static CONSUMER_KEY: &str = "<CONSUMER_KEY>";
    static CONSUMER_SECRET: &str = "<CONSUMER_SECRET>";
    static ENDPOINT: &str = "https://example.com/request_token";

    #[test]
    fn builder() {
        let consumer = Consumer::new(CONSUMER_KEY, CONSUMER_SECRET, ENDPOINT)
            .callback("https://client.example.com/cb")
            .param("scope", "read");
        assert_eq!(consumer.consumer_key(), CONSUMER_KEY);
        assert_eq!(consumer.consumer_secret(), CONSUMER_SECRET);
        assert_eq!(consumer.request_token_url(), ENDPOINT);
        assert_eq!(consumer.callback_url(), "https://client.example.com/cb");
        assert_eq!(consumer.additional_params().get("scope").unwrap(), "read");
    }

    #[test]
    fn callback_defaults_to_oob() {
        let consumer = Consumer::new(CONSUMER_KEY, CONSUMER_SECRET, ENDPOINT);
        assert_eq!(consumer.callback_url(), "oob");
    }

    #[test]
    fn validate_accepts_complete_consumer() {
        let url = Consumer::new(CONSUMER_KEY, CONSUMER_SECRET, ENDPOINT)
            .validate()
            .unwrap();
        assert_eq!(url.as_str(), ENDPOINT);
    }

    #[test]
    fn validate_reports_missing_fields() {
        for (consumer, field) in vec![
            (Consumer::new("", CONSUMER_SECRET, ENDPOINT), "consumer_key"),
            (Consumer::new(CONSUMER_KEY, "", ENDPOINT), "consumer_secret"),
            (
                Consumer::new(CONSUMER_KEY, CONSUMER_SECRET, ""),
                "request_token_url",
            ),
        ] {
            match consumer.validate() {
                Err(ConfigError::Missing(missing)) => assert_eq!(missing, field),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn validate_rejects_bad_url() {
        let consumer = Consumer::new(CONSUMER_KEY, CONSUMER_SECRET, "not a url");
        assert!(matches!(
            consumer.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));

        let consumer = Consumer::new(CONSUMER_KEY, CONSUMER_SECRET, "ftp://example.com/rt");
        assert!(matches!(
            consumer.validate(),
            Err(ConfigError::UnsupportedScheme(ref s)) if s == "ftp"
        ));
    }

    #[test]
    fn deserialize_from_config() {
        let consumer: Consumer = serde_urlencoded::from_str(
            "consumer_key=key&consumer_secret=secret\
             &request_token_url=https%3A%2F%2Fexample.com%2Frequest_token\
             &callback_url=oob",
        )
        .unwrap();
        assert_eq!(consumer.consumer_key(), "key");
        assert_eq!(consumer.consumer_secret(), "secret");
        assert_eq!(consumer.request_token_url(), ENDPOINT);
        assert_eq!(consumer.callback_url(), "oob");
        assert!(consumer.additional_params().is_empty());
    }
}
