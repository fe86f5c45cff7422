use crate::catalog::Channel;

/// Account and locale settings every batch is built against.
///
/// Built once at process start (see [`crate::load_uploader_config`]) and
/// passed by reference into the batch builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    /// Merchant Center account id used for every entry in single-account mode.
    pub merchant_id: String,
    /// ISO 3166-1 alpha-2 country code, uppercase (e.g. `"US"`).
    pub target_country: String,
    /// ISO 639-1 language code, lowercase (e.g. `"en"`).
    pub content_language: String,
    /// ISO 4217 currency code attached to price fields, uppercase.
    pub target_currency: String,
    pub channel: Channel,
    /// `true` when the account is a multi-client account and each row carries
    /// its own `google_merchant_id`.
    pub is_mca: bool,
    /// Maximum number of rows per custombatch request.
    pub batch_size: usize,
    pub log_level: String,
}

impl UploaderConfig {
    /// Single-account configuration with default channel, batch size and log
    /// level. Handy for callers that assemble settings themselves.
    #[must_use]
    pub fn new(
        merchant_id: impl Into<String>,
        target_country: impl Into<String>,
        content_language: impl Into<String>,
        target_currency: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            target_country: target_country.into(),
            content_language: content_language.into(),
            target_currency: target_currency.into(),
            channel: Channel::Online,
            is_mca: false,
            batch_size: crate::config::DEFAULT_BATCH_SIZE,
            log_level: "info".to_string(),
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    #[must_use]
    pub fn with_mca(mut self, is_mca: bool) -> Self {
        self.is_mca = is_mca;
        self
    }
}
