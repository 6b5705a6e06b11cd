/// Content of the offline fallback page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflinePageConfig {
    /// Heading and document title.
    pub title: String,
    /// Paragraph text.
    pub message: String,
    /// HTML-escape `message`. When false the message is inserted verbatim and
    /// markup in it becomes part of the page.
    pub escape_message: bool,
}

impl Default for OfflinePageConfig {
    fn default() -> Self {
        Self {
            title: "Offline".to_string(),
            message: "You are currently offline. Please check your connection.".to_string(),
            escape_message: true,
        }
    }
}

impl OfflinePageConfig {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Self::default() }
    }
}
