//! Publish request and reply types.

/// Branch prefilled in the publish dialog when the caller knows none.
pub const DEFAULT_BRANCH: &str = "main";

/// Message used when a failed reply carries no `error` field.
pub const PUBLISH_FAILED_MESSAGE: &str = "Failed to publish README";

/// Push generated README content to a repository branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// Target repository, `owner/name`.
    pub full_name: String,
    pub content: String,
    pub commit_message: Option<String>,
    pub branch: String,
}

impl PublishRequest {
    pub fn new(
        full_name: impl Into<String>,
        content: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            content: content.into(),
            commit_message: None,
            branch: branch.into(),
        }
    }

    #[must_use]
    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.commit_message = (!message.trim().is_empty()).then_some(message);
        self
    }

    /// Both the target and the content are required before any network call.
    pub fn has_target_and_content(&self) -> bool {
        !self.full_name.is_empty() && !self.content.is_empty()
    }
}

/// Backend answer to a publish call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReply {
    pub success: bool,
    pub error: Option<String>,
    /// `details.message` of the reply, when present.
    pub detail_message: Option<String>,
}

impl PublishReply {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Message shown in the dialog for an unsuccessful reply.
    ///
    /// The detail is only appended below a non-empty `error`.
    pub fn failure_message(&self) -> String {
        match self.error.as_deref().filter(|e| !e.is_empty()) {
            Some(error) => match self.detail_message.as_deref().filter(|d| !d.is_empty()) {
                Some(detail) => format!("{error}\n{detail}"),
                None => error.to_string(),
            },
            None => PUBLISH_FAILED_MESSAGE.to_string(),
        }
    }
}
