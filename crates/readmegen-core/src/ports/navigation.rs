//! Login redirect port.

/// Sends the user to the external sign-in flow.
///
/// Called instead of surfacing an inline error when the session is missing
/// or expired.
#[cfg_attr(test, mockall::automock)]
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self);
}
