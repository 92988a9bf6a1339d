use thiserror::Error;

/// Input rejected before any mutation takes place.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Domain name does not match the hostname pattern.
    #[error("Domain {0} is not valid.")]
    InvalidDomain(String),

    /// Button style is not one of the Discord button styles usable on the panel.
    #[error("Button style `{0}` is not valid. Use Primary, Secondary, Success or Danger.")]
    InvalidButtonStyle(String),

    /// Webhook URL is not an absolute `https` URL.
    #[error("Webhook URL `{0}` is not a valid https URL.")]
    InvalidWebhookUrl(String),
}
