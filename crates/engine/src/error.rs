//! Error types for provider schema evaluation.

use thiserror::Error;

/// User-facing explanation for providers that cannot describe their configuration.
///
/// `{provider}` is replaced with the quoted provider name; the surrounding
/// whitespace is trimmed before use.
const PROVIDER_SCHEMA_UNSUPPORTED: &str = r#"
provider {provider} does not support configuration schema retrieval. A newer version of the provider may support it; if not, configuration for this provider must be placed in a file that does not require schema-validated configuration.
"#;

/// Errors returned by a provider implementation.
///
/// These originate on the far side of the plugin transport and are surfaced
/// to callers exactly as the provider produced them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Provider plugin error: {provider} - {reason}")]
    Plugin { provider: String, reason: String },
}

impl ProviderError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    /// Create a plugin error attributed to a provider.
    pub fn plugin(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Plugin {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}

/// Errors produced while evaluating a graph node.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The provider implementation does not declare schema support.
    #[error("{}", schema_unsupported_message(.provider))]
    Capability { provider: String },

    /// The provider's own error, passed through unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A result was already stored for this provider during the current pass.
    #[error("schema for provider {provider:?} was already assigned in this pass")]
    AlreadyAssigned { provider: String },
}

impl EvalError {
    /// Create a capability error for the named provider.
    pub fn capability(provider: impl Into<String>) -> Self {
        Self::Capability { provider: provider.into() }
    }

    /// Create a single-assignment violation error.
    pub fn already_assigned(provider: impl Into<String>) -> Self {
        Self::AlreadyAssigned { provider: provider.into() }
    }
}

fn schema_unsupported_message(provider: &str) -> String {
    PROVIDER_SCHEMA_UNSUPPORTED.trim().replace("{provider}", &format!("{provider:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_message_names_provider_and_is_trimmed() {
        let message = EvalError::capability("qux").to_string();

        assert!(message.starts_with("provider \"qux\" does not support"));
        assert_eq!(message, message.trim());
        assert!(message.contains("newer version"));
    }

    #[test]
    fn provider_errors_display_verbatim_through_eval_error() {
        let provider_error = ProviderError::transport("plugin exited unexpectedly");
        let eval_error = EvalError::from(provider_error.clone());

        assert_eq!(eval_error.to_string(), provider_error.to_string());
        assert_eq!(eval_error, EvalError::Provider(provider_error));
    }
}
