use crate::model::Transfer;

/// Load lifecycle of the transfer feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Success(Vec<Transfer>),
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// A request has resolved, one way or the other.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Success(_) | LoadState::Error(_))
    }

    /// Transfers to render. Only present on success.
    pub fn transfers(&self) -> Option<&[Transfer]> {
        match self {
            LoadState::Success(transfers) => Some(transfers),
            _ => None,
        }
    }

    /// Error message to render. Only present on error.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the retry button is shown.
    pub fn shows_retry(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Success(_) => "success",
            LoadState::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn default_is_idle() {
        assert_eq!(LoadState::default(), LoadState::Idle);
        assert!(!LoadState::Idle.is_settled());
    }

    #[test]
    fn loading_hides_data_and_error() {
        let state = LoadState::Loading;
        assert!(state.is_loading());
        assert!(state.transfers().is_none());
        assert!(state.error().is_none());
        assert!(!state.shows_retry());
    }

    #[test]
    fn error_shows_message_and_retry_only() {
        let state = LoadState::Error("Network error".to_string());
        assert!(state.is_settled());
        assert_eq!(state.error(), Some("Network error"));
        assert!(state.shows_retry());
        assert!(state.transfers().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn success_shows_data_only() {
        let state = LoadState::Success(fixtures::transfers());
        assert!(state.is_settled());
        assert_eq!(state.transfers().map(<[_]>::len), Some(3));
        assert!(state.error().is_none());
        assert!(!state.shows_retry());
    }
}
