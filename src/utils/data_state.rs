/// Load state of data produced asynchronously
///
/// A single enum instead of separate loading/error flags, so a screen is
/// always in exactly one of these states.
#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// Currently loading/fetching data
    Loading,

    /// Successfully loaded with data
    Loaded(T),

    /// Failed to load with error message
    Error(String),
}

impl<T> DataState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if loaded, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if in error state, None otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for DataState<T> {
    fn default() -> Self {
        DataState::Loading
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for DataState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => DataState::Loaded(data),
            Err(err) => DataState::Error(err.to_string()),
        }
    }
}

/// `None` means the request has not resolved yet
impl<T, E: std::fmt::Display> From<Option<Result<T, E>>> for DataState<T> {
    fn from(pending: Option<Result<T, E>>) -> Self {
        match pending {
            Some(result) => result.into(),
            None => DataState::Loading,
        }
    }
}
