use std::num::NonZeroUsize;

/// Settings for an [`Engine`](crate::engine::Engine).
///
/// The default keeps every applied command: history only shrinks through `undo`.
/// Setting a limit bounds memory instead; once history is full, the oldest
/// command is discarded to make room and can no longer be undone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub history_limit: Option<NonZeroUsize>,
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: NonZeroUsize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(EngineConfig::default().history_limit, None);
        assert_eq!(EngineConfig::new(), EngineConfig::default());
    }

    #[test]
    fn test_with_history_limit() {
        let limit = NonZeroUsize::new(3).unwrap();
        let config = EngineConfig::new().with_history_limit(limit);
        assert_eq!(config.history_limit, Some(limit));
    }
}
