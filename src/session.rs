//! Per-invocation view context.
//!
//! Tracks where the user came from and which scan they are looking at, so
//! the result view can re-read its scan from the store by id instead of
//! holding a copy. One value owned by the command layer and passed down
//! explicitly; nothing here is persisted, and a new process starts from the
//! defaults.

/// Route the session starts on.
const START_PAGE: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    previous_page: String,
    current_scan: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            previous_page: START_PAGE.to_string(),
            current_scan: None,
        }
    }

    pub fn previous_page(&self) -> &str {
        &self.previous_page
    }

    /// Unconditional overwrite; the target route is not validated.
    pub fn set_previous_page(&mut self, page: impl Into<String>) {
        self.previous_page = page.into();
    }

    pub fn current_scan(&self) -> Option<&str> {
        self.current_scan.as_deref()
    }

    /// Unconditional overwrite; `None` means no scan is being viewed.
    pub fn set_current_scan(&mut self, scan_id: Option<String>) {
        self.current_scan = scan_id;
    }

    /// Back to the startup defaults.
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_defaults() {
        let session = Session::new();
        assert_eq!(session.previous_page(), "/");
        assert_eq!(session.current_scan(), None);
    }

    #[test]
    fn setters_overwrite_unconditionally() {
        let mut session = Session::new();

        session.set_previous_page("/scan");
        session.set_previous_page("/history");
        assert_eq!(session.previous_page(), "/history");

        session.set_current_scan(Some("123".to_string()));
        session.set_current_scan(Some("456".to_string()));
        assert_eq!(session.current_scan(), Some("456"));

        session.set_current_scan(None);
        assert_eq!(session.current_scan(), None);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = Session::new();
        session.set_previous_page("/results/9");
        session.set_current_scan(Some("9".to_string()));

        session.reset();

        assert_eq!(session, Session::new());
    }
}
