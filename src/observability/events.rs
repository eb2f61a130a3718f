//! Observable events for tinywiki
//!
//! Every log line names one of these events.

use std::fmt;

/// Observable events in tinywiki
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot
    /// Startup begins
    BootStart,
    /// Configuration file read (or defaults applied)
    ConfigLoaded,
    /// Template set compiled
    TemplatesLoaded,
    /// Page store opened and its root directory present
    StoreOpened,
    /// Listener bound, serving requests
    Serving,
    /// Startup aborted
    BootFailed,

    // Requests
    /// One request finished
    RequestHandled,
    /// Request path did not carry a valid title
    InvalidTitle,

    // Pages
    /// Page written to the store
    PageSaved,
    /// Page write failed
    PageSaveFailed,
    /// Page read failed for a reason other than absence
    PageLoadFailed,
    /// Template execution failed
    RenderFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "WIKI_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TemplatesLoaded => "TEMPLATES_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::Serving => "WIKI_SERVING",
            Event::BootFailed => "WIKI_STARTUP_FAILED",

            Event::RequestHandled => "REQUEST_HANDLED",
            Event::InvalidTitle => "INVALID_TITLE",

            Event::PageSaved => "PAGE_SAVED",
            Event::PageSaveFailed => "PAGE_SAVE_FAILED",
            Event::PageLoadFailed => "PAGE_LOAD_FAILED",
            Event::RenderFailed => "RENDER_FAILED",
        }
    }

    /// Returns true if this event means the process cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::RequestHandled.as_str(), "REQUEST_HANDLED");
        assert_eq!(Event::PageSaved.to_string(), "PAGE_SAVED");
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::PageSaveFailed.is_fatal());
    }
}
