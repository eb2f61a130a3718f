//! Observability subsystem for tinywiki
//!
//! Structured JSON logging of typed events.
//!
//! # Usage
//!
//! ```ignore
//! use tinywiki::observability::{Event, Logger};
//!
//! Logger::info(Event::PageSaved, &[("title", "FrontPage")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
