//! # Wiki Core
//!
//! Page identity for tinywiki: the validated [`Title`], the transient
//! [`Page`] value, the path [`TitleValidator`] and the data-driven
//! [`PagePolicy`] consulted by the operation handlers.

pub mod errors;
pub mod page;
pub mod policy;
pub mod title;
pub mod validator;

pub use errors::{WikiError, WikiResult};
pub use page::Page;
pub use policy::{EditPolicy, PagePolicy};
pub use title::Title;
pub use validator::TitleValidator;
