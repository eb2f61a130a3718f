//! # Page Policy
//!
//! Per-wiki choices the handlers consult instead of hardcoding: which title
//! is the landing page, which template it renders with, and how the edit
//! handler treats storage failures other than a missing page.

use super::title::Title;

/// Template used for ordinary page views
pub const VIEW_TEMPLATE: &str = "view";

/// Template used for the edit form
pub const EDIT_TEMPLATE: &str = "edit";

/// How the edit handler reacts to a load failure that is not "page absent"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPolicy {
    /// Show an empty edit form, same as for a missing page
    #[default]
    Lenient,
    /// Report the storage failure as a server error
    Strict,
}

/// Routing policy shared by the view and edit handlers
#[derive(Debug, Clone)]
pub struct PagePolicy {
    front_page: Title,
    front_template: String,
    edit: EditPolicy,
}

impl PagePolicy {
    pub fn new(front_page: Title, front_template: impl Into<String>, edit: EditPolicy) -> Self {
        Self {
            front_page,
            front_template: front_template.into(),
            edit,
        }
    }

    /// The landing page title
    pub fn front_page(&self) -> &Title {
        &self.front_page
    }

    pub fn front_template(&self) -> &str {
        &self.front_template
    }

    pub fn edit(&self) -> EditPolicy {
        self.edit
    }

    pub fn is_front_page(&self, title: &Title) -> bool {
        *title == self.front_page
    }

    /// Template a view of `title` renders with
    pub fn view_template(&self, title: &Title) -> &str {
        if self.is_front_page(title) {
            &self.front_template
        } else {
            VIEW_TEMPLATE
        }
    }

    /// Templates that must exist before the server can start
    pub fn required_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = vec![VIEW_TEMPLATE, EDIT_TEMPLATE];
        if !names.contains(&self.front_template.as_str()) {
            names.push(self.front_template.as_str());
        }
        names
    }
}
