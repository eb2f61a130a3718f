//! # Page Renderer
//!
//! Turns a [`Page`] into an HTML document through named minijinja
//! templates. The template set is compiled once when the renderer is built
//! and only read afterwards, so one renderer is shared by every request.
//!
//! Templates see two variables:
//!
//! - `title`: the page title
//! - `body`: the page body as text
//!
//! Template names map to `<name>.html`, which keeps HTML autoescaping on.
//! Referencing any other variable is a render error.

mod errors;

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::wiki::Page;

pub use errors::{RenderError, RenderResult};

/// File extension of template files
pub const TEMPLATE_EXTENSION: &str = "html";

/// Data handed to every page template
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    title: &'a str,
    body: Cow<'a, str>,
}

impl<'a> From<&'a Page> for PageContext<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            title: page.title().as_str(),
            body: page.body_text(),
        }
    }
}

/// Compiled, read-only template set
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
    names: Vec<String>,
}

impl Renderer {
    /// Load every `*.html` file in `dir` and check `required` are present.
    pub fn from_dir(dir: &Path, required: &[&str]) -> RenderResult<Self> {
        let read_err = |source: io::Error| RenderError::Directory {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXTENSION)
            {
                files.push(path);
            }
        }
        files.sort();

        let mut sources = Vec::with_capacity(files.len());
        for path in files {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&path).map_err(read_err)?;
            sources.push((name.to_string(), source));
        }

        Self::from_sources(sources, required)
    }

    /// Build a renderer from `(name, source)` pairs
    pub fn from_sources<I, N, S>(templates: I, required: &[&str]) -> RenderResult<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        let mut names = Vec::new();

        for (name, source) in templates {
            let name: String = name.into();
            let source: String = source.into();
            if let Err(source) = env.add_template_owned(file_name(&name), source) {
                return Err(RenderError::Compile { name, source });
            }
            names.push(name);
        }
        names.sort();
        names.dedup();

        let renderer = Self { env, names };
        if let Some(missing) = required.iter().find(|name| !renderer.has_template(name)) {
            return Err(RenderError::MissingTemplate(missing.to_string()));
        }
        Ok(renderer)
    }

    /// Loaded template names, sorted
    pub fn template_names(&self) -> &[String] {
        &self.names
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(&file_name(name)).is_ok()
    }

    /// Render `page` with the template called `name`
    pub fn render(&self, name: &str, page: &Page) -> RenderResult<String> {
        let template = self
            .env
            .get_template(&file_name(name))
            .map_err(|_| RenderError::UnknownTemplate(name.to_string()))?;

        template
            .render(PageContext::from(page))
            .map_err(|source| RenderError::Template {
                name: name.to_string(),
                source,
            })
    }
}

fn file_name(name: &str) -> String {
    format!("{}.{}", name, TEMPLATE_EXTENSION)
}
