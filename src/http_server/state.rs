//! Shared request state

use std::sync::Arc;

use crate::render::Renderer;
use crate::store::PageStore;
use crate::wiki::PagePolicy;

/// Everything a handler needs, built once at startup and never mutated
#[derive(Debug)]
pub struct WikiState {
    store: Arc<dyn PageStore>,
    renderer: Renderer,
    policy: PagePolicy,
}

impl WikiState {
    pub fn new(store: Arc<dyn PageStore>, renderer: Renderer, policy: PagePolicy) -> Self {
        Self {
            store,
            renderer,
            policy,
        }
    }

    pub fn store(&self) -> &dyn PageStore {
        self.store.as_ref()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn policy(&self) -> &PagePolicy {
        &self.policy
    }
}
