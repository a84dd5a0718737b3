use dioxus::prelude::*;

use crate::context::AppContext;

/// Reactive mirror of `StudentSession` for the parts of the tree that re-render on
/// sign in / sign out.
///
/// `generation` is bumped on logout; the routed subtree is keyed on it so every page
/// remounts with fresh state.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub signed_in: Signal<bool>,
    pub generation: Signal<u64>,
}

impl SessionState {
    /// Re-read the cached session after it changed.
    pub fn refresh(mut self, ctx: &AppContext) {
        self.signed_in.set(ctx.session().is_signed_in());
    }

    pub fn reset(mut self) {
        self.signed_in.set(false);
        *self.generation.write() += 1;
    }
}

/// Provide `SessionState` to descendants, seeded from the persisted session.
pub fn use_session_state_provider(ctx: &AppContext) -> SessionState {
    use_context_provider(|| SessionState {
        signed_in: Signal::new(ctx.session().is_signed_in()),
        generation: Signal::new(0),
    })
}
