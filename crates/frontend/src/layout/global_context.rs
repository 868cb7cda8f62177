use leptos::prelude::*;

/// Views reachable once a session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Menu,
    Capture,
}

/// App-wide UI state shared via context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<ActiveView>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_view: RwSignal::new(ActiveView::Menu),
        }
    }

    pub fn open_capture(&self) {
        self.active_view.set(ActiveView::Capture);
    }

    pub fn back_to_menu(&self) {
        self.active_view.set(ActiveView::Menu);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
