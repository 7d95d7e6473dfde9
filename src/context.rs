//! Application Context
//!
//! Navigation and reload signals provided via Leptos Context API.

use leptos::prelude::*;

/// Which screen is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Search,
    Watchlist,
    /// Detail view for a title id
    Details(u32),
    /// Episode list for a title id
    Episodes(u32),
}

impl Screen {
    /// Tab screens are navigation roots; detail screens are pushed on top
    pub fn is_tab(&self) -> bool {
        matches!(self, Screen::Home | Screen::Search | Screen::Watchlist)
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    /// Last tab screen, target for "back" - read
    last_tab: ReadSignal<Screen>,
    set_last_tab: WriteSignal<Screen>,
    /// Trigger to re-read local preferences from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        last_tab: (ReadSignal<Screen>, WriteSignal<Screen>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            last_tab: last_tab.0,
            set_last_tab: last_tab.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Switch screens, remembering the last tab for back()
    pub fn navigate(&self, to: Screen) {
        if to.is_tab() {
            self.set_last_tab.set(to);
        }
        self.set_screen.set(to);
    }

    /// Return to the last tab screen
    pub fn back(&self) {
        self.set_screen.set(self.last_tab.get_untracked());
    }

    /// Trigger a re-read of local preferences
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Get the app context; panics outside the component tree
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
