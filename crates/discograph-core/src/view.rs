//! View-state machine for the home / catalog / detail interaction flow.
//!
//! UI events are expressed as typed [`Intent`]s; applying an intent
//! mutates the state and returns the [`Effect`] the driver should perform
//! (fetch, re-render, nothing). The machine never does IO itself, so every
//! transition and guard is testable in isolation.
//!
//! Re-entrancy is handled with an explicit in-flight flag rather than a
//! wall-clock cooldown: a view-changing intent sets the flag, further
//! view-changing intents are ignored until the driver reports
//! [`transition_complete`](ViewState::transition_complete) once its render
//! has settled.

use crate::catalog::CatalogFilter;

/// Which of the three mutually-exclusive views is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Catalog,
    /// Detail view for the release with the given id. Cannot be entered
    /// without a selection.
    Detail(String),
}

/// A typed UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    OpenCatalog,
    SelectRelease(String),
    CloseDetail,
    NavigateHome,
    ToggleMenu,
    SetFilter(CatalogFilter),
    Escape,
}

/// What the driver should do after an intent was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// First catalog entry: fetch, then render the grid.
    FetchCatalog,
    RenderGrid,
    RenderDetail(String),
    /// Install the filter on the catalog store, then re-render the grid.
    ApplyFilter(CatalogFilter),
    None,
}

/// The application view state.
#[derive(Debug, Clone)]
pub struct ViewState {
    view: View,
    menu_open: bool,
    in_transition: bool,
    catalog_loaded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// A fresh session starts on the home view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: View::Home,
            menu_open: false,
            in_transition: false,
            catalog_loaded: false,
        }
    }

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Record that the catalog has been fetched, so re-entering the
    /// catalog view renders instead of refetching.
    pub fn mark_loaded(&mut self) {
        self.catalog_loaded = true;
    }

    /// Clear the transition lock. The driver calls this once its render
    /// (the animation-end analogue) has settled.
    pub fn transition_complete(&mut self) {
        self.in_transition = false;
    }

    /// The intent an Escape press maps to: close the innermost open
    /// layer (detail, then catalog, then the menu overlay). `None` when
    /// nothing is open.
    fn escape_intent(&self) -> Option<Intent> {
        match self.view {
            View::Detail(_) => Some(Intent::CloseDetail),
            View::Catalog => Some(Intent::NavigateHome),
            View::Home if self.menu_open => Some(Intent::ToggleMenu),
            View::Home => None,
        }
    }

    /// Apply a UI intent, returning the effect the driver should perform.
    pub fn apply(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::Escape => match self.escape_intent() {
                Some(mapped) => self.apply(mapped),
                None => Effect::None,
            },
            Intent::OpenCatalog => {
                if self.in_transition || self.view != View::Home {
                    log::debug!("open-catalog ignored (in transition or not on home)");
                    return Effect::None;
                }
                self.view = View::Catalog;
                self.in_transition = true;
                self.menu_open = false;
                if self.catalog_loaded {
                    Effect::RenderGrid
                } else {
                    Effect::FetchCatalog
                }
            }
            Intent::SelectRelease(id) => {
                if self.in_transition || self.view != View::Catalog {
                    log::debug!("select-release ignored (in transition or not on catalog)");
                    return Effect::None;
                }
                self.view = View::Detail(id.clone());
                self.in_transition = true;
                Effect::RenderDetail(id)
            }
            Intent::CloseDetail => {
                if self.in_transition || !matches!(self.view, View::Detail(_)) {
                    return Effect::None;
                }
                self.view = View::Catalog;
                self.in_transition = true;
                Effect::RenderGrid
            }
            Intent::NavigateHome => {
                // The detail view suppresses home navigation entirely;
                // it can only be exited back into the catalog.
                if self.in_transition || self.view != View::Catalog {
                    return Effect::None;
                }
                self.view = View::Home;
                self.in_transition = true;
                self.menu_open = false;
                Effect::None
            }
            Intent::ToggleMenu => {
                if matches!(self.view, View::Detail(_)) {
                    return Effect::None;
                }
                self.menu_open = !self.menu_open;
                Effect::None
            }
            Intent::SetFilter(filter) => {
                // Filter changes are not permitted while detail is open.
                if matches!(self.view, View::Detail(_)) {
                    return Effect::None;
                }
                Effect::ApplyFilter(filter)
            }
        }
    }
}
