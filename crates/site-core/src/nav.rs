//! Navigation bar model: a pure projection of the scroll state.

use crate::constants::MOBILE_BREAKPOINT_PX;
use crate::content::SectionDescriptor;
use crate::tracker::ScrollState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLayout {
    /// Row of orbs across the top.
    Desktop,
    /// Floating button with a drop-down list.
    Mobile,
}

impl NavLayout {
    #[inline]
    pub fn for_width(inner_width: f64) -> Self {
        if inner_width < MOBILE_BREAKPOINT_PX {
            NavLayout::Mobile
        } else {
            NavLayout::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionDescriptor,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavView {
    pub items: Vec<NavItem>,
    /// Horizontal fill of the progress bar, `[0, 1]`.
    pub progress_fill: f32,
    pub layout: NavLayout,
    pub menu_open: bool,
}

impl NavView {
    pub fn active_item(&self) -> Option<&NavItem> {
        self.items.iter().find(|i| i.active)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    ScrollTo(&'static str),
}

pub struct NavModel {
    sections: Vec<SectionDescriptor>,
    layout: NavLayout,
    menu_open: bool,
}

impl NavModel {
    pub fn new(sections: Vec<SectionDescriptor>, inner_width: f64) -> Self {
        Self {
            sections,
            layout: NavLayout::for_width(inner_width),
            menu_open: false,
        }
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn layout(&self) -> NavLayout {
        self.layout
    }

    /// Returns true if the layout flipped.
    pub fn resize(&mut self, inner_width: f64) -> bool {
        let layout = NavLayout::for_width(inner_width);
        if layout == self.layout {
            return false;
        }
        self.layout = layout;
        if layout == NavLayout::Desktop {
            self.menu_open = false;
        }
        true
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Selecting a control always closes the mobile menu.
    pub fn select(&mut self, id: &str) -> Option<NavAction> {
        self.menu_open = false;
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| NavAction::ScrollTo(s.id))
    }

    pub fn view(&self, scroll: ScrollState) -> NavView {
        NavView {
            items: self
                .sections
                .iter()
                .map(|s| NavItem {
                    section: *s,
                    active: s.id == scroll.active,
                })
                .collect(),
            progress_fill: scroll.progress.clamp(0.0, 1.0),
            layout: self.layout,
            menu_open: self.menu_open && self.layout == NavLayout::Mobile,
        }
    }
}

/// Text for the polite live region announcing the current section.
pub fn live_region_text(active: &str) -> String {
    format!("Currently viewing: {}", active)
}
