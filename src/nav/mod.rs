// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Page-transition navigation.
//!
//! Link clicks are classified into pass-through, in-place dashboard tab
//! switches, and full page transitions behind a loading overlay. The actual
//! location change is a one-way effect owned by the embedding page; this
//! module only decides and sequences it.

use std::fmt;

/// Where a successful flow navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    GetStarted,
    Page(String),
}

impl NavTarget {
    pub fn path(&self) -> &str {
        match self {
            Self::Dashboard => "/pages/text3.html",
            Self::GetStarted => "/pages/Get-started.html",
            Self::Page(path) => path,
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Dashboard sidebar tabs switched in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Home,
    Analytics,
    Episodes,
}

impl DashboardTab {
    pub fn parse(href: &str) -> Self {
        match href {
            "#analytics" => Self::Analytics,
            "#episodes" => Self::Episodes,
            _ => Self::Home,
        }
    }
}

/// Context for classifying a clicked link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkContext {
    pub in_sidebar: bool,
    pub on_dashboard: bool,
}

/// What to do with a clicked link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Anchors, external links, mailto/tel, and downloads are left to the
    /// browser.
    PassThrough,
    /// Dashboard sidebar links switch tabs in place.
    SwitchTab(DashboardTab),
    /// Internal page links run the loading transition, then navigate.
    Transition(NavTarget),
}

pub fn classify_link(href: Option<&str>, context: LinkContext) -> LinkAction {
    let Some(href) = href else {
        return LinkAction::PassThrough;
    };

    if href.is_empty()
        || href.starts_with('#') && !is_dashboard_tab_link(href, context)
        || href.starts_with("http")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.contains(".pdf")
        || href.contains(".zip")
    {
        return LinkAction::PassThrough;
    }

    if context.in_sidebar || (context.on_dashboard && !href.contains(".html")) {
        return LinkAction::SwitchTab(DashboardTab::parse(href));
    }

    LinkAction::Transition(NavTarget::Page(href.to_owned()))
}

fn is_dashboard_tab_link(href: &str, context: LinkContext) -> bool {
    href != "#" && (context.in_sidebar || context.on_dashboard)
}

/// Sequences the loading overlay around page transitions and tab switches.
///
/// At most one transition is in flight; further navigation requests are
/// ignored until the current one finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    transitioning: bool,
    overlay_active: bool,
    active_tab: DashboardTab,
}

/// A transition accepted by the controller, waiting on its simulated delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingNavigation {
    Leave(NavTarget),
    Tab(DashboardTab),
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay_active
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    /// Starts a full page transition; `None` while another is in flight.
    pub fn begin_transition(&mut self, target: NavTarget) -> Option<PendingNavigation> {
        if self.transitioning {
            return None;
        }
        self.transitioning = true;
        self.overlay_active = true;
        Some(PendingNavigation::Leave(target))
    }

    /// Starts an in-place dashboard tab switch behind the overlay.
    pub fn begin_tab_switch(&mut self, tab: DashboardTab) -> Option<PendingNavigation> {
        if self.transitioning {
            return None;
        }
        self.transitioning = true;
        self.overlay_active = true;
        Some(PendingNavigation::Tab(tab))
    }

    /// Completes a pending navigation after its simulated delay.
    ///
    /// Returns the target to hand to the location change for page
    /// transitions; tab switches complete entirely in place.
    pub fn finish(&mut self, pending: PendingNavigation) -> Option<NavTarget> {
        self.transitioning = false;
        self.overlay_active = false;
        match pending {
            PendingNavigation::Leave(target) => Some(target),
            PendingNavigation::Tab(tab) => {
                self.active_tab = tab;
                None
            }
        }
    }

    /// Hides the overlay once the next page reports loaded.
    pub fn page_loaded(&mut self) {
        self.transitioning = false;
        self.overlay_active = false;
    }
}
