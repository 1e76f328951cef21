// SPDX-License-Identifier: MPL-2.0
//! Host screens that banners are anchored to.
//!
//! The widget never walks a real view hierarchy. It asks a
//! [`ScreenHierarchy`] which screen is top-most, which host is the root
//! window, and what bounds a host occupies. [`ScreenStack`] is a small
//! in-memory hierarchy used by the demo and by tests.

use crate::error::HostError;
use iced::Rectangle;
use std::collections::BTreeMap;

/// Identity of a host screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(u64);

impl HostId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for HostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a notification should be anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostContext {
    /// A specific host screen.
    Screen(HostId),
    /// Whatever screen is currently visible.
    TopMost,
    /// The root window, starting right below the status bar.
    BelowStatusBar,
    /// The root window, covering the status bar.
    AboveStatusBar,
}

/// Which band of the host a resolved notification uses as its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Inside the host's safe content area.
    Content,
    /// Directly under the status bar of the root window.
    BelowStatusBar,
    /// At the very edge of the root window, over the status bar.
    AboveStatusBar,
}

/// A host resolved from a [`HostContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHost {
    pub host: HostId,
    pub layer: Layer,
}

/// Geometry of a host screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostBounds {
    /// Frame of the host in window coordinates.
    pub frame: Rectangle,
    /// Inset at the top of the content area (status bar, navigation bar).
    pub safe_top: f32,
    /// Inset at the bottom of the content area (tab bar, home indicator).
    pub safe_bottom: f32,
    /// Height of the status bar drawn over this host.
    pub status_bar_height: f32,
}

impl HostBounds {
    /// Bounds without any inset.
    #[must_use]
    pub fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            safe_top: 0.0,
            safe_bottom: 0.0,
            status_bar_height: 0.0,
        }
    }

    #[must_use]
    pub fn with_safe_area(mut self, top: f32, bottom: f32) -> Self {
        self.safe_top = top;
        self.safe_bottom = bottom;
        self
    }

    #[must_use]
    pub fn with_status_bar(mut self, height: f32) -> Self {
        self.status_bar_height = height;
        self
    }

    /// Y coordinate where the first top-positioned banner starts.
    #[must_use]
    pub fn top_edge(&self, layer: Layer) -> f32 {
        let inset = match layer {
            Layer::Content => self.safe_top,
            Layer::BelowStatusBar => self.status_bar_height,
            Layer::AboveStatusBar => 0.0,
        };
        self.frame.y + inset
    }

    /// Y coordinate where the first bottom-positioned banner ends.
    #[must_use]
    pub fn bottom_edge(&self, layer: Layer) -> f32 {
        let inset = match layer {
            Layer::Content => self.safe_bottom,
            Layer::BelowStatusBar | Layer::AboveStatusBar => 0.0,
        };
        self.frame.y + self.frame.height - inset
    }
}

/// The screen/view hierarchy the widget is embedded in.
pub trait ScreenHierarchy {
    /// The screen currently visible to the user.
    fn top_most(&self) -> Option<HostId>;

    /// The root window host, used by the status bar contexts.
    fn root(&self) -> Option<HostId>;

    /// Geometry of a host, `None` when the host is unknown.
    fn bounds(&self, host: HostId) -> Option<HostBounds>;

    /// Resolves a context to a concrete host.
    fn resolve(&self, context: HostContext) -> Result<ResolvedHost, HostError> {
        let resolved = match context {
            HostContext::Screen(host) => ResolvedHost {
                host,
                layer: Layer::Content,
            },
            HostContext::TopMost => ResolvedHost {
                host: self.top_most().ok_or(HostError::NoTopMostScreen)?,
                layer: Layer::Content,
            },
            HostContext::BelowStatusBar => ResolvedHost {
                host: self.root().ok_or(HostError::NoRootWindow)?,
                layer: Layer::BelowStatusBar,
            },
            HostContext::AboveStatusBar => ResolvedHost {
                host: self.root().ok_or(HostError::NoRootWindow)?,
                layer: Layer::AboveStatusBar,
            },
        };

        if self.bounds(resolved.host).is_none() {
            return Err(HostError::UnknownHost(resolved.host.raw()));
        }
        Ok(resolved)
    }
}

/// In-memory hierarchy: a root window with a stack of screens on top.
///
/// The last pushed screen is the top-most one.
#[derive(Debug, Clone)]
pub struct ScreenStack {
    root: HostId,
    screens: BTreeMap<HostId, HostBounds>,
    visible: Vec<HostId>,
    next_id: u64,
}

impl ScreenStack {
    /// Creates a hierarchy whose root window has the given bounds.
    #[must_use]
    pub fn new(root_bounds: HostBounds) -> Self {
        let root = HostId::new(0);
        let mut screens = BTreeMap::new();
        screens.insert(root, root_bounds);
        Self {
            root,
            screens,
            visible: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a screen and makes it top-most.
    pub fn push(&mut self, bounds: HostBounds) -> HostId {
        let id = HostId::new(self.next_id);
        self.next_id += 1;
        self.screens.insert(id, bounds);
        self.visible.push(id);
        id
    }

    /// Brings an existing screen to the top. Returns `false` for unknown ids.
    pub fn bring_to_front(&mut self, host: HostId) -> bool {
        if host == self.root || !self.screens.contains_key(&host) {
            return false;
        }
        self.visible.retain(|id| *id != host);
        self.visible.push(host);
        true
    }

    /// Removes a screen from the hierarchy.
    pub fn remove(&mut self, host: HostId) -> Option<HostBounds> {
        if host == self.root {
            return None;
        }
        self.visible.retain(|id| *id != host);
        self.screens.remove(&host)
    }

    /// Updates the geometry of a host. Returns `false` for unknown ids.
    pub fn set_bounds(&mut self, host: HostId, bounds: HostBounds) -> bool {
        match self.screens.get_mut(&host) {
            Some(slot) => {
                *slot = bounds;
                true
            }
            None => false,
        }
    }

    /// Resizes every host frame to the given window size, keeping insets.
    pub fn resize(&mut self, width: f32, height: f32) {
        for bounds in self.screens.values_mut() {
            bounds.frame.width = width;
            bounds.frame.height = height;
        }
    }

    pub fn screens(&self) -> impl Iterator<Item = HostId> + '_ {
        self.visible.iter().copied()
    }
}

impl ScreenHierarchy for ScreenStack {
    fn top_most(&self) -> Option<HostId> {
        self.visible.last().copied()
    }

    fn root(&self) -> Option<HostId> {
        Some(self.root)
    }

    fn bounds(&self, host: HostId) -> Option<HostBounds> {
        self.screens.get(&host).copied()
    }
}
