// SPDX-License-Identifier: MPL-2.0
//! Simulated screens of the demo device.

/// Tabs of the simulated device. Each one is a separate banner host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Inbox,
    Settings,
}

impl Screen {
    pub const ALL: [Self; 2] = [Self::Inbox, Self::Settings];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Inbox => "Inbox",
            Screen::Settings => "Settings",
        }
    }
}
