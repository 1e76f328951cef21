// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - Banner notifications anchored to a host screen
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode for the demo

pub mod design_tokens;
pub mod notifications;
pub mod theming;
