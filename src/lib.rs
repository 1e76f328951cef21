// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` provides banner notifications for Iced applications.
//!
//! Banners slide in from the top or bottom edge of a host screen, stack
//! when several are shown at once, and dismiss themselves after a delay, on
//! tap, or on request. A demo application exercises every option.
//!
//! - [`ui::notifications`] - The banner widget and its registry
//! - [`host`] - Host screens and the screen hierarchy collaborator
//! - [`feedback`] - Sound and vibration on presentation
//! - [`config`] - Persisted layout and notification defaults

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod feedback;
pub mod host;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
