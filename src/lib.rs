//! appwrap - mobile-app wrapper configurator for online storefronts.
//!
//! A merchant configures the native shell around their storefront: a splash
//! screen, a floating install button, an install banner, a promotional popup
//! and a bottom navigation bar. appwrap turns that configuration into a
//! phone-sized preview. The main pieces are:
//!
//! - The stored configuration record and its field catalogue
//! - Fallback resolution of every field to an effective value
//! - Size tokens, placement anchors and viewport geometry
//! - One renderer per widget, composed into a layered screen
//! - An editor session that keeps the preview in sync and saves changes
//!
//! # Quick Start
//!
//! ```rust
//! use appwrap::{
//!     compose::{PreviewMode, preview},
//!     model::AppConfig,
//!     render::WidgetKind,
//! };
//!
//! let mut config = AppConfig::initial();
//! config.fab.enabled = Some(true);
//!
//! let screen = preview(&config, PreviewMode::App);
//! assert!(screen.layer(WidgetKind::Fab).is_some());
//! ```

/// Core error types and result aliases.
pub mod core;

/// Stored configuration record and field catalogue.
pub mod model;

/// Size tokens, placement anchors and viewport geometry.
pub mod layout;

/// Fallback resolution to effective values.
pub mod resolve;

/// Widget renderers.
pub mod render;

/// Preview composition and stacking order.
pub mod compose;

/// Editor sessions, change tracking and persistence backends.
pub mod editor;

/// Tool settings loaded from TOML.
pub mod settings;

/// Logging setup.
pub mod tracing_config;

/// Command-line interface.
pub mod cli;

/// Re-exported core types for convenience.
pub use core::{AppwrapError, Result};
