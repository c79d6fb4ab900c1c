//! Shared TUI components for MedCare applications.
//!
//! This crate provides reusable UI components, widgets, and utilities
//! for building terminal user interfaces around the health companion.
//!
//! # Architecture
//!
//! The crate is organized into:
//! - `widgets` - Reusable ratatui widgets (header, footer, chat, quick actions, dialogs)
//! - `theme` - Colors, styles, and message tones
//! - `utils` - Text wrapping, truncation
//!
//! # Usage
//!
//! Components are designed to be data-agnostic. Pass data through simple
//! structs rather than depending on domain types.

pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::{Theme, Tone};
pub use utils::{truncate, wrap_text, wrap_text_indented};
pub use widgets::actions::ActionsWidget;
pub use widgets::chat::{ChatMessage, ChatRole, ChatWidget};
pub use widgets::dialogs::{centered_rect, AlertDialog, InputField};
pub use widgets::footer::Footer;
pub use widgets::header::{Header, HeaderStat, StatusIndicator};
