//! Dropkit: a renderer-agnostic single-select dropdown widget.
//!
//! This crate implements the complete interaction model of a select menu:
//! open/close lifecycle, keyboard navigation over enabled options, commit
//! semantics, outside-press dismissal, and the accessibility tree. Layout,
//! painting, and hit testing stay with the host application.
//!
//! # Quick Start
//!
//! ```
//! use dropkit::event::{Key, KeyPressEvent, PointerPressEvent, PointerTarget, WidgetEvent};
//! use dropkit::option::SelectOption;
//! use dropkit::select_menu::SelectMenu;
//!
//! let mut menu = SelectMenu::new(vec![
//!     SelectOption::new("small", "Small"),
//!     SelectOption::new("medium", "Medium"),
//!     SelectOption::new("large", "Large"),
//! ])
//! .with_placeholder("Choose a size");
//!
//! menu.value_changed.connect(|value| println!("picked {value}"));
//!
//! // Pointer press on the trigger opens the panel.
//! menu.event(&mut WidgetEvent::PointerPress(PointerPressEvent::primary(
//!     PointerTarget::Trigger,
//! )));
//! assert!(menu.is_open());
//!
//! // Arrow down, then commit with Enter.
//! menu.event(&mut WidgetEvent::KeyPress(KeyPressEvent::plain(Key::ArrowDown)));
//! menu.event(&mut WidgetEvent::KeyPress(KeyPressEvent::plain(Key::Enter)));
//! assert_eq!(menu.selected_value(), Some("medium"));
//! assert!(!menu.is_open());
//!
//! // After rendering, flush deferred work (scroll-into-view requests).
//! menu.process_deferred();
//! ```
//!
//! # Host Responsibilities
//!
//! - Translate platform input into [`event::WidgetEvent`]s, classifying
//!   pointer presses against the widget's regions
//!   ([`event::PointerTarget`]).
//! - Route outside presses to open widgets; [`grab::PointerGrabRegistry`]
//!   says when that is needed.
//! - Call [`select_menu::SelectMenu::process_deferred`] after each render
//!   and honor `scroll_to_requested`.
//! - With the `accessibility` feature (on by default), splice
//!   [`accessibility::build_menu_nodes`] output into its AccessKit tree.

#[cfg(feature = "accessibility")]
pub mod accessibility;
pub mod event;
pub mod grab;
pub mod option;
pub mod select_menu;

pub use event::{Key, KeyboardModifiers, PointerButton, PointerTarget, WidgetEvent};
pub use grab::{PointerGrab, PointerGrabRegistry};
pub use option::{OptionLabel, OptionList, SelectOption};
pub use select_menu::{CloseReason, MenuSize, Placement, SelectMenu};
