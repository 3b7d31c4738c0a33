//! The select menu widget.
//!
//! [`SelectMenu`] is a single-select dropdown: a trigger button showing the
//! current selection, and a panel of options that opens below (or above) it.
//! The widget owns the full open/focus/commit state machine; rendering and
//! hit testing belong to the host.
//!
//! # Signals
//!
//! - `value_changed(String)`: emitted when an option is committed
//! - `opened(())`: emitted when the panel opens
//! - `closed(CloseReason)`: emitted when the panel closes, with the cause
//! - `scroll_to_requested(usize)`: emitted from
//!   [`process_deferred`](SelectMenu::process_deferred), asking the host to
//!   scroll the option at the given index into view
//!
//! # Event Flow
//!
//! The host feeds keyboard and pre-classified pointer input through
//! [`event`](SelectMenu::event). While the panel is open the widget holds a
//! [`PointerGrab`], so the host knows to route *outside* pointer presses
//! here as well; an outside press dismisses the panel but is deliberately
//! left unaccepted so it still reaches whatever was pressed.
//!
//! ```
//! use dropkit::event::{Key, KeyPressEvent, WidgetEvent};
//! use dropkit::option::SelectOption;
//! use dropkit::select_menu::SelectMenu;
//!
//! let mut menu = SelectMenu::new(vec![
//!     SelectOption::new("rust", "Rust"),
//!     SelectOption::new("zig", "Zig"),
//! ])
//! .with_placeholder("Pick a language");
//!
//! menu.event(&mut WidgetEvent::KeyPress(KeyPressEvent::plain(Key::ArrowDown)));
//! assert!(menu.is_open());
//! assert_eq!(menu.focused_index(), 0);
//! ```

use std::sync::Arc;

use dropkit_core::{Signal, TaskQueue};

use crate::event::{
    Key, KeyPressEvent, PointerButton, PointerPressEvent, PointerTarget, WidgetEvent,
};
use crate::grab::{PointerGrab, PointerGrabRegistry};
use crate::option::{OptionList, SelectOption};

// ============================================================================
// Close Reason
// ============================================================================

/// Why the panel closed.
///
/// Carried by the `closed` signal so the host can react per cause; the main
/// distinction is whether keyboard focus should return to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// Escape was pressed while the panel was open.
    Escape,
    /// Tab moved focus away.
    Tab,
    /// A pointer press landed outside the trigger and panel.
    OutsideClick,
    /// An option was committed.
    Selection,
    /// The trigger was activated while the panel was open.
    TriggerToggle,
}

impl CloseReason {
    /// Whether the host should move keyboard focus back to the trigger.
    ///
    /// True for dismissals the user performed *from* the menu (Escape,
    /// committing a selection). False when focus is already going somewhere
    /// else: Tab is mid-flight to the next element, an outside press is
    /// focusing whatever was pressed, and a trigger toggle leaves focus on
    /// the trigger where it already is.
    pub fn restores_focus(&self) -> bool {
        matches!(self, Self::Escape | Self::Selection)
    }
}

// ============================================================================
// Render Hints
// ============================================================================

/// Which corner of the trigger the panel attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Below the trigger, left edges aligned.
    #[default]
    BottomStart,
    /// Below the trigger, right edges aligned.
    BottomEnd,
    /// Above the trigger, left edges aligned.
    TopStart,
    /// Above the trigger, right edges aligned.
    TopEnd,
}

/// Visual size of the trigger and panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuSize {
    /// Compact.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Spacious.
    Lg,
}

// ============================================================================
// SelectMenu Widget
// ============================================================================

/// A single-select dropdown widget.
///
/// See the [module docs](self) for the signal and event contract.
pub struct SelectMenu {
    /// The options, in display order.
    options: OptionList,

    /// The committed value, if any.
    selected_value: Option<String>,

    /// Text shown on the trigger while nothing is selected.
    placeholder: String,

    /// Whether the whole widget is inert.
    disabled: bool,

    /// Whether committing an option also closes the panel.
    close_on_select: bool,

    /// Panel attachment corner (render hint).
    placement: Placement,

    /// Visual size (render hint).
    size: MenuSize,

    /// Whether the panel is open.
    open: bool,

    /// Full-list index of the keyboard-focused option (-1 means none).
    focused_index: i32,

    /// Registry the open-state pointer grab is taken from.
    grab_registry: PointerGrabRegistry,

    /// Held for exactly the open lifetime of the panel.
    grab: Option<PointerGrab>,

    /// One-shot tasks to run after the next render.
    deferred: TaskQueue,

    /// Deferred scroll-into-view requests, keyed by option index.
    scroll_to_requested: Arc<Signal<usize>>,

    // Signals
    /// Signal emitted when an option is committed.
    pub value_changed: Signal<String>,
    /// Signal emitted when the panel opens.
    pub opened: Signal<()>,
    /// Signal emitted when the panel closes.
    pub closed: Signal<CloseReason>,
}

impl SelectMenu {
    /// Create a select menu over the given options.
    pub fn new(options: impl Into<OptionList>) -> Self {
        Self {
            options: options.into(),
            selected_value: None,
            placeholder: String::new(),
            disabled: false,
            close_on_select: true,
            placement: Placement::default(),
            size: MenuSize::default(),
            open: false,
            focused_index: -1,
            grab_registry: PointerGrabRegistry::new(),
            grab: None,
            deferred: TaskQueue::new(),
            scroll_to_requested: Arc::new(Signal::new()),
            value_changed: Signal::new(),
            opened: Signal::new(),
            closed: Signal::new(),
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Set the initially selected value using the builder pattern.
    ///
    /// Values with no matching option leave the selection empty.
    pub fn with_selected_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if self.options.index_of(&value).is_some() {
            self.selected_value = Some(value);
        }
        self
    }

    /// Set the trigger placeholder text using the builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the disabled flag using the builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether committing an option closes the panel (default true).
    pub fn with_close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    /// Set the panel placement using the builder pattern.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the visual size using the builder pattern.
    pub fn with_size(mut self, size: MenuSize) -> Self {
        self.size = size;
        self
    }

    /// Take pointer grabs from the host's shared registry instead of a
    /// private one.
    pub fn with_grab_registry(mut self, registry: PointerGrabRegistry) -> Self {
        self.grab_registry = registry;
        self
    }

    // =========================================================================
    // State Accessors
    // =========================================================================

    /// The options, in display order.
    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Replace the options.
    ///
    /// If the panel is open, keyboard focus is recomputed with the same rule
    /// used on open, so it never points at a removed or disabled option.
    pub fn set_options(&mut self, options: impl Into<OptionList>) {
        self.options = options.into();
        if self.open {
            self.focused_index = self.initial_focus();
        }
    }

    /// The committed value, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    /// Set the committed value without emitting `value_changed`.
    ///
    /// This is the controlled-mode setter for hosts that own the selection
    /// elsewhere. Values with no matching option clear the selection.
    pub fn set_selected_value(&mut self, value: Option<&str>) {
        self.selected_value = value
            .filter(|v| self.options.index_of(v).is_some())
            .map(str::to_owned);
    }

    /// Full-list index of the committed option, if any.
    ///
    /// With duplicate values, the last match wins.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_value
            .as_deref()
            .and_then(|v| self.options.index_of(v))
    }

    /// Text for the trigger: the selected option's label, else the
    /// placeholder.
    ///
    /// Options with custom (non-text) labels fall back to their value.
    pub fn trigger_label(&self) -> &str {
        match self.selected_index().and_then(|i| self.options.get(i)) {
            Some(option) => option.label().as_text().unwrap_or(option.value()),
            None => &self.placeholder,
        }
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the whole widget is inert.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set the disabled flag. Disabling an open menu closes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.open {
            self.close(CloseReason::TriggerToggle);
        }
    }

    /// Full-list index of the keyboard-focused option (-1 means none).
    pub fn focused_index(&self) -> i32 {
        self.focused_index
    }

    /// The keyboard-focused option, if any.
    pub fn focused_option(&self) -> Option<&SelectOption> {
        usize::try_from(self.focused_index)
            .ok()
            .and_then(|i| self.options.get(i))
    }

    /// Panel placement (render hint).
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Visual size (render hint).
    pub fn size(&self) -> MenuSize {
        self.size
    }

    /// Deferred scroll-into-view requests, emitted from
    /// [`process_deferred`](Self::process_deferred) with the option index to
    /// bring into view.
    pub fn scroll_to_requested(&self) -> &Signal<usize> {
        &self.scroll_to_requested
    }

    // =========================================================================
    // Open / Close
    // =========================================================================

    /// Open the panel.
    ///
    /// No-op while disabled or already open. Keyboard focus lands on the
    /// selected option if it is enabled, else the first enabled option, else
    /// nowhere (-1, for a list with no enabled options).
    pub fn open(&mut self) {
        if self.disabled || self.open {
            return;
        }

        self.open = true;
        self.focused_index = self.initial_focus();
        self.grab = Some(self.grab_registry.acquire("select-menu"));

        tracing::debug!(
            target: "dropkit::select_menu",
            focused = self.focused_index,
            "panel opened"
        );

        self.opened.emit(());
        if self.focused_index >= 0 {
            self.request_scroll_to(self.focused_index as usize);
        }
    }

    /// Close the panel, reporting why.
    ///
    /// No-op while closed. Focus is cleared, the pointer grab released, and
    /// any pending scroll request dropped before `closed` is emitted.
    pub fn close(&mut self, reason: CloseReason) {
        if !self.open {
            return;
        }

        self.open = false;
        self.focused_index = -1;
        self.grab = None;
        self.deferred.clear();

        tracing::debug!(
            target: "dropkit::select_menu",
            ?reason,
            restores_focus = reason.restores_focus(),
            "panel closed"
        );

        self.closed.emit(reason);
    }

    /// Open the panel if closed, close it (as a trigger toggle) if open.
    pub fn toggle_open(&mut self) {
        if self.open {
            self.close(CloseReason::TriggerToggle);
        } else {
            self.open();
        }
    }

    fn initial_focus(&self) -> i32 {
        let index = self
            .selected_value
            .as_deref()
            .and_then(|v| self.options.enabled_index_of(v))
            .or_else(|| self.options.first_enabled());
        match index {
            Some(i) => i as i32,
            None => -1,
        }
    }

    // =========================================================================
    // Keyboard Focus
    // =========================================================================

    /// Move focus to the next enabled option, wrapping at the end.
    pub fn focus_next(&mut self) {
        if !self.open {
            return;
        }
        let next = match usize::try_from(self.focused_index) {
            Ok(current) => self.options.next_enabled(current),
            Err(_) => self.options.first_enabled(),
        };
        self.move_focus_to(next);
    }

    /// Move focus to the previous enabled option, wrapping at the start.
    pub fn focus_previous(&mut self) {
        if !self.open {
            return;
        }
        let previous = match usize::try_from(self.focused_index) {
            Ok(current) => self.options.previous_enabled(current),
            Err(_) => self.options.last_enabled(),
        };
        self.move_focus_to(previous);
    }

    /// Move focus to the first enabled option.
    pub fn focus_first(&mut self) {
        if self.open {
            self.move_focus_to(self.options.first_enabled());
        }
    }

    /// Move focus to the last enabled option.
    pub fn focus_last(&mut self) {
        if self.open {
            self.move_focus_to(self.options.last_enabled());
        }
    }

    fn move_focus_to(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            self.focused_index = index as i32;
            self.request_scroll_to(index);
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Commit the option at the given full-list index.
    ///
    /// No-op for out-of-range indices and disabled options. Emits
    /// `value_changed`, then the option's own callback, then closes the
    /// panel (reason [`CloseReason::Selection`]) unless close-on-select is
    /// off.
    pub fn commit(&mut self, index: usize) {
        let Some(option) = self.options.get(index) else {
            return;
        };
        if option.is_disabled() {
            return;
        }

        let value = option.value().to_owned();
        self.selected_value = Some(value.clone());

        tracing::debug!(
            target: "dropkit::select_menu",
            index,
            value = %value,
            "option committed"
        );

        self.value_changed.emit(value);
        if let Some(option) = self.options.get(index) {
            option.notify_selected();
        }

        if self.close_on_select {
            self.close(CloseReason::Selection);
        } else {
            self.focused_index = index as i32;
        }
    }

    /// Commit the keyboard-focused option, if there is one.
    pub fn commit_focused(&mut self) {
        if let Ok(index) = usize::try_from(self.focused_index) {
            self.commit(index);
        }
    }

    // =========================================================================
    // Deferred Work
    // =========================================================================

    /// Run the tasks queued since the last call, after the host has
    /// rendered.
    ///
    /// Scroll-into-view requests fire from here rather than from the
    /// navigation that caused them, so the option row exists on screen by
    /// the time the host handles the signal. Returns the number of tasks
    /// run.
    pub fn process_deferred(&mut self) -> usize {
        self.deferred.process_all()
    }

    fn request_scroll_to(&mut self, index: usize) {
        let signal = Arc::clone(&self.scroll_to_requested);
        self.deferred.post(move || signal.emit(index));
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Dispatch an input event.
    ///
    /// Returns true and accepts the event if the widget consumed it. Tab is
    /// the deliberate exception: it closes an open panel but stays
    /// unconsumed so the host's focus traversal continues.
    pub fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::KeyPress(e) => self.handle_key_press(*e),
            WidgetEvent::PointerPress(e) => self.handle_pointer_press(*e),
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn handle_key_press(&mut self, event: KeyPressEvent) -> bool {
        if self.disabled {
            return false;
        }

        if !self.open {
            return match event.key {
                // Arrows only open when there is something to focus, and
                // always enter at the list edge, ignoring any selection.
                Key::ArrowDown | Key::ArrowUp => {
                    if !self.options.has_enabled() {
                        return false;
                    }
                    self.open();
                    if event.key == Key::ArrowDown {
                        self.focus_first();
                    } else {
                        self.focus_last();
                    }
                    true
                }
                // Trigger activation opens even an empty panel.
                Key::Enter | Key::Space => {
                    self.open();
                    true
                }
                _ => false,
            };
        }

        match event.key {
            Key::ArrowDown => {
                self.focus_next();
                true
            }
            Key::ArrowUp => {
                self.focus_previous();
                true
            }
            Key::Home => {
                self.focus_first();
                true
            }
            Key::End => {
                self.focus_last();
                true
            }
            // Consumed even with nothing focused, so Space never scrolls the
            // page behind an open panel.
            Key::Enter | Key::Space => {
                self.commit_focused();
                true
            }
            Key::Escape => {
                self.close(CloseReason::Escape);
                true
            }
            // Closes but stays unconsumed; focus traversal continues.
            Key::Tab => {
                self.close(CloseReason::Tab);
                false
            }
            Key::Character(_) | Key::Other => false,
        }
    }

    fn handle_pointer_press(&mut self, event: PointerPressEvent) -> bool {
        match event.target {
            PointerTarget::Trigger => {
                if self.disabled || event.button != PointerButton::Primary {
                    return false;
                }
                self.toggle_open();
                true
            }
            PointerTarget::Option(index) => {
                if !self.open || event.button != PointerButton::Primary {
                    return false;
                }
                // Presses on disabled options are swallowed so they cannot
                // fall through as outside dismissals.
                self.commit(index);
                true
            }
            PointerTarget::Outside => {
                // Any button dismisses; the press still belongs to whatever
                // was pressed, so it is not consumed.
                self.close(CloseReason::OutsideClick);
                false
            }
        }
    }
}

impl std::fmt::Debug for SelectMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectMenu")
            .field("options", &self.options.len())
            .field("selected_value", &self.selected_value)
            .field("open", &self.open)
            .field("focused_index", &self.focused_index)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn languages() -> Vec<SelectOption> {
        vec![
            SelectOption::new("rust", "Rust"),
            SelectOption::new("zig", "Zig").with_disabled(true),
            SelectOption::new("go", "Go"),
        ]
    }

    #[test]
    fn open_focuses_selected_option() {
        let mut menu = SelectMenu::new(languages()).with_selected_value("go");
        menu.open();
        assert!(menu.is_open());
        assert_eq!(menu.focused_index(), 2);
    }

    #[test]
    fn open_without_selection_focuses_first_enabled() {
        let mut menu = SelectMenu::new(vec![
            SelectOption::new("a", "A").with_disabled(true),
            SelectOption::new("b", "B"),
        ]);
        menu.open();
        assert_eq!(menu.focused_index(), 1);
    }

    #[test]
    fn open_with_no_enabled_options_focuses_nothing() {
        let mut menu = SelectMenu::new(vec![SelectOption::new("a", "A").with_disabled(true)]);
        menu.open();
        assert!(menu.is_open());
        assert_eq!(menu.focused_index(), -1);
    }

    #[test]
    fn disabled_menu_never_opens() {
        let mut menu = SelectMenu::new(languages()).with_disabled(true);
        menu.open();
        assert!(!menu.is_open());
        let mut event = WidgetEvent::PointerPress(PointerPressEvent::primary(
            PointerTarget::Trigger,
        ));
        assert!(!menu.event(&mut event));
        assert!(!menu.is_open());
    }

    #[test]
    fn arrow_navigation_skips_disabled_and_wraps() {
        let mut menu = SelectMenu::new(languages()).with_selected_value("rust");
        menu.open();
        assert_eq!(menu.focused_index(), 0);
        menu.focus_next();
        assert_eq!(menu.focused_index(), 2); // skips disabled "zig"
        menu.focus_next();
        assert_eq!(menu.focused_index(), 0); // wraps
        menu.focus_previous();
        assert_eq!(menu.focused_index(), 2); // wraps backwards
    }

    #[test]
    fn home_and_end_jump_to_enabled_edges() {
        let mut menu = SelectMenu::new(vec![
            SelectOption::new("a", "A").with_disabled(true),
            SelectOption::new("b", "B"),
            SelectOption::new("c", "C"),
            SelectOption::new("d", "D").with_disabled(true),
        ]);
        menu.open();
        menu.focus_last();
        assert_eq!(menu.focused_index(), 2);
        menu.focus_first();
        assert_eq!(menu.focused_index(), 1);
    }

    #[test]
    fn commit_emits_value_changed_then_option_callback() {
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let order_signal = order.clone();
        let order_option = order.clone();

        let mut menu = SelectMenu::new(vec![
            SelectOption::new("rust", "Rust").with_on_select(move |_| {
                order_option.lock().push("on_select");
            }),
        ]);
        menu.value_changed.connect(move |_| {
            order_signal.lock().push("value_changed");
        });

        menu.open();
        menu.commit(0);
        assert_eq!(*order.lock(), vec!["value_changed", "on_select"]);
        assert_eq!(menu.selected_value(), Some("rust"));
    }

    #[test]
    fn commit_on_disabled_option_is_inert() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let mut menu = SelectMenu::new(languages());
        menu.value_changed
            .connect(move |_| {
                hits_clone.fetch_add(1, Ordering::SeqCst);
            });

        menu.open();
        menu.commit(1); // disabled "zig"
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(menu.is_open());
        assert_eq!(menu.selected_value(), None);
    }

    #[test]
    fn selection_closes_and_restores_focus() {
        let reasons = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let reasons_clone = reasons.clone();
        let mut menu = SelectMenu::new(languages());
        menu.closed
            .connect(move |reason| reasons_clone.lock().push(*reason));

        menu.open();
        menu.commit(0);
        assert!(!menu.is_open());
        assert_eq!(*reasons.lock(), vec![CloseReason::Selection]);
        assert!(CloseReason::Selection.restores_focus());
    }

    #[test]
    fn close_on_select_off_keeps_panel_open() {
        let mut menu = SelectMenu::new(languages()).with_close_on_select(false);
        menu.open();
        menu.commit(2);
        assert!(menu.is_open());
        assert_eq!(menu.focused_index(), 2);
        assert_eq!(menu.selected_value(), Some("go"));
    }

    #[test]
    fn escape_closes_without_changing_selection() {
        let mut menu = SelectMenu::new(languages()).with_selected_value("rust");
        menu.open();
        menu.focus_next();
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::Escape));
        assert!(menu.event(&mut event));
        assert!(event.is_accepted());
        assert!(!menu.is_open());
        assert_eq!(menu.focused_index(), -1);
        assert_eq!(menu.selected_value(), Some("rust"));
    }

    #[test]
    fn tab_closes_but_is_not_consumed() {
        let mut menu = SelectMenu::new(languages());
        menu.open();
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::Tab));
        assert!(!menu.event(&mut event));
        assert!(!event.is_accepted());
        assert!(!menu.is_open());
        assert!(!CloseReason::Tab.restores_focus());
    }

    #[test]
    fn outside_press_closes_without_consuming() {
        let mut menu = SelectMenu::new(languages());
        menu.open();
        let mut event =
            WidgetEvent::PointerPress(PointerPressEvent::primary(PointerTarget::Outside));
        assert!(!menu.event(&mut event));
        assert!(!event.is_accepted());
        assert!(!menu.is_open());
        assert!(!CloseReason::OutsideClick.restores_focus());
    }

    #[test]
    fn closed_arrows_enter_at_the_list_edges() {
        let mut menu = SelectMenu::new(languages());
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::ArrowUp));
        assert!(menu.event(&mut event));
        assert!(menu.is_open());
        assert_eq!(menu.focused_index(), 2);

        // A selection does not change where the arrows enter.
        let mut menu = SelectMenu::new(languages()).with_selected_value("go");
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::ArrowDown));
        menu.event(&mut event);
        assert_eq!(menu.focused_index(), 0);
    }

    #[test]
    fn closed_arrow_with_no_enabled_options_is_ignored() {
        let mut menu = SelectMenu::new(vec![SelectOption::new("a", "A").with_disabled(true)]);
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::ArrowDown));
        assert!(!menu.event(&mut event));
        assert!(!menu.is_open());
    }

    #[test]
    fn enter_on_trigger_opens_even_an_empty_list() {
        let mut menu = SelectMenu::new(Vec::new());
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::Enter));
        assert!(menu.event(&mut event));
        assert!(menu.is_open());
        assert_eq!(menu.focused_index(), -1);

        // Enter with nothing focused is consumed but commits nothing.
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::Enter));
        assert!(menu.event(&mut event));
        assert!(menu.is_open());
        assert_eq!(menu.selected_value(), None);
    }

    #[test]
    fn grab_is_held_for_exactly_the_open_lifetime() {
        let registry = PointerGrabRegistry::new();
        let mut menu = SelectMenu::new(languages()).with_grab_registry(registry.clone());
        assert!(!registry.has_active_grab());
        menu.open();
        assert!(registry.has_active_grab());
        menu.close(CloseReason::Escape);
        assert!(!registry.has_active_grab());

        menu.open();
        drop(menu);
        assert!(!registry.has_active_grab());
    }

    #[test]
    fn scroll_requests_fire_only_from_process_deferred() {
        let scrolled = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let scrolled_clone = scrolled.clone();
        let mut menu = SelectMenu::new(languages()).with_selected_value("rust");
        menu.scroll_to_requested()
            .connect(move |index| scrolled_clone.lock().push(*index));

        menu.open();
        menu.focus_next();
        assert!(scrolled.lock().is_empty());

        let ran = menu.process_deferred();
        assert_eq!(ran, 2); // open + focus_next
        assert_eq!(*scrolled.lock(), vec![0, 2]);
    }

    #[test]
    fn closing_cancels_pending_scroll_requests() {
        let scrolled = Arc::new(AtomicUsize::new(0));
        let scrolled_clone = scrolled.clone();
        let mut menu = SelectMenu::new(languages());
        menu.scroll_to_requested()
            .connect(move |_| {
                scrolled_clone.fetch_add(1, Ordering::SeqCst);
            });

        menu.open();
        menu.close(CloseReason::Escape);
        assert_eq!(menu.process_deferred(), 0);
        assert_eq!(scrolled.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn trigger_label_tracks_selection() {
        let mut menu = SelectMenu::new(languages()).with_placeholder("Pick one");
        assert_eq!(menu.trigger_label(), "Pick one");
        menu.open();
        menu.commit(0);
        assert_eq!(menu.trigger_label(), "Rust");
    }

    #[test]
    fn set_options_while_open_recomputes_focus() {
        let mut menu = SelectMenu::new(languages()).with_selected_value("go");
        menu.open();
        assert_eq!(menu.focused_index(), 2);
        menu.set_options(vec![SelectOption::new("go", "Go")]);
        assert_eq!(menu.focused_index(), 0);
    }
}
