//! Input event types for the select menu.
//!
//! The host application translates raw platform input into these events and
//! feeds them to [`SelectMenu::event`](crate::select_menu::SelectMenu::event).
//! Each event carries an accepted flag; the widget accepts events it consumed
//! and leaves the rest untouched so the host can keep dispatching them (Tab
//! in particular closes the menu but stays unaccepted so focus can move on).
//!
//! Geometry stays on the host side: pointer events arrive pre-classified as
//! a [`PointerTarget`] instead of raw coordinates, so the core never needs
//! to know where the trigger or panel were laid out.

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Keys the select menu reacts to.
///
/// The set mirrors web `KeyboardEvent.key` values for the handful of keys a
/// listbox cares about; everything else arrives as `Character` or `Other`
/// and is ignored by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow: move focus to the previous enabled option.
    ArrowUp,
    /// Down arrow: move focus to the next enabled option.
    ArrowDown,
    /// Home: jump focus to the first enabled option.
    Home,
    /// End: jump focus to the last enabled option.
    End,
    /// Enter: commit the focused option.
    Enter,
    /// Space: commit the focused option.
    Space,
    /// Escape: dismiss without selecting.
    Escape,
    /// Tab: let focus leave, dismissing the menu along the way.
    Tab,
    /// A printable character.
    Character(char),
    /// Any key the widget has no binding for.
    Other,
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary = 0,
    /// Secondary button (usually right).
    Secondary = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Where a pointer press landed, as classified by the host's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// On the trigger button.
    Trigger,
    /// On the option at the given full-list index.
    Option(usize),
    /// Anywhere else in the document.
    Outside,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Key press event.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }

    /// Create a key press event with no modifiers held.
    pub fn plain(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }
}

/// Pointer press event, pre-classified against the widget's regions.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: PointerButton,
    /// What the press landed on.
    pub target: PointerTarget,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl PointerPressEvent {
    /// Create a new pointer press event.
    pub fn new(button: PointerButton, target: PointerTarget, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            target,
            modifiers,
        }
    }

    /// Create a primary-button press with no modifiers held.
    pub fn primary(target: PointerTarget) -> Self {
        Self::new(PointerButton::Primary, target, KeyboardModifiers::NONE)
    }
}

/// Enumeration of the widget event types the select menu handles.
///
/// This allows passing events through a unified interface while preserving
/// type information for event handlers.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Pointer press event.
    PointerPress(PointerPressEvent),
}

impl WidgetEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::KeyPress(e) => e.base.is_accepted(),
            Self::PointerPress(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::KeyPress(e) => e.base.accept(),
            Self::PointerPress(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::KeyPress(e) => e.base.ignore(),
            Self::PointerPress(e) => e.base.ignore(),
        }
    }
}

impl From<KeyPressEvent> for WidgetEvent {
    fn from(event: KeyPressEvent) -> Self {
        Self::KeyPress(event)
    }
}

impl From<PointerPressEvent> for WidgetEvent {
    fn from(event: PointerPressEvent) -> Self {
        Self::PointerPress(event)
    }
}
