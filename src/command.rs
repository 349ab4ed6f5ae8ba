//! User intent, and the keyboard table that produces it.

use crate::mode::Mode;

/// A navigation request. Dispatching one only ever writes the location fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	SetMode(Mode),
	NextSlide,
	PreviousSlide,
	FirstSlide,
	LastSlide,
	GoToSlide(String),
	/// Full screen, starting at the given slide. Only honoured in list mode.
	Present(String),
}

/// The keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	Enter,
	Escape,
	PageUp,
	PageDown,
	ArrowUp,
	ArrowDown,
	ArrowLeft,
	ArrowRight,
	Home,
	End,
	Space,
}

impl Key {
	/// Parses a [`KeyboardEvent.key`](https://developer.mozilla.org/en-US/docs/Web/API/KeyboardEvent/key) value.
	#[must_use]
	pub fn from_dom_key(key: &str) -> Option<Self> {
		Some(match key {
			"Enter" => Self::Enter,
			"Escape" | "Esc" => Self::Escape,
			"PageUp" => Self::PageUp,
			"PageDown" => Self::PageDown,
			"ArrowUp" | "Up" => Self::ArrowUp,
			"ArrowDown" | "Down" => Self::ArrowDown,
			"ArrowLeft" | "Left" => Self::ArrowLeft,
			"ArrowRight" | "Right" => Self::ArrowRight,
			"Home" => Self::Home,
			"End" => Self::End,
			" " | "Spacebar" => Self::Space,
			_ => return None,
		})
	}

	/// Parses a legacy `keyCode`/`which` value.
	#[must_use]
	pub fn from_key_code(key_code: u32) -> Option<Self> {
		Some(match key_code {
			13 => Self::Enter,
			27 => Self::Escape,
			32 => Self::Space,
			33 => Self::PageUp,
			34 => Self::PageDown,
			35 => Self::End,
			36 => Self::Home,
			37 => Self::ArrowLeft,
			38 => Self::ArrowUp,
			39 => Self::ArrowRight,
			40 => Self::ArrowDown,
			_ => return None,
		})
	}
}

/// What a key press should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
	pub command: Command,
	/// Whether the browser's default action (page scrolling) must be suppressed.
	pub prevent_default: bool,
}

#[must_use]
pub fn key_binding(key: Key, shift: bool) -> KeyBinding {
	let (command, prevent_default) = match key {
		Key::Enter => (Command::SetMode(Mode::Full), false),
		Key::Escape => (Command::SetMode(Mode::List), false),
		Key::PageUp | Key::ArrowUp | Key::ArrowLeft => (Command::PreviousSlide, false),
		Key::PageDown | Key::ArrowDown | Key::ArrowRight => (Command::NextSlide, false),
		Key::Home => (Command::FirstSlide, false),
		Key::End => (Command::LastSlide, false),
		Key::Space if shift => (Command::PreviousSlide, true),
		Key::Space => (Command::NextSlide, true),
	};
	KeyBinding { command, prevent_default }
}
