use crate::config::ShowerConfig;

/// How the slides are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
	/// All slides are shown as a scrollable list.
	List,
	/// One slide at a time fills the view.
	Full,
}

impl Default for Mode {
	fn default() -> Self {
		Self::List
	}
}

impl Mode {
	/// The configured class name, which is also this mode's fragment segment.
	#[must_use]
	pub fn class_name(self, config: &ShowerConfig) -> &str {
		match self {
			Self::List => &config.list_class_name,
			Self::Full => &config.full_screen_class_name,
		}
	}

	#[must_use]
	pub fn from_class_name(config: &ShowerConfig, class_name: &str) -> Option<Self> {
		if class_name == config.list_class_name {
			Some(Self::List)
		} else if class_name == config.full_screen_class_name {
			Some(Self::Full)
		} else {
			None
		}
	}

	#[must_use]
	pub fn other(self) -> Self {
		match self {
			Self::List => Self::Full,
			Self::Full => Self::List,
		}
	}
}
