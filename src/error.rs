/// Raised while setting up a [`SlideNavigator`](`crate::navigator::SlideNavigator`) or its browser binding.
///
/// Runtime navigation never fails: malformed fragments, unknown slide ids and boundary overruns are absorbed.
/// The exception is [`Busy`](`ConfigurationError::Busy`), for re-entrant access through [`Shower`](`crate::web::Shower`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
	#[error("no slides matched {selector:?}")]
	NoSlides { selector: String },

	#[error("slide #{index} (in document order) has no id")]
	MissingSlideId { index: usize },

	#[error("duplicate slide id {id:?}")]
	DuplicateSlideId { id: String },

	#[error("no slide container matched {selector:?}")]
	ContainerNotFound { selector: String },

	#[error("invalid value for option {name:?}")]
	InvalidOption { name: &'static str },

	#[error("the navigator is busy with a transition")]
	Busy,

	#[error("DOM operation `{operation}` failed: {message}")]
	Dom { operation: &'static str, message: String },
}
