use crate::error::ConfigurationError;
use tracing::{instrument, trace};
use wasm_bindgen::JsValue;

/// Selectors and class names used to find slides and to reflect navigation state in the DOM.
///
/// The list and full screen class names double as the mode segment of the location fragment (`#full/intro`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowerConfig {
	pub container_selector: String,
	pub slides_selector: String,
	pub current_slide_class_name: String,
	pub list_class_name: String,
	pub full_screen_class_name: String,
}

impl Default for ShowerConfig {
	fn default() -> Self {
		Self {
			container_selector: "#content-container".to_owned(),
			slides_selector: ".slide".to_owned(),
			current_slide_class_name: "current".to_owned(),
			list_class_name: "list".to_owned(),
			full_screen_class_name: "full".to_owned(),
		}
	}
}

impl ShowerConfig {
	#[must_use]
	pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
		self.container_selector = selector.into();
		self
	}

	#[must_use]
	pub fn with_slides_selector(mut self, selector: impl Into<String>) -> Self {
		self.slides_selector = selector.into();
		self
	}

	#[must_use]
	pub fn with_current_slide_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.current_slide_class_name = class_name.into();
		self
	}

	#[must_use]
	pub fn with_list_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.list_class_name = class_name.into();
		self
	}

	#[must_use]
	pub fn with_full_screen_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.full_screen_class_name = class_name.into();
		self
	}

	/// Extends the defaults with the string properties of a JavaScript options object.
	///
	/// Recognised (camelCase) properties are `containerSelector`, `slidesSelector`, `currentSlideClassName`, `listClassName` and `fullScreenClassName`.
	/// `undefined` and `null` produce the defaults.
	///
	/// # Errors
	///
	/// Iff a recognised property is present but not a string, or the result fails [`ShowerConfig::validate`].
	#[instrument]
	pub fn from_js(options: &JsValue) -> Result<Self, ConfigurationError> {
		let mut config = Self::default();
		if options.is_undefined() || options.is_null() {
			trace!("No options given. Using defaults.");
			return Ok(config);
		}

		for (name, field) in [
			("containerSelector", &mut config.container_selector),
			("slidesSelector", &mut config.slides_selector),
			("currentSlideClassName", &mut config.current_slide_class_name),
			("listClassName", &mut config.list_class_name),
			("fullScreenClassName", &mut config.full_screen_class_name),
		] {
			let value = js_sys::Reflect::get(options, &JsValue::from_str(name)).map_err(|_| ConfigurationError::InvalidOption { name })?;
			if value.is_undefined() || value.is_null() {
				continue;
			}
			*field = value.as_string().ok_or(ConfigurationError::InvalidOption { name })?;
			trace!(name, value = field.as_str(), "Option overridden.");
		}

		config.validate()?;
		Ok(config)
	}

	/// Checks that the two mode class names can be told apart and embedded in a location fragment.
	///
	/// # Errors
	///
	/// Iff either mode class name is empty or contains `'/'`, or both are the same.
	pub fn validate(&self) -> Result<(), ConfigurationError> {
		for (name, value) in [("listClassName", &self.list_class_name), ("fullScreenClassName", &self.full_screen_class_name)] {
			if value.is_empty() || value.contains('/') {
				return Err(ConfigurationError::InvalidOption { name });
			}
		}
		if self.list_class_name == self.full_screen_class_name {
			return Err(ConfigurationError::InvalidOption { name: "fullScreenClassName" });
		}
		Ok(())
	}
}
