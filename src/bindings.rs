//! The JavaScript API.
//!
//! ```js
//! const shower = new ShowerHandle({ containerSelector: "#deck" });
//! shower.next();
//! shower.setMode("full");
//! ```

use crate::{config::ShowerConfig, error::ConfigurationError, mode::Mode, web::{Shower, WebNavigator}};
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

fn to_js_error(error: ConfigurationError) -> JsValue {
	js_sys::Error::new(&error.to_string()).into()
}

/// Like [`Shower`], but exported to JavaScript.
///
/// All navigation methods only write the location hash. The state changes once the `hashchange` event is handled.
///
/// Every method throws an `Error` if it is called while a transition is in progress, e.g. from a `focusin` listener.
#[wasm_bindgen]
#[derive(Debug)]
pub struct ShowerHandle {
	shower: Shower,
}

#[wasm_bindgen]
impl ShowerHandle {
	/// `options` may be `undefined` or an object with any of `containerSelector`, `slidesSelector`,
	/// `currentSlideClassName`, `listClassName` and `fullScreenClassName`.
	///
	/// # Errors
	///
	/// Throws an `Error` iff the options are invalid or no slides are found.
	#[wasm_bindgen(constructor)]
	pub fn new(options: &JsValue) -> Result<ShowerHandle, JsValue> {
		let config = ShowerConfig::from_js(options).map_err(to_js_error)?;
		Shower::install(config).map(|shower| Self { shower }).map_err(to_js_error)
	}

	pub fn next(&self) -> Result<(), JsValue> {
		self.with_navigator(|navigator| navigator.request_next_slide())
	}

	pub fn previous(&self) -> Result<(), JsValue> {
		self.with_navigator(|navigator| navigator.request_previous_slide())
	}

	#[wasm_bindgen(js_name = goTo)]
	pub fn go_to(&self, slide_id: &str) -> Result<(), JsValue> {
		self.with_navigator(|navigator| navigator.request_slide(slide_id))
	}

	/// `mode` is a mode class name. Returns whether it was recognised.
	#[wasm_bindgen(js_name = setMode)]
	pub fn set_mode(&self, mode: &str) -> Result<bool, JsValue> {
		self.with_navigator(|navigator| match Mode::from_class_name(navigator.config(), mode) {
			Some(mode) => {
				navigator.request_mode(mode);
				true
			}
			None => false,
		})
	}

	#[wasm_bindgen(js_name = isListMode)]
	pub fn is_list_mode(&self) -> Result<bool, JsValue> {
		self.with_navigator(|navigator| navigator.is_list_mode())
	}

	#[wasm_bindgen(js_name = isFullMode)]
	pub fn is_full_mode(&self) -> Result<bool, JsValue> {
		self.with_navigator(|navigator| navigator.is_full_mode())
	}

	#[wasm_bindgen(js_name = currentSlideId)]
	pub fn current_slide_id(&self) -> Result<String, JsValue> {
		self.with_navigator(|navigator| navigator.current_slide_id().to_owned())
	}

	#[wasm_bindgen(js_name = currentSlideIndex)]
	pub fn current_slide_index(&self) -> Result<usize, JsValue> {
		self.with_navigator(|navigator| navigator.current_slide_index())
	}

	#[wasm_bindgen(js_name = slideIdAt)]
	pub fn slide_id_at(&self, index: usize) -> Result<Option<String>, JsValue> {
		self.with_navigator(|navigator| navigator.registry().slide_id_at(index).map(str::to_owned))
	}

	#[wasm_bindgen(js_name = indexOf)]
	pub fn index_of(&self, slide_id: &str) -> Result<Option<usize>, JsValue> {
		self.with_navigator(|navigator| navigator.registry().index_of(slide_id))
	}
}

impl ShowerHandle {
	fn with_navigator<R>(&self, f: impl FnOnce(&mut WebNavigator) -> R) -> Result<R, JsValue> {
		self.shower.with_navigator(f).map_err(to_js_error)
	}
}
