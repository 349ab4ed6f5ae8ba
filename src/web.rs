//! The browser side: [`web_sys`] implementations of the [ports](`crate::ports`) and the event wiring.

use crate::{
	command::Key,
	config::ShowerConfig,
	error::ConfigurationError,
	navigator::SlideNavigator,
	ports::{NavigationPort, SlideSurface},
};
use std::{cell::RefCell, rc::Rc};
use tracing::{error, instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent, Location, Window};

pub type WebNavigator = SlideNavigator<LocationNavigation, DomSlides>;

fn dom_error(operation: &'static str) -> impl Fn(JsValue) -> ConfigurationError {
	move |error| ConfigurationError::Dom {
		operation,
		message: format!("{:?}", error),
	}
}

/// `window.location.hash`, percent-decoded on read.
#[derive(Debug, Clone)]
pub struct LocationNavigation {
	location: Location,
}

impl LocationNavigation {
	#[must_use]
	pub fn new(window: &Window) -> Self {
		Self { location: window.location() }
	}
}

impl NavigationPort for LocationNavigation {
	fn fragment(&self) -> String {
		let hash = match self.location.hash() {
			Ok(hash) => hash,
			Err(error) => {
				error!(?error, "Could not read the location hash.");
				return String::new();
			}
		};
		let hash = hash.strip_prefix('#').unwrap_or(hash.as_str());
		match js_sys::decode_uri_component(hash) {
			Ok(decoded) => decoded.into(),
			Err(error) => {
				warn!(?error, hash, "Malformed percent-encoding in the location hash. Using it verbatim.");
				hash.to_owned()
			}
		}
	}

	/// The slide segment is percent-encoded, so that reading the fragment back yields `fragment` again.
	fn set_fragment(&mut self, fragment: &str) {
		let fragment = match fragment.split_once('/') {
			Some((mode, slide_id)) => format!("{}/{}", mode, String::from(js_sys::encode_uri_component(slide_id))),
			None => fragment.to_owned(),
		};
		if let Err(error) = self.location.set_hash(&fragment) {
			error!(?error, fragment = fragment.as_str(), "Could not set the location hash.");
		}
	}
}

/// The slide container and slide elements of a document, captured once.
#[derive(Debug, Clone)]
pub struct DomSlides {
	window: Window,
	container: Element,
	slides: Vec<HtmlElement>,
}

impl DomSlides {
	/// # Errors
	///
	/// Iff the container can't be found or a selector is rejected by the browser.
	#[instrument(skip(window, document))]
	pub fn new(window: &Window, document: &Document, config: &ShowerConfig) -> Result<Self, ConfigurationError> {
		let container = document
			.query_selector(&config.container_selector)
			.map_err(dom_error("querySelector"))?
			.ok_or_else(|| ConfigurationError::ContainerNotFound {
				selector: config.container_selector.clone(),
			})?;

		let node_list = document.query_selector_all(&config.slides_selector).map_err(dom_error("querySelectorAll"))?;
		let slides = (0..node_list.length())
			.filter_map(|i| node_list.item(i))
			.filter_map(|node| match node.dyn_into::<HtmlElement>() {
				Ok(slide) => Some(slide),
				Err(node) => {
					warn!(?node, "Skipping slide that is not an HTML element.");
					None
				}
			})
			.collect();

		Ok(Self {
			window: window.clone(),
			container,
			slides,
		})
	}

	fn slide(&self, slide_id: &str) -> Option<&HtmlElement> {
		let slide = self.slides.iter().find(|slide| slide.id() == slide_id);
		if slide.is_none() {
			warn!(slide_id, "No slide element with this id.");
		}
		slide
	}
}

impl SlideSurface for DomSlides {
	fn slide_ids(&self) -> Vec<String> {
		self.slides.iter().map(|slide| slide.id()).collect()
	}

	fn swap_container_class(&mut self, outgoing: &str, incoming: &str) {
		let class_list = self.container.class_list();
		if let Err(error) = class_list.add_1(incoming) {
			error!(?error, incoming, "Could not add container class.");
		}
		if let Err(error) = class_list.remove_1(outgoing) {
			error!(?error, outgoing, "Could not remove container class.");
		}
	}

	fn remove_class_from_slides(&mut self, class_name: &str) {
		for slide in &self.slides {
			if let Err(error) = slide.class_list().remove_1(class_name) {
				error!(?error, class_name, "Could not remove slide class.");
			}
		}
	}

	fn add_slide_class(&mut self, slide_id: &str, class_name: &str) {
		if let Some(slide) = self.slide(slide_id) {
			if let Err(error) = slide.class_list().add_1(class_name) {
				error!(?error, slide_id, class_name, "Could not add slide class.");
			}
		}
	}

	fn focus_slide(&mut self, slide_id: &str) {
		if let Some(slide) = self.slide(slide_id) {
			// Sections aren't focusable by default.
			if !slide.has_attribute("tabindex") {
				if let Err(error) = slide.set_attribute("tabindex", "-1") {
					error!(?error, slide_id, "Could not make slide focusable.");
				}
			}
			if let Err(error) = slide.focus() {
				error!(?error, slide_id, "Could not focus slide.");
			}
		}
	}

	fn slide_offset_top(&self, slide_id: &str) -> Option<f64> {
		let slide = self.slide(slide_id)?;
		let scroll_y = match self.window.scroll_y() {
			Ok(scroll_y) => scroll_y,
			Err(error) => {
				error!(?error, "Could not read the vertical scroll position.");
				return None;
			}
		};
		Some(slide.get_bounding_client_rect().top() + scroll_y)
	}

	fn scroll_to(&mut self, top: f64) {
		self.window.scroll_to_with_x_and_y(0., top);
	}
}

/// Removes itself from its target when dropped.
#[derive(Debug)]
struct EventListener {
	target: EventTarget,
	name: &'static str,
	closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
	fn add(target: EventTarget, name: &'static str, navigator: &Rc<RefCell<WebNavigator>>, mut handler: impl 'static + FnMut(&mut WebNavigator, &web_sys::Event)) -> Result<Self, ConfigurationError> {
		let navigator = Rc::clone(navigator);
		let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
			let span = trace_span!("event_listener", name);
			let _enter = span.enter();
			match navigator.try_borrow_mut() {
				Ok(mut navigator) => handler(&mut *navigator, &event),
				Err(_) => error!("Re-entrant event. Ignoring it."),
			}
		}) as Box<dyn FnMut(web_sys::Event)>);

		target
			.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
			.map_err(dom_error("addEventListener"))?;
		Ok(Self { target, name, closure })
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		if let Err(error) = self.target.remove_event_listener_with_callback(self.name, self.closure.as_ref().unchecked_ref()) {
			error!(?error, name = self.name, "Failed to remove event listener.");
		}
	}
}

/// A [`SlideNavigator`] wired to the current page.
///
/// Listens for `hashchange` and `resize` on the window and for `click` (delegated to slides) and `keydown` on the document.
/// All listeners are removed when this instance is dropped.
#[derive(Debug)]
pub struct Shower {
	_listeners: Vec<EventListener>,
	navigator: Rc<RefCell<WebNavigator>>,
}

impl Shower {
	/// Finds the slides, converges on the current location hash and starts listening.
	///
	/// # Errors
	///
	/// Iff there's no usable document, the configuration is invalid or no slides are found.
	#[instrument]
	pub fn install(config: ShowerConfig) -> Result<Self, ConfigurationError> {
		let window = web_sys::window().ok_or(ConfigurationError::Dom {
			operation: "window",
			message: "no global `window` exists".to_owned(),
		})?;
		let document = window.document().ok_or(ConfigurationError::Dom {
			operation: "document",
			message: "no document on `window`".to_owned(),
		})?;

		let surface = DomSlides::new(&window, &document, &config)?;
		let navigation = LocationNavigation::new(&window);
		let slides_selector = config.slides_selector.clone();
		let navigator = Rc::new(RefCell::new(SlideNavigator::new(config, navigation, surface)?));

		let _listeners = vec![
			EventListener::add(window.clone().into(), "hashchange", &navigator, |navigator, _| {
				let raw = navigator.navigation().fragment();
				navigator.apply_fragment(&raw);
			})?,
			EventListener::add(window.into(), "resize", &navigator, |navigator, _| navigator.handle_resize())?,
			EventListener::add(document.clone().into(), "click", &navigator, move |navigator, event| {
				let slide = event
					.target()
					.and_then(|target| target.dyn_into::<Element>().ok())
					.map(|target| target.closest(&slides_selector));
				match slide {
					Some(Ok(Some(slide))) => navigator.handle_click(&slide.id()),
					Some(Err(error)) => error!(?error, "Could not match click target against the slides selector."),
					_ => trace!("Click outside of slides."),
				}
			})?,
			EventListener::add(document.into(), "keydown", &navigator, |navigator, event| {
				let event = match event.dyn_ref::<KeyboardEvent>() {
					Some(event) => event,
					None => return error!("`keydown` event is not a `KeyboardEvent`."),
				};
				match Key::from_dom_key(&event.key()).or_else(|| Key::from_key_code(event.key_code())) {
					Some(key) => {
						if navigator.handle_key(key, event.shift_key()) {
							event.prevent_default();
						}
					}
					None => trace!(key = event.key().as_str(), "Unbound key."),
				}
			})?,
		];

		Ok(Self { _listeners, navigator })
	}

	/// Runs `f` with exclusive access to the navigator.
	///
	/// # Errors
	///
	/// [`ConfigurationError::Busy`] iff the navigator is already in use.
	/// Slide transitions move focus, so this happens when page script calls in from a `focus`, `focusin` or `blur` listener.
	pub fn with_navigator<R>(&self, f: impl FnOnce(&mut WebNavigator) -> R) -> Result<R, ConfigurationError> {
		match self.navigator.try_borrow_mut() {
			Ok(mut navigator) => Ok(f(&mut *navigator)),
			Err(_) => {
				warn!("The navigator is busy. Rejecting re-entrant access.");
				Err(ConfigurationError::Busy)
			}
		}
	}
}
