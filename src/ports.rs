//! What the navigator needs from its environment.
//!
//! [`crate::web`] implements these on top of [`web_sys`]. Any other implementation works too,
//! which is how the state machine is tested without a browser.

/// Read and write access to the location fragment.
///
/// Writing the fragment is expected to eventually produce a change notification, which the owner
/// forwards to [`SlideNavigator::apply_fragment`](`crate::navigator::SlideNavigator::apply_fragment`).
/// Writing the fragment it already has must not produce one.
pub trait NavigationPort {
	/// The current fragment, without its leading `'#'`.
	fn fragment(&self) -> String;

	/// `fragment` doesn't include the leading `'#'`.
	fn set_fragment(&mut self, fragment: &str);
}

/// The slide elements and their container.
pub trait SlideSurface {
	/// Ids of all slide elements, in document order. Elements without an id are reported as empty strings.
	fn slide_ids(&self) -> Vec<String>;

	/// Adds `incoming` to the container's classes and removes `outgoing`, which may already be absent.
	fn swap_container_class(&mut self, outgoing: &str, incoming: &str);

	fn remove_class_from_slides(&mut self, class_name: &str);

	fn add_slide_class(&mut self, slide_id: &str, class_name: &str);

	fn focus_slide(&mut self, slide_id: &str);

	/// The slide's top edge in document coordinates, if it can be found.
	fn slide_offset_top(&self, slide_id: &str) -> Option<f64>;

	/// Scrolls the viewport vertically to `top`.
	fn scroll_to(&mut self, top: f64);
}
