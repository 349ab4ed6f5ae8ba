use crate::{
	command::{key_binding, Command, Key},
	config::ShowerConfig,
	error::ConfigurationError,
	fragment,
	mode::Mode,
	ports::{NavigationPort, SlideSurface},
	registry::SlideRegistry,
};
use tracing::{debug, info, instrument, trace, warn};
use wasm_bindgen::UnwrapThrowExt;

/// Which slide is active, and how slides are presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
	pub mode: Mode,
	pub slide_id: String,
}

/// Where a fragment or command wants the presentation to be.
pub type NavigationTarget = PresentationState;

/// Keeps a [`PresentationState`] in agreement with the location fragment.
///
/// The fragment is the single source of truth: Commands ([`request_mode`](`SlideNavigator::request_mode`) etc.) only ever write it,
/// and the state changes exclusively in [`apply_fragment`](`SlideNavigator::apply_fragment`) once the change notification arrives.
/// This keeps browser history and the back button working without extra effort.
///
/// # Correct Use
///
/// Forward every fragment change notification to [`apply_fragment`](`SlideNavigator::apply_fragment`), in delivery order.
/// [`crate::web::Shower`] does this for the browser.
#[derive(Debug)]
pub struct SlideNavigator<N, S> {
	config: ShowerConfig,
	registry: SlideRegistry,
	state: PresentationState,
	navigation: N,
	surface: S,
}

impl<N: NavigationPort, S: SlideSurface> SlideNavigator<N, S> {
	/// Builds the slide registry from `surface` and converges on the current fragment.
	///
	/// An empty or unparseable fragment results in list mode on the first slide.
	///
	/// # Errors
	///
	/// Iff `config` is invalid or `surface` doesn't report a usable set of slides.
	#[instrument(skip(navigation, surface))]
	pub fn new(config: ShowerConfig, navigation: N, surface: S) -> Result<Self, ConfigurationError> {
		config.validate()?;
		let registry = SlideRegistry::new(surface.slide_ids(), &config.slides_selector)?;
		info!(slides = registry.len(), first = registry.first(), last = registry.last(), "Slide registry built.");

		let state = PresentationState {
			mode: Mode::default(),
			slide_id: registry.first().to_owned(),
		};
		let mut navigator = Self {
			config,
			registry,
			state,
			navigation,
			surface,
		};
		navigator.initialize();
		Ok(navigator)
	}

	/// The initial synchronization pass. Unlike later transitions, this writes the DOM even where the state already matches.
	fn initialize(&mut self) {
		let raw = self.navigation.fragment();
		debug!(fragment = raw.as_str(), "Initializing from fragment.");
		self.converge(&raw, true);
	}

	/// Moves to the mode and slide named by `raw` (without `'#'`).
	///
	/// Missing, empty or unrecognised segments keep the current mode or slide respectively.
	/// Does nothing if the resulting target matches the current state.
	#[instrument(skip(self))]
	pub fn apply_fragment(&mut self, raw: &str) {
		self.converge(raw, false);
	}

	fn converge(&mut self, raw: &str, force: bool) {
		let target = self.resolve(raw);
		trace!(?target, current = ?self.state, "Resolved fragment.");

		if force || target.mode != self.state.mode {
			self.enter_mode(target.mode, &target.slide_id);
			self.state.mode = target.mode;
		}

		if force || target.slide_id != self.state.slide_id {
			self.enter_slide(&target.slide_id);
			self.state.slide_id = target.slide_id;
		}
	}

	fn resolve(&self, raw: &str) -> NavigationTarget {
		let fragment = fragment::parse(raw);

		let mode = match fragment.mode {
			None => self.state.mode,
			Some(segment) => Mode::from_class_name(&self.config, segment).unwrap_or_else(|| {
				warn!(segment, "Unknown mode in fragment. Keeping the current mode.");
				self.state.mode
			}),
		};

		let slide_id = match fragment.slide_id {
			Some(slide_id) if self.registry.contains(slide_id) => slide_id.to_owned(),
			Some(slide_id) => {
				warn!(slide_id, "Unknown slide in fragment. Keeping the current slide.");
				self.state.slide_id.clone()
			}
			None => self.state.slide_id.clone(),
		};

		NavigationTarget { mode, slide_id }
	}

	/// `slide_id` is the slide that will be active once the current transition completes.
	fn enter_mode(&mut self, mode: Mode, slide_id: &str) {
		debug!(?mode, "Entering mode.");
		let outgoing = mode.other().class_name(&self.config);
		let incoming = mode.class_name(&self.config);
		self.surface.swap_container_class(outgoing, incoming);

		if mode == Mode::List {
			self.scroll_to_slide(slide_id);
		}
	}

	fn enter_slide(&mut self, slide_id: &str) {
		debug!(slide_id, "Entering slide.");
		let class_name = &self.config.current_slide_class_name;
		self.surface.remove_class_from_slides(class_name);
		self.surface.add_slide_class(slide_id, class_name);
		self.surface.focus_slide(slide_id);
	}

	fn scroll_to_slide(&mut self, slide_id: &str) {
		match self.surface.slide_offset_top(slide_id) {
			Some(top) => self.surface.scroll_to(top),
			None => warn!(slide_id, "Could not measure slide offset. Not scrolling."),
		}
	}

	/// Writes the fragment for `mode` on the current slide, unless that's already the current mode.
	#[instrument(skip(self))]
	pub fn request_mode(&mut self, mode: Mode) {
		if mode == self.state.mode {
			return trace!("Already in the requested mode.");
		}
		let slide_id = self.state.slide_id.clone();
		self.request(mode, &slide_id);
	}

	/// Writes the fragment for the following slide. There is no wraparound.
	#[instrument(skip(self))]
	pub fn request_next_slide(&mut self) {
		match self.registry.slide_id_at(self.current_slide_index() + 1).map(str::to_owned) {
			Some(slide_id) => self.request(self.state.mode, &slide_id),
			None => trace!("Already at the last slide."),
		}
	}

	/// Writes the fragment for the preceding slide. There is no wraparound.
	#[instrument(skip(self))]
	pub fn request_previous_slide(&mut self) {
		let previous = self.current_slide_index().checked_sub(1).and_then(|index| self.registry.slide_id_at(index)).map(str::to_owned);
		match previous {
			Some(slide_id) => self.request(self.state.mode, &slide_id),
			None => trace!("Already at the first slide."),
		}
	}

	/// Writes the fragment for `slide_id` in the current mode, if there is such a slide.
	#[instrument(skip(self))]
	pub fn request_slide(&mut self, slide_id: &str) {
		if !self.registry.contains(slide_id) {
			return trace!("No such slide.");
		}
		self.request(self.state.mode, slide_id);
	}

	/// Switches from list mode to full screen at `slide_id`. Ignored in full screen mode or for unknown slides.
	#[instrument(skip(self))]
	pub fn request_presentation(&mut self, slide_id: &str) {
		if self.state.mode != Mode::List {
			return trace!("Not in list mode. Ignoring.");
		}
		if !self.registry.contains(slide_id) {
			return trace!("No such slide.");
		}
		self.request(Mode::Full, slide_id);
	}

	fn request(&mut self, mode: Mode, slide_id: &str) {
		let fragment = fragment::format(mode.class_name(&self.config), slide_id);
		debug!(fragment = fragment.as_str(), "Writing fragment.");
		self.navigation.set_fragment(&fragment);
	}

	#[instrument(skip(self))]
	pub fn dispatch(&mut self, command: Command) {
		match command {
			Command::SetMode(mode) => self.request_mode(mode),
			Command::NextSlide => self.request_next_slide(),
			Command::PreviousSlide => self.request_previous_slide(),
			Command::FirstSlide => {
				let first = self.registry.first().to_owned();
				self.request_slide(&first)
			}
			Command::LastSlide => {
				let last = self.registry.last().to_owned();
				self.request_slide(&last)
			}
			Command::GoToSlide(slide_id) => self.request_slide(&slide_id),
			Command::Present(slide_id) => self.request_presentation(&slide_id),
		}
	}

	/// Dispatches the command bound to `key`.
	///
	/// Returns whether the browser's default action for the key press must be prevented.
	pub fn handle_key(&mut self, key: Key, shift: bool) -> bool {
		let binding = key_binding(key, shift);
		trace!(?key, shift, ?binding, "Handling key.");
		self.dispatch(binding.command);
		binding.prevent_default
	}

	/// A click on the slide `slide_id`.
	pub fn handle_click(&mut self, slide_id: &str) {
		self.dispatch(Command::Present(slide_id.to_owned()));
	}

	/// Re-asserts the scroll position of the active slide in list mode. Doesn't change the state.
	#[instrument(skip(self))]
	pub fn handle_resize(&mut self) {
		if self.state.mode == Mode::List {
			let slide_id = self.state.slide_id.clone();
			self.scroll_to_slide(&slide_id);
		}
	}

	#[must_use]
	pub fn state(&self) -> &PresentationState {
		&self.state
	}

	#[must_use]
	pub fn mode(&self) -> Mode {
		self.state.mode
	}

	#[must_use]
	pub fn is_list_mode(&self) -> bool {
		self.state.mode == Mode::List
	}

	#[must_use]
	pub fn is_full_mode(&self) -> bool {
		self.state.mode == Mode::Full
	}

	#[must_use]
	pub fn current_slide_id(&self) -> &str {
		&self.state.slide_id
	}

	/// Derived from [`current_slide_id`](`SlideNavigator::current_slide_id`) on each call.
	#[must_use]
	pub fn current_slide_index(&self) -> usize {
		self.registry
			.index_of(&self.state.slide_id)
			.expect_throw("shower-dom bug: The current slide is not registered.")
	}

	#[must_use]
	pub fn registry(&self) -> &SlideRegistry {
		&self.registry
	}

	#[must_use]
	pub fn config(&self) -> &ShowerConfig {
		&self.config
	}

	#[must_use]
	pub fn navigation(&self) -> &N {
		&self.navigation
	}

	pub fn navigation_mut(&mut self) -> &mut N {
		&mut self.navigation
	}

	#[must_use]
	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}
}
