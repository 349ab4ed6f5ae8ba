use shower_dom::{
	command::{Command, Key},
	navigator::PresentationState,
	ConfigurationError, Mode, ShowerConfig, SlideNavigator,
};

use fake_ports_::{clear_logs, navigator, pump, FakeLocation, FakeSlides, SurfaceCall};

fn state(mode: Mode, slide_id: &str) -> PresentationState {
	PresentationState {
		mode,
		slide_id: slide_id.to_owned(),
	}
}

#[test]
fn initializes_to_list_mode_on_first_slide() {
	let navigator = navigator(&["intro", "body", "end"], "");
	assert_eq!(navigator.state(), &state(Mode::List, "intro"));
	assert_eq!(navigator.current_slide_index(), 0);

	let surface = navigator.surface();
	assert_eq!(
		surface.calls,
		[
			SurfaceCall::SwapContainerClass {
				outgoing: "full".to_owned(),
				incoming: "list".to_owned(),
			},
			SurfaceCall::ScrollTo(0.),
			SurfaceCall::RemoveClassFromSlides("current".to_owned()),
			SurfaceCall::AddSlideClass {
				slide_id: "intro".to_owned(),
				class_name: "current".to_owned(),
			},
			SurfaceCall::FocusSlide("intro".to_owned()),
		]
	);
	assert!(navigator.navigation().writes.is_empty());
}

#[test]
fn initializes_from_fragment() {
	let navigator = navigator(&["intro", "body", "end"], "full/body");
	assert_eq!(navigator.state(), &state(Mode::Full, "body"));
	assert_eq!(navigator.surface().container_classes.iter().collect::<Vec<_>>(), ["full"]);
	assert_eq!(navigator.surface().focused.as_deref(), Some("body"));
	assert_eq!(navigator.surface().scroll_top, None);
}

#[test]
fn initializes_from_garbage_to_defaults() {
	let navigator = navigator(&["intro", "body", "end"], "slideshow/nope/nothing");
	assert_eq!(navigator.state(), &state(Mode::List, "intro"));
}

#[test]
fn valid_fragments_are_applied() {
	let mut navigator = navigator(&["a", "b", "c"], "");
	for &mode in &[Mode::Full, Mode::List] {
		for &slide_id in &["c", "a", "b"] {
			let fragment = format!("{}/{}", mode.class_name(&ShowerConfig::default()), slide_id);
			navigator.apply_fragment(&fragment);
			assert_eq!(navigator.state(), &state(mode, slide_id), "{}", fragment);
			assert_eq!(navigator.surface().marked.iter().collect::<Vec<_>>(), [slide_id]);
		}
	}
}

#[test]
fn reapplying_a_fragment_does_nothing() {
	let mut navigator = navigator(&["a", "b", "c"], "");
	navigator.apply_fragment("full/b");
	assert_eq!(navigator.state(), &state(Mode::Full, "b"));

	clear_logs(&mut navigator);
	navigator.apply_fragment("full/b");
	assert!(navigator.surface().calls.is_empty());
	assert_eq!(navigator.state(), &state(Mode::Full, "b"));
}

#[test]
fn mode_and_slide_transitions_are_independent() {
	let mut navigator = navigator(&["a", "b", "c"], "");

	clear_logs(&mut navigator);
	navigator.apply_fragment("full/a");
	assert_eq!(
		navigator.surface().calls,
		[SurfaceCall::SwapContainerClass {
			outgoing: "list".to_owned(),
			incoming: "full".to_owned(),
		}]
	);

	clear_logs(&mut navigator);
	navigator.apply_fragment("full/b");
	assert_eq!(
		navigator.surface().calls,
		[
			SurfaceCall::RemoveClassFromSlides("current".to_owned()),
			SurfaceCall::AddSlideClass {
				slide_id: "b".to_owned(),
				class_name: "current".to_owned(),
			},
			SurfaceCall::FocusSlide("b".to_owned()),
		]
	);
}

#[test]
fn partial_fragments_fall_back_to_current_state() {
	let mut navigator = navigator(&["slide-1", "slide-2", "slide-3"], "full/slide-1");
	assert_eq!(navigator.state(), &state(Mode::Full, "slide-1"));

	navigator.apply_fragment("/slide-3");
	assert_eq!(navigator.state(), &state(Mode::Full, "slide-3"));

	navigator.apply_fragment("list/");
	assert_eq!(navigator.state(), &state(Mode::List, "slide-3"));

	navigator.apply_fragment("full");
	assert_eq!(navigator.state(), &state(Mode::Full, "slide-3"));

	navigator.apply_fragment("");
	assert_eq!(navigator.state(), &state(Mode::Full, "slide-3"));
}

#[test]
fn unknown_segments_fall_back_individually() {
	let mut navigator = navigator(&["a", "b", "c"], "");

	navigator.apply_fragment("sideways/b");
	assert_eq!(navigator.state(), &state(Mode::List, "b"));

	navigator.apply_fragment("full/does-not-exist");
	assert_eq!(navigator.state(), &state(Mode::Full, "b"));
}

#[test]
fn leading_hash_is_ignored() {
	let mut navigator = navigator(&["a", "b", "c"], "");
	navigator.apply_fragment("#full/c");
	assert_eq!(navigator.state(), &state(Mode::Full, "c"));
}

#[test]
fn entering_list_mode_scrolls_to_the_target_slide() {
	let mut navigator = navigator(&["a", "b", "c"], "full/a");
	clear_logs(&mut navigator);

	navigator.apply_fragment("list/c");
	assert_eq!(navigator.state(), &state(Mode::List, "c"));
	assert_eq!(navigator.surface().scroll_top, Some(200.));
	assert_eq!(navigator.surface().focused.as_deref(), Some("c"));
}

#[test]
fn commands_only_write_the_fragment() {
	let mut navigator = navigator(&["a", "b", "c"], "");
	clear_logs(&mut navigator);

	navigator.request_next_slide();
	assert_eq!(navigator.navigation().writes, ["list/b"]);
	assert_eq!(navigator.state(), &state(Mode::List, "a"));
	assert!(navigator.surface().calls.is_empty());

	pump(&mut navigator);
	assert_eq!(navigator.state(), &state(Mode::List, "b"));
}

#[test]
fn previous_at_first_slide_is_a_no_op() {
	let mut navigator = navigator(&["a", "b", "c"], "");
	navigator.request_previous_slide();
	assert!(navigator.navigation().writes.is_empty());
	assert_eq!(navigator.current_slide_id(), "a");
}

#[test]
fn next_at_last_slide_is_a_no_op() {
	let mut navigator = navigator(&["a", "b", "c"], "full/c");
	navigator.request_next_slide();
	assert!(navigator.navigation().writes.is_empty());
	assert_eq!(navigator.current_slide_id(), "c");
}

#[test]
fn unknown_slide_request_is_a_no_op() {
	let mut navigator = navigator(&["a", "b", "c"], "full/b");
	navigator.request_slide("does-not-exist");
	assert!(navigator.navigation().writes.is_empty());
	assert_eq!(navigator.navigation().fragment, "full/b");
	assert_eq!(navigator.state(), &state(Mode::Full, "b"));
}

#[test]
fn requesting_the_current_mode_is_a_no_op() {
	let mut navigator = navigator(&["a", "b", "c"], "");
	navigator.request_mode(Mode::List);
	assert!(navigator.navigation().writes.is_empty());
}

#[test]
fn index_is_derived_from_id() {
	let mut navigator = navigator(&["a", "b", "c"], "");
	navigator.request_slide("c");
	pump(&mut navigator);
	assert_eq!(navigator.current_slide_id(), "c");
	assert_eq!(navigator.current_slide_index(), 2);
}

#[test]
fn next_then_previous_round_trips() {
	let mut navigator = navigator(&["a", "b", "c", "d"], "full/b");
	let before = navigator.state().clone();

	navigator.request_next_slide();
	pump(&mut navigator);
	assert_eq!(navigator.state(), &state(Mode::Full, "c"));

	navigator.request_previous_slide();
	pump(&mut navigator);
	assert_eq!(navigator.state(), &before);
}

#[test]
fn end_to_end() {
	let mut navigator = navigator(&["intro", "body", "end"], "");
	assert_eq!(navigator.state(), &state(Mode::List, "intro"));

	navigator.request_mode(Mode::Full);
	assert_eq!(navigator.navigation().fragment, "full/intro");
	pump(&mut navigator);
	assert_eq!(navigator.state(), &state(Mode::Full, "intro"));

	navigator.request_next_slide();
	assert_eq!(navigator.navigation().fragment, "full/body");
	pump(&mut navigator);
	assert_eq!(navigator.state(), &state(Mode::Full, "body"));
	assert_eq!(navigator.navigation().writes, ["full/intro", "full/body"]);
}

#[test]
fn rapid_commands_are_serialized_through_notifications() {
	let mut navigator = navigator(&["a", "b", "c"], "full/a");

	// Without notifications in between, each request still starts from the applied state.
	navigator.request_next_slide();
	navigator.request_next_slide();
	assert_eq!(navigator.navigation().writes, ["full/b", "full/b"]);
	pump(&mut navigator);
	assert_eq!(navigator.current_slide_id(), "b");

	navigator.request_next_slide();
	pump(&mut navigator);
	navigator.request_next_slide();
	pump(&mut navigator);
	assert_eq!(navigator.current_slide_id(), "c");
}

#[test]
fn click_presents_slide_in_list_mode_only() {
	let mut navigator = navigator(&["a", "b", "c"], "");

	navigator.handle_click("does-not-exist");
	assert!(navigator.navigation().writes.is_empty());

	navigator.handle_click("b");
	pump(&mut navigator);
	assert_eq!(navigator.state(), &state(Mode::Full, "b"));

	clear_logs(&mut navigator);
	navigator.handle_click("c");
	assert!(navigator.navigation().writes.is_empty());
}

#[test]
fn keys_navigate() {
	let mut navigator = navigator(&["a", "b", "c"], "");

	let press = |navigator: &mut SlideNavigator<FakeLocation, FakeSlides>, key: Key, shift: bool| {
		let prevent_default = navigator.handle_key(key, shift);
		pump(navigator);
		prevent_default
	};

	assert!(!press(&mut navigator, Key::Enter, false));
	assert_eq!(navigator.state(), &state(Mode::Full, "a"));

	assert!(press(&mut navigator, Key::Space, false));
	assert_eq!(navigator.current_slide_id(), "b");

	assert!(press(&mut navigator, Key::Space, true));
	assert_eq!(navigator.current_slide_id(), "a");

	assert!(!press(&mut navigator, Key::End, false));
	assert_eq!(navigator.current_slide_id(), "c");

	assert!(!press(&mut navigator, Key::ArrowLeft, false));
	assert_eq!(navigator.current_slide_id(), "b");

	assert!(!press(&mut navigator, Key::Home, false));
	assert_eq!(navigator.current_slide_id(), "a");

	assert!(!press(&mut navigator, Key::PageDown, false));
	assert_eq!(navigator.current_slide_id(), "b");

	assert!(!press(&mut navigator, Key::Escape, false));
	assert_eq!(navigator.state(), &state(Mode::List, "b"));
}

#[test]
fn dispatch_go_to_slide() {
	let mut navigator = navigator(&["a", "b", "c"], "full/a");
	navigator.dispatch(Command::GoToSlide("c".to_owned()));
	pump(&mut navigator);
	assert_eq!(navigator.state(), &state(Mode::Full, "c"));
}

#[test]
fn resize_rescrolls_in_list_mode_only() {
	let mut navigator = navigator(&["a", "b", "c"], "list/b");
	clear_logs(&mut navigator);

	navigator.handle_resize();
	assert_eq!(navigator.surface().calls, [SurfaceCall::ScrollTo(100.)]);
	assert_eq!(navigator.state(), &state(Mode::List, "b"));

	navigator.apply_fragment("full/");
	clear_logs(&mut navigator);
	navigator.handle_resize();
	assert!(navigator.surface().calls.is_empty());
}

#[test]
fn no_slides_is_a_configuration_error() {
	let error = SlideNavigator::new(ShowerConfig::default(), FakeLocation::default(), FakeSlides::new(&[])).unwrap_err();
	assert_eq!(error, ConfigurationError::NoSlides { selector: ".slide".to_owned() });
}

#[test]
fn duplicate_slide_ids_are_a_configuration_error() {
	let error = SlideNavigator::new(ShowerConfig::default(), FakeLocation::default(), FakeSlides::new(&["a", "b", "a"])).unwrap_err();
	assert_eq!(error, ConfigurationError::DuplicateSlideId { id: "a".to_owned() });
}

#[test]
fn slides_without_id_are_a_configuration_error() {
	let error = SlideNavigator::new(ShowerConfig::default(), FakeLocation::default(), FakeSlides::new(&["a", ""])).unwrap_err();
	assert_eq!(error, ConfigurationError::MissingSlideId { index: 1 });
}

#[test]
fn custom_class_names_are_used_in_fragments() {
	let config = ShowerConfig::default().with_list_class_name("overview").with_full_screen_class_name("present").with_current_slide_class_name("active");
	let location = FakeLocation {
		fragment: "present/b".to_owned(),
		..FakeLocation::default()
	};
	let mut navigator = SlideNavigator::new(config, location, FakeSlides::new(&["a", "b"])).unwrap();
	assert_eq!(navigator.state(), &state(Mode::Full, "b"));
	assert!(navigator.surface().container_classes.contains("present"));

	navigator.request_mode(Mode::List);
	assert_eq!(navigator.navigation().fragment, "overview/b");

	clear_logs(&mut navigator);
	navigator.request_previous_slide();
	pump(&mut navigator);
	assert!(navigator.surface().calls.contains(&SurfaceCall::AddSlideClass {
		slide_id: "a".to_owned(),
		class_name: "active".to_owned(),
	}));
}
