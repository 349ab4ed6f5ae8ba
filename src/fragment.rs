//! The location fragment format, `<mode>/<slide id>`.
//!
//! Either segment may be empty or missing: `#/intro`, `#full/`, `#full` and `#` all parse.
//! Empty segments are reported as [`None`] so that the caller can fall back to its current state.

/// The segments of a raw location fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fragment<'a> {
	pub mode: Option<&'a str>,
	pub slide_id: Option<&'a str>,
}

/// Splits `raw` on its first `'/'`. A single leading `'#'` is ignored.
#[must_use]
pub fn parse(raw: &str) -> Fragment<'_> {
	let raw = raw.strip_prefix('#').unwrap_or(raw);
	let (mode, slide_id) = match raw.split_once('/') {
		Some((mode, slide_id)) => (mode, slide_id),
		None => (raw, ""),
	};
	Fragment {
		mode: Some(mode).filter(|mode| !mode.is_empty()),
		slide_id: Some(slide_id).filter(|slide_id| !slide_id.is_empty()),
	}
}

#[must_use]
pub fn format(mode: &str, slide_id: &str) -> String {
	let mut fragment = String::with_capacity(mode.len() + 1 + slide_id.len());
	fragment.push_str(mode);
	fragment.push('/');
	fragment.push_str(slide_id);
	fragment
}
