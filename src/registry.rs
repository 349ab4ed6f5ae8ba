use crate::error::ConfigurationError;
use hashbrown::HashSet;

/// The slide ids of a presentation in document order.
///
/// Never empty, and each id appears once. Fixed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRegistry(Vec<String>);

impl SlideRegistry {
	/// # Errors
	///
	/// - [`ConfigurationError::NoSlides`] iff `ids` is empty,
	/// - [`ConfigurationError::MissingSlideId`] for the first empty id,
	/// - [`ConfigurationError::DuplicateSlideId`] for the first repeated id.
	pub fn new(ids: Vec<String>, slides_selector: &str) -> Result<Self, ConfigurationError> {
		if ids.is_empty() {
			return Err(ConfigurationError::NoSlides {
				selector: slides_selector.to_owned(),
			});
		}

		{
			let mut seen = HashSet::with_capacity(ids.len());
			for (index, id) in ids.iter().enumerate() {
				if id.is_empty() {
					return Err(ConfigurationError::MissingSlideId { index });
				}
				if !seen.insert(id.as_str()) {
					return Err(ConfigurationError::DuplicateSlideId { id: id.clone() });
				}
			}
		}

		Ok(Self(ids))
	}

	/// Linear scan. Ids are opaque, so no positional assumptions are made.
	#[must_use]
	pub fn index_of(&self, slide_id: &str) -> Option<usize> {
		self.0.iter().position(|id| id == slide_id)
	}

	#[must_use]
	pub fn slide_id_at(&self, index: usize) -> Option<&str> {
		self.0.get(index).map(String::as_str)
	}

	#[must_use]
	pub fn contains(&self, slide_id: &str) -> bool {
		self.index_of(slide_id).is_some()
	}

	#[must_use]
	pub fn first(&self) -> &str {
		&self.0[0]
	}

	#[must_use]
	pub fn last(&self) -> &str {
		&self.0[self.0.len() - 1]
	}

	#[must_use]
	#[allow(clippy::len_without_is_empty)] // Never empty.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl '_ + ExactSizeIterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}
}
