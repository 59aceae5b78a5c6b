//! Host display element seam

use std::cell::RefCell;

/// Where a relative time label is shown
///
/// Methods take `&self`: host elements are shared handles with interior
/// mutability (DOM nodes, widget handles, terminal cells).
pub trait DisplayTarget {
	/// Replace the visible label
	fn set_text(&self, text: &str);

	/// Replace the absolute time shown on hover
	fn set_tooltip(&self, tooltip: &str);

	/// Remove label and tooltip
	fn clear(&self);
}

/// In-memory display target
///
/// Records the current label, tooltip and the number of writes.
#[derive(Debug, Default)]
pub struct MemoryTarget {
	text: RefCell<Option<String>>,
	tooltip: RefCell<Option<String>>,
	writes: RefCell<usize>,
}

impl MemoryTarget {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn text(&self) -> Option<String> {
		self.text.borrow().clone()
	}

	pub fn tooltip(&self) -> Option<String> {
		self.tooltip.borrow().clone()
	}

	/// Number of mutations so far, including clears
	pub fn writes(&self) -> usize {
		*self.writes.borrow()
	}
}

impl DisplayTarget for MemoryTarget {
	fn set_text(&self, text: &str) {
		*self.text.borrow_mut() = Some(text.to_string());
		*self.writes.borrow_mut() += 1;
	}

	fn set_tooltip(&self, tooltip: &str) {
		*self.tooltip.borrow_mut() = Some(tooltip.to_string());
		*self.writes.borrow_mut() += 1;
	}

	fn clear(&self) {
		*self.text.borrow_mut() = None;
		*self.tooltip.borrow_mut() = None;
		*self.writes.borrow_mut() += 1;
	}
}
