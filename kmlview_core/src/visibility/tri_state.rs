use std::fmt::Display;

/// Visibility of a tree node.
///
/// Leaves are only ever `Checked` or `Unchecked`. `Indeterminate` is derived for inner
/// nodes whose children disagree and cannot be set directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriState {
	Checked,
	Unchecked,
	Indeterminate,
}

impl TriState {
	pub fn from_checked(checked: bool) -> Self {
		if checked { TriState::Checked } else { TriState::Unchecked }
	}

	/// Derives the state of a node from how many of its children are checked.
	/// A node without children counts as checked.
	pub fn from_counts(checked: usize, total: usize) -> Self {
		if checked == total {
			TriState::Checked
		} else if checked == 0 {
			TriState::Unchecked
		} else {
			TriState::Indeterminate
		}
	}

	pub fn is_checked(&self) -> bool {
		*self == TriState::Checked
	}

	pub fn symbol(&self) -> &'static str {
		match self {
			TriState::Checked => "[x]",
			TriState::Unchecked => "[ ]",
			TriState::Indeterminate => "[-]",
		}
	}
}

impl Display for TriState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.symbol())
	}
}
