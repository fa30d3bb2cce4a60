//! Page-window computation
//!
//! Decides which page controls are shown for a given [`Pagination`] state.
//! The window is laid out as
//!
//! ```text
//! prev [first (…|back-3)] back-2 back-1 CURRENT fwd-1 fwd-2 [(fwd-3|…) last] next
//! ```
//!
//! Shortcuts one and two steps away are shown whenever their target exists.
//! When page 1 is within three pages, the backward shortcuts reach it by
//! themselves and no first control is added. The last page is only reached by
//! shortcuts when it is at most two pages away; a three-step shortcut never
//! targets it. Otherwise the edge gets an explicit control; a single elided
//! page between it and the nearest two-step shortcut is filled by the
//! three-step shortcut, and two or more elided pages collapse into an
//! ellipsis.

use crate::pagination::Pagination;

/// Distance of a shortcut control from the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
	/// One page
	One,
	/// Two pages
	Two,
	/// Three pages
	Three,
}

impl Step {
	/// Number of pages this step covers
	pub fn pages(&self) -> usize {
		match self {
			Step::One => 1,
			Step::Two => 2,
			Step::Three => 3,
		}
	}

	/// Word used in test ids
	pub fn word(&self) -> &'static str {
		match self {
			Step::One => "one",
			Step::Two => "two",
			Step::Three => "three",
		}
	}

	fn from_word(word: &str) -> Option<Self> {
		match word {
			"one" => Some(Step::One),
			"two" => Some(Step::Two),
			"three" => Some(Step::Three),
			_ => None,
		}
	}
}

/// One pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageControl {
	/// Single step back, disabled on page 1
	Previous,
	/// Explicit control for page 1
	First,
	/// Placeholder for pages elided before the current page
	LeftEllipsis,
	/// Shortcut to a page before the current one
	Back(Step),
	/// The current page
	Current,
	/// Shortcut to a page after the current one
	Forward(Step),
	/// Placeholder for pages elided after the current page
	RightEllipsis,
	/// Explicit control for the last page
	Last,
	/// Single step forward, disabled on the last page
	Next,
}

impl PageControl {
	/// Test id suffix, appended to the table id
	pub fn test_id_suffix(&self) -> String {
		match self {
			PageControl::Previous => "prev-page-button".to_string(),
			PageControl::First => "first-page-button".to_string(),
			PageControl::LeftEllipsis => "left-ellipses".to_string(),
			PageControl::Back(step) => format!("back-{}-page-button", step.word()),
			PageControl::Current => "current-page-button".to_string(),
			PageControl::Forward(step) => format!("forward-{}-page-button", step.word()),
			PageControl::RightEllipsis => "right-ellipsis".to_string(),
			PageControl::Last => "last-page-button".to_string(),
			PageControl::Next => "next-page-button".to_string(),
		}
	}

	/// Full test id, e.g. `testid-forward-one-page-button`
	pub fn test_id(&self, table_id: &str) -> String {
		format!("{}-{}", table_id, self.test_id_suffix())
	}

	/// Parses a test id suffix back into a control
	pub fn from_test_id_suffix(suffix: &str) -> Option<Self> {
		match suffix {
			"prev-page-button" => return Some(PageControl::Previous),
			"first-page-button" => return Some(PageControl::First),
			"left-ellipses" => return Some(PageControl::LeftEllipsis),
			"current-page-button" => return Some(PageControl::Current),
			"right-ellipsis" => return Some(PageControl::RightEllipsis),
			"last-page-button" => return Some(PageControl::Last),
			"next-page-button" => return Some(PageControl::Next),
			_ => {}
		}
		let step_word = |prefix: &str| {
			suffix
				.strip_prefix(prefix)
				.and_then(|rest| rest.strip_suffix("-page-button"))
				.and_then(Step::from_word)
		};
		step_word("back-")
			.map(PageControl::Back)
			.or_else(|| step_word("forward-").map(PageControl::Forward))
	}

	/// Returns whether clicking the control can navigate
	pub fn is_interactive(&self) -> bool {
		!matches!(self, PageControl::LeftEllipsis | PageControl::RightEllipsis)
	}

	/// State after activating this control
	///
	/// Ellipsis markers leave the state unchanged.
	pub fn apply(&self, pagination: Pagination) -> Pagination {
		match self {
			PageControl::Previous => pagination.previous(),
			PageControl::First => pagination.first(),
			PageControl::Back(step) => pagination.jump_backward(step.pages()),
			PageControl::Current => pagination,
			PageControl::Forward(step) => pagination.jump_forward(step.pages()),
			PageControl::Last => pagination.last(),
			PageControl::Next => pagination.next(),
			PageControl::LeftEllipsis | PageControl::RightEllipsis => pagination,
		}
	}
}

/// A control as it appears in the rendered window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowItem {
	/// Which control
	pub control: PageControl,
	/// Displayed label; page controls show their target page number
	pub label: String,
	/// Page the control navigates to, `None` for ellipsis markers
	pub target: Option<usize>,
	/// Disabled previous/next control
	pub disabled: bool,
}

impl WindowItem {
	fn page(control: PageControl, target: usize) -> Self {
		Self {
			control,
			label: target.to_string(),
			target: Some(target),
			disabled: false,
		}
	}

	fn ellipsis(control: PageControl) -> Self {
		Self {
			control,
			label: "…".to_string(),
			target: None,
			disabled: true,
		}
	}

	fn step(control: PageControl, label: &str, target: Option<usize>) -> Self {
		Self {
			control,
			label: label.to_string(),
			target,
			disabled: target.is_none(),
		}
	}

	/// Returns whether this item marks the current page
	pub fn is_current(&self) -> bool {
		self.control == PageControl::Current
	}
}

/// Closest distance at which an edge gets its own control
const EDGE_REACH: usize = 3;

/// Computes the ordered page controls for `pagination`
///
/// Returns an empty list when pagination is hidden, i.e. when all rows fit on
/// one page.
pub fn page_window(pagination: &Pagination) -> Vec<WindowItem> {
	if !pagination.is_visible() {
		return Vec::new();
	}

	let current = pagination.current_page();
	let total = pagination.total_pages();
	let mut items = Vec::with_capacity(13);

	items.push(WindowItem::step(
		PageControl::Previous,
		"‹",
		pagination.has_previous().then(|| current - 1),
	));

	let behind = current.saturating_sub(1);
	if behind <= EDGE_REACH {
		for step in [Step::Three, Step::Two, Step::One] {
			if step.pages() <= behind {
				items.push(WindowItem::page(PageControl::Back(step), current - step.pages()));
			}
		}
	} else {
		items.push(WindowItem::page(PageControl::First, 1));
		// pages strictly between 1 and current - 2
		match behind.saturating_sub(EDGE_REACH) {
			1 => items.push(WindowItem::page(PageControl::Back(Step::Three), current - 3)),
			_ => items.push(WindowItem::ellipsis(PageControl::LeftEllipsis)),
		}
		items.push(WindowItem::page(PageControl::Back(Step::Two), current - 2));
		items.push(WindowItem::page(PageControl::Back(Step::One), current - 1));
	}

	items.push(WindowItem::page(PageControl::Current, current));

	let ahead = total.saturating_sub(current);
	if ahead < EDGE_REACH {
		for step in [Step::One, Step::Two] {
			if step.pages() <= ahead {
				items.push(WindowItem::page(PageControl::Forward(step), current + step.pages()));
			}
		}
	} else {
		items.push(WindowItem::page(PageControl::Forward(Step::One), current + 1));
		items.push(WindowItem::page(PageControl::Forward(Step::Two), current + 2));
		// pages strictly between current + 2 and total; the last page itself is
		// never a three-step shortcut
		match ahead.saturating_sub(EDGE_REACH) {
			0 => {}
			1 => items.push(WindowItem::page(PageControl::Forward(Step::Three), current + 3)),
			_ => items.push(WindowItem::ellipsis(PageControl::RightEllipsis)),
		}
		items.push(WindowItem::page(PageControl::Last, total));
	}

	items.push(WindowItem::step(
		PageControl::Next,
		"›",
		pagination.has_next().then(|| current + 1),
	));

	items
}

#[cfg(test)]
mod tests {
	use super::*;

	fn controls(total_rows: usize, page: usize) -> Vec<(PageControl, String)> {
		let p = Pagination::new(10, total_rows).unwrap().go_to(page);
		page_window(&p)
			.into_iter()
			.map(|item| (item.control, item.label))
			.collect()
	}

	fn labels(total_rows: usize, page: usize) -> Vec<String> {
		controls(total_rows, page)
			.into_iter()
			.map(|(_, label)| label)
			.collect()
	}

	#[test]
	fn test_hidden_when_single_page() {
		assert!(controls(0, 1).is_empty());
		assert!(controls(10, 1).is_empty());
	}

	#[test]
	fn test_first_page_of_ten() {
		use PageControl::*;
		assert_eq!(
			controls(100, 1),
			vec![
				(Previous, "‹".to_string()),
				(Current, "1".to_string()),
				(Forward(Step::One), "2".to_string()),
				(Forward(Step::Two), "3".to_string()),
				(RightEllipsis, "…".to_string()),
				(Last, "10".to_string()),
				(Next, "›".to_string()),
			]
		);
	}

	#[test]
	fn test_last_page_of_ten() {
		use PageControl::*;
		assert_eq!(
			controls(100, 10),
			vec![
				(Previous, "‹".to_string()),
				(First, "1".to_string()),
				(LeftEllipsis, "…".to_string()),
				(Back(Step::Two), "8".to_string()),
				(Back(Step::One), "9".to_string()),
				(Current, "10".to_string()),
				(Next, "›".to_string()),
			]
		);
	}

	#[test]
	fn test_three_pages_before_last_uses_last_control() {
		use PageControl::*;
		let state = Pagination::new(10, 100).unwrap().go_to(7);
		let targets: Vec<(PageControl, Option<usize>)> = page_window(&state)
			.into_iter()
			.map(|item| (item.control, item.target))
			.collect();
		assert_eq!(
			targets,
			vec![
				(Previous, Some(6)),
				(First, Some(1)),
				(LeftEllipsis, None),
				(Back(Step::Two), Some(5)),
				(Back(Step::One), Some(6)),
				(Current, Some(7)),
				(Forward(Step::One), Some(8)),
				(Forward(Step::Two), Some(9)),
				(Last, Some(10)),
				(Next, Some(8)),
			]
		);
	}

	#[test]
	fn test_every_page_of_ten() {
		let expected: [&[&str]; 10] = [
			&["‹", "1", "2", "3", "…", "10", "›"],
			&["‹", "1", "2", "3", "4", "…", "10", "›"],
			&["‹", "1", "2", "3", "4", "5", "…", "10", "›"],
			&["‹", "1", "2", "3", "4", "5", "6", "…", "10", "›"],
			&["‹", "1", "2", "3", "4", "5", "6", "7", "…", "10", "›"],
			&["‹", "1", "…", "4", "5", "6", "7", "8", "9", "10", "›"],
			&["‹", "1", "…", "5", "6", "7", "8", "9", "10", "›"],
			&["‹", "1", "…", "6", "7", "8", "9", "10", "›"],
			&["‹", "1", "…", "7", "8", "9", "10", "›"],
			&["‹", "1", "…", "8", "9", "10", "›"],
		];
		for (i, row) in expected.iter().enumerate() {
			assert_eq!(labels(100, i + 1), *row, "page {}", i + 1);
		}
	}

	#[test]
	fn test_single_gap_is_filled_not_elided() {
		let window = controls(100, 5);
		assert!(window.contains(&(PageControl::Back(Step::Three), "2".to_string())));
		assert!(window.iter().all(|(c, _)| *c != PageControl::LeftEllipsis));

		let window = controls(100, 6);
		assert!(window.contains(&(PageControl::Forward(Step::Three), "9".to_string())));
		assert!(window.iter().all(|(c, _)| *c != PageControl::RightEllipsis));
	}

	#[test]
	fn test_near_start_reaches_page_one_without_first_control() {
		let window = controls(100, 4);
		assert!(window.contains(&(PageControl::Back(Step::Three), "1".to_string())));
		assert!(window.iter().all(|(c, _)| *c != PageControl::First));
	}

	#[test]
	fn test_two_pages() {
		use PageControl::*;
		assert_eq!(
			controls(11, 1),
			vec![
				(Previous, "‹".to_string()),
				(Current, "1".to_string()),
				(Forward(Step::One), "2".to_string()),
				(Next, "›".to_string()),
			]
		);
	}

	#[test]
	fn test_prev_next_disabled_at_edges() {
		let p = Pagination::new(10, 30).unwrap();
		let first = page_window(&p);
		assert!(first[0].disabled);
		assert!(!first[first.len() - 1].disabled);

		let last = page_window(&p.last());
		assert!(!last[0].disabled);
		assert!(last[last.len() - 1].disabled);
	}

	#[test]
	fn test_test_id_round_trip_for_all_controls() {
		let all = [
			PageControl::Previous,
			PageControl::First,
			PageControl::LeftEllipsis,
			PageControl::Back(Step::Three),
			PageControl::Back(Step::Two),
			PageControl::Back(Step::One),
			PageControl::Current,
			PageControl::Forward(Step::One),
			PageControl::Forward(Step::Two),
			PageControl::Forward(Step::Three),
			PageControl::RightEllipsis,
			PageControl::Last,
			PageControl::Next,
		];
		for control in all {
			assert_eq!(
				PageControl::from_test_id_suffix(&control.test_id_suffix()),
				Some(control)
			);
		}
		assert_eq!(PageControl::from_test_id_suffix("back-four-page-button"), None);
	}

	#[test]
	fn test_control_test_ids() {
		assert_eq!(
			PageControl::Forward(Step::One).test_id("testid"),
			"testid-forward-one-page-button"
		);
		assert_eq!(PageControl::LeftEllipsis.test_id("testid"), "testid-left-ellipses");
		assert_eq!(PageControl::RightEllipsis.test_id("testid"), "testid-right-ellipsis");
	}
}
