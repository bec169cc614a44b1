//! Single-choice control state kept in sync with an externally supplied label.
//!
//! A [`Selector`] holds the index of the chosen option. The index is set
//! directly by user interaction, or recomputed from the external label when
//! that label changes. The external label is compared by value only, so
//! re-supplying the same label (or an identical catalog) never moves the
//! selection.

use crate::catalog::{Catalog, Labeled};

pub type OnSelect<T> = Box<dyn FnMut(&T)>;

/// Row handed to the presentation layer when drawing a selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorEntry<'a> {
    pub index: usize,
    pub label: &'a str,
    pub selected: bool,
}

pub struct Selector<T> {
    options: Catalog<T>,
    selected: Option<usize>,
    external_label: Option<String>,
    on_select: Option<OnSelect<T>>,
}

impl<T: Labeled> Selector<T> {
    /// Start with `default_label` selected, or nothing if the catalog lacks it.
    pub fn new(options: Catalog<T>, default_label: &str) -> Self {
        let selected = options.find_index(default_label);
        if selected.is_none() {
            log::warn!("[selector] default {default_label:?} not in catalog; starting unselected");
        }
        Self {
            options,
            selected,
            external_label: None,
            on_select: None,
        }
    }

    pub fn with_on_select(mut self, on_select: impl FnMut(&T) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    #[inline]
    pub fn lookup(&self, label: &str) -> Option<usize> {
        self.options.find_index(label)
    }

    #[inline]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.options.get(i))
    }

    #[inline]
    pub fn options(&self) -> &Catalog<T> {
        &self.options
    }

    #[inline]
    pub fn external_label(&self) -> Option<&str> {
        self.external_label.as_deref()
    }

    /// Feed the current external label. Returns true when the selected index
    /// moved as a result.
    pub fn set_external_label(&mut self, label: Option<&str>) -> bool {
        let previous = self.external_label.take();
        let next = reconcile(previous.as_deref(), label, self.selected, &self.options);
        self.external_label = label.map(str::to_owned);
        if next == self.selected {
            return false;
        }
        log::debug!(
            "[selector] external label {:?} moved selection {:?} -> {:?}",
            label,
            self.selected,
            next
        );
        self.selected = next;
        true
    }

    /// Record a user pick and fire the callback once with the picked option.
    ///
    /// # Panics
    /// If `index` is outside the catalog. The control only ever offers
    /// indices it rendered.
    pub fn user_select(&mut self, index: usize) -> &T {
        self.selected = Some(index);
        let option = &self.options[index];
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(option);
        }
        option
    }

    pub fn entries(&self) -> impl Iterator<Item = SelectorEntry<'_>> + '_ {
        self.options
            .iter()
            .enumerate()
            .map(move |(index, option)| SelectorEntry {
                index,
                label: option.label(),
                selected: self.selected == Some(index),
            })
    }
}

/// Index a selector should hold after the external label goes from
/// `previous` to `current`.
///
/// An unchanged label keeps `held`. A changed label resolves through lookup;
/// a label missing from the catalog resolves to no selection.
pub fn reconcile<T: Labeled>(
    previous: Option<&str>,
    current: Option<&str>,
    held: Option<usize>,
    options: &Catalog<T>,
) -> Option<usize> {
    if previous == current {
        return held;
    }
    current.and_then(|label| options.find_index(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{WheelOption, DEFAULT_WHEELS};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn wheels() -> Catalog<WheelOption> {
        Catalog::new(vec![
            WheelOption::new("Straight", "Straight"),
            WheelOption::new("Left", "Left"),
            WheelOption::new("Right", "Right"),
        ])
        .unwrap()
    }

    #[test]
    fn starts_at_default_label() {
        let s = Selector::new(wheels(), DEFAULT_WHEELS);
        assert_eq!(s.selected_index(), Some(0));
        assert_eq!(s.selected().map(|w| w.variant.as_str()), Some("Straight"));
    }

    #[test]
    fn missing_default_renders_unselected() {
        let s = Selector::new(wheels(), "Sideways");
        assert_eq!(s.selected_index(), None);
        assert!(s.selected().is_none());
        assert!(s.entries().all(|e| !e.selected));
        assert_eq!(s.entries().count(), 3);
    }

    #[test]
    fn user_select_fires_callback_once_with_option() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut s = Selector::new(wheels(), DEFAULT_WHEELS)
            .with_on_select(move |w: &WheelOption| sink.borrow_mut().push(w.clone()));
        let picked = s.user_select(2).variant.clone();
        assert_eq!(picked, "Right");
        assert_eq!(s.selected_index(), Some(2));
        assert_eq!(*seen.borrow(), vec![WheelOption::new("Right", "Right")]);
    }

    #[test]
    fn user_select_without_callback_only_updates_index() {
        let mut s = Selector::new(wheels(), DEFAULT_WHEELS);
        s.user_select(1);
        assert_eq!(s.selected_index(), Some(1));
    }

    #[test]
    fn external_label_change_resolves_index() {
        let mut s = Selector::new(wheels(), DEFAULT_WHEELS);
        assert!(s.set_external_label(Some("Left")));
        assert_eq!(s.selected_index(), Some(1));
        assert_eq!(s.external_label(), Some("Left"));
    }

    #[test]
    fn repeated_external_label_is_idempotent() {
        let mut s = Selector::new(wheels(), DEFAULT_WHEELS);
        assert!(s.set_external_label(Some("Right")));
        // user moves away, then the same external label is re-supplied
        s.user_select(0);
        assert!(!s.set_external_label(Some("Right")));
        assert_eq!(s.selected_index(), Some(0));
    }

    #[test]
    fn external_label_matching_held_index_is_noop() {
        let mut s = Selector::new(wheels(), DEFAULT_WHEELS);
        assert!(!s.set_external_label(Some("Straight")));
        assert_eq!(s.selected_index(), Some(0));
    }

    #[test]
    fn unknown_external_label_clears_selection() {
        let mut s = Selector::new(wheels(), DEFAULT_WHEELS);
        assert!(s.set_external_label(Some("Sideways")));
        assert_eq!(s.selected_index(), None);
    }

    #[test]
    fn external_label_does_not_fire_callback() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut s = Selector::new(wheels(), DEFAULT_WHEELS)
            .with_on_select(move |_: &WheelOption| *counter.borrow_mut() += 1);
        s.set_external_label(Some("Left"));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn reconcile_is_keyed_on_label_value() {
        let options = wheels();
        assert_eq!(reconcile(Some("Left"), Some("Left"), Some(2), &options), Some(2));
        assert_eq!(reconcile(None, None, Some(0), &options), Some(0));
        assert_eq!(reconcile(None, Some("Right"), Some(0), &options), Some(2));
        assert_eq!(reconcile(Some("Right"), None, Some(2), &options), None);
    }

    #[test]
    fn entries_mark_selected_row() {
        let s = Selector::new(wheels(), "Left");
        let rows: Vec<_> = s.entries().collect();
        assert_eq!(
            rows[1],
            SelectorEntry {
                index: 1,
                label: "Left",
                selected: true
            }
        );
        assert_eq!(rows.iter().filter(|e| e.selected).count(), 1);
    }
}
