/// What a list position renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewType {
    /// The dataset has not been loaded yet.
    Loading,
    /// The dataset is loaded but has no items.
    Empty,
    Item,
}

/// Placeholder rows shown in place of an absent or empty dataset.
///
/// `None` means the dataset is still loading; `Some(&[])` means it loaded with no items. Each
/// placeholder occupies a single row when enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placeholders {
    pub loading: bool,
    pub empty: bool,
}

impl Placeholders {
    /// No placeholder rows: absent and empty datasets both render nothing.
    pub const NONE: Self = Self {
        loading: false,
        empty: false,
    };

    pub const fn new(loading: bool, empty: bool) -> Self {
        Self { loading, empty }
    }

    fn loading_rows(&self) -> usize {
        usize::from(self.loading)
    }

    fn empty_rows(&self) -> usize {
        usize::from(self.empty)
    }

    /// Row count the list should report for `dataset`.
    pub fn item_count<T>(&self, dataset: Option<&[T]>) -> usize {
        match dataset {
            None => self.loading_rows(),
            Some([]) => self.empty_rows(),
            Some(items) => items.len(),
        }
    }

    pub fn view_type<T>(&self, dataset: Option<&[T]>) -> ViewType {
        match dataset {
            None => ViewType::Loading,
            Some([]) => ViewType::Empty,
            Some(_) => ViewType::Item,
        }
    }

    /// List size to use when diffing `list` against another version of the dataset.
    ///
    /// An empty list still counts its placeholder row, so the placeholder is diffed out when the
    /// first items arrive.
    pub fn diff_list_size<T>(&self, list: Option<&[T]>) -> usize {
        match list {
            None => self.loading_rows(),
            Some(items) => items.len().max(self.empty_rows()),
        }
    }

    /// Whether `old[old_pos]` and `new[new_pos]` are the same item.
    ///
    /// Placeholder rows (an absent list, or a position past the end of a list) never match.
    pub fn items_same<T: PartialEq>(
        old: Option<&[T]>,
        new: Option<&[T]>,
        old_pos: usize,
        new_pos: usize,
    ) -> bool {
        match (old, new) {
            (Some(old), Some(new)) => match (old.get(old_pos), new.get(new_pos)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            _ => false,
        }
    }
}

impl Default for Placeholders {
    /// Both placeholder rows enabled.
    fn default() -> Self {
        Self {
            loading: true,
            empty: true,
        }
    }
}
