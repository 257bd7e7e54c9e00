//! Interactive state owned by a table between builds.

use super::selection::Selection;
use crate::widgets::action_menu::ActionMenu;
use crate::widgets::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active sort key and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

/// Everything a table remembers between builds.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// 1-based. May exceed the page count; views clamp it.
    pub current_page: usize,
    pub page_size: usize,
    pub search: String,
    pub sort: Option<SortState>,
    pub selection: Selection,
    pub menu: ActionMenu,
    pub search_input: InputState,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            ..Default::default()
        }
    }

    /// Header click: the active ascending key flips to descending, anything
    /// else sorts ascending by `key`.
    pub fn sort_by(&mut self, key: &str) -> &SortState {
        let direction = match &self.sort {
            Some(sort) if sort.key == key && sort.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort.insert(SortState {
            key: key.to_string(),
            direction,
        })
    }

    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|sort| sort.key == key)
            .map(|sort| sort.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_cycle() {
        let mut state = TableState::new(10);
        assert_eq!(state.sort_by("salary").direction, SortDirection::Ascending);
        assert_eq!(state.sort_by("salary").direction, SortDirection::Descending);
        // No un-sort: a third click starts over ascending.
        assert_eq!(state.sort_by("salary").direction, SortDirection::Ascending);
        state.sort_by("salary");
        let sort = state.sort_by("name");
        assert_eq!((sort.key.as_str(), sort.direction), ("name", SortDirection::Ascending));
    }
}
