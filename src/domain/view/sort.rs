use crate::domain::view::value::SortDirection;

/// Column sort. `direction` is ignored while `key` is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(key: &str, direction: SortDirection) -> Self {
        Self {
            key: Some(key.to_string()),
            direction,
        }
    }

    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(key)).then_some(self.direction)
    }

    /// Header click: asc, then desc, then back to server order.
    pub fn cycle(&mut self, key: &str) {
        match self.direction_for(key) {
            None => *self = SortState::by(key, SortDirection::Asc),
            Some(SortDirection::Asc) => self.direction = self.direction.toggled(),
            Some(SortDirection::Desc) => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        *self = SortState::default();
    }
}
