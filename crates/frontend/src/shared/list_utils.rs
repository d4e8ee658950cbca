/// Sorting helpers for admin tables
use std::cmp::Ordering;

/// Row types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Column and direction a table is currently sorted by
#[derive(Clone, Debug, PartialEq)]
pub struct SortState {
    pub field: &'static str,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    /// Clicking the active column flips direction; another column sorts ascending
    pub fn toggle(&mut self, field: &'static str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

pub fn sort_list<T: Sortable>(items: &mut [T], state: &SortState) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, state.field);
        if state.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Total order over floats for table columns; NaN sorts last
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i64, f64);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "id" => self.0.cmp(&other.0),
                "price" => cmp_f64(self.1, other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_toggle_flips_then_resets() {
        let mut state = SortState::new("id");
        state.toggle("id");
        assert!(!state.ascending);
        state.toggle("price");
        assert_eq!(state, SortState::new("price"));
        assert_eq!(state.indicator("price"), " ▲");
        assert_eq!(state.indicator("id"), " ⇅");
    }

    #[test]
    fn test_sort_descending_by_price() {
        let mut rows = vec![Row(1, 5.0), Row(2, 20.0), Row(3, 10.0)];
        let mut state = SortState::new("price");
        state.toggle("price");
        sort_list(&mut rows, &state);
        let ids: Vec<i64> = rows.iter().map(|r| r.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
