use crate::domain::view::value::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    Currency,
}

/// How a column can be narrowed from the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    None,
    Text,
    Category(&'static [&'static str]),
}

/// Typed column definition. The accessor replaces looking fields up by name.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub accessor: fn(&T) -> FieldValue,
    pub searchable: bool,
    pub sortable: bool,
    pub filter: FilterKind,
    pub format: CellFormat,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub fn new(key: &'static str, label: &'static str, accessor: fn(&T) -> FieldValue) -> Self {
        Self {
            key,
            label,
            accessor,
            searchable: false,
            sortable: true,
            filter: FilterKind::None,
            format: CellFormat::Plain,
        }
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn text_filter(mut self) -> Self {
        self.filter = FilterKind::Text;
        self
    }

    pub fn category_filter(mut self, options: &'static [&'static str]) -> Self {
        self.filter = FilterKind::Category(options);
        self
    }

    pub fn currency(mut self) -> Self {
        self.format = CellFormat::Currency;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn value(&self, record: &T) -> FieldValue {
        (self.accessor)(record)
    }
}

pub fn find_column<'a, T>(columns: &'a [Column<T>], key: &str) -> Option<&'a Column<T>> {
    columns.iter().find(|column| column.key == key)
}
