/// One page of records as delivered by a record source.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Builds a page and repairs metadata so that
    /// `1 <= current_page <= total_pages` and `items.len() <= page_size` hold.
    pub fn new(
        items: Vec<T>,
        total_items: u64,
        total_pages: u32,
        current_page: u32,
        page_size: u32,
    ) -> Self {
        let item_count = items.len() as u32;
        let page_size = page_size.max(item_count).max(1);
        let total_items = total_items.max(u64::from(item_count));
        let total_pages = if total_pages == 0 {
            pages_for(total_items, page_size)
        } else {
            total_pages
        };
        let current_page = current_page.clamp(1, total_pages);

        Self {
            items,
            total_items,
            total_pages,
            current_page,
            page_size,
        }
    }

    /// A full, unpaginated listing.
    pub fn unpaginated(items: Vec<T>) -> Self {
        let count = items.len();
        Self::new(items, count as u64, 1, 1, count as u32)
    }

    pub fn empty(page_size: u32) -> Self {
        Self::new(Vec::new(), 0, 1, 1, page_size)
    }
}

/// Number of pages needed for `total_items`; never less than one.
pub fn pages_for(total_items: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    total_items.div_ceil(page_size).clamp(1, u64::from(u32::MAX)) as u32
}
