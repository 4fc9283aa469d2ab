//! Page requests and paged results.

use sea_orm::{ConnectionTrait, PaginatorTrait, SelectorTrait};
use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::constants::MAX_PAGE_SIZE_LIMIT;
use crate::error::{StoreError, StoreResult};

/// A zero-based page number and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    pub fn first(size: u64) -> Self {
        Self::new(0, size)
    }

    /// Request for `page` with the size resolved through `config`: the
    /// default when `size` is `None`, otherwise clamped to `max_page_size`.
    pub fn clamped(page: u64, size: Option<u64>, config: &PaginationConfig) -> Self {
        Self::new(page, config.page_size(size))
    }

    pub fn next(&self) -> Self {
        Self::new(self.page.saturating_add(1), self.size)
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    fn check(&self) -> StoreResult<()> {
        if self.size == 0 {
            return Err(StoreError::InvalidPage("page size must be at least 1".to_string()));
        }
        if self.size > MAX_PAGE_SIZE_LIMIT {
            return Err(StoreError::InvalidPage(format!(
                "page size {} exceeds the limit of {}",
                self.size, MAX_PAGE_SIZE_LIMIT
            )));
        }
        // SQLite OFFSET is a signed 64-bit integer
        match self.page.checked_mul(self.size) {
            Some(offset) if offset <= i64::MAX as u64 => Ok(()),
            _ => Err(StoreError::InvalidPage(format!(
                "page {} of size {} is out of range",
                self.page, self.size
            ))),
        }
    }
}

/// One page of an ordered result set plus the totals of the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_items.div_ceil(request.size)
        };

        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Run `select` as a paged query. The caller is responsible for giving
/// `select` a total order.
pub async fn fetch_page<'db, C, S>(
    conn: &'db C,
    select: S,
    request: PageRequest,
) -> StoreResult<Page<<S::Selector as SelectorTrait>::Item>>
where
    C: ConnectionTrait,
    S: PaginatorTrait<'db, C>,
{
    request.check()?;

    let paginator = select.paginate(conn, request.size);
    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(request.page).await?;

    Ok(Page::new(items, request, totals.number_of_items))
}
