pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest page, limit or offset the store accepts (a signed 64-bit integer).
pub const MAX_PAGINATION_VALUE: u64 = i64::MAX as u64;

/// Pagination query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub limit: u64,
}

impl PaginationParams {
    /// Both values are clamped to `1..=MAX_PAGINATION_VALUE`.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.clamp(1, MAX_PAGINATION_VALUE),
            limit: limit.clamp(1, MAX_PAGINATION_VALUE),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(MAX_PAGINATION_VALUE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, params: PaginationParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            limit: params.limit,
            total_pages: total.div_ceil(params.limit),
        }
    }
}
