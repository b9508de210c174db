use cssscan::PropertyFilters;

/// Default cap on nodes visited by the "include children" view.
pub const DEFAULT_CHILD_LIMIT: usize = 200;

/// User-facing switches for an inspection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Properties left out of aggregated lists.
    pub filters: PropertyFilters,
    /// Also inspect the element's descendants.
    pub include_children: bool,
    /// Maximum number of descendants inspected when `include_children` is set.
    pub child_limit: usize,
    /// Show the optimized block instead of the aggregated longhands.
    pub optimize: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            filters: PropertyFilters::default(),
            include_children: false,
            child_limit: DEFAULT_CHILD_LIMIT,
            optimize: true,
        }
    }
}

impl Settings {
    pub fn with_children(mut self, limit: usize) -> Self {
        self.include_children = true;
        self.child_limit = limit;
        self
    }

    pub fn with_filters(mut self, filters: PropertyFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn unoptimized(mut self) -> Self {
        self.optimize = false;
        self
    }
}
