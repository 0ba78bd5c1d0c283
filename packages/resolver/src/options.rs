/// Configuration options for reference resolution
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Map `DateTime` to `Date`
    /// When false, date types fall back to `any` like any other unknown name
    pub map_date_time: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self { map_date_time: true }
    }
}

impl ResolverOptions {
    /// Primitive mapping without the date extension
    pub fn without_dates() -> Self {
        Self {
            map_date_time: false,
        }
    }
}
