#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Elements a leaf holds before it splits, unless it sits at `max_depth`.
    pub max_elements: usize,
    pub max_depth: u32,
    /// Element records reserved up front.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_elements: 8,
            max_depth: 8,
            pool_size: 0,
        }
    }
}
