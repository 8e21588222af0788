use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Longest path, in cells, the search will follow. Unbounded when unset.
    #[builder(default)]
    pub max_length: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub(crate) fn allows(&self, length: usize) -> bool {
        self.max_length.map_or(true, |max| length <= max)
    }
}
