/// How a return treats a book whose copies are all on the shelf already.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnPolicy {
    /// Always put the copy back, even past the catalogued total.
    #[default]
    Lenient,
    /// Reject the return with [`LibraryError::OverReturn`](crate::LibraryError::OverReturn).
    Strict,
}

/// Settings for one run of the ledger.
#[derive(Debug, Clone, Default)]
pub struct LibraryConfig {
    pub return_policy: ReturnPolicy,
    /// Print every book's availability after the summary header.
    pub show_inventory: bool,
}

impl LibraryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_return_policy(mut self, policy: ReturnPolicy) -> Self {
        self.return_policy = policy;
        self
    }

    pub fn with_inventory(mut self, show: bool) -> Self {
        self.show_inventory = show;
        self
    }
}
