/// Progress reported while a cleanup runs. `depth` is the nesting level used
/// for indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupEvent {
    Section { depth: usize, title: String },
    Removed { depth: usize, name: String },
}

impl CleanupEvent {
    pub fn depth(&self) -> usize {
        match self {
            Self::Section { depth, .. } | Self::Removed { depth, .. } => *depth,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    removed: Vec<String>,
}

impl CleanupSummary {
    /// Full paths of the removed keys, in removal order.
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    pub(crate) fn record(&mut self, paths: impl IntoIterator<Item = String>) {
        self.removed.extend(paths);
    }
}
