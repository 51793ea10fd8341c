/// Product label rule: a display string matches when it starts with one of
/// the prefixes or equals one of the exact labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRule {
    prefixes: Vec<String>,
    exacts: Vec<String>,
}

impl LabelRule {
    pub fn new<P, E>(prefixes: P, exacts: E) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            exacts: exacts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn exacts(&self) -> &[String] {
        &self.exacts
    }

    pub fn matches(&self, text: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| text.starts_with(prefix.as_str()))
            || self.exacts.iter().any(|exact| text == exact)
    }
}
