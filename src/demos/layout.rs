#[derive(Debug, Default)]
pub struct TrackLayout {
    sections: Vec<String>,
}

impl TrackLayout {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
        }
    }

    /// Index of the first section of the given kind.
    pub fn search(&self, kind: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == kind)
    }
}
