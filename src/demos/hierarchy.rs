use std::fmt;

#[derive(Debug)]
pub struct TrackNode {
    segment: String,
    children: Vec<TrackNode>,
}

impl TrackNode {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            children: vec![],
        }
    }

    pub fn add_branch(&mut self, child: TrackNode) {
        self.children.push(child);
    }

    fn write_level(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        writeln!(f, "{:indent$}- {}", "", self.segment, indent = level * 2)?;
        for child in &self.children {
            child.write_level(f, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TrackNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_level(f, 0)
    }
}
