use itertools::Itertools;
use std::fmt;

#[derive(Debug)]
struct TrackSegment {
    name: String,
    next: Option<Box<TrackSegment>>,
}

/// Singly linked list of segments, appended at the tail.
#[derive(Debug, Default)]
pub struct TrainRoute {
    head: Option<Box<TrackSegment>>,
}

impl TrainRoute {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_segment(&mut self, name: impl Into<String>) {
        let mut cursor = &mut self.head;
        while let Some(segment) = cursor {
            cursor = &mut segment.next;
        }
        *cursor = Some(Box::new(TrackSegment {
            name: name.into(),
            next: None,
        }));
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(self.head.as_deref(), |s| s.next.as_deref()).map(|s| s.name.as_str())
    }
}

impl fmt::Display for TrainRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let route = self.segments().chain(["END"]).join(" -> ");
        f.write_str(&route)
    }
}

// Iterative drop so long routes don't recurse through every Box.
impl Drop for TrainRoute {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut segment) = cursor {
            cursor = segment.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let mut route = TrainRoute::new();
        for name in ["Segment1", "Segment2", "Segment3"] {
            route.add_segment(name);
        }

        assert_eq!(
            route.segments().collect::<Vec<_>>(),
            vec!["Segment1", "Segment2", "Segment3"]
        );
        assert_eq!(route.to_string(), "Segment1 -> Segment2 -> Segment3 -> END");
    }

    #[test]
    fn empty_route() {
        let route = TrainRoute::new();
        assert_eq!(route.segments().count(), 0);
        assert_eq!(route.to_string(), "END");
    }

    #[test]
    fn long_route_drops_without_overflow() {
        let mut route = TrainRoute::new();
        for i in 0..200_000 {
            route.head = Some(Box::new(TrackSegment {
                name: i.to_string(),
                next: route.head.take(),
            }));
        }
        assert_eq!(route.segments().count(), 200_000);
        drop(route);
    }
}
