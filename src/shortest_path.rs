use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use tracing::debug;

use crate::network::{Distance, Station, WeightedGraph};

/// Shortest total distance from `start` to `end`, or `None` when `end` cannot
/// be reached. A query from a station to itself is always `Some(0)`, even for
/// a station the graph has never seen.
pub fn shortest_path(graph: &WeightedGraph, start: &Station, end: &Station) -> Option<Distance> {
    let mut search = SearchState::new(graph.station_count());
    search.update_distance(start, 0);

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((distance, station))) = frontier.pop() {
        if search.is_stale(station, distance) {
            continue;
        }

        if station == end {
            debug!(%start, %end, distance, settled = search.settled, "reached destination");
            return Some(distance);
        }
        search.settled += 1;

        for track in graph.tracks(station) {
            let candidate = distance.saturating_add(track.distance);
            if search.should_update_distance(&track.to, candidate) {
                search.update_distance(&track.to, candidate);
                frontier.push(Reverse((candidate, &track.to)));
            }
        }
    }

    debug!(%start, %end, settled = search.settled, "destination unreachable");
    None
}

/// Best-known distances for a single query. Absent stations are at infinity.
#[derive(Debug, Default)]
struct SearchState<'a> {
    distances: HashMap<&'a Station, Distance>,
    settled: usize,
}

impl<'a> SearchState<'a> {
    fn new(capacity: usize) -> Self {
        Self {
            distances: HashMap::with_capacity(capacity),
            settled: 0,
        }
    }

    fn update_distance(&mut self, station: &'a Station, distance: Distance) {
        self.distances.insert(station, distance);
    }

    fn should_update_distance(&self, station: &Station, candidate: Distance) -> bool {
        self.distances
            .get(station)
            .map(|&best| candidate < best)
            .unwrap_or(true)
    }

    fn is_stale(&self, station: &Station, distance: Distance) -> bool {
        self.distances
            .get(station)
            .map(|&best| distance > best)
            .unwrap_or(false)
    }
}
