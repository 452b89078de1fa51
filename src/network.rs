use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeSet, HashMap},
    fmt,
};

use crate::tracks::TrackRecord;

pub type Distance = u64;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub to: Station,
    pub distance: Distance,
}

/// Undirected railway network. Every track is stored once per endpoint.
#[derive(Debug, Default)]
pub struct WeightedGraph {
    adjacency: HashMap<Station, Vec<Track>>,
    stations: BTreeSet<Station>,
    track_count: usize,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_records<I: IntoIterator<Item = TrackRecord>>(records: I) -> Self {
        records.into_iter().collect()
    }

    /// Self-loops and parallel tracks are kept as given.
    pub fn add_track(&mut self, a: impl Into<Station>, b: impl Into<Station>, distance: Distance) {
        let (a, b) = (a.into(), b.into());

        self.adjacency.entry(a.clone()).or_default().push(Track {
            to: b.clone(),
            distance,
        });
        self.adjacency.entry(b.clone()).or_default().push(Track {
            to: a.clone(),
            distance,
        });

        self.stations.insert(a);
        self.stations.insert(b);
        self.track_count += 1;
    }

    pub fn tracks(&self, station: &Station) -> impl Iterator<Item = &Track> {
        match self.adjacency.get(station) {
            Some(tracks) => tracks.iter(),
            None => [].iter(),
        }
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.stations.contains(station)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn track_count(&self) -> usize {
        self.track_count
    }
}

impl FromIterator<TrackRecord> for WeightedGraph {
    fn from_iter<I: IntoIterator<Item = TrackRecord>>(iter: I) -> Self {
        let mut graph = Self::new();
        for record in iter {
            graph.add_track(record.from, record.to, record.distance);
        }
        graph
    }
}
