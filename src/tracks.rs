use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use tracing::debug;

use crate::network::{Distance, Station};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrackRecord {
    pub from: Station,
    pub to: Station,
    pub distance: Distance,
}

impl TrackRecord {
    pub fn new(from: impl Into<Station>, to: impl Into<Station>, distance: Distance) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.from.name().trim().is_empty() || self.to.name().trim().is_empty() {
            bail!("empty station name: {:?} -> {:?}", self.from.name(), self.to.name());
        }
        Ok(())
    }
}

/// Reads a JSON array of records from `.json` files, `FROM,TO,DISTANCE` lines otherwise.
pub fn read_tracks<P: AsRef<Path>>(path: P) -> Result<Vec<TrackRecord>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records = if is_json {
        let records: Vec<TrackRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid track JSON in {}", path.display()))?;
        for (i, record) in records.iter().enumerate() {
            record.validate().with_context(|| {
                format!("invalid track {} in {}", i + 1, path.display())
            })?;
        }
        records
    } else {
        parse_tracks(file).with_context(|| format!("invalid track file {}", path.display()))?
    };

    debug!(path = %path.display(), tracks = records.len(), "loaded tracks");
    Ok(records)
}

pub fn parse_tracks<R: Read>(reader: R) -> Result<Vec<TrackRecord>> {
    let reader = BufReader::new(reader);
    let mut records = vec![];
    for (i, line) in reader.lines().enumerate() {
        let input = line?;
        let input = input.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        let record = parse_track_line(input).with_context(|| format!("line {}", i + 1))?;
        records.push(record);
    }

    Ok(records)
}

pub fn parse_track_line(input: &str) -> Result<TrackRecord> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    let [from, to, distance] = fields[..] else {
        bail!("expected FROM,TO,DISTANCE: {input}");
    };

    let distance: Distance = distance
        .parse()
        .with_context(|| format!("invalid distance: {distance}"))?;

    let record = TrackRecord::new(from, to, distance);
    record.validate().with_context(|| input.to_owned())?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{network::WeightedGraph, shortest_path::shortest_path};
    use std::io::Write;

    #[test]
    fn parses_line() {
        let record = parse_track_line("London , Reading, 58").unwrap();
        assert_eq!(record, TrackRecord::new("London", "Reading", 58));
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(parse_track_line("A,B").is_err());
        assert!(parse_track_line("A,B,5,6").is_err());
        assert!(parse_track_line(",B,5").is_err());
        assert!(parse_track_line("A,B,-5").is_err());
        assert!(parse_track_line("A,B,far").is_err());
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "# network\nA,B,5\n\nB,C,4\n";
        let records = parse_tracks(input.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![TrackRecord::new("A", "B", 5), TrackRecord::new("B", "C", 4)]
        );
    }

    #[test]
    fn error_names_the_line() {
        let err = parse_tracks("A,B,5\nA,B\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn reads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"from":"A","to":"B","distance":5}},{{"from":"B","to":"C","distance":4}}]"#
        )
        .unwrap();

        let records = read_tracks(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], TrackRecord::new("B", "C", 4));
    }

    #[test]
    fn json_with_empty_station_name_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"from":"A","to":"B","distance":5}},{{"from":"","to":"B","distance":5}}]"#
        )
        .unwrap();

        let err = read_tracks(file.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid track 2"));
        assert!(message.contains("empty station name"));
    }

    #[test]
    fn blank_station_name_is_rejected_in_both_formats() {
        assert!(TrackRecord::new(" ", "B", 5).validate().is_err());
        assert!(TrackRecord::new("A", "B", 5).validate().is_ok());
        assert!(parse_track_line(" ,B,5").is_err());
    }

    #[test]
    fn reads_line_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "A,B,5").unwrap();
        writeln!(file, "A,C,10").unwrap();

        let records = read_tracks(file.path()).unwrap();
        assert_eq!(records[1], TrackRecord::new("A", "C", 10));
    }

    #[test]
    fn sample_network_routes_via_didcot() {
        let records = read_tracks(concat!(env!("CARGO_MANIFEST_DIR"), "/data/network.csv")).unwrap();
        let graph = WeightedGraph::from_records(records);

        assert_eq!(graph.station_count(), 7);
        assert_eq!(
            shortest_path(
                &graph,
                &"London Paddington".into(),
                &"Bristol Temple Meads".into()
            ),
            Some(118)
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_tracks("/nonexistent/tracks.csv").is_err());
    }
}
