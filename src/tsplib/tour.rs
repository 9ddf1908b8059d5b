//! TSPLIB tour files.

use std::fmt::{Display, Formatter};
use std::path::Path;

use super::{split_header, EOF_MARKER};
use crate::error::{Result, TspError};
use crate::tour::Tour;

const TOUR_SECTION: &str = "TOUR_SECTION";
const TOUR_END_MARKER: &str = "-1";

/// A TSPLIB tour: 1-based city ids in visiting order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TsplibTour {
    pub name: Option<String>,
    pub dimension: Option<usize>,
    pub ids: Vec<usize>,
}

impl TsplibTour {
    /// Parses tour text.
    ///
    /// Ids are read after `TOUR_SECTION` until `-1` or `EOF`. Non-positive
    /// ids are skipped. The tour is not checked against any problem here;
    /// see [`validate_for`](Self::validate_for).
    pub fn parse(text: &str) -> Result<Self> {
        let mut tour = Self::default();
        let mut in_section = false;

        'lines: for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case(EOF_MARKER) {
                break;
            }

            if !in_section {
                if line.eq_ignore_ascii_case(TOUR_SECTION) {
                    in_section = true;
                } else if let Some((key, value)) = split_header(line) {
                    match key.as_str() {
                        "NAME" => tour.name = Some(value.to_string()),
                        "DIMENSION" => {
                            let parsed = value.parse::<usize>().map_err(|e| {
                                TspError::parse(format!("bad DIMENSION value '{value}': {e}"))
                            })?;
                            tour.dimension = Some(parsed);
                        }
                        _ => {}
                    }
                }
                continue;
            }

            for token in line.split_whitespace() {
                if token == TOUR_END_MARKER || token.eq_ignore_ascii_case(EOF_MARKER) {
                    break 'lines;
                }
                let id: i64 = token
                    .parse()
                    .map_err(|e| TspError::parse(format!("bad tour token '{token}': {e}")))?;
                if id >= 1 {
                    tour.ids.push(id as usize);
                }
            }
        }

        if !in_section {
            return Err(TspError::parse("TOUR_SECTION not specified"));
        }
        Ok(tour)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Snapshot of the current visiting order of `tour`.
    pub fn from_tour(tour: &Tour) -> Self {
        Self {
            name: Some("experiment.tour".to_string()),
            dimension: Some(tour.len()),
            ids: tour.order().to_vec(),
        }
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Checks that the tour visits each of `n` cities exactly once.
    pub fn validate_for(&self, n: usize) -> Result<()> {
        if self.ids.len() != n {
            return Err(TspError::invalid_tour(format!(
                "solution does not have the same number of cities ({}) as the map ({n})",
                self.ids.len()
            )));
        }
        let mut seen = vec![false; n + 1];
        for &id in &self.ids {
            if id <= n {
                seen[id] = true;
            }
        }
        if let Some(missing) = (1..=n).find(|&id| !seen[id]) {
            return Err(TspError::invalid_tour(format!(
                "solution does not contain city {missing}"
            )));
        }
        Ok(())
    }

    /// Installs this order on `tour` after validating it.
    pub fn apply_to(&self, tour: &mut Tour) -> Result<()> {
        self.validate_for(tour.len())?;
        tour.set_order(self.ids.clone())
    }
}

impl Display for TsplibTour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "NAME : {name}")?;
        }
        writeln!(f, "TYPE: TOUR")?;
        writeln!(f, "DIMENSION : {}", self.dimension.unwrap_or(self.ids.len()))?;
        writeln!(f, "{TOUR_SECTION}")?;
        for id in &self.ids {
            writeln!(f, "{id}")?;
        }
        writeln!(f, "{TOUR_END_MARKER}")?;
        writeln!(f, "{EOF_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("u-tsp-anneal-{name}-{nanos}"))
    }

    #[test]
    fn test_parse_tour() {
        let text = "NAME : sq.tour\nTYPE : TOUR\nDIMENSION : 4\nTOUR_SECTION\n1\n3\n2\n4\n-1\nEOF\n";
        let tour = TsplibTour::parse(text).unwrap();
        assert_eq!(tour.name.as_deref(), Some("sq.tour"));
        assert_eq!(tour.dimension, Some(4));
        assert_eq!(tour.ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_parse_tokens_on_one_line() {
        let tour = TsplibTour::parse("TOUR_SECTION\n4 2 0 3 1 -1\n").unwrap();
        assert_eq!(tour.ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_missing_section() {
        let err = TsplibTour::parse("NAME : x\n1\n2\n").unwrap_err();
        assert!(err.to_string().contains("TOUR_SECTION"));
    }

    #[test]
    fn test_validate_for() {
        let tour = TsplibTour::parse("TOUR_SECTION\n1\n3\n2\n").unwrap();
        assert!(tour.validate_for(3).is_ok());
        assert!(tour.validate_for(4).is_err());

        let dup = TsplibTour::parse("TOUR_SECTION\n1\n3\n3\n").unwrap();
        let err = dup.validate_for(3).unwrap_err();
        assert!(err.to_string().contains("city 2"));
    }

    #[test]
    fn test_apply_to_tour() {
        let mut tour = Tour::with_cities([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        TsplibTour::parse("TOUR_SECTION\n2\n4\n1\n3\n-1\n")
            .unwrap()
            .apply_to(&mut tour)
            .unwrap();
        assert_eq!(tour.order(), &[2, 4, 1, 3]);
    }

    #[test]
    fn test_write_tour() {
        let mut tour = Tour::new(3);
        tour.set_order(vec![3, 1, 2]).unwrap();
        let text = TsplibTour::from_tour(&tour).to_string();
        assert_eq!(
            text,
            "NAME : experiment.tour\nTYPE: TOUR\nDIMENSION : 3\nTOUR_SECTION\n3\n1\n2\n-1\nEOF\n"
        );
        assert_eq!(TsplibTour::parse(&text).unwrap().ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = unique_temp_dir("tour-round-trip");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("run.tour");

        let mut tour = Tour::new(5);
        tour.set_order(vec![4, 2, 5, 1, 3]).unwrap();
        let written = TsplibTour::from_tour(&tour);
        written.write_to_file(&path).unwrap();
        let read = TsplibTour::from_file(&path).unwrap();
        assert_eq!(read, written);

        std::fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(TsplibTour::from_file(&path), Err(TspError::Io(_))));
    }
}
