//! TSPLIB problem files.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use super::{split_header, EOF_MARKER};
use crate::cost::Point;
use crate::error::{Result, TspError};
use crate::tour::Tour;

/// Fraction of the unit square a loaded problem occupies; the rest is an
/// even border.
pub const DISPLAY_SCALE: f64 = 0.9;

const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";

/// Accepted `EDGE_WEIGHT_TYPE` values.
///
/// Only `EUC_2D` matches the annealer's cost exactly; the others are close
/// enough to serve as test inputs, though their published optima may differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeWeightType {
    Euc2d,
    Ceil2d,
    Geo,
    Att,
}

impl FromStr for EdgeWeightType {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "EUC_2D" => Ok(Self::Euc2d),
            "CEIL_2D" => Ok(Self::Ceil2d),
            "GEO" => Ok(Self::Geo),
            "ATT" => Ok(Self::Att),
            _ => Err(TspError::parse(format!("unsupported EDGE_WEIGHT_TYPE of {s}"))),
        }
    }
}

impl Display for EdgeWeightType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Euc2d => "EUC_2D",
            Self::Ceil2d => "CEIL_2D",
            Self::Geo => "GEO",
            Self::Att => "ATT",
        })
    }
}

/// A TSPLIB problem with raw (unnormalized) coordinates in id order.
#[derive(Debug, Clone, PartialEq)]
pub struct TsplibProblem {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub edge_weight_type: EdgeWeightType,
    /// Coordinates of city `k` at index `k - 1`.
    pub points: Vec<Point>,
}

impl TsplibProblem {
    /// Parses problem text.
    ///
    /// Requires a supported `EDGE_WEIGHT_TYPE` and finite coordinates for
    /// every id from 1 up to the largest id given.
    pub fn parse(text: &str) -> Result<Self> {
        let mut name = None;
        let mut comment = None;
        let mut edge_weight_type = None;
        let mut coords: BTreeMap<usize, Point> = BTreeMap::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.eq_ignore_ascii_case(NODE_COORD_SECTION) {
                continue;
            }
            if line.eq_ignore_ascii_case(EOF_MARKER) {
                break;
            }

            if let Some((id, point)) = parse_coord_line(line)? {
                coords.insert(id, point);
                continue;
            }

            if let Some((key, value)) = split_header(line) {
                match key.as_str() {
                    "NAME" => name = Some(value.to_string()),
                    "COMMENT" => comment = Some(value.to_string()),
                    "EDGE_WEIGHT_TYPE" => edge_weight_type = Some(value.parse()?),
                    _ => {}
                }
            }
        }

        let edge_weight_type =
            edge_weight_type.ok_or_else(|| TspError::parse("EDGE_WEIGHT_TYPE not specified"))?;

        // Keys are sorted and distinct, so ids cover 1..=len iff each key
        // equals its rank.
        let mut points = Vec::with_capacity(coords.len());
        for (expected, (id, point)) in (1..).zip(coords) {
            if id != expected {
                return Err(TspError::parse(format!(
                    "co-ordinates for city {expected} not specified"
                )));
            }
            points.push(point);
        }

        Ok(Self {
            name,
            comment,
            edge_weight_type,
            points,
        })
    }

    /// Reads and parses a problem file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Describes the current cities of `tour` as an `EUC_2D` problem.
    ///
    /// The y axis is flipped so that the file reads with y growing upward.
    pub fn from_tour(tour: &Tour) -> Self {
        Self {
            name: Some("experiment".to_string()),
            comment: Some("simulated annealing experiment".to_string()),
            edge_weight_type: EdgeWeightType::Euc2d,
            points: tour.cities().iter().map(|p| Point::new(p.x, 1.0 - p.y)).collect(),
        }
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Maps the coordinates into the unit square.
    ///
    /// The bounding box is scaled uniformly (aspect ratio kept) to
    /// [`DISPLAY_SCALE`] of the square, centred, and the y axis flipped.
    pub fn normalized_points(&self) -> Vec<Point> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let extent_x = max_x - min_x;
        let extent_y = max_y - min_y;
        let bound = extent_x.max(extent_y);
        let bound = if bound > 0.0 { bound } else { 1.0 };
        let bias_x = (bound - extent_x) / 2.0;
        let bias_y = (bound - extent_y) / 2.0;
        let border = (1.0 - DISPLAY_SCALE) / 2.0;

        self.points
            .iter()
            .map(|p| {
                let x = (p.x - min_x + bias_x) / bound * DISPLAY_SCALE + border;
                let y = (p.y - min_y + bias_y) / bound * DISPLAY_SCALE + border;
                Point::new(x, 1.0 - y)
            })
            .collect()
    }

    /// A tour over the normalized cities, in identity order.
    pub fn into_tour(self) -> Tour {
        Tour::with_cities(self.normalized_points())
    }
}

/// Recognizes `id x y`. Returns `None` for lines of any other shape.
fn parse_coord_line(line: &str) -> Result<Option<(usize, Point)>> {
    let mut tokens = line.split_whitespace();
    let (Some(id), Some(x), Some(y)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Ok(None);
    };
    let Ok(id) = id.parse::<usize>() else {
        return Ok(None);
    };
    if id == 0 {
        return Err(TspError::parse("city ids start at 1"));
    }
    let x: f64 = x
        .parse()
        .map_err(|e| TspError::parse(format!("bad x co-ordinate '{x}' for city {id}: {e}")))?;
    let y: f64 = y
        .parse()
        .map_err(|e| TspError::parse(format!("bad y co-ordinate '{y}' for city {id}: {e}")))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(TspError::parse(format!("co-ordinates for city {id} are not finite")));
    }
    Ok(Some((id, Point::new(x, y))))
}

/// Six decimals with trailing zeros (and a bare trailing point) removed.
fn format_coord(v: f64) -> String {
    let fixed = format!("{v:.6}");
    let trimmed = fixed.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

impl Display for TsplibProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "NAME : {name}")?;
        }
        writeln!(f, "TYPE: TSP")?;
        if let Some(comment) = &self.comment {
            writeln!(f, "COMMENT: {comment}")?;
        }
        writeln!(f, "DIMENSION : {}", self.points.len())?;
        writeln!(f, "EDGE_WEIGHT_TYPE: {}", self.edge_weight_type)?;
        writeln!(f, "{NODE_COORD_SECTION}")?;
        for (i, p) in self.points.iter().enumerate() {
            writeln!(f, "{} {} {}", i + 1, format_coord(p.x), format_coord(p.y))?;
        }
        writeln!(f, "{EOF_MARKER}")
    }
}
