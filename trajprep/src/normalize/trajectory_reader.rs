use super::NormalizeError;
use crate::config::{BoundingBox, SourceFormat};
use csv::StringRecord;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrajectoryParseError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("expected {expected} header lines but the file ends after {found}")]
    TruncatedHeader { expected: usize, found: usize },
    #[error("point {point}: missing column {column}")]
    MissingColumn { point: u64, column: usize },
    #[error("point {point}: '{value}' is not a number")]
    InvalidNumber { point: u64, value: String },
    #[error("failure parsing record: {0}")]
    Csv(#[from] csv::Error),
}

impl TrajectoryParseError {
    /// io failures abort a run regardless of the malformed input policy
    pub fn is_fatal(&self) -> bool {
        match self {
            TrajectoryParseError::Io(_) => true,
            TrajectoryParseError::Csv(e) => e.is_io_error(),
            _ => false,
        }
    }
}

/// a parsed point. the source text of each coordinate is kept so that
/// output reproduces the original digits.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub latitude: f64,
    pub longitude: f64,
    latitude_text: String,
    longitude_text: String,
}

impl TrajectoryPoint {
    pub fn fields(&self) -> [&str; 2] {
        [&self.latitude_text, &self.longitude_text]
    }
}

/// result of scanning one raw trajectory file against the bounding box
#[derive(Clone, Debug, PartialEq)]
pub enum TrajectoryScan {
    /// every point lies within the bounding box
    Valid(Vec<TrajectoryPoint>),
    /// the first point outside the bounding box, numbered from 1 over the
    /// data records. lines after it are never read.
    OutOfBounds {
        point: u64,
        latitude: f64,
        longitude: f64,
    },
}

/// reads raw trajectory files of a single [`SourceFormat`], validating
/// each point against a [`BoundingBox`] as it is read.
#[derive(Clone, Debug)]
pub struct TrajectoryReader {
    header_lines: usize,
    delimiter: u8,
    latitude_column: usize,
    longitude_column: usize,
    bounding_box: BoundingBox,
}

impl TrajectoryReader {
    pub fn new(
        format: &SourceFormat,
        bounding_box: &BoundingBox,
    ) -> Result<TrajectoryReader, NormalizeError> {
        format.validate()?;
        bounding_box.validate()?;
        Ok(TrajectoryReader {
            header_lines: format.header_lines,
            delimiter: format.delimiter_byte()?,
            latitude_column: format.latitude_column,
            longitude_column: format.longitude_column,
            bounding_box: *bounding_box,
        })
    }

    pub fn read(&self, path: &Path) -> Result<TrajectoryScan, TrajectoryParseError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut line_buf = Vec::new();
        for found in 0..self.header_lines {
            line_buf.clear();
            if reader.read_until(b'\n', &mut line_buf)? == 0 {
                return Err(TrajectoryParseError::TruncatedHeader {
                    expected: self.header_lines,
                    found,
                });
            }
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut points = vec![];
        let mut point = 0;
        let mut record = StringRecord::new();
        while csv_reader.read_record(&mut record)? {
            // whitespace-only lines
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            point += 1;
            let (latitude, latitude_text) = parse_field(&record, self.latitude_column, point)?;
            let (longitude, longitude_text) = parse_field(&record, self.longitude_column, point)?;
            if !self.bounding_box.contains(latitude, longitude) {
                return Ok(TrajectoryScan::OutOfBounds {
                    point,
                    latitude,
                    longitude,
                });
            }
            points.push(TrajectoryPoint {
                latitude,
                longitude,
                latitude_text,
                longitude_text,
            });
        }
        Ok(TrajectoryScan::Valid(points))
    }
}

fn parse_field(
    record: &StringRecord,
    column: usize,
    point: u64,
) -> Result<(f64, String), TrajectoryParseError> {
    let text = record
        .get(column)
        .ok_or(TrajectoryParseError::MissingColumn { point, column })?;
    let value = text
        .parse::<f64>()
        .map_err(|_| TrajectoryParseError::InvalidNumber {
            point,
            value: text.to_string(),
        })?;
    Ok((value, text.to_string()))
}
