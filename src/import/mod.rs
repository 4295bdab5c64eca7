//! CSV import utilities.
//!
//! The directory's source data arrives as two hand-maintained CSV files: a
//! therapist roster and the national city table. This module converts both
//! into the JSON documents the server reads (`data.json` and the gazetteer
//! file). Conversion is an offline step run through the `import-data`
//! binary, never at serve time.

use crate::domain::{Coordinate, TherapistId};
use crate::error::ImportError;
use crate::models::{Therapist, TherapistDraft};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Number of preamble rows (title, notes, blank lines) before the roster's
/// actual records begin.
const ROSTER_PREAMBLE_ROWS: usize = 5;

/// The city table stores coordinates as decimal degrees scaled by 10^5.
const COORDINATE_SCALE: f64 = 1e-5;

/// Column index of the city name in the national city table.
const CITY_NAME_COLUMN: usize = 5;

/// Read the therapist roster CSV into records with sequential ids.
///
/// Roster columns, in order: region, name, city, profession, notes,
/// languages, phone, address, gender. Short rows are padded with empty
/// fields.
pub fn therapists_from_csv(path: &Path) -> Result<Vec<Therapist>, ImportError> {
    let file = std::fs::File::open(path)?;
    therapists_from_reader(file)
}

/// Reader-based variant of [`therapists_from_csv`].
pub fn therapists_from_reader<R: Read>(reader: R) -> Result<Vec<Therapist>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().skip(ROSTER_PREAMBLE_ROWS).enumerate() {
        let row = row?;
        let field = |i: usize| row.get(i).unwrap_or("").trim().to_string();

        let draft = TherapistDraft {
            region: field(0),
            name: field(1),
            city: field(2),
            profession: field(3),
            notes: field(4),
            languages: field(5),
            phone: field(6),
            address: field(7),
            gender: field(8),
        };

        // Ids start at 1; the preamble rows don't count.
        let id = TherapistId::new(index as u64 + 1).expect("sequential ids start at 1");
        records.push(Therapist::from_draft(id, draft));
    }
    Ok(records)
}

/// Read the national city table CSV into a gazetteer mapping.
///
/// The table carries one header row; each data row stores latitude and
/// longitude in columns 0 and 1 as degrees scaled by 10^5, and the city
/// name in column 5. A `BTreeMap` keeps the emitted JSON stably ordered.
pub fn gazetteer_from_csv(path: &Path) -> Result<BTreeMap<String, Coordinate>, ImportError> {
    let file = std::fs::File::open(path)?;
    gazetteer_from_reader(file)
}

/// Reader-based variant of [`gazetteer_from_csv`].
pub fn gazetteer_from_reader<R: Read>(
    reader: R,
) -> Result<BTreeMap<String, Coordinate>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut cities = BTreeMap::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let city = row.get(CITY_NAME_COLUMN).unwrap_or("").trim().to_string();
        if city.is_empty() {
            tracing::warn!(line, "city table row without a name, skipped");
            continue;
        }

        let parse = |i: usize| -> Result<f64, ImportError> {
            row.get(i)
                .unwrap_or("")
                .trim()
                .parse::<f64>()
                .map_err(|e| ImportError::BadCoordinate {
                    line,
                    reason: e.to_string(),
                })
        };

        let lat = parse(0)? * COORDINATE_SCALE;
        let lon = parse(1)? * COORDINATE_SCALE;

        let coordinate =
            Coordinate::new(lat, lon).map_err(|e| ImportError::BadCoordinate {
                line,
                reason: e.to_string(),
            })?;
        cities.insert(city, coordinate);
    }
    Ok(cities)
}
