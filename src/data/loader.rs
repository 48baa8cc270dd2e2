use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Pokedex, Record, Stat, NO_SECONDARY_TYPE};

/// Columns that must be present after header labels are trimmed.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Name", "Type 1", "Type 2", "Total", "HP", "Attack", "Defense", "SP. Atk.", "SP. Def",
    "Speed", "Image",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read header row: {0}")]
    Header(#[source] csv::Error),
    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
    #[error("data row {row}: {column} is not a finite number")]
    NonFinite { row: usize, column: &'static str },
    #[error("data row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the creature table from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<Pokedex, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dex = load_reader(file)?;
    log::info!("Loaded {} records from {}", dex.len(), path.display());
    Ok(dex)
}

/// Load the creature table from any CSV byte source.
///
/// Header labels are trimmed, so `" Name "` matches `Name`. Any row with an
/// empty `Type 2` gets [`NO_SECONDARY_TYPE`]. Extra columns are ignored.
pub fn load_reader<R: Read>(reader: R) -> Result<Pokedex, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut filled = 0usize;

    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.map_err(|source| LoadError::Row { row, source })?;
        let record = raw.into_record();
        if let Some(column) = non_finite_column(&record) {
            return Err(LoadError::NonFinite { row, column });
        }
        if !record.has_secondary_type() {
            filled += 1;
        }
        records.push(record);
    }

    log::debug!(
        "{filled} of {} records have no secondary type",
        records.len()
    );
    Ok(Pokedex::from_records(records))
}

/// First numeric column holding NaN or an infinity. csv accepts both as f64.
fn non_finite_column(record: &Record) -> Option<&'static str> {
    if !record.total.is_finite() {
        return Some("Total");
    }
    Stat::ALL
        .into_iter()
        .find(|&s| !record.stat(s).is_finite())
        .map(Stat::column)
}

// ---------------------------------------------------------------------------
// Row schema
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type 1")]
    primary_type: String,
    #[serde(rename = "Type 2")]
    secondary_type: Option<String>,
    #[serde(rename = "Total")]
    total: f64,
    #[serde(rename = "HP")]
    hp: f64,
    #[serde(rename = "Attack")]
    attack: f64,
    #[serde(rename = "Defense")]
    defense: f64,
    #[serde(rename = "SP. Atk.")]
    special_attack: f64,
    #[serde(rename = "SP. Def")]
    special_defense: f64,
    #[serde(rename = "Speed")]
    speed: f64,
    #[serde(rename = "Image")]
    image: String,
}

impl RawRecord {
    fn into_record(self) -> Record {
        let secondary_type = self
            .secondary_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| NO_SECONDARY_TYPE.to_string());

        Record {
            name: self.name,
            primary_type: self.primary_type,
            secondary_type,
            stats: [
                self.hp,
                self.attack,
                self.defense,
                self.special_attack,
                self.special_defense,
                self.speed,
            ],
            total: self.total,
            image: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "Name,Type 1,Type 2,Total,HP,Attack,Defense,SP. Atk.,SP. Def,Speed,Image";

    fn csv_of(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    #[test]
    fn loads_rows_in_source_order() {
        let text = csv_of(&[
            "Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,images/bulbasaur.png",
            "Charmander,Fire,,309,39,52,43,60,50,65,images/charmander.png",
            "Squirtle,Water,,314,44,48,65,50,64,43,images/squirtle.png",
        ]);
        let dex = load_reader(text.as_bytes()).unwrap();

        assert_eq!(dex.len(), 3);
        let names: Vec<&str> = dex.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bulbasaur", "Charmander", "Squirtle"]);

        let bulbasaur = dex.get(0).unwrap();
        assert_eq!(bulbasaur.secondary_type, "Poison");
        assert_eq!(bulbasaur.total, 318.0);
        assert_eq!(bulbasaur.stat(Stat::SpecialAttack), 65.0);
        assert_eq!(bulbasaur.image, "images/bulbasaur.png");
    }

    #[test]
    fn empty_secondary_type_becomes_sentinel() {
        let text = csv_of(&[
            "Charmander,Fire,,309,39,52,43,60,50,65,a.png",
            "Pidgey,Normal,  ,251,40,45,40,35,35,56,b.png",
            "Gastly,Ghost,Poison,310,30,35,30,100,35,80,c.png",
        ]);
        let dex = load_reader(text.as_bytes()).unwrap();

        assert!(dex.iter().all(|r| !r.secondary_type.is_empty()));
        assert_eq!(dex.get(0).unwrap().secondary_type, NO_SECONDARY_TYPE);
        assert_eq!(dex.get(1).unwrap().secondary_type, NO_SECONDARY_TYPE);
        assert_eq!(dex.get(2).unwrap().secondary_type, "Poison");
    }

    #[test]
    fn header_whitespace_is_stripped() {
        let text = " Name , Type 1,Type 2 ,Total,HP ,Attack,Defense,SP. Atk., SP. Def,Speed,Image \n\
                    Pikachu,Electric,,320,35,55,40,50,50,90,p.png\n";
        let dex = load_reader(text.as_bytes()).unwrap();
        assert_eq!(dex.get(0).unwrap().name, "Pikachu");
        assert_eq!(dex.get(0).unwrap().stat(Stat::Speed), 90.0);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = "#,Name,Type 1,Type 2,Total,HP,Attack,Defense,SP. Atk.,SP. Def,Speed,Generation,Image\n\
                    25,Pikachu,Electric,,320,35,55,40,50,50,90,1,p.png\n";
        let dex = load_reader(text.as_bytes()).unwrap();
        assert_eq!(dex.len(), 1);
        assert_eq!(dex.get(0).unwrap().total, 320.0);
    }

    #[test]
    fn missing_required_column_is_rejected() {
        let text = "Name,Type 1,Type 2,Total,HP,Attack,Defense,SP. Atk.,SP. Def,Image\n\
                    Pikachu,Electric,,320,35,55,40,50,50,p.png\n";
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Speed")));
    }

    #[test]
    fn malformed_number_reports_row() {
        let text = csv_of(&[
            "Pikachu,Electric,,320,35,55,40,50,50,90,p.png",
            "Raichu,Electric,,485,60,ninety,55,90,80,110,r.png",
        ]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Row { row: 1, .. }));
    }

    #[test]
    fn nan_stat_is_rejected() {
        let text = csv_of(&[
            "Pikachu,Electric,,320,35,55,40,50,50,90,p.png",
            "Glitch,Normal,,300,50,50,50,50,50,NaN,g.png",
        ]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::NonFinite {
                row: 1,
                column: "Speed"
            }
        ));
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        let dex = load_reader(csv_of(&[]).as_bytes()).unwrap();
        assert!(dex.is_empty());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            csv_of(&["Eevee,Normal,,325,55,55,50,45,65,55,e.png"])
        )
        .unwrap();

        let dex = load_file(file.path()).unwrap();
        assert_eq!(dex.len(), 1);
        assert_eq!(dex.get(0).unwrap().primary_type, "Normal");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("pokedex.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
