use std::path::Path;

use crate::error::Result;

/// (field key, display title) pair; keys address record fields, titles make
/// up the header line.
pub type Column = (&'static str, &'static str);
pub type Schema = &'static [Column];

pub const GAME_SUMMARY_SCHEMA: Schema = &[
    ("team1", "Team 1"),
    ("team2", "Team 2"),
    ("winner", "Winner"),
    ("margin", "VictoryMargin"),
    ("ground", "Ground"),
    ("matchDate", "Match Date"),
    ("scorecard", "id"),
];

pub const BATTING_SCHEMA: Schema = &[
    ("match", "Match"),
    ("teamInnings", "Team Innings"),
    ("battingPos", "Batting Position"),
    ("batsmanName", "Batsman Name"),
    ("dismissal", "Dismissal"),
    ("runs", "Runs"),
    ("balls", "Balls"),
    ("4s", "4s"),
    ("6s", "6s"),
    ("SR", "Strike Rate"),
];

/// Field lookup by schema key. Keys a record does not know serialize as
/// empty strings.
pub trait CsvRecord {
    fn field(&self, key: &str) -> Option<String>;
}

/// Writes one header line of display titles, then one line per record with
/// fields in schema order.
pub fn write_csv<R: CsvRecord>(records: &[R], schema: Schema, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(schema.iter().map(|(_, title)| *title))?;
    for record in records {
        let fields = schema
            .iter()
            .map(|(key, _)| record.field(key).unwrap_or_default());
        writer.write_record(fields)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Batter {
        name: String,
        runs: String,
    }

    impl CsvRecord for Batter {
        fn field(&self, key: &str) -> Option<String> {
            match key {
                "name" => Some(self.name.clone()),
                "runs" => Some(self.runs.clone()),
                _ => None,
            }
        }
    }

    const SCHEMA: Schema = &[("name", "Batsman Name"), ("runs", "Runs"), ("SR", "Strike Rate")];

    #[test]
    fn round_trips_fields_through_the_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batting.csv");
        let records = vec![
            Batter {
                name: "Tendulkar, S".to_string(),
                runs: "98".to_string(),
            },
            Batter {
                name: "Dravid".to_string(),
                runs: "47".to_string(),
            },
        ];

        write_csv(&records, SCHEMA, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["Batsman Name", "Runs", "Strike Rate"])
        );
        let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        // Byte-for-byte, embedded comma included.
        assert_eq!(&rows[0], &csv::StringRecord::from(vec!["Tendulkar, S", "98", ""]));
        assert_eq!(&rows[1], &csv::StringRecord::from(vec!["Dravid", "47", ""]));
    }

    #[test]
    fn unknown_keys_become_empty_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.csv");
        let records = vec![Batter {
            name: "Otieno".to_string(),
            runs: "30".to_string(),
        }];

        write_csv(&records, SCHEMA, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(row.get(2), Some(""));
    }

    #[test]
    fn unwritable_path_surfaces_an_error() {
        let records = vec![Batter {
            name: "Otieno".to_string(),
            runs: "30".to_string(),
        }];

        let result = write_csv(&records, SCHEMA, Path::new("/no/such/dir/out.csv"));

        assert!(result.is_err());
    }
}
