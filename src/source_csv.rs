use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{OrganizeError, Result};
use crate::match_data::RawTable;
use crate::season::SeasonRow;

/// Read a headered match export into a raw table.
pub fn read_match_table(path: &Path) -> Result<RawTable> {
    let raw = read_text(path)?;
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(raw.as_bytes());
    let columns = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(RawTable { columns, rows })
}

/// Read a headerless penalty export as positional rows. Record widths vary
/// across vintages, so the reader is flexible.
pub fn read_penalty_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let raw = read_text(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(rows)
}

// The penalty exports predate UTF-8; fall back to Latin-1 when strict UTF-8
// decoding fails.
fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(OrganizeError::MissingFile(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    })
}

/// Write a season dataset, header included, via a tmp-and-rename swap.
pub fn write_season_csv(path: &Path, rows: &[SeasonRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("csv.tmp");
    {
        let mut writer = WriterBuilder::new().from_path(&tmp)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::OUTPUT_COLUMNS;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pk_organizer_{name}_{}", std::process::id()))
    }

    #[test]
    fn missing_file_is_its_own_error() {
        let err = read_match_table(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, OrganizeError::MissingFile(_)));
    }

    #[test]
    fn latin1_bytes_decode_via_fallback() {
        let dir = scratch_path("latin1");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pens.csv");
        // "Atlético" in Latin-1; invalid as UTF-8.
        let mut bytes = b"a,b,c,d,Atl".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"tico,x vs y,f,Scored,g\n");
        fs::write(&path, bytes).unwrap();

        let rows = read_penalty_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][4], "Atl\u{e9}tico");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn writer_emits_fixed_header_order() {
        let dir = scratch_path("writer");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");
        let rows = vec![SeasonRow {
            season: "2012-13".to_string(),
            home_team: "Arsenal".to_string(),
            away_team: "Chelsea".to_string(),
            home_goals: "2".to_string(),
            away_goals: "1".to_string(),
            result: "H".to_string(),
            home_pk_scored: 1,
            home_pk_awarded: 1,
            away_pk_scored: 0,
            away_pk_awarded: 1,
        }];
        write_season_csv(&path, &rows).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next().unwrap(), OUTPUT_COLUMNS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            "2012-13,Arsenal,Chelsea,2,1,H,1,1,0,1"
        );
        fs::remove_dir_all(&dir).ok();
    }
}
