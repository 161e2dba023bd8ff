use crate::data::Error;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Basic CSV exporter; the header comes from the field names of `T`.
pub(crate) fn write_rows<W: std::io::Write, T: Serialize>(
    writer: W,
    rows: &[T],
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `rows` to `<dir>/<identifier>.csv`, replacing any previous report of
/// the same name. Nothing at all happens for an empty result: no file and no
/// directory. Returns the path written, if any.
pub(crate) fn write_report<T: Serialize>(
    dir: &Path,
    identifier: &str,
    rows: &[T],
) -> Result<Option<PathBuf>, Error> {
    if rows.is_empty() {
        return Ok(None);
    }
    let path = dir.join(format!("{identifier}.csv"));
    let to_error = |source: std::io::Error| Error::ReportWrite {
        path: path.clone(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(to_error)?;
    let file = std::fs::File::create(&path).map_err(to_error)?;
    write_rows(file, rows).map_err(|e| to_error(e.into()))?;
    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(Some(path))
}
