use crate::data::{Error, Student};
use std::path::Path;

/// Simple CSV importer for `Student`s. Fields are trimmed so `a, b` style
/// files work; the first row that fails to deserialize (typically a
/// non-numeric age) aborts the whole load.
pub(crate) fn load_students<R: std::io::Read>(reader: R) -> Result<Vec<Student>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    rdr.deserialize().collect()
}

/// Loads the dataset from `path`. The file is closed before returning.
pub(crate) fn load(path: &Path) -> Result<Vec<Student>, Error> {
    let to_error = |source: csv::Error| Error::DataAccess {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(|e| to_error(e.into()))?;
    let students = load_students(file).map_err(to_error)?;
    log::info!("Loaded {} students from {}", students.len(), path.display());
    Ok(students)
}
