use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};
use thiserror::Error;

pub type Age = u32;

/// One line of the students file. The age column is labelled `edad` in the
/// files we get, and older exports also use Spanish names for the other
/// columns, so those are accepted as aliases when reading. Writing always uses
/// the canonical names so a report of students can be loaded back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Student {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "ciudad")]
    pub city: String,
    #[serde(alias = "pais")]
    pub country: String,
    #[serde(alias = "carrera")]
    pub career: String,
    #[serde(rename = "edad", alias = "age")]
    pub age: Age,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) - {}, {}",
            self.name, self.city, self.country, self.career, self.age
        )
    }
}

/// Row of the "all cities" query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CityRow {
    pub city: String,
}

impl fmt::Display for CityRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.city)
    }
}

/// Row of the "average age by career" query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CareerAverage {
    pub career: String,
    pub average_age: f64,
}

impl fmt::Display for CareerAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.career, self.average_age)
    }
}

/// Everything that can go wrong in a session. Only `DataAccess` is fatal; the
/// menu recovers from the others.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot load students from {}: {source}", path.display())]
    DataAccess {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Invalid input: {0:?}")]
    InvalidInput(String),
    #[error("Not implemented: {0}")]
    UnsupportedOperation(&'static str),
    #[error("Cannot write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
