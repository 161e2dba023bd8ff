use crate::{
    compute::{
        all_cities, average_age_by_career, students_by_age_range, students_by_city,
        students_by_country, AgeRange,
    },
    config::AppConfig,
    data::{CareerAverage, CityRow, Error, Student},
    write::write_report,
};
use std::{
    fmt::Display,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

/// Questions that are on the menu but have no answer yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placeholder {
    AgeAgainstCareerAverage,
    AgeBrackets,
    MostDiverseCity,
}

/// Everything the menu can do. The position of an operation in
/// `AppConfig::menu` gives its number on screen; `identifier` names its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    StudentsByCity,
    StudentsByCountry,
    StudentsByAgeRange,
    AllCities,
    AverageAgeByCareer,
    Unsupported(Placeholder),
    Exit,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::StudentsByCity,
        Operation::StudentsByCountry,
        Operation::StudentsByAgeRange,
        Operation::AllCities,
        Operation::AverageAgeByCareer,
        Operation::Unsupported(Placeholder::AgeAgainstCareerAverage),
        Operation::Unsupported(Placeholder::AgeBrackets),
        Operation::Unsupported(Placeholder::MostDiverseCity),
        Operation::Exit,
    ];

    pub fn label(self) -> &'static str {
        use Placeholder::*;
        match self {
            Operation::StudentsByCity => "Get all students from a given city.",
            Operation::StudentsByCountry => "Get all students living in a given country.",
            Operation::StudentsByAgeRange => "Get all students within a given age range.",
            Operation::AllCities => "Get every city the students live in.",
            Operation::AverageAgeByCareer => "Get the average age per career.",
            Operation::Unsupported(AgeAgainstCareerAverage) => {
                "Tell, per career, whether each student is above or below the average age."
            }
            Operation::Unsupported(AgeBrackets) => {
                "Group students by age range (18-25, 26-35, over 35)."
            }
            Operation::Unsupported(MostDiverseCity) => {
                "Find the city with the widest variety of careers."
            }
            Operation::Exit => "Exit.",
        }
    }

    pub fn identifier(self) -> &'static str {
        use Placeholder::*;
        match self {
            Operation::StudentsByCity => "students_by_city",
            Operation::StudentsByCountry => "students_by_country",
            Operation::StudentsByAgeRange => "students_by_age_range",
            Operation::AllCities => "all_cities",
            Operation::AverageAgeByCareer => "average_age_by_career",
            Operation::Unsupported(AgeAgainstCareerAverage) => "age_against_career_average",
            Operation::Unsupported(AgeBrackets) => "age_brackets",
            Operation::Unsupported(MostDiverseCity) => "most_diverse_city",
            Operation::Exit => "exit",
        }
    }
}

/// What a query hands back. One variant per row type, so every row of a
/// result shares the same columns.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum QueryResult {
    Students(Vec<Student>),
    Cities(Vec<CityRow>),
    Averages(Vec<CareerAverage>),
}

impl QueryResult {
    fn print<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        fn lines<W: Write, T: Display>(output: &mut W, rows: &[T]) -> std::io::Result<()> {
            rows.iter().try_for_each(|row| writeln!(output, "{row}"))
        }
        match self {
            QueryResult::Students(rows) => lines(output, rows),
            QueryResult::Cities(rows) => lines(output, rows),
            QueryResult::Averages(rows) => lines(output, rows),
        }
    }

    fn write_report(&self, dir: &Path, identifier: &str) -> Result<Option<PathBuf>, Error> {
        match self {
            QueryResult::Students(rows) => write_report(dir, identifier, rows),
            QueryResult::Cities(rows) => write_report(dir, identifier, rows),
            QueryResult::Averages(rows) => write_report(dir, identifier, rows),
        }
    }
}

enum Outcome {
    Rows(QueryResult),
    Failed(Error),
    Quit,
}

/// Turns a line typed at the selection prompt into an index in a menu of
/// `count` entries.
fn parse_selection(line: &str, count: usize) -> Result<usize, Error> {
    let line = line.trim();
    match line.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(Error::InvalidInput(line.to_owned())),
    }
}

/// Shows `text` and reads one line. `None` means the input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    // Non-UTF-8 bytes decode to U+FFFD and fail whatever parse follows.
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_owned()))
}

/// The interactive loop: show the menu, read a choice, run it, print and
/// save the result, start over. Only the `Exit` entry, or running out of
/// input, ends it.
pub(crate) struct Menu<'a> {
    config: &'a AppConfig,
}

impl<'a> Menu<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        students: &[Student],
        mut input: R,
        mut output: W,
    ) -> Result<(), anyhow::Error> {
        loop {
            self.show(&mut output)?;
            let Some(operation) = self.select(&mut input, &mut output)? else {
                return Ok(());
            };
            log::debug!("Selected {}", operation.identifier());
            match self.execute(operation, students, &mut input, &mut output)? {
                Outcome::Quit => return Ok(()),
                Outcome::Failed(e) => {
                    log::warn!("{e}");
                    writeln!(output, "{e}")?;
                }
                Outcome::Rows(result) => {
                    result.print(&mut output)?;
                    match result.write_report(&self.config.reports_dir, operation.identifier()) {
                        Ok(Some(path)) => writeln!(output, "Report saved to {}", path.display())?,
                        Ok(None) => writeln!(output, "No results.")?,
                        Err(e) => {
                            log::warn!("{e}");
                            writeln!(output, "{e}")?;
                        }
                    }
                }
            }
        }
    }

    fn show<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        for (i, operation) in self.config.menu.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, operation.label())?;
        }
        Ok(())
    }

    fn select<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> std::io::Result<Option<Operation>> {
        loop {
            let Some(line) = prompt(input, output, "Select an option: ")? else {
                return Ok(None);
            };
            match parse_selection(&line, self.config.menu.len()) {
                Ok(i) => return Ok(Some(self.config.menu[i])),
                Err(e) => log::debug!("{e}"),
            }
        }
    }

    fn execute<R: BufRead, W: Write>(
        &self,
        operation: Operation,
        students: &[Student],
        input: &mut R,
        output: &mut W,
    ) -> std::io::Result<Outcome> {
        let result = match operation {
            Operation::StudentsByCity => {
                let Some(city) = prompt(input, output, "City: ")? else {
                    return Ok(Outcome::Quit);
                };
                QueryResult::Students(students_by_city(students, &city))
            }
            Operation::StudentsByCountry => {
                let Some(country) = prompt(input, output, "Country: ")? else {
                    return Ok(Outcome::Quit);
                };
                QueryResult::Students(students_by_country(students, &country))
            }
            Operation::StudentsByAgeRange => loop {
                let Some(min) = prompt(input, output, "Min age: ")? else {
                    return Ok(Outcome::Quit);
                };
                let Some(max) = prompt(input, output, "Max age: ")? else {
                    return Ok(Outcome::Quit);
                };
                match AgeRange::parse(&min, &max) {
                    Ok(range) => {
                        break QueryResult::Students(students_by_age_range(students, range));
                    }
                    Err(e) => writeln!(output, "{e}")?,
                }
            },
            Operation::AllCities => QueryResult::Cities(all_cities(students)),
            Operation::AverageAgeByCareer => {
                QueryResult::Averages(average_age_by_career(students))
            }
            Operation::Unsupported(_) => {
                return Ok(Outcome::Failed(Error::UnsupportedOperation(operation.label())));
            }
            Operation::Exit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Rows(result))
    }
}
