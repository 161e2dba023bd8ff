use crate::data::{Age, CareerAverage, CityRow, Error, Student};
use std::collections::{BTreeSet, HashMap};

pub(crate) fn students_by_city(students: &[Student], city: &str) -> Vec<Student> {
    students
        .iter()
        .filter(|s| s.city == city)
        .cloned()
        .collect()
}

pub(crate) fn students_by_country(students: &[Student], country: &str) -> Vec<Student> {
    students
        .iter()
        .filter(|s| s.country == country)
        .cloned()
        .collect()
}

/// Inclusive age bounds. Built from raw user input with `AgeRange::parse`, so
/// that the menu can ask again when a bound isn't a number. Bounds are wider
/// than `Age`: a negative minimum just means "no lower bound".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AgeRange {
    pub min: i64,
    pub max: i64,
}

impl AgeRange {
    pub fn parse(min: &str, max: &str) -> Result<Self, Error> {
        let bound = |s: &str| {
            let s = s.trim();
            s.parse::<i64>().map_err(|_| Error::InvalidInput(s.to_owned()))
        };
        Ok(Self {
            min: bound(min)?,
            max: bound(max)?,
        })
    }

    pub fn contains(&self, age: Age) -> bool {
        (self.min..=self.max).contains(&i64::from(age))
    }
}

/// An inverted range (`min > max`) simply matches nobody.
pub(crate) fn students_by_age_range(students: &[Student], range: AgeRange) -> Vec<Student> {
    students
        .iter()
        .filter(|s| range.contains(s.age))
        .cloned()
        .collect()
}

/// Distinct cities, sorted so reports are stable from one run to the next.
pub(crate) fn all_cities(students: &[Student]) -> Vec<CityRow> {
    students
        .iter()
        .map(|s| s.city.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|city| CityRow { city: city.to_owned() })
        .collect()
}

/// One row per career, in the order careers first show up in the dataset.
pub(crate) fn average_age_by_career(students: &[Student]) -> Vec<CareerAverage> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, u64, u64)> = Vec::new();
    for s in students {
        let i = *index.entry(s.career.as_str()).or_insert_with(|| {
            groups.push((s.career.as_str(), 0, 0));
            groups.len() - 1
        });
        let (_, total, count) = &mut groups[i];
        *total += u64::from(s.age);
        *count += 1;
    }
    groups
        .into_iter()
        .map(|(career, total, count)| CareerAverage {
            career: career.to_owned(),
            average_age: total as f64 / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        all_cities, average_age_by_career, students_by_age_range, students_by_city,
        students_by_country, AgeRange,
    };
    use crate::data::{CareerAverage, CityRow, Error, Student};

    fn student(name: &str, city: &str, country: &str, career: &str, age: u32) -> Student {
        Student {
            name: name.into(),
            city: city.into(),
            country: country.into(),
            career: career.into(),
            age,
        }
    }

    fn dataset() -> Vec<Student> {
        vec![
            student("Ana", "Lima", "Peru", "CS", 22),
            student("Bo", "Lima", "Peru", "Math", 30),
            student("Carla", "Bogota", "Colombia", "CS", 27),
            student("Diego", "Quito", "Ecuador", "Medicine", 19),
            student("Elena", "Cusco", "Peru", "Math", 36),
            student("Fabian", "Bogota", "Colombia", "Law", 25),
        ]
    }

    #[test]
    fn test_by_city() {
        let data = dataset();
        for city in ["Lima", "Bogota", "Quito", "Cusco"] {
            let found = students_by_city(&data, city);
            let expected: Vec<Student> =
                data.iter().filter(|s| s.city == city).cloned().collect();
            assert_eq!(found, expected);
            assert_eq!(students_by_city(&data, city), found);
        }
        assert!(students_by_city(&data, "Paris").is_empty());
        assert!(students_by_city(&data, "lima").is_empty());
    }

    #[test]
    fn test_by_country() {
        let data = dataset();
        let names: Vec<_> = students_by_country(&data, "Peru")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Ana", "Bo", "Elena"]);
        assert!(students_by_country(&data, "Chile").is_empty());
    }

    #[test]
    fn test_age_range_parse() {
        assert_eq!(
            AgeRange::parse(" 18 ", "25\n").unwrap(),
            AgeRange { min: 18, max: 25 }
        );
        assert!(matches!(
            AgeRange::parse("abc", "25"),
            Err(Error::InvalidInput(s)) if s == "abc"
        ));
        assert!(matches!(
            AgeRange::parse("18", ""),
            Err(Error::InvalidInput(s)) if s.is_empty()
        ));
    }

    #[test]
    fn test_by_age_range() {
        let data = dataset();
        let range = AgeRange { min: 22, max: 27 };
        let found = students_by_age_range(&data, range);
        assert!(found.iter().all(|s| (22..=27).contains(&s.age)));
        let names: Vec<_> = found.into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Ana", "Carla", "Fabian"]);
    }

    #[test]
    fn test_age_range_wide_bounds() {
        let data = dataset();
        let range = AgeRange::parse("-1", "30").unwrap();
        assert_eq!(range, AgeRange { min: -1, max: 30 });
        let expected: Vec<Student> = data.iter().filter(|s| s.age <= 30).cloned().collect();
        assert_eq!(students_by_age_range(&data, range), expected);

        let range = AgeRange::parse("0", "99999999999").unwrap();
        assert_eq!(students_by_age_range(&data, range), data);
        assert!(AgeRange::parse("1.5", "30").is_err());
    }

    #[test]
    fn test_by_age_range_inverted() {
        let data = dataset();
        assert!(students_by_age_range(&data, AgeRange { min: 30, max: 20 }).is_empty());
    }

    #[test]
    fn test_all_cities() {
        let data = dataset();
        assert_eq!(
            all_cities(&data),
            ["Bogota", "Cusco", "Lima", "Quito"].map(|city| CityRow { city: city.into() })
        );
        assert!(all_cities(&[]).is_empty());
    }

    #[test]
    fn test_average_age_by_career() {
        let data = dataset();
        let averages = average_age_by_career(&data);
        let careers: Vec<_> = averages.iter().map(|a| a.career.as_str()).collect();
        assert_eq!(careers, ["CS", "Math", "Medicine", "Law"]);
        for avg in &averages {
            let ages: Vec<f64> = data
                .iter()
                .filter(|s| s.career == avg.career)
                .map(|s| s.age as f64)
                .collect();
            let mean = ages.iter().sum::<f64>() / ages.len() as f64;
            assert!((avg.average_age - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn test_two_students_scenario() {
        let data = vec![
            student("Ana", "Lima", "Peru", "CS", 22),
            student("Bo", "Lima", "Peru", "Math", 30),
        ];
        assert_eq!(students_by_city(&data, "Lima"), data);
        assert_eq!(
            average_age_by_career(&data),
            [
                CareerAverage {
                    career: "CS".into(),
                    average_age: 22.0
                },
                CareerAverage {
                    career: "Math".into(),
                    average_age: 30.0
                },
            ]
        );
    }
}
