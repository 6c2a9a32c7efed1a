//! City table and distance evaluation.
//!
//! A [`CityTable`] is the read-only input to every engine operation. Cities
//! are addressed by label at the API boundary and by insertion index inside
//! the engine, so tours are plain `usize` permutations.

use crate::error::{GaError, Result};
use std::collections::HashMap;
use std::str::FromStr;

/// A labeled point in the plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Unique identifier within a table.
    pub label: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city.
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Parses `LABEL:X,Y`, e.g. `A:0,0` or `depot:1.5,-2`.
impl FromStr for City {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || GaError::InvalidConfig(format!("expected LABEL:X,Y, got {s:?}"));

        let (label, coords) = s.split_once(':').ok_or_else(malformed)?;
        let (x, y) = coords.split_once(',').ok_or_else(malformed)?;
        let label = label.trim();
        if label.is_empty() {
            return Err(malformed());
        }
        let x: f64 = x.trim().parse().map_err(|_| malformed())?;
        let y: f64 = y.trim().parse().map_err(|_| malformed())?;
        Ok(City::new(label, x, y))
    }
}

/// The fixed set of cities for one run.
///
/// Insertion order defines each city's index. The table is immutable once
/// built and is shared by reference across all evaluation calls.
///
/// # Examples
///
/// ```
/// use tsp_ga::{City, CityTable};
///
/// let table = CityTable::new(vec![City::new("A", 0.0, 0.0), City::new("B", 3.0, 4.0)]).unwrap();
/// assert_eq!(table.distance("A", "B").unwrap(), 5.0);
/// assert_eq!(table.tour_length(&[0, 1]).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<City>", into = "Vec<City>"))]
pub struct CityTable {
    cities: Vec<City>,
    index: HashMap<String, usize>,
}

impl CityTable {
    /// Builds a table, rejecting an empty set, duplicate labels and
    /// non-finite coordinates.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(GaError::InvalidConfig("city table must not be empty".into()));
        }

        let mut index = HashMap::with_capacity(cities.len());
        for (i, city) in cities.iter().enumerate() {
            if !city.x.is_finite() || !city.y.is_finite() {
                return Err(GaError::InvalidConfig(format!(
                    "city {:?} has non-finite coordinates",
                    city.label
                )));
            }
            if index.insert(city.label.clone(), i).is_some() {
                return Err(GaError::InvalidConfig(format!(
                    "duplicate city label {:?}",
                    city.label
                )));
            }
        }

        Ok(Self { cities, index })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// True if the table holds no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// All cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The city at `index`.
    pub fn city(&self, index: usize) -> Result<&City> {
        self.cities
            .get(index)
            .ok_or_else(|| GaError::UnknownCity(format!("index {index}")))
    }

    /// Index of the city labeled `label`.
    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GaError::UnknownCity(label.to_string()))
    }

    /// Euclidean distance between two cities by label.
    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        self.distance_between(a, b)
    }

    /// Euclidean distance between two cities by index.
    pub fn distance_between(&self, a: usize, b: usize) -> Result<f64> {
        Ok(self.city(a)?.distance_to(self.city(b)?))
    }

    /// Length of the closed tour visiting `tour` in order and returning to
    /// the first city.
    ///
    /// The caller is responsible for `tour` being a permutation; only index
    /// bounds are checked here.
    pub fn tour_length(&self, tour: &[usize]) -> Result<f64> {
        let n = tour.len();
        let mut total = 0.0;
        for i in 0..n {
            total += self.distance_between(tour[i], tour[(i + 1) % n])?;
        }
        Ok(total)
    }
}

impl TryFrom<Vec<City>> for CityTable {
    type Error = GaError;

    fn try_from(cities: Vec<City>) -> Result<Self> {
        Self::new(cities)
    }
}

impl From<CityTable> for Vec<City> {
    fn from(table: CityTable) -> Self {
        table.cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CityTable {
        CityTable::new(vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 1.0, 5.0),
            City::new("C", 2.0, 3.0),
            City::new("D", 5.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_distance_pythagorean() {
        let table =
            CityTable::new(vec![City::new("A", 0.0, 0.0), City::new("B", 3.0, 4.0)]).unwrap();
        assert!((table.distance("A", "B").unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_symmetric() {
        let table = sample_table();
        for a in table.cities() {
            for b in table.cities() {
                let ab = table.distance(&a.label, &b.label).unwrap();
                let ba = table.distance(&b.label, &a.label).unwrap();
                assert_eq!(ab, ba);
            }
        }
    }

    #[test]
    fn test_distance_unknown_city() {
        let table = sample_table();
        assert_eq!(
            table.distance("A", "Z"),
            Err(GaError::UnknownCity("Z".into()))
        );
        assert!(matches!(
            table.distance("Q", "A"),
            Err(GaError::UnknownCity(_))
        ));
    }

    #[test]
    fn test_closed_loop_two_cities() {
        let table =
            CityTable::new(vec![City::new("A", 0.0, 0.0), City::new("B", 3.0, 4.0)]).unwrap();
        assert!((table.tour_length(&[0, 1]).unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_single_city_is_zero() {
        let table = CityTable::new(vec![City::new("A", 4.0, 2.0)]).unwrap();
        assert_eq!(table.tour_length(&[0]).unwrap(), 0.0);
    }

    #[test]
    fn test_tour_length_square() {
        let table = CityTable::new(vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 1.0, 0.0),
            City::new("c", 1.0, 1.0),
            City::new("d", 0.0, 1.0),
        ])
        .unwrap();
        assert!((table.tour_length(&[0, 1, 2, 3]).unwrap() - 4.0).abs() < 1e-12);
        // Crossing diagonals
        let crossed = table.tour_length(&[0, 2, 1, 3]).unwrap();
        assert!((crossed - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_out_of_range_index() {
        let table = sample_table();
        assert!(matches!(
            table.tour_length(&[0, 1, 9]),
            Err(GaError::UnknownCity(_))
        ));
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(matches!(
            CityTable::new(vec![]),
            Err(GaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        let result = CityTable::new(vec![City::new("A", 0.0, 0.0), City::new("A", 1.0, 1.0)]);
        assert!(matches!(result, Err(GaError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_finite() {
        let result = CityTable::new(vec![City::new("A", f64::NAN, 0.0)]);
        assert!(matches!(result, Err(GaError::InvalidConfig(_))));
    }

    #[test]
    fn test_index_of() {
        let table = sample_table();
        assert_eq!(table.index_of("C").unwrap(), 2);
        assert!(table.index_of("c").is_err());
    }

    #[test]
    fn test_parse_city() {
        let city: City = "depot: 1.5, -2".parse().unwrap();
        assert_eq!(city, City::new("depot", 1.5, -2.0));

        assert!("A0,0".parse::<City>().is_err());
        assert!("A:0".parse::<City>().is_err());
        assert!(":0,0".parse::<City>().is_err());
        assert!("A:x,0".parse::<City>().is_err());
    }
}
