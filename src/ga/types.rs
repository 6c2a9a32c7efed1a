//! Core types: the [`Tour`] individual.

use crate::cities::CityTable;
use crate::error::{GaError, Result};

/// A candidate solution: a permutation of city indices plus its closed-loop
/// length.
///
/// The length is computed once, when the tour is evaluated, and kept
/// alongside the permutation. Lower is better.
///
/// With the `serde` feature, deserialization checks the cities form a
/// permutation of `0..len` and the length is finite and non-negative. The
/// table is not known at that point; call [`reevaluate`](Tour::reevaluate)
/// to check against it and recompute the length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TourRecord"))]
pub struct Tour {
    cities: Vec<usize>,
    length: f64,
}

/// Unchecked wire form of a [`Tour`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TourRecord {
    cities: Vec<usize>,
    length: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<TourRecord> for Tour {
    type Error = GaError;

    fn try_from(record: TourRecord) -> Result<Self> {
        check_permutation(&record.cities, record.cities.len())?;
        if !record.length.is_finite() || record.length < 0.0 {
            return Err(GaError::InvariantViolation(format!(
                "tour length must be finite and non-negative, got {}",
                record.length
            )));
        }
        Ok(Self {
            cities: record.cities,
            length: record.length,
        })
    }
}

impl Tour {
    /// Checks `cities` is a permutation of the table and evaluates it.
    pub fn evaluated(cities: Vec<usize>, table: &CityTable) -> Result<Self> {
        check_permutation(&cities, table.len())?;
        let length = table.tour_length(&cities)?;
        Ok(Self { cities, length })
    }

    /// Builds a tour from city labels.
    ///
    /// Fails with [`GaError::UnknownCity`] for a label missing from the
    /// table and [`GaError::InvariantViolation`] if the labels are not a
    /// permutation of the whole table.
    pub fn from_labels<S: AsRef<str>>(table: &CityTable, labels: &[S]) -> Result<Self> {
        let cities = labels
            .iter()
            .map(|label| table.index_of(label.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::evaluated(cities, table)
    }

    /// Re-checks the permutation against `table` and recomputes the length.
    pub fn reevaluate(self, table: &CityTable) -> Result<Self> {
        Self::evaluated(self.cities, table)
    }

    /// City indices in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Closed-loop length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// True if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City labels in visiting order.
    pub fn labels<'a>(&self, table: &'a CityTable) -> Result<Vec<&'a str>> {
        self.cities
            .iter()
            .map(|&i| table.city(i).map(|c| c.label.as_str()))
            .collect()
    }

    /// Consumes the tour, returning the permutation.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }
}

/// Verifies that `perm` holds each of `0..n` exactly once.
pub fn check_permutation(perm: &[usize], n: usize) -> Result<()> {
    if perm.len() != n {
        return Err(GaError::InvariantViolation(format!(
            "tour has {} cities, expected {n}",
            perm.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in perm {
        match seen.get_mut(city) {
            None => {
                return Err(GaError::InvariantViolation(format!(
                    "city index {city} out of range 0..{n}"
                )))
            }
            Some(true) => {
                return Err(GaError::InvariantViolation(format!(
                    "city index {city} appears more than once"
                )))
            }
            Some(flag) => *flag = true,
        }
    }
    Ok(())
}
