use crate::model::Record;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::RangeInclusive;

/// Floors that are counted; anything else is left out of the statistics.
pub const FLOOR_RANGE: RangeInclusive<u8> = 1..=5;

/// Parses a raw floor value and keeps it only if it lies in [`FLOOR_RANGE`].
///
/// Surrounding whitespace and a leading sign are accepted. Non-numeric
/// values yield `None`, exactly like out-of-range ones.
#[must_use]
pub fn qualifying_floor(raw: &str) -> Option<u8> {
    let floor: i64 = raw.trim().parse().ok()?;
    u8::try_from(floor).ok().filter(|f| FLOOR_RANGE.contains(f))
}

/// Building counts for one city, keyed by floor in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityFloors {
    pub city: String,
    pub floors: BTreeMap<u8, usize>,
}

/// Per-city floor counts, cities in the order they first qualified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorReport {
    pub cities: Vec<CityFloors>,
}

impl FloorReport {
    /// Count for one city and floor, zero if absent.
    #[must_use]
    pub fn count(&self, city: &str, floor: u8) -> usize {
        self.cities
            .iter()
            .find(|c| c.city == city)
            .and_then(|c| c.floors.get(&floor))
            .copied()
            .unwrap_or(0)
    }
}

/// Counts records per city and floor, skipping floors that do not qualify.
///
/// A city only appears once one of its records has a qualifying floor.
#[must_use]
pub fn floor_statistics(records: &[Record]) -> FloorReport {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut cities: Vec<CityFloors> = Vec::new();

    for (record, floor) in records
        .iter()
        .filter_map(|r| qualifying_floor(&r.floor).map(|floor| (r, floor)))
    {
        let i = *index.entry(record.city.as_str()).or_insert_with(|| {
            cities.push(CityFloors {
                city: record.city.clone(),
                floors: BTreeMap::new(),
            });
            cities.len() - 1
        });
        *cities[i].floors.entry(floor).or_insert(0) += 1;
    }

    FloorReport { cities }
}

impl fmt::Display for FloorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nСтатистика по этажам для каждого города:")?;
        for city in &self.cities {
            writeln!(f, "\nГород: {}", city.city)?;
            for (floor, count) in &city.floors {
                writeln!(f, "  {floor}-этажных зданий: {count}")?;
            }
        }
        Ok(())
    }
}
