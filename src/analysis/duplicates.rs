use crate::model::Record;
use std::collections::HashMap;
use std::fmt;

/// A record value that occurs more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub record: Record,
    pub count: usize,
}

/// Duplicated records in the order each was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    pub duplicates: Vec<Duplicate>,
}

impl DuplicateReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Counts identical records (all four fields equal) in one pass and keeps
/// those seen more than once.
#[must_use]
pub fn find_duplicates(records: &[Record]) -> DuplicateReport {
    // Distinct records in first-seen order, with the index into `counts`.
    let mut index: HashMap<&Record, usize> = HashMap::new();
    let mut counts: Vec<(&Record, usize)> = Vec::new();

    for record in records {
        match index.get(record) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record, counts.len());
                counts.push((record, 1));
            }
        }
    }

    let duplicates = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(record, count)| Duplicate {
            record: record.clone(),
            count,
        })
        .collect();

    DuplicateReport { duplicates }
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Record {
            city,
            street,
            house,
            floor,
        } = &self.record;
        write!(
            f,
            "{city}, {street}, дом {house}, этаж {floor}: {} раз(а)",
            self.count
        )
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Дублирующиеся записи и их количество:")?;
        for duplicate in &self.duplicates {
            writeln!(f, "{duplicate}")?;
        }
        Ok(())
    }
}
