//! Dated records and the corpus they form.
//!
//! Input is one record per line, `A-B-C: name1, name2, ...`. Blank lines are
//! skipped; the first malformed line aborts the whole parse.

mod entity;
mod parse;

use std::collections::HashSet;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::notation::DateNotation;

pub use entity::EntityId;
pub use parse::{ParseError, ParseErrorKind};

/// Entity names of one record, in insertion order.
pub type EntityList = SmallVec<[EntityId; 4]>;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: DateNotation,
    pub entities: EntityList,
}

impl Record {
    /// Creates a record, dropping repeated names while keeping first-seen order.
    pub fn new(date: DateNotation, entities: impl IntoIterator<Item = EntityId>) -> Self {
        let mut list = EntityList::new();
        for entity in entities {
            if !list.contains(&entity) {
                list.push(entity);
            }
        }
        Self {
            date,
            entities: list,
        }
    }

    /// Returns true if `name` is mentioned by this record.
    pub fn mentions(&self, name: &str) -> bool {
        self.entities.iter().any(|entity| entity.as_str() == name)
    }
}

impl FromStr for Record {
    type Err = ParseErrorKind;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (date, names) = parse::split_line(line)?;
        Ok(Record::new(date, names.into_iter().map(EntityId::from)))
    }
}

/// All records of one input, in input order.
///
/// # Examples
///
/// ```
/// use datemark_core::Corpus;
///
/// let corpus = Corpus::parse("16-05-18: Margot, Frank\n\n02-17-04: Peter\n").unwrap();
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.entity_count(), 3);
///
/// let err = Corpus::parse("16-05-18 Margot").unwrap_err();
/// assert_eq!(err.line, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parses raw text into a corpus.
    ///
    /// Equal names on different lines share one allocation.
    ///
    /// # Errors
    ///
    /// Returns the 1-based line number and cause of the first malformed line.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut interned: HashSet<EntityId> = HashSet::new();
        let mut records = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (date, names) =
                parse::split_line(line).map_err(|kind| ParseError::new(index + 1, kind))?;
            let entities = names.into_iter().map(|name| {
                if let Some(existing) = interned.get(name) {
                    return existing.clone();
                }
                let entity = EntityId::from(name);
                interned.insert(entity.clone());
                entity
            });
            records.push(Record::new(date, entities));
        }

        Ok(Self { records })
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct entity names across all records.
    pub fn entity_count(&self) -> usize {
        self.records
            .iter()
            .flat_map(|record| record.entities.iter())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl FromStr for Corpus {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Corpus::parse(text)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests;
