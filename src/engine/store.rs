use serde::Deserialize;
use thiserror::Error;

use crate::engine::range::LevelRange;

pub type EntryId = usize;

/// One row of a word list as it appears on disk: hanzi as a single string,
/// pinyin space-separated with one syllable per character, meanings as a list
/// of translations.
#[derive(Clone, Debug, Deserialize)]
pub struct RawEntry {
    pub hanzi: String,
    pub level: u8,
    pub pinyin: String,
    pub meanings: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("word list contains no entries")]
    Empty,
    #[error("row {0}: level {1} is outside 1..=6")]
    LevelOutOfBounds(usize, u8),
    #[error("row {0}: no characters")]
    NoCharacters(usize),
    #[error("row {0}: {1} characters but {2} pinyin syllables")]
    PinyinMismatch(usize, usize, usize),
    #[error("row {0}: no meanings")]
    NoMeanings(usize),
}

/// One vocabulary item. `id` is the entry's position in the store and stays
/// stable for the store's lifetime; it keys the weight table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub level: u8,
    pub characters: Vec<char>,
    pub pinyin: Vec<String>,
    pub meanings: Vec<String>,
}

/// Immutable word list sorted by ascending level (ties keep ingestion order),
/// with per-level boundaries precomputed at load.
#[derive(Clone, Debug)]
pub struct EntryStore {
    entries: Vec<Entry>,
    /// level_ends[l - 1] = number of entries with level <= l.
    /// Non-decreasing; level_ends[5] == entries.len().
    level_ends: [usize; 6],
}

impl EntryStore {
    /// Validate and index raw rows. Row indices in errors refer to the input
    /// order, before sorting.
    pub fn from_rows(mut rows: Vec<RawEntry>) -> Result<Self, DatasetError> {
        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (i, row) in rows.iter().enumerate() {
            if !(1..=6).contains(&row.level) {
                return Err(DatasetError::LevelOutOfBounds(i, row.level));
            }
            let characters = row.hanzi.chars().count();
            if characters == 0 {
                return Err(DatasetError::NoCharacters(i));
            }
            let syllables = row.pinyin.split_whitespace().count();
            if syllables != characters {
                return Err(DatasetError::PinyinMismatch(i, characters, syllables));
            }
            if row.meanings.is_empty() {
                return Err(DatasetError::NoMeanings(i));
            }
        }

        rows.sort_by_key(|row| row.level);

        let entries: Vec<Entry> = rows
            .into_iter()
            .enumerate()
            .map(|(id, row)| Entry {
                id,
                level: row.level,
                characters: row.hanzi.chars().collect(),
                pinyin: row.pinyin.split_whitespace().map(str::to_string).collect(),
                meanings: row.meanings,
            })
            .collect();

        let mut level_ends = [0usize; 6];
        for level in 1..=6u8 {
            level_ends[level as usize - 1] = entries.partition_point(|e| e.level <= level);
        }

        Ok(Self { entries, level_ends })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> &Entry {
        &self.entries[id]
    }

    /// Number of entries with level <= `level`.
    pub fn level_end(&self, level: u8) -> usize {
        self.level_ends[level as usize - 1]
    }

    /// The id span eligible for sampling under `range`. May be empty when the
    /// word list has no entries at the covered levels.
    pub fn span_for(&self, range: LevelRange) -> std::ops::Range<usize> {
        let start = if range.min() == 1 {
            0
        } else {
            self.level_end(range.min() - 1)
        };
        start..self.level_end(range.max())
    }

    pub fn level_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        let mut prev = 0;
        for (i, &end) in self.level_ends.iter().enumerate() {
            counts[i] = end - prev;
            prev = end;
        }
        counts
    }
}
