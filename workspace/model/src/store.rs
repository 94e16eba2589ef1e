use crate::sales_record::SalesRecord;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// CSV header row, in the column order the dataset file uses.
const HEADERS: [&str; 5] = ["Year", "Month", "Product", "Base Sales", "Volume"];

/// Error types for dataset store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error from filesystem operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV parsing or writing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Type alias for Result with StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Owner of the sales table and its backing CSV file.
///
/// The table lives in memory; every append rewrites the full file
/// synchronously, so the file always reflects the in-memory state.
#[derive(Debug, Clone)]
pub struct SalesStore {
    path: PathBuf,
    records: Vec<SalesRecord>,
}

impl SalesStore {
    /// Load the dataset from `path`, creating an empty headers-only file
    /// when none exists yet.
    pub fn load_or_init(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            let records = Self::read_file(&path)?;
            info!(count = records.len(), path = %path.display(), "Loaded sales dataset");
            Ok(Self { path, records })
        } else {
            let store = Self {
                path,
                records: Vec::new(),
            };
            store.persist()?;
            info!(path = %store.path.display(), "Initialized empty sales dataset");
            Ok(store)
        }
    }

    fn read_file(path: &Path) -> Result<Vec<SalesRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    /// Rewrite the full dataset to the backing file.
    ///
    /// The header row is written explicitly so an empty dataset still
    /// produces a valid headers-only file.
    pub fn persist(&self) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADERS)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Append one record and persist the dataset immediately.
    ///
    /// On a failed rewrite the record is rolled back, keeping the in-memory
    /// table consistent with the file.
    pub fn append(&mut self, record: SalesRecord) -> Result<()> {
        debug!(?record, "Appending sales record");
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// The whole table, in insertion order.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct product labels, for form population.
    pub fn products(&self) -> Vec<String> {
        self.distinct(|record| &record.product)
    }

    /// Sorted distinct volume labels, for form population.
    pub fn volumes(&self) -> Vec<String> {
        self.distinct(|record| &record.volume)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&SalesRecord) -> &String,
    {
        self.records
            .iter()
            .map(field)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
