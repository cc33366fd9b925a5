use std::{fs::File, io::Read, path::Path};

use csv::StringRecord;
use stock_list::{
    error::ParseRecordError,
    model::record::{parse_date, InventoryRecord},
};

use crate::error::AppError;

const NAME: &str = "name";
const CATEGORY: &str = "category";
const STATUS: &str = "status";
const EQUIPMENT: &str = "categoryP";
const UTILITY: &str = "utility";
const AMOUNT: &str = "amount";
const ENTRY_DATE: &str = "entryDate";

#[derive(Debug, Default)]
pub struct LoadedProducts {
    pub products: Vec<InventoryRecord>,
    pub skipped: usize,
}

#[tracing::instrument]
pub fn load_products_from_file(path: &Path) -> Result<LoadedProducts, AppError> {
    let file = File::open(path)?;

    tracing::trace!("product file opened for reading");

    let loaded = read_products(file)?;

    tracing::debug!(
        "product file read with {} products, {} rows skipped",
        loaded.products.len(),
        loaded.skipped
    );

    Ok(loaded)
}

pub fn read_products(reader: impl Read) -> Result<LoadedProducts, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?)?;

    let mut loaded = LoadedProducts::default();
    for result in csv_reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(error) => {
                tracing::warn!("skipping unreadable product row: {:?}", error);
                loaded.skipped += 1;
                continue;
            }
        };

        match columns.parse(&row) {
            Ok(product) => loaded.products.push(product),
            Err(error) => {
                tracing::warn!("skipping product row {:?}: {}", row.position(), error);
                loaded.skipped += 1;
            }
        }
    }

    Ok(loaded)
}

struct Columns {
    name: usize,
    category: usize,
    status: usize,
    equipment: usize,
    utility: usize,
    amount: usize,
    entry_date: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, AppError> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(AppError::MissingProductColumn(column))
        };

        Ok(Self {
            name: position(NAME)?,
            category: position(CATEGORY)?,
            status: position(STATUS)?,
            equipment: position(EQUIPMENT)?,
            utility: position(UTILITY)?,
            amount: position(AMOUNT)?,
            entry_date: position(ENTRY_DATE)?,
        })
    }

    fn parse(&self, row: &StringRecord) -> Result<InventoryRecord, ParseRecordError> {
        let field = |index: usize, column: &'static str| {
            row.get(index)
                .filter(|value| !value.is_empty())
                .ok_or(ParseRecordError::MissingField(column))
        };

        let amount = field(self.amount, AMOUNT)?;
        let entry_date = field(self.entry_date, ENTRY_DATE)?;

        Ok(InventoryRecord {
            name: field(self.name, NAME)?.to_string(),
            category: field(self.category, CATEGORY)?.parse()?,
            status: field(self.status, STATUS)?.parse()?,
            equipment: field(self.equipment, EQUIPMENT)?.parse()?,
            utility: field(self.utility, UTILITY)?.parse()?,
            amount: amount
                .parse()
                .map_err(|_| ParseRecordError::InvalidAmount(amount.to_string()))?,
            entry_date: parse_date(entry_date)
                .ok_or_else(|| ParseRecordError::InvalidEntryDate(entry_date.to_string()))?,
        })
    }
}
