//! Loads the embedded reference dataset into a [`BikeCatalog`].

use thiserror::Error;

use crate::domain::{BikeCatalog, BikeRecord};
use crate::util::assets;

const DATASET_ASSET: &str = "/assets/used_bikes.csv";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("embedded dataset {0} is missing from the binary")]
    MissingAsset(&'static str),
    #[error("failed to parse dataset: {0}")]
    Malformed(#[from] csv::Error),
}

/// Parses `assets/used_bikes.csv` once; the caller stores the catalog in
/// app state before any estimate can run.
pub fn load_embedded_catalog() -> Result<BikeCatalog, DatasetError> {
    let bytes =
        assets::embedded_bytes(DATASET_ASSET).ok_or(DatasetError::MissingAsset(DATASET_ASSET))?;

    let mut reader = csv::Reader::from_reader(bytes.as_ref());
    let mut records = Vec::new();
    for row in reader.deserialize::<BikeRecord>() {
        records.push(row?);
    }

    Ok(BikeCatalog::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HIGH_VALUE_CITIES;

    #[test]
    fn embedded_dataset_parses_and_is_non_empty() {
        let catalog = load_embedded_catalog().expect("bundled dataset must parse");
        assert!(!catalog.is_empty());
        assert!(!catalog.brands().is_empty());
        assert!(!catalog.owner_types().is_empty());
    }

    #[test]
    fn embedded_dataset_covers_high_value_cities() {
        let catalog = load_embedded_catalog().expect("bundled dataset must parse");
        let cities = catalog.cities();
        for city in HIGH_VALUE_CITIES {
            assert!(cities.iter().any(|c| c == city), "missing {city}");
        }
    }
}
