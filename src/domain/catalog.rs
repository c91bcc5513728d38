//! Read-only view over the bundled bike dataset.
//!
//! Loaded once at startup and never mutated afterwards; its only job is
//! to feed the choice lists and the data preview page.

use super::entities::BikeRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BikeCatalog {
    records: Vec<BikeRecord>,
}

impl BikeCatalog {
    pub fn from_records(records: Vec<BikeRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct brands, sorted.
    pub fn brands(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.brand.clone()))
    }

    /// Distinct model names for one brand, sorted.
    pub fn models_for(&self, brand: &str) -> Vec<String> {
        distinct(
            self.records
                .iter()
                .filter(|r| r.brand == brand)
                .map(|r| r.bike_name.clone()),
        )
    }

    /// Distinct cities, sorted.
    pub fn cities(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.city.clone()))
    }

    /// Distinct owner labels, sorted.
    pub fn owner_types(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.owner.clone()))
    }

    /// First `n` rows, for the sample-data preview table.
    pub fn sample(&self, n: usize) -> &[BikeRecord] {
        &self.records[..self.records.len().min(n)]
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut values: Vec<String> = values.collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(brand: &str, name: &str, city: &str, owner: &str) -> BikeRecord {
        BikeRecord {
            bike_name: name.to_string(),
            price: 50_000.0,
            city: city.to_string(),
            kms_driven: 12_000.0,
            owner: owner.to_string(),
            age: 4,
            power: 150.0,
            brand: brand.to_string(),
        }
    }

    fn catalog() -> BikeCatalog {
        BikeCatalog::from_records(vec![
            record("Bajaj", "Pulsar 150", "Pune", "Second"),
            record("Royal Enfield", "Classic 350", "Mumbai", "First"),
            record("Bajaj", "Avenger 220", "Delhi", "First"),
            record("Bajaj", "Pulsar 150", "Mumbai", "Third"),
        ])
    }

    #[test]
    fn brands_are_sorted_and_distinct() {
        assert_eq!(catalog().brands(), vec!["Bajaj", "Royal Enfield"]);
    }

    #[test]
    fn models_filter_by_brand() {
        assert_eq!(
            catalog().models_for("Bajaj"),
            vec!["Avenger 220", "Pulsar 150"]
        );
        assert_eq!(catalog().models_for("Royal Enfield"), vec!["Classic 350"]);
        assert!(catalog().models_for("Honda").is_empty());
    }

    #[test]
    fn choice_lists_dedupe_repeated_values() {
        assert_eq!(catalog().cities(), vec!["Delhi", "Mumbai", "Pune"]);
        assert_eq!(catalog().owner_types(), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn sample_is_clamped_to_available_rows() {
        assert_eq!(catalog().sample(2).len(), 2);
        assert_eq!(catalog().sample(100).len(), 4);
        assert!(BikeCatalog::default().sample(5).is_empty());
    }
}
