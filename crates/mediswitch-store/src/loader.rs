//! CSV catalog ingestion.

use std::io::Read;
use std::path::Path;

use mediswitch_core::{Error, Result};
use tracing::{debug, info};

use crate::types::{CatalogRow, ItemRecord, REQUIRED_COLUMNS};

/// Read every item record from a catalog CSV file, in file order.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<ItemRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = read_records(file)?;
    info!("Loaded {} catalog rows from {}", records.len(), path.display());
    Ok(records)
}

/// Read item records from any CSV source.
///
/// Fails with [`Error::MalformedCatalog`] when a required column is absent
/// from the header. Blank cells in optional columns become `None`, blank
/// text cells become empty strings, and unparseable or non-finite review
/// percentages are treated as absent. A `Company` value takes precedence over
/// `Manufacturer` when a file carries both columns.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ItemRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::Catalog(format!("Failed to read header: {}", e)))?
        .clone();
    debug!("Catalog columns: {:?}", headers);

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(Error::MalformedCatalog(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in rdr.deserialize::<CatalogRow>() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            Error::Catalog(format!("Row at line {}: {}", line, e))
        })?;
        records.push(ItemRecord::from(row));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_CSV: &str = "\
Medicine Name,Composition,Uses,Side_effects,Image URL,Manufacturer,Excellent Review %,Average Review %,Poor Review %
Crocin 650 Tablet,Paracetamol (650mg),Fever Pain relief,Nausea,https://img/crocin.jpg,GSK,47,35,18
Dolo 650 Tablet,Paracetamol (650mg),Fever,Nausea Allergic reaction,,Micro Labs,,,
";

    #[test]
    fn test_reads_rows_in_order() {
        let records = read_records(FULL_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Crocin 650 Tablet");
        assert_eq!(records[1].name, "Dolo 650 Tablet");
        assert_eq!(records[0].composition, "Paracetamol (650mg)");
        assert_eq!(records[0].image_url, "https://img/crocin.jpg");
    }

    #[test]
    fn test_manufacturer_maps_to_company() {
        let records = read_records(FULL_CSV.as_bytes()).unwrap();
        assert_eq!(records[0].company.as_deref(), Some("GSK"));
        assert_eq!(records[1].company.as_deref(), Some("Micro Labs"));
    }

    #[test]
    fn test_blank_cells() {
        let records = read_records(FULL_CSV.as_bytes()).unwrap();
        assert_eq!(records[0].excellent_review, Some(47.0));
        assert_eq!(records[1].excellent_review, None);
        assert_eq!(records[1].image_url, "");
    }

    #[test]
    fn test_optional_columns_absent() {
        let csv = "Medicine Name,Composition,Uses,Side_effects\nAsthalin Inhaler,Salbutamol,Asthma,Tremor\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].dosage, None);
        assert_eq!(records[0].company, None);
        assert_eq!(records[0].description, None);
        assert_eq!(records[0].image_url, "");
    }

    #[test]
    fn test_dosage_and_description_columns() {
        let csv = "Medicine Name,Composition,Uses,Side_effects,Dosage,Description\n\
                   P Tablet,Paracetamol,Fever,Nausea,500mg,Pain killer\n\
                   Q Tablet,Paracetamol,Fever,Nausea,,\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].dosage.as_deref(), Some("500mg"));
        assert_eq!(records[0].description.as_deref(), Some("Pain killer"));
        assert_eq!(records[1].dosage, None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Medicine Name,Composition,Side_effects\nX Tablet,Y,Z\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        match err {
            Error::MalformedCatalog(column) => assert_eq!(column, "Uses"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_name_column() {
        let csv = "Composition,Uses,Side_effects\nY,Z,W\n";
        assert!(matches!(
            read_records(csv.as_bytes()),
            Err(Error::MalformedCatalog(_))
        ));
    }

    #[test]
    fn test_unparseable_review_is_absent() {
        let csv = "Medicine Name,Composition,Uses,Side_effects,Excellent Review %\nX Tablet,Y,Z,W,n/a\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].excellent_review, None);
    }

    #[test]
    fn test_company_and_manufacturer_columns() {
        let csv = "Medicine Name,Composition,Uses,Side_effects,Company,Manufacturer\n\
                   A Tablet,X,Y,Z,Acme,Acme Labs\n\
                   B Tablet,X,Y,Z,,Beta Labs\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].company.as_deref(), Some("Acme"));
        assert_eq!(records[1].company.as_deref(), Some("Beta Labs"));
    }

    #[test]
    fn test_non_finite_review_is_absent() {
        let csv = "Medicine Name,Composition,Uses,Side_effects,Excellent Review %,Average Review %,Poor Review %\n\
                   X Tablet,Y,Z,W,nan,NaN,inf\n\
                   Y Tablet,Y,Z,W,12.5,-inf,30\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].excellent_review, None);
        assert_eq!(records[0].average_review, None);
        assert_eq!(records[0].poor_review, None);
        assert_eq!(records[1].excellent_review, Some(12.5));
        assert_eq!(records[1].average_review, None);
        assert_eq!(records[1].poor_review, Some(30.0));
    }

    #[test]
    fn test_load_csv_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_CSV.as_bytes()).unwrap();
        let records = load_csv(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
