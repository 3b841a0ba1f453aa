//! Fetches the numerator and denominator tables.
//!
//! The fetches are sequential: the denominator table is only requested once
//! the numerator table has arrived and parsed. Nothing is returned unless
//! both succeed, so callers never see half a reload.

use crate::config::ApiConfig;
use crate::reference::{RecordsEnvelope, ReferenceEntry, ReferenceTables, Table};
use async_trait::async_trait;
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {table} table failed: {source}")]
    Http {
        table: Table,
        #[source]
        source: reqwest::Error,
    },
    #[error("{table} table responded with HTTP {status}")]
    Status { table: Table, status: u16 },
    #[error("{table} table response is malformed: {source}")]
    Malformed {
        table: Table,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can produce the raw JSON body of a reference table.
#[async_trait(?Send)]
pub trait ReferenceSource {
    async fn fetch(&self, table: Table) -> Result<String, LoadError>;
}

/// The production source: plain unauthenticated GETs against the API.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpSource {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl ReferenceSource for HttpSource {
    async fn fetch(&self, table: Table) -> Result<String, LoadError> {
        let url = self.config.endpoint(table.path());
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LoadError::Http { table, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                table,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| LoadError::Http { table, source })
    }
}

/// Decode a `{"records": [...]}` body.
pub fn parse_records(table: Table, body: &str) -> Result<Vec<ReferenceEntry>, LoadError> {
    serde_json::from_str::<RecordsEnvelope>(body)
        .map(|envelope| envelope.records)
        .map_err(|source| LoadError::Malformed { table, source })
}

/// Load both tables, numerator first.
pub async fn load<S: ReferenceSource + ?Sized>(source: &S) -> Result<ReferenceTables, LoadError> {
    let numerators = parse_records(Table::Numerator, &source.fetch(Table::Numerator).await?)?;
    let denominators = parse_records(Table::Denominator, &source.fetch(Table::Denominator).await?)?;

    let tables = ReferenceTables::new(numerators, denominators);
    info!(
        "Loaded {} numerator and {} denominator entries",
        tables.numerators.entries().len(),
        tables.denominators.entries().len()
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::KeyRange;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned bodies and records which tables were requested.
    struct StubSource {
        bodies: HashMap<Table, Result<String, u16>>,
        calls: RefCell<Vec<Table>>,
    }

    impl StubSource {
        fn new() -> Self {
            Self {
                bodies: HashMap::new(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn body(mut self, table: Table, body: &str) -> Self {
            self.bodies.insert(table, Ok(body.to_string()));
            self
        }

        fn status(mut self, table: Table, status: u16) -> Self {
            self.bodies.insert(table, Err(status));
            self
        }
    }

    #[async_trait(?Send)]
    impl ReferenceSource for StubSource {
        async fn fetch(&self, table: Table) -> Result<String, LoadError> {
            self.calls.borrow_mut().push(table);
            match self.bodies.get(&table) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(status)) => Err(LoadError::Status {
                    table,
                    status: *status,
                }),
                None => Err(LoadError::Status { table, status: 404 }),
            }
        }
    }

    const NUMERATORS: &str =
        r#"{"records":[{"key":"88","value":"60"},{"key":"90","value":"64"},{"key":"95","value":"80"}]}"#;
    const DENOMINATORS: &str =
        r#"{"records":[{"key":"1","value":"0.24"},{"key":"2","value":"0.28"}]}"#;

    #[test]
    fn loads_both_tables_in_order() {
        let source = StubSource::new()
            .body(Table::Numerator, NUMERATORS)
            .body(Table::Denominator, DENOMINATORS);

        let tables = block_on(load(&source)).unwrap();

        assert_eq!(*source.calls.borrow(), vec![Table::Numerator, Table::Denominator]);
        assert_eq!(tables.numerators.entries().len(), 3);
        assert_eq!(tables.numerators.entries()[1], ReferenceEntry::new("90", "64"));
        assert_eq!(tables.numerators.range(), Some(KeyRange { min: 88, max: 95 }));
        assert_eq!(tables.denominators.range(), Some(KeyRange { min: 1, max: 2 }));
    }

    #[test]
    fn numerator_failure_skips_denominator_fetch() {
        let source = StubSource::new()
            .status(Table::Numerator, 500)
            .body(Table::Denominator, DENOMINATORS);

        let err = block_on(load(&source)).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Status {
                table: Table::Numerator,
                status: 500
            }
        ));
        assert_eq!(*source.calls.borrow(), vec![Table::Numerator]);
    }

    #[test]
    fn missing_records_is_malformed() {
        let source = StubSource::new()
            .body(Table::Numerator, NUMERATORS)
            .body(Table::Denominator, r#"{"message":"No records found."}"#);

        let err = block_on(load(&source)).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Malformed {
                table: Table::Denominator,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Denominator table response is malformed"));
    }

    #[test]
    fn empty_records_load_without_range() {
        let source = StubSource::new()
            .body(Table::Numerator, r#"{"records":[]}"#)
            .body(Table::Denominator, DENOMINATORS);

        let tables = block_on(load(&source)).unwrap();
        assert!(tables.numerators.is_empty());
        assert_eq!(tables.numerators.range(), None);
    }
}
