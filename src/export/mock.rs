use std::cell::RefCell;

use crate::error::{BumpError, Result};
use crate::export::Exporter;

/// Mock exporter that keeps variables in memory
#[derive(Default)]
pub struct MockExporter {
    exported: RefCell<Vec<(String, String)>>,
    fail_on: Option<String>,
}

impl MockExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make exports of `key` fail
    pub fn failing_on(key: impl Into<String>) -> Self {
        MockExporter {
            exported: RefCell::new(Vec::new()),
            fail_on: Some(key.into()),
        }
    }

    /// Exported pairs in call order
    pub fn exported(&self) -> Vec<(String, String)> {
        self.exported.borrow().clone()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.exported
            .borrow()
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

impl Exporter for MockExporter {
    fn export(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(key) {
            return Err(BumpError::export(format!(
                "Failed to export environment ({})",
                key
            )));
        }
        self.exported
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_exporter_records_in_order() {
        let exporter = MockExporter::new();
        exporter.export("A", "1").unwrap();
        exporter.export("B", "2").unwrap();

        assert_eq!(
            exporter.exported(),
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string())
            ]
        );
        assert_eq!(exporter.get("B"), Some("2".to_string()));
        assert_eq!(exporter.get("C"), None);
    }

    #[test]
    fn test_mock_exporter_failure() {
        let exporter = MockExporter::failing_on("A");
        assert!(exporter.export("A", "1").is_err());
        assert!(exporter.exported().is_empty());
    }
}
