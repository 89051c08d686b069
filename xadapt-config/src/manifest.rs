//! TOML adapter manifest (`xadapt.toml`).
//!
//! The manifest carries the same triples as the inline option format, one
//! `[[adapters]]` table per adapter:
//!
//! ```toml
//! [[adapters]]
//! class = "pkg.BoolAdapter"
//! bound = "pkg.TTrueFalse"
//! value = "bool"
//! ```

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    spec::AdapterSpec,
};

/// Root manifest for xadapt.toml
#[derive(Debug, Deserialize)]
pub struct AdaptersManifest {
    /// Configured adapters, in application order.
    #[serde(default)]
    pub adapters: Vec<AdapterEntry>,
}

/// One `[[adapters]]` table.
#[derive(Debug, Deserialize)]
pub struct AdapterEntry {
    /// Fully qualified adapter class name.
    pub class: String,
    /// Fully qualified bound type name.
    pub bound: String,
    /// Fully qualified value type name.
    pub value: String,
}

impl FromStr for AdaptersManifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "xadapt.toml")
    }
}

impl AdaptersManifest {
    /// Parse an xadapt.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse an xadapt.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    /// Convert the manifest into the ordered specification list the registry
    /// builder consumes.
    pub fn into_specs(self) -> Vec<AdapterSpec> {
        self.adapters
            .into_iter()
            .map(|entry| AdapterSpec::new(entry.class, entry.bound, entry.value))
            .collect()
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        for (index, entry) in self.adapters.iter().enumerate() {
            for (name, role) in [
                (&entry.class, "class"),
                (&entry.bound, "bound"),
                (&entry.value, "value"),
            ] {
                if name.trim().is_empty() {
                    return Err(Error::validation(
                        format!("adapters[{index}]: '{role}' must be a non-empty type name"),
                        src,
                        filename,
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const EXAMPLE: &str = r#"
        [[adapters]]
        class = "pkg.BoolAdapter"
        bound = "pkg.TTrueFalse"
        value = "bool"

        [[adapters]]
        class = "pkg.DateAdapter"
        bound = "pkg.TDate"
        value = "chrono.NaiveDate"
    "#;

    #[test]
    fn test_manifest_into_specs() {
        let manifest: AdaptersManifest = EXAMPLE.parse().unwrap();
        let specs = manifest.into_specs();

        assert_eq!(specs.len(), 2);
        assert_eq!(
            specs[0],
            AdapterSpec::new("pkg.BoolAdapter", "pkg.TTrueFalse", "bool")
        );
        assert_eq!(specs[1].value, "chrono.NaiveDate");
    }

    #[test]
    fn test_empty_manifest_has_no_adapters() {
        let manifest: AdaptersManifest = "".parse().unwrap();
        assert!(manifest.adapters.is_empty());
    }

    #[test]
    fn test_missing_key_is_a_parse_error() {
        let result = AdaptersManifest::from_str(
            r#"
            [[adapters]]
            class = "pkg.BoolAdapter"
            bound = "pkg.TTrueFalse"
            "#,
        );
        assert!(matches!(*result.unwrap_err(), Error::Parse { .. }));
    }

    #[test]
    fn test_blank_type_name_is_rejected() {
        let result = AdaptersManifest::from_str(
            r#"
            [[adapters]]
            class = "pkg.BoolAdapter"
            bound = "  "
            value = "bool"
            "#,
        );
        assert!(matches!(*result.unwrap_err(), Error::Validation { .. }));
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();

        let manifest = AdaptersManifest::from_file(file.path()).unwrap();
        assert_eq!(manifest.adapters.len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = AdaptersManifest::from_file("does/not/exist/xadapt.toml");
        assert!(matches!(*result.unwrap_err(), Error::Io { .. }));
    }
}
