use crate::error::{Result, SeedError};
use chrono::{DateTime, Datelike, Utc};
use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "campus.db";
pub const MIN_BASE_YEAR: i32 = 2000;
pub const MAX_BASE_YEAR: i32 = 2100;

/// Options for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// SQLite file to populate
    pub database: PathBuf,

    /// Remove previously seeded rows before seeding (destructive)
    pub clear: bool,

    /// Run everything, then roll back instead of committing
    pub dry_run: bool,

    /// First calendar year of the "current" academic year
    pub base_year: i32,

    /// Instant announcement windows are anchored to; captured once per run
    pub reference_time: DateTime<Utc>,
}

impl SeedOptions {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BASE_YEAR..=MAX_BASE_YEAR).contains(&self.base_year) {
            return Err(SeedError::Config(format!(
                "base year {} is outside {}..={}",
                self.base_year, MIN_BASE_YEAR, MAX_BASE_YEAR
            )));
        }
        if self.database.as_os_str().is_empty() {
            return Err(SeedError::Config("database path is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for SeedOptions {
    fn default() -> Self {
        let now = Utc::now();
        SeedOptions {
            database: PathBuf::from(DEFAULT_DATABASE),
            clear: false,
            dry_run: false,
            base_year: now.year(),
            reference_time: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = SeedOptions::default();
        assert!(options.validate().is_ok());
        assert!(!options.clear);
        assert_eq!(options.base_year, options.reference_time.year());
    }

    #[test]
    fn test_base_year_out_of_range_rejected() {
        let options = SeedOptions {
            base_year: 1999,
            ..SeedOptions::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("1999"));
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let options = SeedOptions {
            database: PathBuf::new(),
            ..SeedOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
