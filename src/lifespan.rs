// Lifespan derivation - birth year plus lived days / months / years

use crate::dates::{parse_canonical, NormalizedRow};
use crate::error::{LifespanError, Result};
use crate::loader::SCHEMA;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Average year length, leap years included
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Average month length (365.25 / 12)
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Time between birth and death, measured once in days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifespan {
    pub days: i64,
    pub months: f64,
    pub years: f64,
}

impl Lifespan {
    pub fn from_days(days: i64) -> Self {
        Lifespan {
            days,
            months: days as f64 / DAYS_PER_MONTH,
            years: days as f64 / DAYS_PER_YEAR,
        }
    }

    pub fn between(birth: NaiveDate, death: NaiveDate) -> Self {
        Self::from_days((death - birth).num_days())
    }
}

/// One office-holder with every derived field filled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub line: u64,
    pub name: String,
    pub raw_birth: String,
    pub raw_death: Option<String>,
    pub birth_formatted: String,
    pub death_formatted: Option<String>,
    pub birth_year: i32,
    pub lifespan: Option<Lifespan>, // None = still living
}

impl Record {
    pub fn is_living(&self) -> bool {
        self.lifespan.is_none()
    }

    pub fn lived_days(&self) -> Option<i64> {
        self.lifespan.map(|l| l.days)
    }

    pub fn lived_years(&self) -> Option<f64> {
        self.lifespan.map(|l| l.years)
    }
}

/// Turn normalized rows into records. Every row is kept; the living simply
/// carry no lifespan.
pub fn derive_records(rows: Vec<NormalizedRow>) -> Result<Vec<Record>> {
    rows.into_iter().map(derive_record).collect()
}

fn derive_record(row: NormalizedRow) -> Result<Record> {
    let (Some(raw_birth), Some(birth_formatted)) = (row.raw_birth, row.birth_formatted) else {
        return Err(LifespanError::MissingField {
            line: row.line,
            field: SCHEMA.birth_date,
        });
    };

    let birth = parse_date(row.line, &row.name, SCHEMA.birth_date, &birth_formatted)?;

    let lifespan = match row.death_formatted.as_deref() {
        Some(death) => {
            let death = parse_date(row.line, &row.name, SCHEMA.death_date, death)?;
            Some(Lifespan::between(birth, death))
        }
        None => None,
    };

    Ok(Record {
        line: row.line,
        name: row.name,
        raw_birth,
        raw_death: row.raw_death,
        birth_formatted,
        death_formatted: row.death_formatted,
        birth_year: birth.year(),
        lifespan,
    })
}

fn parse_date(line: u64, name: &str, column: &'static str, value: &str) -> Result<NaiveDate> {
    parse_canonical(value).map_err(|source| LifespanError::DateParseFailure {
        line,
        name: name.to_string(),
        column,
        value: value.to_string(),
        source,
    })
}

// ============================================================================
// TESTS
// ============================================================================
