//! Search query entity
//!
//! One query is built per keyword per submission and never mutated.

use chrono::{Days, NaiveDate};

/// Wire format of `StartDate` / `EndDate`
pub const TED_DATE_FORMAT: &str = "%d-%m-%Y";

/// TED contract type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractType {
    Works,
    Supplies,
    Services,
}

impl ContractType {
    pub const ALL: [ContractType; 3] = [
        ContractType::Works,
        ContractType::Supplies,
        ContractType::Services,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Works => "Works",
            ContractType::Supplies => "Supplies",
            ContractType::Services => "Services",
        }
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "works" => Ok(ContractType::Works),
            "supplies" => Ok(ContractType::Supplies),
            "services" => Ok(ContractType::Services),
            _ => Err(format!("Unknown contract type: {}", s)),
        }
    }
}

/// A keyword search restricted to a country and a date window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub country_code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub contract_types: Vec<ContractType>,
}

impl SearchQuery {
    /// Build a query for the window of `lookback_days` ending on `today`.
    /// A window reaching past the earliest representable date starts there.
    pub fn for_window(
        keyword: &str,
        country_code: &str,
        contract_types: &[ContractType],
        today: NaiveDate,
        lookback_days: u32,
    ) -> Self {
        Self {
            keyword: keyword.to_string(),
            country_code: country_code.to_string(),
            start_date: today
                .checked_sub_days(Days::new(u64::from(lookback_days)))
                .unwrap_or(NaiveDate::MIN),
            end_date: today,
            contract_types: contract_types.to_vec(),
        }
    }

    pub fn start_date_param(&self) -> String {
        self.start_date.format(TED_DATE_FORMAT).to_string()
    }

    pub fn end_date_param(&self) -> String {
        self.end_date.format(TED_DATE_FORMAT).to_string()
    }

    /// Contract types joined the way `Type_Contract` expects them
    pub fn contract_types_param(&self) -> String {
        self.contract_types
            .iter()
            .map(ContractType::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
