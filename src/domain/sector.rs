//! Sector classification for universe screening.

use std::fmt;
use std::str::FromStr;

/// Broad sector labels as supplied by the reference-data feed.
///
/// Only `Technology` participates in the screen; the remaining labels exist
/// so reference data can be parsed without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    Technology,
    Financials,
    Healthcare,
    Energy,
    Industrials,
    ConsumerDiscretionary,
    ConsumerStaples,
    Materials,
    Utilities,
    RealEstate,
    CommunicationServices,
    Unknown,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognised sector: {0}")]
pub struct ParseSectorError(pub String);

impl FromStr for Sector {
    type Err = ParseSectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalised.as_str() {
            "technology" | "information_technology" | "tech" => Ok(Sector::Technology),
            "financials" | "financial_services" => Ok(Sector::Financials),
            "healthcare" | "health_care" => Ok(Sector::Healthcare),
            "energy" => Ok(Sector::Energy),
            "industrials" => Ok(Sector::Industrials),
            "consumer_discretionary" | "consumer_cyclical" => Ok(Sector::ConsumerDiscretionary),
            "consumer_staples" | "consumer_defensive" => Ok(Sector::ConsumerStaples),
            "materials" | "basic_materials" => Ok(Sector::Materials),
            "utilities" => Ok(Sector::Utilities),
            "real_estate" => Ok(Sector::RealEstate),
            "communication_services" | "telecom" => Ok(Sector::CommunicationServices),
            "unknown" | "" => Ok(Sector::Unknown),
            _ => Err(ParseSectorError(s.to_string())),
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sector::Technology => "Technology",
            Sector::Financials => "Financials",
            Sector::Healthcare => "Healthcare",
            Sector::Energy => "Energy",
            Sector::Industrials => "Industrials",
            Sector::ConsumerDiscretionary => "Consumer Discretionary",
            Sector::ConsumerStaples => "Consumer Staples",
            Sector::Materials => "Materials",
            Sector::Utilities => "Utilities",
            Sector::RealEstate => "Real Estate",
            Sector::CommunicationServices => "Communication Services",
            Sector::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}
