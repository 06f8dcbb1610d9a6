//! Common types used throughout applications-feed
//!
//! The application record as served by the list endpoint, plus the
//! small enums hanging off it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Loan Type
// ============================================================================

/// Product a loan application is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    #[serde(rename = "Flexi-Loan")]
    FlexiLoan,
    #[serde(rename = "Business Loan")]
    BusinessLoan,
    #[serde(rename = "Cash Advance")]
    CashAdvance,
    #[serde(rename = "RLS")]
    Rls,
    #[serde(rename = "CBILS")]
    Cbils,
}

impl LoanType {
    /// Label as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::FlexiLoan => "Flexi-Loan",
            LoanType::BusinessLoan => "Business Loan",
            LoanType::CashAdvance => "Cash Advance",
            LoanType::Rls => "RLS",
            LoanType::Cbils => "CBILS",
        }
    }
}

impl std::fmt::Display for LoanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Loan History
// ============================================================================

/// A previous loan held by the applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanHistory {
    pub loan_started: String,
    pub loan_ended: String,
    pub principle: f64,
    pub interest_rate: f64,
    pub interest: f64,
}

// ============================================================================
// Application
// ============================================================================

/// A single loan application. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub loan_amount: f64,
    /// ISO-8601 timestamp
    pub date_created: String,
    /// ISO-8601 timestamp
    pub expiry_date: String,

    /// `None` when absent, null, or a product this client does not know
    #[serde(
        default,
        deserialize_with = "lenient_loan_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub loan_type: Option<LoanType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub loan_history: Vec<LoanHistory>,
}

fn lenient_loan_type<'de, D>(deserializer: D) -> Result<Option<LoanType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<LoanHistory>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<LoanHistory>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Application {
    /// Applicant's display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
