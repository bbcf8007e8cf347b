
use serde::{Deserialize, Serialize};

// Snapshot input models
//
// Field spellings (`ammount`, `total_ammount`) are part of the wire contract
// shared with the frontend and must not be corrected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
	pub name: String,
	pub age: u32,
	pub mail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
	pub category: String,
	pub ammount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
	pub category: String,
	pub total_ammount: f64,
	pub total_quotas: u32,
	pub paid_quotas: u32,
	#[serde(default)]
	pub file: String,
}

/// The financial snapshot submitted by the caller, serialized verbatim into
/// the prompt sent to the completion API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
	#[serde(rename = "userInfo")]
	pub user_info: UserInfo,
	pub incomes: Vec<Income>,
	pub outcomes: Vec<Outcome>,
}

// Diagnosis output models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub ammount: f64,
	pub total_quotas: u32,
	pub paid_quotas: u32,
	pub remaining_quotas: u32,
	pub monthly_payment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priority {
	pub name: String,
	pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
	pub user: String,
	pub total_income: f64,
	pub total_outcomes: f64,
	pub balance: f64,
	pub outcome_analysis: Vec<Item>,
}

/// Everything the model produces for one request. The arithmetic invariants
/// on `Item` (remaining quotas, monthly payment) are the model's
/// responsibility and are not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
	pub diagnosis: Diagnosis,
	pub priorities: Vec<Priority>,
	pub recommendations: Vec<String>,
}

/// Top-level envelope returned to the caller on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialDiagnosisResponse {
	pub success: bool,
	pub data: Data,
}

impl Data {
	/// Single deserialization entry point for the model's raw reply.
	///
	/// Trims surrounding whitespace, then requires the remainder to be a
	/// well-formed JSON object matching the `Data` shape. Unknown extra
	/// fields are ignored; missing fields fail the decode.
	pub fn from_reply(raw: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(raw.trim())
	}
}
