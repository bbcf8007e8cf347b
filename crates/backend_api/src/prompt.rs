use ai_client::ChatMessage;
use models::FinancialSnapshot;

/// Instructions sent with every request. Ordered by priority: the earlier the
/// rule, the more binding it is for the model.
pub const RULES: &str = r#"You are a personal finance advisor. Analyze the financial snapshot you receive and build a payment plan for it.
1. Reply with a single JSON object and nothing else: no markdown fences, no commentary.
2. The object must have exactly this shape:
{
  "diagnosis": {
    "user": string,
    "total_income": number,
    "total_outcomes": number,
    "balance": number,
    "outcome_analysis": [
      {
        "ammount": number,
        "total_quotas": integer,
        "paid_quotas": integer,
        "remaining_quotas": integer,
        "monthly_payment": number
      }
    ]
  },
  "priorities": [ { "name": string, "reason": string } ],
  "recommendations": [ string ]
}
3. Order priorities from most to least urgent."#;

/// Builds the two-message prompt for one snapshot: the fixed rules as the
/// system message, then a user message carrying the same rules with the
/// serialized snapshot appended.
pub fn build_messages(
    snapshot: &FinancialSnapshot,
) -> Result<Vec<ChatMessage>, serde_json::Error> {
    let serialized = serde_json::to_string(snapshot)?;
    Ok(vec![
        ChatMessage::system(RULES),
        ChatMessage::user(format!(
            "{RULES}\nThis is the content to analyze: {serialized}"
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Income, Outcome, UserInfo};

    fn daniela_snapshot() -> FinancialSnapshot {
        FinancialSnapshot {
            user_info: UserInfo {
                name: "Daniela".to_string(),
                age: 30,
                mail: "daniela@example.com".to_string(),
            },
            incomes: vec![Income {
                category: "sueldo".to_string(),
                ammount: 1_000_000.0,
            }],
            outcomes: vec![
                Outcome {
                    category: "tarjeta de credito".to_string(),
                    total_ammount: 800_000.0,
                    total_quotas: 3,
                    paid_quotas: 0,
                    file: String::new(),
                },
                Outcome {
                    category: "alimentación".to_string(),
                    total_ammount: 200_000.0,
                    total_quotas: 1,
                    paid_quotas: 0,
                    file: String::new(),
                },
            ],
        }
    }

    #[test]
    fn builds_system_then_user() {
        let messages = build_messages(&daniela_snapshot()).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn system_message_is_the_rules() {
        let messages = build_messages(&daniela_snapshot()).unwrap();
        assert_eq!(messages[0].content, RULES);
    }

    #[test]
    fn user_message_repeats_rules_and_appends_snapshot() {
        let snapshot = daniela_snapshot();
        let messages = build_messages(&snapshot).unwrap();
        let serialized = serde_json::to_string(&snapshot).unwrap();

        assert!(messages[1].content.starts_with(RULES));
        assert!(messages[1].content.ends_with(&serialized));
    }

    #[test]
    fn snapshot_is_serialized_with_wire_names() {
        let messages = build_messages(&daniela_snapshot()).unwrap();
        assert!(messages[1].content.contains(r#""userInfo""#));
        assert!(messages[1].content.contains(r#""ammount":1000000.0"#));
        assert!(messages[1].content.contains(r#""total_quotas":3"#));
    }
}
