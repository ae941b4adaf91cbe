//! The three fixed instructional frames sent to the model.

use serde::{Deserialize, Serialize};

/// Which user action triggered the exchange. Each kind owns one literal
/// template; there is no other branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    General,
    DiseasePrediction,
    MedicineInfo,
}

impl QueryKind {
    /// Fills this kind's template with the user's text. Returns `None` for
    /// empty or whitespace-only input; no other validation is applied.
    pub fn render(&self, input: &str) -> Option<String> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let prompt = match self {
            QueryKind::General => format!(
                "Provide a short medical explanation for: {input}. \
                 Include key symptoms, causes, and treatments."
            ),
            QueryKind::DiseasePrediction => format!(
                "Predict possible diseases based on: {input}. \
                 Provide a brief summary (max 4 lines)."
            ),
            QueryKind::MedicineInfo => {
                format!("Explain in 4 lines max the uses, dosage, and side effects of {input}.")
            }
        };

        Some(prompt)
    }
}
