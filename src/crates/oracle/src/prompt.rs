//! Request construction for both oracle flows.
//!
//! The judge flow and the challenge flow differ only in their instruction
//! text, the user text, and whether a JSON reply is demanded. Both go through
//! [`OraclePrompt::build`].

use crate::remote::gemini::{Content, GenerateContentRequest, GenerationConfig};
use serde::{Deserialize, Serialize};

/// Internal rulebook every judgment must be grounded in.
pub const RULEBOOK: &str = "\
Internal Rulebook v1.0 — Platonic Products

Mission
We declare one physical product per category as the Platonic Ideal: the object that best embodies the category’s true function with maximum durability, repairability, and long-term integrity. We prefer finality over novelty.

Core Definition
A product is Platonic if it:
1. Ends the search: owning it makes further shopping in the category feel unnecessary.
2. Improves or stays whole with time: performance doesn’t degrade through ordinary use; if it does, it’s reversible.
3. Has reversible failure modes: damage is fixable by maintenance, repair, parts, refinishing, or service.
4. Is stable: the model’s core materials and construction don’t drift silently year-to-year.
5. Is honest: no fragile complexity pretending to be progress; no engineered obsolescence.
6. Is supported: parts/service/manuals are accessible enough that a normal owner can keep it alive.
7. Is form-faithful: it expresses the essential “Form” of the category, not a subcategory or a lifestyle aesthetic.

What Qualifies as Platonic
The Admission Test (must pass all):
A. Form Clarity: We can state the Form in one sentence: “A ___ is ___.”
B. Longevity Reality: The product is built to last by design, not by luck. There is a credible path to 10–20+ years of ownership.
C. Repair Path: If it breaks, there is a known way to restore function (parts, service, refurb, re-season, resole, rebuild).
D. Model Stability: The name doesn’t hide annual internal downgrades.
E. “No Timers”: No consumable coating or sealed component that forces replacement as a normal lifecycle.

What Disqualifies a Product Even if It’s Popular
- The surface is a countdown timer: Nonstick coatings, fragile finishes, bonded layers that fail before the core.
- Sealed-for-life design: No parts, no service path, no access, proprietary tools, glued assemblies.
- Complexity without recoverability: Touchscreens, sensors, “smart” features, firmware dependence, or electronics that brick the object.
- Silent model drift: The same model name now means cheaper internals.
- Luxury masquerading as quality: Paying for brand rather than core longevity.
- Weak link dependency: One critical component fails and cannot be replaced.
- Optimization for novelty: The value proposition is “new,” not “enduring.”
";

const JUDGE_PREAMBLE: &str = "\
You are the arbiter of the \"Platonic Ideal\", a registry of durable goods.
Your judgments must be based STRICTLY on the following Internal Rulebook.
Refer to specific rules (e.g., \"Violates Rule C: Repair Path\" or \"Fails Disqualifier: Sealed-for-life\") in your reasoning.
";

const JUDGE_INSTRUCTIONS: &str = r#"
Status Definitions:
- DECLARED: Best-in-class, repairable, durable, simple (e.g., Cast Iron Pan). Passes Admission Test A-E.
- REJECTED: Disposable, glued, smart features, or fragile (e.g., Airpods). Hits a Disqualifier.
- EMPTY: No product in this category meets the standard (e.g., Refrigerator).
- CANDIDATE: Good, but unproven or has minor flaws.

Tone: Clinical, detached, authoritative, slightly haughty. Focus on failure modes and materials.

Respond ONLY with valid JSON in this format:
{
  "category": "Standardized Category Name",
  "model": "Specific Model (if applicable) or General Type",
  "status": "DECLARED" | "REJECTED" | "EMPTY" | "CANDIDATE",
  "coreReasoning": "Clinical explanation citing specific rules from the rulebook.",
  "maintenance": "REPAIRABLE" | "DISPOSABLE" | "DURABLE" | "OBSOLETE",
  "lifespan": "Estimated time",
  "failureModes": "Primary failure mode"
}"#;

const CHALLENGE_INSTRUCTIONS: &str = "\
Compare them. Defend the Declared Item using the rulebook (durability, repairability).
If the Challenger is truly superior (rare), admit it as a 'Candidate'.
If the Challenger is flawed (disposable, complex, fragile), eviscerate it politely but clinically.
Keep it under 100 words.";

/// User text sent with every challenge.
pub const CHALLENGE_USER_TEXT: &str = "Evaluate this challenger.";

/// The declared item a challenger is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeTarget {
    pub category: String,
    pub model: Option<String>,
}

impl ChallengeTarget {
    pub fn new(category: impl Into<String>, model: Option<String>) -> Self {
        Self {
            category: category.into(),
            model,
        }
    }

    fn declared_item(&self) -> String {
        format!(
            "{} ({})",
            self.model.as_deref().unwrap_or("None declared"),
            self.category
        )
    }
}

/// What is being asked of the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OraclePrompt<'a> {
    /// Judge a free-text product description; the reply must be JSON.
    Judge { query: &'a str },

    /// Compare a challenger against a declared item; the reply is prose.
    Challenge {
        target: &'a ChallengeTarget,
        challenger: &'a str,
    },
}

impl OraclePrompt<'_> {
    /// Name used in logs.
    pub fn operation(&self) -> &'static str {
        match self {
            OraclePrompt::Judge { .. } => "judge",
            OraclePrompt::Challenge { .. } => "challenge",
        }
    }

    /// The system instruction for this prompt.
    pub fn system_instruction(&self) -> String {
        match self {
            OraclePrompt::Judge { .. } => {
                format!("{}\n{}\n{}", JUDGE_PREAMBLE, RULEBOOK, JUDGE_INSTRUCTIONS)
            }
            OraclePrompt::Challenge { target, challenger } => format!(
                "You are the defender of the Platonic Ideal.\n\
                 Declared Item: {}\n\
                 Challenger: {}\n\
                 Rulebook: {}\n\n\
                 {}",
                target.declared_item(),
                challenger.trim(),
                RULEBOOK,
                CHALLENGE_INSTRUCTIONS
            ),
        }
    }

    /// Build the `generateContent` body.
    pub fn build(&self) -> GenerateContentRequest {
        let (user_text, generation_config) = match self {
            OraclePrompt::Judge { query } => (query.trim(), Some(GenerationConfig::json())),
            OraclePrompt::Challenge { .. } => (CHALLENGE_USER_TEXT, None),
        };

        GenerateContentRequest {
            contents: vec![Content::text(user_text)],
            system_instruction: Some(Content::text(self.system_instruction())),
            generation_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_request() {
        let request = OraclePrompt::Judge {
            query: "  Nespresso Machine ",
        }
        .build();

        assert_eq!(request.user_text(), Some("Nespresso Machine"));
        assert!(request.expects_json());

        let system = request.system_text().unwrap();
        assert!(system.contains("arbiter of the \"Platonic Ideal\""));
        assert!(system.contains("Internal Rulebook v1.0"));
        assert!(system.contains("\"failureModes\""));
    }

    #[test]
    fn test_challenge_request() {
        let target = ChallengeTarget::new("Frying Pan", Some("Lodge 12 in Cast Iron Skillet".into()));
        let prompt = OraclePrompt::Challenge {
            target: &target,
            challenger: "All-Clad D3",
        };
        let request = prompt.build();

        assert_eq!(prompt.operation(), "challenge");
        assert_eq!(request.user_text(), Some(CHALLENGE_USER_TEXT));
        assert!(!request.expects_json());

        let system = request.system_text().unwrap();
        assert!(system.contains("Declared Item: Lodge 12 in Cast Iron Skillet (Frying Pan)"));
        assert!(system.contains("Challenger: All-Clad D3"));
        assert!(system.contains("Keep it under 100 words."));
    }

    #[test]
    fn test_challenge_without_declared_model() {
        let target = ChallengeTarget::new("Refrigerator", None);
        let request = OraclePrompt::Challenge {
            target: &target,
            challenger: "Sub-Zero",
        }
        .build();

        assert!(request
            .system_text()
            .unwrap()
            .contains("Declared Item: None declared (Refrigerator)"));
    }
}
