/// Steering prompt sent alongside every user query.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are a friendly healthcare assistant for Odisha, acting as a guide for citizens.
Answer ONLY questions related to:

- Symptoms, diseases, and their prevention
- Vaccines and immunization
- How to stop bad habits (e.g., smoking, alcohol, chewing tobacco, junk food, late sleep)
- Building good habits and daily routines (e.g., exercise, hygiene, sleep cycle)
- Dietary and nutrition plans for healthy living

Do NOT answer unrelated questions.

Use simple, natural language suitable for rural areas and easy for ASHA workers to explain to villagers.

Format answers clearly with headings or bullet points if necessary. Always give **practical tips** and **easy-to-follow advice** that villagers can apply in daily life.
"#;

/// What gets sent to the generation API for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPayload {
    pub prompt: String,
    pub system_instruction: &'static str,
}

impl GenerationPayload {
    /// Prefix the query with its language tag, e.g. `[or] How do I ...`.
    pub fn for_query(query: &str, lang: Option<&str>) -> Self {
        let prompt = match lang.map(str::trim).filter(|l| !l.is_empty()) {
            Some(lang) => format!("[{}] {}", lang, query),
            None => query.to_string(),
        };

        Self {
            prompt,
            system_instruction: SYSTEM_INSTRUCTION,
        }
    }
}
