//! AI Analysis Gateway — three independent text-analysis calls.
//!
//! Each operation renders a fixed prompt template, forwards it through the
//! shared LLM client, and deserializes the response into a required shape.
//! The operations are independent: a failure in one leaves the others, and
//! any previously-persisted fields, untouched.

pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{prompts::JSON_ONLY_SYSTEM, LlmClient};

use prompts::{FEEDBACK_PROMPT_TEMPLATE, KEYWORD_PROMPT_TEMPLATE, RELEVANCE_PROMPT_TEMPLATE};

/// Output shape of keyword extraction. The prompt asks for at least 50
/// keywords; nothing enforces the count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordExtraction {
    pub keywords: Vec<String>,
}

/// Output shape of relevance scoring. The score is model-produced, not
/// independently computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceAssessment {
    pub relevance_score: f64,
    pub reason: String,
}

/// Output shape of feedback generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeFeedback {
    pub feedback: String,
}

/// Extracts resume-relevant keywords from a job description. An empty
/// description is a valid call.
pub async fn extract_keywords(
    job_description: &str,
    llm: &LlmClient,
) -> Result<KeywordExtraction, AppError> {
    let prompt = KEYWORD_PROMPT_TEMPLATE.replace("{job_description}", job_description);
    llm.call_json::<KeywordExtraction>(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Keyword extraction failed: {e}")))
}

/// Scores how relevant a job is to the given resume, with a reason.
pub async fn score_relevance(
    job_description: &str,
    resume: &str,
    llm: &LlmClient,
) -> Result<RelevanceAssessment, AppError> {
    let prompt = RELEVANCE_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume}", resume);
    llm.call_json::<RelevanceAssessment>(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Relevance scoring failed: {e}")))
}

/// Generates free-text feedback on how well the resume matches the job.
pub async fn generate_feedback(
    job_description: &str,
    resume: &str,
    llm: &LlmClient,
) -> Result<ResumeFeedback, AppError> {
    let prompt = FEEDBACK_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume}", resume);
    llm.call_json::<ResumeFeedback>(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Feedback generation failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_extraction_deserializes() {
        let json = r#"{"keywords": ["Rust", "Kubernetes", "CI/CD"]}"#;
        let parsed: KeywordExtraction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.keywords.len(), 3);
        assert_eq!(parsed.keywords[0], "Rust");
    }

    #[test]
    fn test_keyword_extraction_rejects_missing_field() {
        let json = r#"{"words": ["Rust"]}"#;
        assert!(serde_json::from_str::<KeywordExtraction>(json).is_err());
    }

    #[test]
    fn test_relevance_assessment_deserializes() {
        let json = r#"{"relevance_score": 0.82, "reason": "Strong overlap in skills."}"#;
        let parsed: RelevanceAssessment = serde_json::from_str(json).unwrap();
        assert!((parsed.relevance_score - 0.82).abs() < f64::EPSILON);
        assert!(!parsed.reason.is_empty());
    }

    #[test]
    fn test_relevance_assessment_rejects_missing_reason() {
        let json = r#"{"relevance_score": 0.5}"#;
        assert!(serde_json::from_str::<RelevanceAssessment>(json).is_err());
    }

    #[test]
    fn test_feedback_deserializes() {
        let json = r#"{"feedback": "Lead with the platform migration project."}"#;
        let parsed: ResumeFeedback = serde_json::from_str(json).unwrap();
        assert!(parsed.feedback.contains("platform migration"));
    }

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(KEYWORD_PROMPT_TEMPLATE.contains("{job_description}"));
        assert!(RELEVANCE_PROMPT_TEMPLATE.contains("{job_description}"));
        assert!(RELEVANCE_PROMPT_TEMPLATE.contains("{resume}"));
        assert!(FEEDBACK_PROMPT_TEMPLATE.contains("{job_description}"));
        assert!(FEEDBACK_PROMPT_TEMPLATE.contains("{resume}"));
    }

    #[test]
    fn test_placeholder_substitution_is_complete() {
        let rendered = RELEVANCE_PROMPT_TEMPLATE
            .replace("{job_description}", "build servers")
            .replace("{resume}", "built servers for ten years");
        assert!(!rendered.contains("{job_description}"));
        assert!(!rendered.contains("{resume}"));
        assert!(rendered.contains("build servers"));
    }
}
