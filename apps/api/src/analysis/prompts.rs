// All LLM prompt constants for the Analysis module.
// The JSON-only system fragment comes from llm_client::prompts.

/// Keyword extraction prompt template. Replace `{job_description}` before
/// sending.
pub const KEYWORD_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and identify at least 50 important keywords that could be incorporated into a resume for this job. The keywords should represent a comprehensive understanding of the role. Be as specific as possible and break broader concepts down into more granular keywords where appropriate. Draw from all of these categories:

- Core technical skills: programming languages, frameworks, libraries, databases, operating systems, tools
- Development methodologies and practices: Agile, Scrum, DevOps, CI/CD, testing, code review
- Cloud technologies and platforms: providers, services, serverless
- Industry-specific terminology and standards
- Responsibilities and tasks: action verbs describing the duties of the role
- Required qualifications and experience: years, degrees, certifications
- Soft skills and interpersonal abilities
- Project types and industry verticals, if mentioned
- Level of experience: entry, mid, senior, lead, managerial
- Company culture and values, if discernible

Return a JSON object with this EXACT schema (no extra fields):
{
  "keywords": ["Rust", "distributed systems", "CI/CD"]
}

JOB DESCRIPTION:
{job_description}"#;

/// Relevance scoring prompt template. Replace `{job_description}` and
/// `{resume}` before sending.
pub const RELEVANCE_PROMPT_TEMPLATE: &str = r#"You are a job relevance analyzer. Given the job description and the applicant's resume, determine how relevant the job is to the applicant. Provide a relevance score between 0 and 1, as well as a reason for the score. 0 means no relevance and 1 means perfect relevance. Consider skills, experience, and keywords.

Return a JSON object with this EXACT schema (no extra fields):
{
  "relevance_score": 0.75,
  "reason": "One short paragraph explaining the score."
}

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}"#;

/// Resume feedback prompt template. Replace `{job_description}` and
/// `{resume}` before sending.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are a resume coach. Compare the applicant's resume against the job description and write concrete, actionable feedback: which requirements the resume already covers, which are missing or underemphasized, and which phrasing changes would improve the match. Be specific — reference actual lines of the resume and actual requirements of the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "feedback": "The full feedback text."
}

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}"#;
