use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline stage of an application. Closed set — the serialized display
/// string is exactly what lands in the sheet's Status column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Screening,
    Applied,
    Interviewing,
    #[serde(rename = "Offer Received")]
    OfferReceived,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Screening => "Screening",
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::OfferReceived => "Offer Received",
            Status::Rejected => "Rejected",
        }
    }

    /// Parses a stored display string. Unrecognized values fall back to
    /// `Screening` rather than failing the whole row.
    pub fn parse(value: &str) -> Status {
        match value.trim() {
            "Applied" => Status::Applied,
            "Interviewing" => Status::Interviewing,
            "Offer Received" => Status::OfferReceived,
            "Rejected" => Status::Rejected,
            _ => Status::Screening,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked job application — the full set of fields backed by one
/// spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    /// Stable identifier assigned at creation. `None` for blank (cleared)
    /// rows and rows written before the Id column existed.
    pub id: Option<Uuid>,
    pub employer: String,
    pub position: String,
    pub location: String,
    pub status: Status,
    /// Stored as an opaque display string, never parsed.
    pub applied_date: String,
    /// Model-produced score in [0, 1]; `None` until analyzed.
    pub relevance: Option<f64>,
    pub job_description: String,
    pub resume: String,
    pub keywords: Vec<String>,
    pub notes: String,
    pub url: String,
    pub updated_resume: String,
    /// Also receives the generated resume feedback text.
    pub updated_resume_analysis: String,
    pub latex_resume: String,
    pub keyword_analysis: String,
}

impl JobApplication {
    /// True when the backing row has been cleared — every cell blank.
    /// Cleared rows stay in the list so index-to-row mapping holds.
    pub fn is_blank(&self) -> bool {
        self.id.is_none()
            && self.relevance.is_none()
            && self.keywords.is_empty()
            && self.status == Status::Screening
            && [
                self.employer.as_str(),
                self.position.as_str(),
                self.location.as_str(),
                self.applied_date.as_str(),
                self.job_description.as_str(),
                self.resume.as_str(),
                self.notes.as_str(),
                self.url.as_str(),
                self.updated_resume.as_str(),
                self.updated_resume_analysis.as_str(),
                self.latex_resume.as_str(),
                self.keyword_analysis.as_str(),
            ]
            .iter()
            .all(|s| s.is_empty())
    }
}
