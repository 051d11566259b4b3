/// Terminal state of one job invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Success,
    Error,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Success => "success",
            JobStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CronJobRecord {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub schedule_text: Option<String>,
}

/// One appended execution record. Rows are written once and never updated.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CronJobLogRecord {
    pub id: i64,
    pub job_id: i64,
    pub status: String,
    pub response_text: Option<String>,
    pub duration_ms: Option<i64>,
    pub trigger_type: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct OrderRecord {
    pub id: String,
    pub status: String,
    pub total: f64,
    pub created_at: String,
    pub updated_at: String,
}
