//! JSON export/import of finished quiz sessions.
//! A report keeps the configuration, the questions in their quiz order and
//! every recorded answer, so a quiz can be reviewed or replayed later.

use crate::error::Result;
use crate::models::{QuizConfig, QuizQuestion, QuizResult, QuizSession};
use crate::quiz::summary::{ScoreSummary, summarize};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub exported_at: DateTime<Utc>,
    pub config: QuizConfig,
    pub questions: Vec<QuizQuestion>,
    pub results: Vec<QuizResult>,
    pub summary: ScoreSummary,
}

impl SessionReport {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            exported_at: Utc::now(),
            config: session.config().clone(),
            questions: session.questions().to_vec(),
            results: session.results().to_vec(),
            summary: summarize(session),
        }
    }

    /// A fresh session over the same questions, in the same order.
    pub fn replay(self) -> QuizSession {
        QuizSession::new(self.config, self.questions)
    }

    pub fn incorrect_results(&self) -> impl Iterator<Item = &QuizResult> {
        self.results.iter().filter(|result| !result.is_correct)
    }
}

/// Writes the session report as pretty JSON.
pub fn export_session_to_path<P: AsRef<Path>>(session: &QuizSession, path: P) -> Result<()> {
    let report = SessionReport::from_session(session);
    let json_string = serde_json::to_string_pretty(&report)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;
    info!(
        "Exported quiz report ({}%) to '{}'",
        report.summary.percentage,
        path.as_ref().display()
    );
    Ok(())
}

pub fn import_report<P: AsRef<Path>>(path: P) -> Result<SessionReport> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let report: SessionReport = serde_json::from_str(&contents)?;
    info!(
        "Imported quiz report with {} questions from '{}'",
        report.questions.len(),
        path.as_ref().display()
    );
    Ok(report)
}
