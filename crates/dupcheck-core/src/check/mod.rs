//! Duplicate check for a project about to be registered
//!
//! A check validates the request, takes a snapshot of every registered
//! project, scores the request against each one and reports the projects
//! at or above the threshold together with their owners. Whether a match
//! blocks registration is left to the caller.

mod outcome;

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, warn};

pub use outcome::{
    CheckOutcome, DuplicateReport, MatchedProject, DUPLICATE_MESSAGE, NO_CORPUS_MESSAGE,
    NO_DUPLICATE_MESSAGE,
};

use crate::config::CheckConfig;
use crate::error::{DupcheckError, Result};
use crate::project::{CheckRequest, Project};
use crate::similarity::{Document, SimilarityEngine};
use crate::store::{CorpusLoader, UserDirectory};
use crate::trace_time;

/// Valid projects taken from storage at the start of a check
#[derive(Debug, Clone, Default)]
struct Snapshot {
    projects: Vec<Project>,
    skipped: usize,
}

/// Score of one registered project against a request
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub project: Project,
    pub score: f64,
    /// Whether the score reaches the configured threshold
    pub matched: bool,
}

/// Scores of every registered project against a request
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    /// Entries in storage order
    pub entries: Vec<ScoreEntry>,
    pub threshold: f64,
    pub skipped: usize,
}

/// Runs duplicate checks against a corpus and a user directory
pub struct DuplicateChecker<'a, C: ?Sized, U: ?Sized> {
    corpus: &'a C,
    users: &'a U,
    config: CheckConfig,
}

impl<'a, C, U> DuplicateChecker<'a, C, U>
where
    C: CorpusLoader + ?Sized,
    U: UserDirectory + ?Sized,
{
    pub fn new(corpus: &'a C, users: &'a U, config: CheckConfig) -> Self {
        DuplicateChecker {
            corpus,
            users,
            config,
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check `request` against every registered project
    #[tracing::instrument(skip(self, request), fields(threshold = self.config.threshold))]
    pub fn check(&self, request: &CheckRequest) -> Result<CheckOutcome> {
        request.validate()?;

        let snapshot = self.load_snapshot()?;
        if snapshot.projects.is_empty() {
            debug!(skipped = snapshot.skipped, "no registered projects to compare");
            return Ok(CheckOutcome::NoCorpus {
                skipped: snapshot.skipped,
            });
        }

        let engine = self.build_engine(request, &snapshot.projects);
        let matches = engine.find_similar(self.config.threshold);
        debug!(
            compared = snapshot.projects.len(),
            matches = matches.len(),
            "scored corpus"
        );

        if matches.is_empty() {
            return Ok(CheckOutcome::NoDuplicate {
                compared: snapshot.projects.len(),
                skipped: snapshot.skipped,
            });
        }

        // Only owners of matched projects are looked up
        let mut seen = HashSet::new();
        let student_ids: Vec<String> = matches
            .iter()
            .map(|m| &snapshot.projects[m.position].student_id)
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        let students = self
            .users
            .find_students(&student_ids)
            .map_err(|e| match e {
                DupcheckError::DirectoryUnavailable { .. } => e,
                other => DupcheckError::directory(other),
            })?;

        let projects = matches
            .iter()
            .map(|m| {
                let project = snapshot.projects[m.position].clone();
                let student_name = students
                    .iter()
                    .find(|s| s.id == project.student_id)
                    .map(|s| s.name.clone());
                if student_name.is_none() {
                    debug!(
                        project = %project.id,
                        student = %project.student_id,
                        "owner not found in user directory"
                    );
                }
                MatchedProject {
                    project,
                    score: m.score,
                    student_name,
                }
            })
            .collect();

        Ok(CheckOutcome::Duplicates(DuplicateReport {
            projects,
            students,
            compared: snapshot.projects.len(),
            skipped: snapshot.skipped,
        }))
    }

    /// Score `request` against every registered project without filtering
    pub fn score_report(&self, request: &CheckRequest) -> Result<ScoreReport> {
        request.validate()?;

        let snapshot = self.load_snapshot()?;
        let threshold = self.config.threshold;
        if snapshot.projects.is_empty() {
            return Ok(ScoreReport {
                entries: Vec::new(),
                threshold,
                skipped: snapshot.skipped,
            });
        }

        let engine = self.build_engine(request, &snapshot.projects);
        let entries = engine
            .score_all()
            .into_iter()
            .zip(snapshot.projects)
            .map(|(scored, project)| ScoreEntry {
                project,
                score: scored.score,
                matched: scored.score >= threshold,
            })
            .collect();

        Ok(ScoreReport {
            entries,
            threshold,
            skipped: snapshot.skipped,
        })
    }

    fn load_snapshot(&self) -> Result<Snapshot> {
        let start = Instant::now();
        let stored = self.corpus.load_projects().map_err(|e| match e {
            DupcheckError::CorpusUnavailable { .. } => e,
            other => DupcheckError::corpus(other),
        })?;

        let mut snapshot = Snapshot::default();
        for record in stored {
            let id = record.id.clone();
            match record.validate() {
                Ok(project) => snapshot.projects.push(project),
                Err(reason) => {
                    warn!(project = %id, %reason, "skipping malformed project");
                    snapshot.skipped += 1;
                }
            }
        }

        trace_time!(start, "load_snapshot", projects = snapshot.projects.len());
        Ok(snapshot)
    }

    fn build_engine(&self, request: &CheckRequest, projects: &[Project]) -> SimilarityEngine {
        let start = Instant::now();
        let tokenizer = self.config.tokenizer_options();

        let query = Document::from_project(&request.title, &request.description, &tokenizer);
        let corpus: Vec<Document> = projects
            .iter()
            .map(|p| Document::from_project(&p.title, &p.description, &tokenizer))
            .collect();

        let engine = SimilarityEngine::new(&query, &corpus, self.config.model_options());
        trace_time!(
            start,
            "build_engine",
            documents = engine.model().total_docs(),
            terms = engine.model().vocabulary_len()
        );
        engine
    }
}
