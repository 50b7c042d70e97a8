use crate::extract::ExtractionPipeline;
use crate::model::ParsedFile;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{AcquireError, Semaphore};
use tokio::task::JoinError;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("Semaphore error: {0}")]
    Semaphore(#[from] AcquireError),
    #[error("Extraction task failed: {0}")]
    Join(#[from] JoinError),
}

/// Runs file extractions on the blocking pool with bounded concurrency.
///
/// Each file gets its own buffer and record; only the stateless pipeline
/// is shared between tasks.
#[derive(Debug, Clone)]
pub struct ExtractionExecutor {
    semaphore: Arc<Semaphore>,
    pipeline: Arc<ExtractionPipeline>,
}

impl ExtractionExecutor {
    pub fn new(concurrency_limit: usize) -> Self {
        Self::with_pipeline(ExtractionPipeline::standard(), concurrency_limit)
    }

    pub fn with_pipeline(pipeline: ExtractionPipeline, concurrency_limit: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(concurrency_limit.max(1))),
            pipeline: Arc::new(pipeline),
        }
    }

    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn execute(&self, path: PathBuf) -> Result<ParsedFile, ExecutorError> {
        let _permit = self.semaphore.acquire().await?;

        info!("Starting extraction");
        let pipeline = Arc::clone(&self.pipeline);
        let parsed = tokio::task::spawn_blocking(move || pipeline.parse_file(&path)).await?;
        info!(ecu = %parsed.filename.ecu, "Finished extraction");

        Ok(parsed)
    }

    /// Extracts every path concurrently; results keep the input order.
    #[instrument(skip(self, paths), fields(files = paths.len()))]
    pub async fn execute_batch(&self, paths: Vec<PathBuf>) -> Vec<Result<ParsedFile, ExecutorError>> {
        let handles: Vec<_> = paths
            .into_iter()
            .map(|path| {
                let executor = self.clone();
                tokio::spawn(async move { executor.execute(path).await })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(match handle.await {
                Ok(result) => result,
                Err(e) => Err(ExecutorError::Join(e)),
            });
        }

        info!(files = results.len(), "Batch finished");
        results
    }
}
