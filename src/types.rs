use std::collections::HashMap;

/// Identifies one page of the thread, starting from 1.
pub type JobId = u64;

/// Phrase counts produced by one worker for one job.
/// Handed to the collector by value and never touched again.
pub type PartialTable = HashMap<String, u32>;

/// Cumulative phrase counts across all jobs.
/// Owned exclusively by the collector until the pipeline completes.
pub type GlobalTable = HashMap<String, u32>;

/// One line of ranked output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub phrase: String,
    pub count: u32,
}

/// Builds the page URL for a job by appending the page number to the base URL.
pub fn job_url(base_url: &str, job: JobId) -> String {
    format!("{}{}", base_url, job)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_url_appends_page_number() {
        assert_eq!(
            job_url("https://forum.example.com/thread?page=", 17),
            "https://forum.example.com/thread?page=17"
        );
    }
}
