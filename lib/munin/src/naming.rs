//! File naming convention shared with the upstream map stage. Pure
//! functions; the runtime joins the returned names onto its working
//! directory.

const TMP_PREFIX: &str = "mrtmp.";

/// Name of the intermediate partition that map task `map_task` produced for
/// reduce bucket `reduce_task`.
pub fn reduce_name(job_name: &str, map_task: usize, reduce_task: usize) -> String {
    format!("{TMP_PREFIX}{job_name}-{map_task}-{reduce_task}")
}

/// Default name of a reduce task's output artifact.
pub fn result_name(job_name: &str, reduce_task: usize) -> String {
    format!("{TMP_PREFIX}{job_name}-res-{reduce_task}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_names_follow_convention() {
        assert_eq!(reduce_name("test", 1, 2), "mrtmp.test-1-2");
        assert_eq!(reduce_name("wc", 0, 0), "mrtmp.wc-0-0");
    }

    #[test]
    fn result_names_follow_convention() {
        assert_eq!(result_name("test", 2), "mrtmp.test-res-2");
    }
}
