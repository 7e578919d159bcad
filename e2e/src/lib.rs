//! End-to-end test framework for issue-probe.
//!
//! The tests in this crate talk to the real GitHub API and mutate a real
//! repository, so they only run when the `ISSUE_PROBE_E2E_*` variables point
//! at a sandbox repository the token may write to. Without them every test
//! logs a notice and returns early.
//!
//! # Usage
//!
//! ```rust,ignore
//! use issue_probe_e2e::LiveContext;
//!
//! #[tokio::test]
//! async fn test_list_issues() {
//!     let Some(ctx) = LiveContext::from_env().expect("Invalid e2e environment") else {
//!         return;
//!     };
//!     let issues = ctx.client().unwrap().get_all_issues(&ctx.repo).await.unwrap();
//!     assert!(!issues.is_empty());
//! }
//! ```

pub mod context;

pub use context::{LiveContext, unique_text};
