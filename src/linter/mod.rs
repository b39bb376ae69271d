mod engine;
mod report;
pub mod rules;

pub use engine::ScriptLinter;
pub use report::{BlockKind, FileFacts, FileIssue, RuleCategory, ViolationReport};

#[cfg(test)]
pub(crate) mod test_fixtures;

