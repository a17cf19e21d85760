/// Errors returned when submitting the active guess row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("row {row} is incomplete: column {col} is unset")]
    IncompleteRow { row: usize, col: usize },

    #[error("row {row} has already been submitted")]
    AlreadySubmitted { row: usize },
}
