use thiserror::Error;

/// The error type returned by every fallible statistical function in
/// the library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinomStatError {
    /// The arguments violated some of the function preconditions.
    /// Maybe `p` was not a probability (it must belong to `[0, 1]`), `k` or `x`
    /// was outside `0..=n`, a sample was empty, a trial count was 0 when the
    /// function divides by it, or the expected proportions did not match the
    /// number of groups.
    #[error(
        "The arguments violated some of the function preconditions. Maybe `p` was not a probability (it must belong to `[0, 1]`), `k`/`x` was outside `0..=n`, a sample was empty or a trial count was 0. "
    )]
    InvalidParameter,
    /// The sample had exactly zero variance, so the method of moments cannot
    /// separate `n` from `p`.
    #[error(
        "The sample had exactly zero variance, so the method of moments cannot separate `n` from `p`. Provide a more varied sample. "
    )]
    DegenerateInput,
    /// An operation that needs simulation results was called before
    /// `run_simulation()`.
    #[error(
        "An operation that needs simulation results was called before `run_simulation()`. "
    )]
    InvalidState,
    /// There was an error when performing some numerical computation.
    /// Overflow/underflow/division by 0
    #[error(
        "There was an error when performing some numerical computation. Overflow/underflow/division by 0"
    )]
    NumericalError,
}

/// An enum that indicates what went wrong while reading sample data
/// from a flat file.
#[derive(Error, Debug)]
pub enum DataError {
    /// The file could not be opened or read.
    #[error("The file could not be opened or read: {0}")]
    Io(#[from] std::io::Error),
    /// A line (or cell) did not contain a non-negative integer.
    #[error("Line {line} does not contain a non-negative integer: `{content}`")]
    Parse { line: usize, content: String },
    /// The csv file does not have the requested column.
    #[error("The csv file does not have the requested column `{0}`")]
    MissingColumn(String),
    /// A csv row has fewer cells than the header.
    #[error("Row {0} has fewer cells than the header. ")]
    RaggedRow(usize),
}
