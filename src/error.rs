use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("tableau has no rows or no columns")]
    EmptyTableau,
    #[error("tableau row {row} has {found} entries, expected {expected}")]
    RaggedTableau {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tableau with {rows} rows has only {cols} columns; it needs a variable column, {rows} identity columns and a right-hand side")]
    NarrowTableau { rows: usize, cols: usize },
    #[error("objective function has no coefficients")]
    EmptyObjective,
    #[error("constraint {row} has {found} entries, expected {expected}")]
    ConstraintLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("pivot row {row} is out of range for a tableau with {rows} rows")]
    InvalidPivotRow { row: usize, rows: usize },
    #[error("pivot column {column} is out of range for a tableau with {cols} columns")]
    InvalidPivotColumn { column: usize, cols: usize },
    #[error("pivot element at ({row}, {column}) is zero")]
    ZeroPivot { row: usize, column: usize },
    #[error("constraint {row} has negative right-hand side {value}; the origin is not a feasible start")]
    NegativeRightHandSide { row: usize, value: f64 },
    #[error("variable {var} has negative cost {value}; minimization requires non-negative costs")]
    NegativeCost { var: usize, value: f64 },
    #[error("free variable {var} has cost {value}; minimization only allows free variables with zero cost")]
    FreeVariableCost { var: usize, value: f64 },
    #[error("variable {var} was never declared")]
    UnknownVariable { var: usize },
    #[error("no optimum reached after {iterations} pivots")]
    IterationLimit { iterations: usize },
}
