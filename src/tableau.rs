use std::fmt;

use rulinalg::matrix::{BaseMatrix, Matrix};

use crate::error::Error;
use crate::problem::{OptimizationMode, ProblemStatement};

// Layout of a tableau with n decision variables and r rows:
//   columns 0 .. n        decision variable coefficients
//   columns n .. n+r      identity block, one column per row
//   column  n+r           right-hand side
// The last row is the objective row. Every tableau has at least r + 1
// columns, and `from_rows` requires at least one variable column as well.
#[derive(Clone)]
pub struct Tableau {
    matrix: Matrix<f64>,
}

impl Tableau {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Tableau, Error> {
        let cols = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(Error::EmptyTableau),
        };
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedTableau {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        if cols < rows.len() + 2 {
            return Err(Error::NarrowTableau {
                rows: rows.len(),
                cols: cols,
            });
        }
        Ok(Tableau {
            matrix: Matrix::new(rows.len(), cols, data),
        })
    }

    pub fn build(objective: &[f64], constraints: &[Vec<f64>], mode: OptimizationMode)
        -> Result<Tableau, Error> {
        let problem = ProblemStatement::new(objective.to_vec(), constraints.to_vec(), mode)?;
        Ok(Tableau::from_problem(&problem))
    }

    pub fn from_problem(problem: &ProblemStatement) -> Tableau {
        let matrix = match problem.mode {
            OptimizationMode::Maximize => slack_form(problem),
            OptimizationMode::Minimize => problem.dual_slack_form(),
        };
        Tableau { matrix: matrix }
    }

    pub fn rows(&self) -> usize {
        self.matrix.rows()
    }

    pub fn cols(&self) -> usize {
        self.matrix.cols()
    }

    pub fn rhs_col(&self) -> usize {
        self.cols() - 1
    }

    pub fn objective_row_index(&self) -> usize {
        self.rows() - 1
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.matrix[[row, col]]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let cols = self.cols();
        &self.matrix.data()[row * cols..(row + 1) * cols]
    }

    pub fn objective_row(&self) -> &[f64] {
        self.row(self.objective_row_index())
    }

    pub fn rhs(&self, row: usize) -> f64 {
        self.matrix[[row, self.rhs_col()]]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows()).map(|r| self.row(r).to_vec()).collect()
    }

    /// If `col` is a unit column (a single 1, zeros elsewhere), returns the
    /// row holding the 1.
    pub fn basic_row(&self, col: usize) -> Option<usize> {
        let mut one_row = None;
        for r in 0..self.rows() {
            let v = self.matrix[[r, col]];
            if v == 1.0 && one_row.is_none() {
                one_row = Some(r);
            } else if v != 0.0 {
                return None;
            }
        }
        one_row
    }

    /// Gauss-Jordan elimination around the entry at (`row`, `column`).
    ///
    /// The pivot row is divided by the pivot element, then a multiple of the
    /// normalized row is subtracted from every other row so that the pivot
    /// column becomes a unit column.
    pub fn pivot_at(&mut self, row: usize, column: usize) -> Result<(), Error> {
        let rows = self.rows();
        let cols = self.cols();
        if row >= rows {
            return Err(Error::InvalidPivotRow { row: row, rows: rows });
        }
        if column >= cols {
            return Err(Error::InvalidPivotColumn { column: column, cols: cols });
        }
        let pivot = self.matrix[[row, column]];
        if pivot == 0.0 {
            return Err(Error::ZeroPivot { row: row, column: column });
        }

        // Every other row is reduced against the normalized copy.
        let pivot_row: Vec<f64> = self.row(row).iter().map(|v| v / pivot).collect();
        for (c, &v) in pivot_row.iter().enumerate() {
            self.matrix[[row, c]] = v;
        }

        for r in 0..rows {
            if r == row {
                continue;
            }
            let factor = self.matrix[[r, column]];
            if factor == 0.0 {
                continue;
            }
            for (c, &v) in pivot_row.iter().enumerate() {
                self.matrix[[r, c]] -= factor * v;
            }
        }
        Ok(())
    }
}

impl PartialEq for Tableau {
    fn eq(&self, other: &Tableau) -> bool {
        self.rows() == other.rows() && self.matrix.data() == other.matrix.data()
    }
}

impl fmt::Debug for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Tableau")
            .field("rows", &self.to_rows())
            .finish()
    }
}

// Each constraint row gets its own slack column, followed by the objective
// row's unit column.
fn slack_form(problem: &ProblemStatement) -> Matrix<f64> {
    let n = problem.var_count();
    let m = problem.constraint_count();
    let rows = m + 1;
    let cols = n + rows + 1;

    let mut data = Vec::with_capacity(rows * cols);
    for (i, constraint) in problem.constraints.iter().enumerate() {
        data.extend_from_slice(&constraint[..n]);
        for k in 0..rows {
            data.push(if k == i { 1.0 } else { 0.0 });
        }
        data.push(constraint[n]);
    }
    data.extend(problem.objective.iter().map(|&c| -c));
    for k in 0..rows {
        data.push(if k == m { 1.0 } else { 0.0 });
    }
    data.push(0.0);
    Matrix::new(rows, cols, data)
}

#[test]
fn from_rows_rejects_empty() {
    assert_eq!(Tableau::from_rows(vec![]), Err(Error::EmptyTableau));
    assert_eq!(Tableau::from_rows(vec![vec![]]), Err(Error::EmptyTableau));
}

#[test]
fn from_rows_rejects_ragged() {
    let result = Tableau::from_rows(vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 12.0],
        vec![2.0, 1.0, 0.0, 1.0, 0.0, 16.0],
        vec![-40.0, -30.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(result, Err(Error::RaggedTableau { row: 2, expected: 6, found: 5 }));
}

#[test]
fn from_rows_rejects_narrow() {
    assert_eq!(Tableau::from_rows(vec![vec![1.0], vec![-1.0]]),
               Err(Error::NarrowTableau { rows: 2, cols: 1 }));
    assert_eq!(Tableau::from_rows(vec![vec![1.0, 0.0, 5.0], vec![0.0, 1.0, 3.0]]),
               Err(Error::NarrowTableau { rows: 2, cols: 3 }));
    assert!(Tableau::from_rows(vec![vec![1.0, 1.0, 0.0, 5.0], vec![-1.0, 0.0, 1.0, 0.0]]).is_ok());
}

#[test]
fn build_maximize() {
    let tableau = Tableau::build(
        &[40.0, 30.0],
        &[vec![1.0, 1.0, 12.0], vec![2.0, 1.0, 16.0]],
        OptimizationMode::Maximize,
    ).expect("Problem is well formed");
    assert_eq!(tableau.to_rows(), vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 12.0],
        vec![2.0, 1.0, 0.0, 1.0, 0.0, 16.0],
        vec![-40.0, -30.0, 0.0, 0.0, 1.0, 0.0],
    ]);
}

#[test]
fn build_minimize() {
    let tableau = Tableau::build(
        &[2.0, 3.0],
        &[vec![1.0, 1.0, 4.0], vec![1.0, 3.0, 6.0]],
        OptimizationMode::Minimize,
    ).expect("Problem is well formed");
    assert_eq!(tableau.to_rows(), vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 2.0],
        vec![1.0, 3.0, 0.0, 1.0, 0.0, 3.0],
        vec![-4.0, -6.0, 0.0, 0.0, 1.0, 0.0],
    ]);
}

#[test]
fn build_shape() {
    let objective = vec![1.0, 2.0, 3.0];
    let constraints = vec![
        vec![1.0, 0.0, 0.0, 5.0],
        vec![0.0, 1.0, 0.0, 5.0],
        vec![0.0, 0.0, 1.0, 5.0],
        vec![1.0, 1.0, 1.0, 9.0],
        vec![2.0, 1.0, 0.0, 7.0],
    ];
    let (n, m) = (objective.len(), constraints.len());

    let max = Tableau::build(&objective, &constraints, OptimizationMode::Maximize)
        .expect("Problem is well formed");
    assert_eq!(max.rows(), m + 1);
    assert_eq!(max.cols(), n + m + 2);

    // Rows of the dual tableau correspond to the primal variables.
    let min = Tableau::build(&objective, &constraints, OptimizationMode::Minimize)
        .expect("Problem is well formed");
    assert_eq!(min.rows(), n + 1);
    assert_eq!(min.cols(), n + m + 2);
}

#[test]
fn build_rejects_bad_constraint() {
    let result = Tableau::build(&[1.0, 1.0], &[vec![1.0, 4.0]], OptimizationMode::Maximize);
    assert_eq!(result, Err(Error::ConstraintLength { row: 0, expected: 3, found: 2 }));
}

#[test]
fn basic_row() {
    let tableau = Tableau::from_rows(vec![
        vec![0.0, 5.0, 1.0, 2.0, 0.0, 18.0],
        vec![1.0, 0.0, 0.0, 1.0, 0.0, 8.0],
        vec![0.0, 4.0, 0.0, 3.0, 1.0, 24.0],
    ]).expect("Tableau is rectangular");
    assert_eq!(tableau.basic_row(0), Some(1));
    assert_eq!(tableau.basic_row(1), None);
    assert_eq!(tableau.basic_row(2), Some(0));
    assert_eq!(tableau.basic_row(3), None);
    assert_eq!(tableau.basic_row(4), Some(2));
}

#[test]
fn pivot_at_invalid_position() {
    let mut tableau = Tableau::from_rows(vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 12.0],
        vec![2.0, 1.0, 0.0, 1.0, 0.0, 16.0],
        vec![-40.0, -30.0, 0.0, 0.0, 1.0, 0.0],
    ]).expect("Tableau is rectangular");
    let original = tableau.clone();
    assert_eq!(tableau.pivot_at(42, 0), Err(Error::InvalidPivotRow { row: 42, rows: 3 }));
    assert_eq!(tableau.pivot_at(3, 0), Err(Error::InvalidPivotRow { row: 3, rows: 3 }));
    assert_eq!(tableau.pivot_at(1, 42), Err(Error::InvalidPivotColumn { column: 42, cols: 6 }));
    assert_eq!(tableau.pivot_at(0, 3), Err(Error::ZeroPivot { row: 0, column: 3 }));
    assert_eq!(tableau, original);
}

#[test]
fn pivot_at_basic_column_is_noop() {
    let mut tableau = Tableau::from_rows(vec![
        vec![0.0, 0.5, 1.0, -0.5, 0.0, 4.0],
        vec![1.0, 0.5, 0.0, 0.5, 0.0, 8.0],
        vec![0.0, -10.0, 0.0, 20.0, 1.0, 320.0],
    ]).expect("Tableau is rectangular");
    let original = tableau.clone();
    tableau.pivot_at(1, 0).expect("Pivot position is valid");
    assert_eq!(tableau, original);
}

#[test]
fn pivot_at() {
    let mut tableau = Tableau::from_rows(vec![
        vec![0.0, 0.5, 1.0, -0.5, 0.0, 4.0],
        vec![1.0, 0.5, 0.0, 0.5, 0.0, 8.0],
        vec![0.0, -10.0, 0.0, 20.0, 1.0, 320.0],
    ]).expect("Tableau is rectangular");
    tableau.pivot_at(0, 1).expect("Pivot position is valid");
    assert_eq!(tableau.to_rows(), vec![
        vec![0.0, 1.0, 2.0, -1.0, 0.0, 8.0],
        vec![1.0, 0.0, -1.0, 1.0, 0.0, 4.0],
        vec![0.0, 0.0, 20.0, 10.0, 1.0, 400.0],
    ]);
    assert_eq!(tableau.basic_row(1), Some(0));
}

#[test]
fn pivot_at_negative_entries_in_column() {
    let mut tableau = Tableau::from_rows(vec![
        vec![0.0, 2.0, 1.0, -2.0, 0.0, 4.0],
        vec![1.0, -2.0, 0.0, 0.5, 0.0, 8.0],
        vec![0.0, -10.0, 0.0, 20.0, 1.0, 320.0],
    ]).expect("Tableau is rectangular");
    tableau.pivot_at(0, 1).expect("Pivot position is valid");
    assert_eq!(tableau.to_rows(), vec![
        vec![0.0, 1.0, 0.5, -1.0, 0.0, 2.0],
        vec![1.0, 0.0, 1.0, -1.5, 0.0, 12.0],
        vec![0.0, 0.0, 5.0, 10.0, 1.0, 340.0],
    ]);
}
