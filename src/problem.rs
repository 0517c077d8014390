use rulinalg::matrix::{BaseMatrix, Matrix};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationMode {
    Maximize,
    Minimize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProblemStatement {
    // Optimize objective^T x
    // subject to constraints[i][..n] . x (<= or >=) constraints[i][n]
    // and x >= 0.
    // Maximization expects <= rows, minimization expects >= rows.
    pub objective: Vec<f64>,
    pub constraints: Vec<Vec<f64>>,
    pub mode: OptimizationMode,
}

impl ProblemStatement {
    pub fn new(objective: Vec<f64>, constraints: Vec<Vec<f64>>, mode: OptimizationMode)
        -> Result<ProblemStatement, Error> {
        if objective.is_empty() {
            return Err(Error::EmptyObjective);
        }
        let expected = objective.len() + 1;
        for (row, constraint) in constraints.iter().enumerate() {
            if constraint.len() != expected {
                return Err(Error::ConstraintLength {
                    row: row,
                    expected: expected,
                    found: constraint.len(),
                });
            }
        }
        Ok(ProblemStatement {
            objective: objective,
            constraints: constraints,
            mode: mode,
        })
    }

    pub fn var_count(&self) -> usize {
        self.objective.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    // The constraint rows (coefficients and right-hand side) stacked on top
    // of the objective, which gets a right-hand side of 0.
    pub fn basic_matrix(&self) -> Matrix<f64> {
        let cols = self.var_count() + 1;
        let mut data = Vec::with_capacity((self.constraint_count() + 1) * cols);
        for constraint in self.constraints.iter() {
            data.extend_from_slice(constraint);
        }
        data.extend_from_slice(&self.objective);
        data.push(0.0);
        Matrix::new(self.constraint_count() + 1, cols, data)
    }

    pub fn dual_slack_form(&self) -> Matrix<f64> {
        // The dual of
        // Minimize c^T x
        // subject to Ax >= b, x >= 0
        // is
        // Maximize b^T y
        // subject to A^T y <= c, y >= 0.
        // Transposing the basic matrix puts A^T next to c, with b^T in the
        // last row. Each row then gets its identity column, and the b^T row
        // becomes the objective row with its coefficients negated.
        let a_t = self.basic_matrix().transpose();
        let rows = a_t.rows();
        let dual_vars = a_t.cols() - 1;
        let cols = dual_vars + rows + 1;

        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            let sign = if i == rows - 1 { -1.0 } else { 1.0 };
            for j in 0..dual_vars {
                data.push(sign * a_t[[i, j]]);
            }
            for k in 0..rows {
                data.push(if k == i { 1.0 } else { 0.0 });
            }
            data.push(a_t[[i, dual_vars]]);
        }
        Matrix::new(rows, cols, data)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub values: Vec<f64>,
    pub value: f64,
}

impl Solution {
    pub fn new(values: Vec<f64>, value: f64) -> Solution {
        Solution {
            values: values,
            value: value,
        }
    }

    // Every component and the objective value are +infinity.
    pub fn unbounded(var_count: usize) -> Solution {
        Solution {
            values: vec![f64::INFINITY; var_count],
            value: f64::INFINITY,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.value == f64::INFINITY && self.values.iter().all(|&v| v == f64::INFINITY)
    }
}

#[test]
fn rejects_empty_objective() {
    let result = ProblemStatement::new(vec![], vec![], OptimizationMode::Maximize);
    assert_eq!(result, Err(Error::EmptyObjective));
}

#[test]
fn rejects_short_constraint() {
    let result = ProblemStatement::new(
        vec![1.0, 2.0],
        vec![vec![1.0, 1.0, 4.0], vec![1.0, 3.0]],
        OptimizationMode::Maximize,
    );
    assert_eq!(result, Err(Error::ConstraintLength { row: 1, expected: 3, found: 2 }));
}

#[test]
fn basic_matrix() {
    let problem = ProblemStatement::new(
        vec![2.0, 3.0],
        vec![vec![1.0, 1.0, 4.0], vec![1.0, 3.0, 6.0]],
        OptimizationMode::Minimize,
    ).expect("Problem is well formed");
    let matrix = problem.basic_matrix();
    assert_eq!(matrix.rows(), 3);
    assert_eq!(matrix.cols(), 3);
    assert_eq!(matrix.data(),
               &vec![1.0, 1.0, 4.0,
                     1.0, 3.0, 6.0,
                     2.0, 3.0, 0.0]);
}

#[test]
fn dual_slack_form() {
    let problem = ProblemStatement::new(
        vec![2.0, 3.0],
        vec![vec![1.0, 1.0, 4.0], vec![1.0, 3.0, 6.0]],
        OptimizationMode::Minimize,
    ).expect("Problem is well formed");
    let dual = problem.dual_slack_form();
    assert_eq!(dual.rows(), 3);
    assert_eq!(dual.cols(), 6);
    assert_eq!(dual.data(),
               &vec![1.0, 1.0, 1.0, 0.0, 0.0, 2.0,
                     1.0, 3.0, 0.0, 1.0, 0.0, 3.0,
                     -4.0, -6.0, 0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn unbounded_sentinel() {
    let solution = Solution::unbounded(2);
    assert_eq!(solution.values, vec![f64::INFINITY, f64::INFINITY]);
    assert_eq!(solution.value, f64::INFINITY);
    assert!(solution.is_unbounded());
    assert!(!Solution::new(vec![4.0, 8.0], 400.0).is_unbounded());
}
