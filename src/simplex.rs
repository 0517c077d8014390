use log::{debug, trace};

#[cfg(test)]
use approx::assert_abs_diff_eq;

use crate::error::Error;
use crate::options::{PivotRule, SolverOptions};
use crate::problem::{OptimizationMode, Solution};
use crate::tableau::Tableau;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotPosition {
    // No entering column.
    Optimal,
    // An entering column with no valid leaving row.
    Unbounded { column: usize },
    Pivot { row: usize, column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotResult {
    Pivoted,
    Optimal,
    Unbounded,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Simplex {
    options: SolverOptions,
}

impl Simplex {
    pub fn new(options: SolverOptions) -> Simplex {
        Simplex { options: options }
    }

    pub fn can_be_improved(&self, tableau: &Tableau) -> bool {
        let objective = tableau.objective_row();
        objective[..tableau.rhs_col()].iter().any(|&v| v < -self.options.tolerance)
    }

    pub fn pivot_column(&self, tableau: &Tableau) -> Option<usize> {
        let objective = tableau.objective_row();
        let mut column: Option<usize> = None;
        for (i, &v) in objective[..tableau.rhs_col()].iter().enumerate() {
            if v >= -self.options.tolerance {
                continue;
            }
            match self.options.pivot_rule {
                PivotRule::Bland => return Some(i),
                PivotRule::Dantzig => match column {
                    Some(c) if objective[c] <= v => {},
                    _ => column = Some(i),
                },
            }
        }
        column
    }

    // Minimum-ratio test over the constraint rows. Only positive entries in
    // the pivot column with a strictly positive quotient qualify.
    pub fn pivot_row(&self, tableau: &Tableau, column: usize) -> Option<usize> {
        let mut leaving_row = None;
        let mut limiting_ratio = None;
        for r in 0..tableau.objective_row_index() {
            let entry = tableau.get(r, column);
            if entry <= self.options.tolerance {
                continue;
            }
            let ratio = tableau.rhs(r) / entry;
            if !(ratio > 0.0) || ratio == f64::INFINITY {
                continue;
            }
            match limiting_ratio {
                Some(limit) if limit <= ratio => {},
                _ => {
                    leaving_row = Some(r);
                    limiting_ratio = Some(ratio);
                },
            }
        }
        leaving_row
    }

    pub fn pivot_position(&self, tableau: &Tableau) -> PivotPosition {
        let column = match self.pivot_column(tableau) {
            Some(c) => c,
            None => return PivotPosition::Optimal,
        };
        match self.pivot_row(tableau, column) {
            Some(row) => PivotPosition::Pivot { row: row, column: column },
            None => PivotPosition::Unbounded { column: column },
        }
    }

    pub fn step(&self, tableau: &mut Tableau) -> Result<PivotResult, Error> {
        match self.pivot_position(tableau) {
            PivotPosition::Optimal => Ok(PivotResult::Optimal),
            PivotPosition::Unbounded { column } => {
                debug!("column {} can enter the basis but no row limits it", column);
                Ok(PivotResult::Unbounded)
            },
            PivotPosition::Pivot { row, column } => {
                trace!("pivoting on ({}, {}) = {}", row, column, tableau.get(row, column));
                tableau.pivot_at(row, column)?;
                Ok(PivotResult::Pivoted)
            },
        }
    }

    /// Applies one pivot if there is a valid pivot position. Returns whether
    /// the tableau was changed.
    pub fn perform_pivoting(&self, tableau: &mut Tableau) -> bool {
        match self.step(tableau) {
            Ok(PivotResult::Pivoted) => true,
            Ok(PivotResult::Optimal) | Ok(PivotResult::Unbounded) => false,
            Err(e) => {
                debug!("pivot failed: {}", e);
                false
            },
        }
    }

    pub fn run(&self, tableau: &mut Tableau, mode: OptimizationMode)
        -> Result<Solution, Error> {
        debug!(
            "starting simplex: mode: {:?}, rows: {}, cols: {}, rule: {:?}",
            mode,
            tableau.rows(),
            tableau.cols(),
            self.options.pivot_rule,
        );
        let mut iterations = 0;
        while self.can_be_improved(tableau) {
            if iterations >= self.options.max_iterations {
                debug!("giving up after {} pivots", iterations);
                return Err(Error::IterationLimit { iterations: iterations });
            }
            match self.step(tableau)? {
                PivotResult::Pivoted => iterations += 1,
                PivotResult::Unbounded => {
                    return Ok(Solution::unbounded(var_count(tableau, mode)));
                },
                PivotResult::Optimal => break,
            }
        }
        let solution = get_solution(tableau, mode);
        debug!("optimum {} after {} pivots", solution.value, iterations);
        Ok(solution)
    }
}

// Number of decision variables the caller sees for a tableau built in
// `mode`. Tableaux always have at least rows + 1 columns, so neither
// count underflows.
fn var_count(tableau: &Tableau, mode: OptimizationMode) -> usize {
    match mode {
        OptimizationMode::Maximize => tableau.cols() - tableau.rows() - 1,
        OptimizationMode::Minimize => tableau.rows() - 1,
    }
}

/// Reads the solution off a tableau on which no further pivot improves the
/// objective.
pub fn get_solution(tableau: &Tableau, mode: OptimizationMode) -> Solution {
    let n = var_count(tableau, mode);
    let objective = tableau.objective_row();
    let values = match mode {
        OptimizationMode::Maximize => {
            (0..n)
                .map(|col| match tableau.basic_row(col) {
                    Some(row) => tableau.rhs(row),
                    None => 0.0,
                })
                .collect()
        },
        OptimizationMode::Minimize => {
            // The dual tableau has n + m + 2 columns: m dual variables, then
            // one identity column per primal variable, the objective's unit
            // column and the right-hand side. The reduced costs of the
            // identity columns are the primal values. This offset only holds
            // for the layout built by `ProblemStatement::dual_slack_form`.
            let offset = tableau.cols() - n - 2;
            objective[offset..offset + n].to_vec()
        },
    };
    Solution::new(values, objective[tableau.rhs_col()])
}

/// Runs the simplex method on `tableau` with the default options.
/// The tableau is left in its final state.
pub fn solve(tableau: &mut Tableau, mode: OptimizationMode) -> Result<Solution, Error> {
    Simplex::default().run(tableau, mode)
}

#[cfg(test)]
fn tableau(rows: Vec<Vec<f64>>) -> Tableau {
    Tableau::from_rows(rows).expect("Tableau is rectangular")
}

#[test]
fn pivot_column_single_row() {
    let t = tableau(vec![vec![0.0, 0.0, 20.0, 10.0, 1.0, 400.0]]);
    assert_eq!(Simplex::default().pivot_column(&t), None);
}

#[test]
fn pivot_column_optimal() {
    let t = tableau(vec![
        vec![0.0, 1.0, 2.0, -1.0, 0.0, 8.0],
        vec![1.0, 0.0, -1.0, 1.0, 0.0, 4.0],
        vec![0.0, 0.0, 20.0, 10.0, 1.0, 400.0],
    ]);
    let simplex = Simplex::default();
    assert_eq!(simplex.pivot_column(&t), None);
    assert_eq!(simplex.pivot_position(&t), PivotPosition::Optimal);
    assert!(!simplex.can_be_improved(&t));
}

#[test]
fn pivot_column_single_negative() {
    let t = tableau(vec![
        vec![0.0, 0.5, 1.0, -0.5, 0.0, 4.0],
        vec![1.0, 0.5, 0.0, 1.5, 0.0, 8.0],
        vec![0.0, -10.0, 0.0, 20.0, 1.0, 320.0],
    ]);
    assert_eq!(Simplex::default().pivot_column(&t), Some(1));
}

#[test]
fn pivot_column_most_negative() {
    let t = tableau(vec![
        vec![0.0, 0.5, 1.0, -0.5, 0.0, 4.0],
        vec![1.0, 0.5, 0.0, 0.5, 0.0, 8.0],
        vec![1.0, -30.0, -40.0, 0.0, 1.0, 0.0],
    ]);
    assert_eq!(Simplex::default().pivot_column(&t), Some(2));
    let bland = Simplex::new(SolverOptions::new().pivot_rule(PivotRule::Bland));
    assert_eq!(bland.pivot_column(&t), Some(1));
}

#[test]
fn pivot_column_ties_take_earliest() {
    let t = tableau(vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 4.0],
        vec![1.0, 3.0, 0.0, 1.0, 0.0, 6.0],
        vec![-3.0, -3.0, 0.0, 0.0, 1.0, 0.0],
    ]);
    assert_eq!(Simplex::default().pivot_column(&t), Some(0));
}

#[test]
fn pivot_column_ignores_rhs() {
    let t = tableau(vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 4.0],
        vec![1.0, 3.0, 0.0, 1.0, 0.0, 6.0],
        vec![0.0, 0.0, 0.0, 0.0, 1.0, -5.0],
    ]);
    let simplex = Simplex::default();
    assert_eq!(simplex.pivot_column(&t), None);
    assert!(!simplex.can_be_improved(&t));
}

#[test]
fn pivot_column_tolerance() {
    let t = tableau(vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 4.0],
        vec![0.0, -1e-12, 0.0, 0.0, 1.0, 0.0],
    ]);
    assert_eq!(Simplex::default().pivot_column(&t), Some(1));
    let tolerant = Simplex::new(SolverOptions::new().tolerance(1e-9));
    assert_eq!(tolerant.pivot_column(&t), None);
    assert!(!tolerant.can_be_improved(&t));
}

#[test]
fn pivot_row_all_quotients_ignored() {
    let t = tableau(vec![
        vec![0.0, 0.5, -1.0, -0.5, 0.0, 4.0], // negative entry
        vec![1.0, 0.5, 0.0, 0.5, 0.0, 8.0],   // zero entry
        vec![1.0, 0.5, 1.0, 0.5, 0.0, 0.0],   // zero quotient
        vec![1.0, -30.0, -40.0, 0.0, 1.0, 0.0],
    ]);
    let simplex = Simplex::default();
    assert_eq!(simplex.pivot_row(&t, 2), None);
    assert_eq!(simplex.pivot_position(&t), PivotPosition::Unbounded { column: 2 });
    assert!(simplex.can_be_improved(&t));
}

#[test]
fn pivot_row_minimum_ratio() {
    let t = tableau(vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 12.0], // 12 / 1 = 12
        vec![2.0, 1.0, 0.0, 1.0, 0.0, 16.0], // 16 / 2 = 8
        vec![-40.0, -30.0, 0.0, 0.0, 1.0, 0.0],
    ]);
    let simplex = Simplex::default();
    assert_eq!(simplex.pivot_row(&t, 0), Some(1));
    assert_eq!(simplex.pivot_position(&t), PivotPosition::Pivot { row: 1, column: 0 });
}

#[test]
fn pivot_row_ties_take_earliest() {
    let t = tableau(vec![
        vec![2.0, 1.0, 1.0, 0.0, 0.0, 0.0, 8.0],
        vec![1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 4.0],
        vec![-1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    ]);
    assert_eq!(Simplex::default().pivot_row(&t, 0), Some(0));
}

#[test]
fn perform_pivoting_applies_one_pivot() {
    let mut t = tableau(vec![
        vec![0.0, 0.5, 1.0, -0.5, 0.0, 4.0],
        vec![1.0, 0.5, 0.0, 0.5, 0.0, 8.0],
        vec![0.0, -10.0, 0.0, 20.0, 1.0, 320.0],
    ]);
    assert!(Simplex::default().perform_pivoting(&mut t));
    assert_eq!(t.to_rows(), vec![
        vec![0.0, 1.0, 2.0, -1.0, 0.0, 8.0],
        vec![1.0, 0.0, -1.0, 1.0, 0.0, 4.0],
        vec![0.0, 0.0, 20.0, 10.0, 1.0, 400.0],
    ]);
    // The entering column is a unit column afterwards.
    assert_eq!(t.basic_row(1), Some(0));
}

#[test]
fn perform_pivoting_optimal_is_noop() {
    let mut t = tableau(vec![
        vec![0.0, 1.0, 2.0, -1.0, 0.0, 8.0],
        vec![1.0, 0.0, -1.0, 1.0, 0.0, 4.0],
        vec![0.0, 0.0, 20.0, 10.0, 1.0, 400.0],
    ]);
    let original = t.clone();
    let simplex = Simplex::default();
    assert!(!simplex.perform_pivoting(&mut t));
    assert_eq!(t, original);
    assert_eq!(simplex.step(&mut t), Ok(PivotResult::Optimal));
    assert_eq!(t, original);
}

#[test]
fn perform_pivoting_unbounded_is_noop() {
    let mut t = tableau(vec![
        vec![1.0, 0.0, 1.0, 0.0, 0.0, 7.0],
        vec![0.0, -1.0, -1.0, 1.0, 0.0, 1.0],
        vec![0.0, -4.0, 5.0, 0.0, 1.0, 35.0],
    ]);
    let original = t.clone();
    let simplex = Simplex::default();
    assert!(!simplex.perform_pivoting(&mut t));
    assert_eq!(simplex.step(&mut t), Ok(PivotResult::Unbounded));
    assert_eq!(t, original);
}

#[test]
fn get_solution_non_basic_column() {
    let t = tableau(vec![
        vec![0.0, 5.0, 1.0, 2.0, 0.0, 18.0],
        vec![1.0, 0.0, 0.0, 1.0, 0.0, 8.0],
        vec![0.0, 4.0, 0.0, 3.0, 1.0, 24.0],
    ]);
    let solution = get_solution(&t, OptimizationMode::Maximize);
    assert_eq!(solution, Solution::new(vec![8.0, 0.0], 24.0));
}

#[test]
fn get_solution_all_basic() {
    let t = tableau(vec![
        vec![0.0, 1.0, 2.0, -1.0, 0.0, 8.0],
        vec![1.0, 0.0, -1.0, 1.0, 0.0, 4.0],
        vec![0.0, 0.0, 20.0, 10.0, 1.0, 400.0],
    ]);
    let solution = get_solution(&t, OptimizationMode::Maximize);
    assert_eq!(solution, Solution::new(vec![4.0, 8.0], 400.0));
}

#[test]
fn get_solution_minimize_reads_objective_row() {
    let t = tableau(vec![
        vec![1.0, 0.0, 1.5, -0.5, 0.0, 1.5],
        vec![0.0, 1.0, -0.5, 0.5, 0.0, 0.5],
        vec![0.0, 0.0, 3.0, 1.0, 1.0, 9.0],
    ]);
    let solution = get_solution(&t, OptimizationMode::Minimize);
    assert_eq!(solution, Solution::new(vec![3.0, 1.0], 9.0));
}

#[test]
fn solve_prebuilt_tableaux() {
    let mut t = tableau(vec![
        vec![-2.0, 1.0, 1.0, 0.0, 0.0, 2.0],
        vec![1.0, 2.0, 0.0, 1.0, 0.0, 8.0],
        vec![-3.0, -2.0, 0.0, 0.0, 1.0, 0.0],
    ]);
    let solution = solve(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![8.0, 0.0], 24.0));

    let mut t = tableau(vec![
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 12.0],
        vec![2.0, 1.0, 0.0, 1.0, 0.0, 16.0],
        vec![-40.0, -30.0, 0.0, 0.0, 1.0, 0.0],
    ]);
    let solution = solve(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![4.0, 8.0], 400.0));
}

#[test]
fn minimize_without_constraints() {
    // The dual tableau has no dual variables, only the identity block and
    // the right-hand side.
    let mut t = Tableau::build(&[2.0, 3.0], &[], OptimizationMode::Minimize)
        .expect("Problem is well formed");
    assert_eq!(t.rows(), 3);
    assert_eq!(t.cols(), 4);
    let solution = solve(&mut t, OptimizationMode::Minimize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![0.0, 0.0], 0.0));
}

#[test]
fn narrow_tableau_never_reaches_solve() {
    for rows in [vec![vec![1.0], vec![-1.0]],
                 vec![vec![1.0, 0.0, 5.0], vec![0.0, 1.0, 3.0]]].iter() {
        let result = Tableau::from_rows(rows.clone());
        assert!(match result {
            Err(Error::NarrowTableau { .. }) => true,
            _ => false,
        });
    }

    // The narrowest accepted tableau has one variable column.
    let mut t = tableau(vec![
        vec![1.0, 1.0, 0.0, 5.0],
        vec![-1.0, 0.0, 1.0, 0.0],
    ]);
    let solution = solve(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![5.0], 5.0));
    let mut t = tableau(vec![
        vec![1.0, 1.0, 0.0, 5.0],
        vec![-1.0, 0.0, 1.0, 0.0],
    ]);
    let solution = solve(&mut t, OptimizationMode::Minimize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![1.0], 5.0));
}

#[test]
fn iteration_limit() {
    let mut t = Tableau::build(
        &[40.0, 30.0],
        &[vec![1.0, 1.0, 12.0], vec![2.0, 1.0, 16.0]],
        OptimizationMode::Maximize,
    ).expect("Problem is well formed");
    let simplex = Simplex::new(SolverOptions::new().max_iterations(1));
    assert_eq!(simplex.run(&mut t, OptimizationMode::Maximize),
               Err(Error::IterationLimit { iterations: 1 }));

    // The tableau is left after the first pivot, so a fresh run finishes it.
    let solution = solve(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![4.0, 8.0], 400.0));
}

#[cfg(test)]
fn assert_optimal(t: &Tableau) {
    let objective = t.objective_row();
    for &v in objective[..t.rhs_col()].iter() {
        assert!(v >= 0.0);
    }
}

#[test]
fn maximize_vertex_at_axis() {
    // Maximize 3x + 2y subject to x + y <= 4, x + 3y <= 6
    let mut t = Tableau::build(
        &[3.0, 2.0],
        &[vec![1.0, 1.0, 4.0], vec![1.0, 3.0, 6.0]],
        OptimizationMode::Maximize,
    ).expect("Problem is well formed");
    let solution = solve(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![4.0, 0.0], 12.0));
    assert_optimal(&t);
    assert_eq!(t.basic_row(0), Some(0));
}

#[test]
fn maximize_two_pivots() {
    let mut t = Tableau::build(
        &[40.0, 30.0],
        &[vec![1.0, 1.0, 12.0], vec![2.0, 1.0, 16.0]],
        OptimizationMode::Maximize,
    ).expect("Problem is well formed");
    let solution = solve(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![4.0, 8.0], 400.0));
    assert_optimal(&t);
    // Both variables are reported from unit columns.
    assert_eq!(t.basic_row(0), Some(1));
    assert_eq!(t.basic_row(1), Some(0));
}

#[test]
fn maximize_unbounded() {
    let mut t = Tableau::build(
        &[5.0, 4.0],
        &[vec![1.0, 0.0, 7.0], vec![1.0, -1.0, 8.0]],
        OptimizationMode::Maximize,
    ).expect("Problem is well formed");
    let solution = solve(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::unbounded(2));
    assert!(solution.is_unbounded());
}

#[test]
fn maximize_unbounded_sentinel_counts_variables() {
    let mut t = Tableau::build(
        &[1.0, 1.0, 1.0],
        &[vec![1.0, 0.0, 0.0, 2.0]],
        OptimizationMode::Maximize,
    ).expect("Problem is well formed");
    let solution = solve(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::unbounded(3));
}

#[test]
fn minimize_infeasible_primal_is_unbounded_dual() {
    // The third row forces x1 = x2 = 0, which violates the second.
    let mut t = Tableau::build(
        &[6.0, 4.0],
        &[vec![-2.0, -1.0, -3.0],
          vec![1.0, -2.0, 2.0],
          vec![-3.0, -1.0, 0.0],
          vec![1.0, -2.0, -1.0]],
        OptimizationMode::Minimize,
    ).expect("Problem is well formed");
    assert_eq!(t.rows(), 3);
    assert_eq!(t.cols(), 8);
    let solution = solve(&mut t, OptimizationMode::Minimize).expect("Solve should not fail");
    assert_eq!(solution, Solution::unbounded(2));
}

#[test]
fn minimize_matches_dual_maximum() {
    // Minimize 2x1 + 3x2 subject to x1 + x2 >= 4, x1 + 3x2 >= 6
    let mut t = Tableau::build(
        &[2.0, 3.0],
        &[vec![1.0, 1.0, 4.0], vec![1.0, 3.0, 6.0]],
        OptimizationMode::Minimize,
    ).expect("Problem is well formed");
    let solution = solve(&mut t, OptimizationMode::Minimize).expect("Solve should not fail");
    assert_optimal(&t);
    assert_eq!(solution.values.len(), 2);
    assert_abs_diff_eq!(solution.values[0], 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.values[1], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value, 9.0, epsilon = 1e-9);

    // Maximize 4y1 + 6y2 subject to y1 + y2 <= 2, y1 + 3y2 <= 3
    let mut dual = Tableau::build(
        &[4.0, 6.0],
        &[vec![1.0, 1.0, 2.0], vec![1.0, 3.0, 3.0]],
        OptimizationMode::Maximize,
    ).expect("Problem is well formed");
    let dual_solution = solve(&mut dual, OptimizationMode::Maximize)
        .expect("Solve should not fail");
    assert_abs_diff_eq!(dual_solution.values[0], 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(dual_solution.values[1], 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(dual_solution.value, solution.value, epsilon = 1e-9);
}

#[test]
fn bland_rule_reaches_same_optimum() {
    let bland = Simplex::new(SolverOptions::new().pivot_rule(PivotRule::Bland));

    let mut t = Tableau::build(
        &[40.0, 30.0],
        &[vec![1.0, 1.0, 12.0], vec![2.0, 1.0, 16.0]],
        OptimizationMode::Maximize,
    ).expect("Problem is well formed");
    let solution = bland.run(&mut t, OptimizationMode::Maximize).expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![4.0, 8.0], 400.0));

    let mut t = Tableau::build(
        &[2.0, 3.0],
        &[vec![1.0, 1.0, 4.0], vec![1.0, 3.0, 6.0]],
        OptimizationMode::Minimize,
    ).expect("Problem is well formed");
    let solution = bland.run(&mut t, OptimizationMode::Minimize).expect("Solve should not fail");
    assert_abs_diff_eq!(solution.values[0], 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.values[1], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value, 9.0, epsilon = 1e-9);
}

#[test]
fn degenerate_rows_never_leave() {
    // Beale's example, which cycles under the textbook Dantzig rule. Its
    // optimum is 1.25 at (1, 0, 1, 0), but the first two rows have a zero
    // right-hand side and so never pass the ratio test. The run stops at
    // the first entering column and reports the problem as unbounded.
    let objective = [0.75, -20.0, 0.5, -6.0];
    let constraints = vec![
        vec![0.25, -8.0, -1.0, 9.0, 0.0],
        vec![0.5, -12.0, -0.5, 3.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0, 1.0],
    ];
    for &rule in [PivotRule::Dantzig, PivotRule::Bland].iter() {
        let simplex = Simplex::new(SolverOptions::new().pivot_rule(rule).max_iterations(50));
        let mut t = Tableau::build(&objective, &constraints, OptimizationMode::Maximize)
            .expect("Problem is well formed");
        let solution = simplex.run(&mut t, OptimizationMode::Maximize)
            .expect("Solve should not fail");
        assert!(solution.is_unbounded());
    }
}
