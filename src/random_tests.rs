#![cfg(test)]

use approx::assert_relative_eq;

use crate::options::SolverOptions;
use crate::problem::{OptimizationMode, ProblemStatement, Solution};
use crate::simplex::Simplex;
use crate::tableau::Tableau;
use crate::test_util::{bounded_seeded, dual_of, max_violation, objective_at};

fn solve_checked(problem: &ProblemStatement) -> Solution {
    let simplex = Simplex::new(SolverOptions::new().tolerance(1e-9));
    let mut tableau = Tableau::from_problem(problem);
    let solution = simplex.run(&mut tableau, problem.mode)
        .expect("Simplex test failed");

    assert!(!solution.is_unbounded(), "bounded problem reported unbounded");
    assert_eq!(solution.values.len(), problem.var_count());
    // No improving column is left.
    let objective = tableau.objective_row();
    for &v in objective[..tableau.rhs_col()].iter() {
        assert!(v >= -1e-9);
    }
    for &v in solution.values.iter() {
        assert!(v >= -1e-9);
    }
    assert!(max_violation(problem, &solution.values) <= 1e-6);
    assert_relative_eq!(objective_at(problem, &solution.values), solution.value,
                        max_relative = 1e-6);
    solution
}

fn strong_duality(rows: usize, cols: usize, seed: u64) {
    let primal = bounded_seeded(rows, cols, seed);
    let dual = dual_of(&primal);
    assert_eq!(primal.mode, OptimizationMode::Maximize);

    let primal_solution = solve_checked(&primal);
    let dual_solution = solve_checked(&dual);

    assert_relative_eq!(primal_solution.value, dual_solution.value, max_relative = 1e-6);
}

#[test]
fn dense_3x2() {
    strong_duality(3, 2, 1337);
}

#[test]
fn dense_2x5() {
    strong_duality(2, 5, 5823);
}

#[test]
fn dense_6x6() {
    strong_duality(6, 6, 42);
}

#[test]
fn many_small() {
    for seed in 0..50 {
        let rows = 1 + (seed as usize) % 6;
        let cols = 1 + (seed as usize * 7) % 5;
        strong_duality(rows, cols, seed);
    }
}
