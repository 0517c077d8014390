#![cfg(test)]

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use crate::problem::{OptimizationMode, ProblemStatement};

// Generate a random maximization problem Ax <= b, x >= 0 with the given
// number of constraints and variables. A, b and c are strictly positive, so
// the origin is feasible and the optimum is finite.
pub fn bounded_seeded(rows: usize, cols: usize, seed: u64) -> ProblemStatement {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut constraints = Vec::new();
    for _ in 0..rows {
        let mut row: Vec<f64> = (0..cols).map(|_| rng.gen_range(0.1..5.0)).collect();
        row.push(rng.gen_range(1.0..20.0));
        constraints.push(row);
    }
    let objective = (0..cols).map(|_| rng.gen_range(0.5..10.0)).collect();
    ProblemStatement::new(objective, constraints, OptimizationMode::Maximize)
        .expect("Generated problem is well formed")
}

// Minimize b^T y subject to A^T y >= c, y >= 0.
pub fn dual_of(problem: &ProblemStatement) -> ProblemStatement {
    let n = problem.var_count();
    let mut constraints = Vec::new();
    for j in 0..n {
        let mut row: Vec<f64> = problem.constraints.iter().map(|c| c[j]).collect();
        row.push(problem.objective[j]);
        constraints.push(row);
    }
    let objective = problem.constraints.iter().map(|c| c[n]).collect();
    ProblemStatement::new(objective, constraints, OptimizationMode::Minimize)
        .expect("Dual of a well formed problem is well formed")
}

// Largest amount by which x violates a constraint row, counting <= rows
// for maximization and >= rows for minimization.
pub fn max_violation(problem: &ProblemStatement, x: &[f64]) -> f64 {
    let n = problem.var_count();
    let mut a_data = Vec::new();
    let mut b_data = Vec::new();
    for c in problem.constraints.iter() {
        a_data.extend_from_slice(&c[..n]);
        b_data.push(c[n]);
    }
    let a = Matrix::new(problem.constraint_count(), n, a_data);
    let ax = a * Vector::new(x.to_vec());

    let mut worst = 0.0f64;
    for (i, &lhs) in ax.iter().enumerate() {
        let violation = match problem.mode {
            OptimizationMode::Maximize => lhs - b_data[i],
            OptimizationMode::Minimize => b_data[i] - lhs,
        };
        worst = worst.max(violation);
    }
    worst
}

pub fn objective_at(problem: &ProblemStatement, x: &[f64]) -> f64 {
    problem.objective.iter().zip(x).map(|(c, v)| c * v).sum()
}
