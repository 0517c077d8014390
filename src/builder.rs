use std::cmp::Ordering;
use std::collections::HashMap;

#[cfg(test)]
use approx::assert_abs_diff_eq;

use crate::error::Error;
use crate::options::SolverOptions;
use crate::problem::*;
use crate::simplex::Simplex;
use crate::tableau::Tableau;

// Repeated terms of the same variable are summed.
fn add_coefficient(coefficients: &mut HashMap<usize, f64>, var_index: usize, coeff: f64) {
    *coefficients.entry(var_index).or_insert(0.0) += coeff;
}

#[derive(Debug, Clone)]
pub struct Constraint {
    coefficients: HashMap<usize, f64>,
    direction: Ordering,
    value: f64,
}

impl Constraint {
    pub fn new() -> Constraint {
        Constraint {
            coefficients: HashMap::new(),
            direction: Ordering::Equal,
            value: 0.0,
        }
    }

    pub fn add(mut self, var_index: usize, coeff: f64) -> Constraint {
        add_coefficient(&mut self.coefficients, var_index, coeff);
        self
    }

    // Less means <=, Greater means >=.
    pub fn value(mut self, dir: Ordering, val: f64) -> Constraint {
        self.direction = dir;
        self.value = val;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Objective {
    coefficients: HashMap<usize, f64>,
    direction: OptimizationMode,
}

impl Objective {
    pub fn new() -> Objective {
        Objective {
            coefficients: HashMap::new(),
            direction: OptimizationMode::Maximize,
        }
    }

    pub fn add(mut self, var_index: usize, coeff: f64) -> Objective {
        add_coefficient(&mut self.coefficients, var_index, coeff);
        self
    }

    pub fn direction(mut self, dir: OptimizationMode) -> Objective {
        self.direction = dir;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    Free,
    NonNegative,
}

#[derive(Debug, Clone)]
pub struct Problem {
    variables: Vec<VariableType>,
    constraints: Vec<Constraint>,
    objective: Objective,
}

// Mapping from declared variables to tableau variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableMapping {
    Direct(usize),
    Difference(usize, usize),
}

impl Problem {
    pub fn new() -> Problem {
        Problem {
            variables: Vec::new(),
            constraints: Vec::new(),
            objective: Objective::new(),
        }
    }

    pub fn new_variable(&mut self, var_type: VariableType) -> usize {
        let result = self.variables.len();
        self.variables.push(var_type);
        result
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = objective;
    }

    fn check_variables(&self, coefficients: &HashMap<usize, f64>) -> Result<(), Error> {
        for &var in coefficients.keys() {
            if var >= self.variables.len() {
                return Err(Error::UnknownVariable { var: var });
            }
        }
        Ok(())
    }

    // Rewrites the problem into the row form the tableau builder expects:
    // <= rows for maximization, >= rows for minimization, every variable
    // non-negative. Equalities become a pair of opposite inequalities.
    pub fn statement(&self) -> Result<(ProblemStatement, Vec<VariableMapping>), Error> {
        let mut var_count: usize = 0;
        let mut var_mapping: Vec<VariableMapping> = Vec::new();

        for &var_type in self.variables.iter() {
            match var_type {
                VariableType::NonNegative => {
                    var_mapping.push(VariableMapping::Direct(var_count));
                    var_count += 1;
                },
                VariableType::Free => {
                    var_mapping.push(VariableMapping::Difference(var_count, var_count + 1));
                    var_count += 2;
                },
            }
        }

        let mode = self.objective.direction;
        let expected = match mode {
            OptimizationMode::Maximize => Ordering::Less,
            OptimizationMode::Minimize => Ordering::Greater,
        };

        let mut rows = Vec::new();
        for (i, constraint) in self.constraints.iter().enumerate() {
            self.check_variables(&constraint.coefficients)?;

            let mut row = vec![0.0; var_count + 1];
            for (&var, &coeff) in &constraint.coefficients {
                match var_mapping[var] {
                    VariableMapping::Direct(std_var) => {
                        row[std_var] = coeff;
                    },
                    VariableMapping::Difference(pos_var, neg_var) => {
                        row[pos_var] = coeff;
                        row[neg_var] = -coeff;
                    },
                }
            }
            row[var_count] = constraint.value;
            let flipped: Vec<f64> = row.iter().map(|&v| -v).collect();

            let normalized = if constraint.direction == Ordering::Equal {
                vec![row, flipped]
            } else if constraint.direction == expected {
                vec![row]
            } else {
                vec![flipped]
            };

            for row in normalized {
                if mode == OptimizationMode::Maximize && row[var_count] < 0.0 {
                    return Err(Error::NegativeRightHandSide {
                        row: i,
                        value: row[var_count],
                    });
                }
                rows.push(row);
            }
        }

        self.check_variables(&self.objective.coefficients)?;
        let mut c_data = vec![0.0; var_count];
        for (&var, &coeff) in &self.objective.coefficients {
            match var_mapping[var] {
                VariableMapping::Direct(std_var) => {
                    c_data[std_var] = coeff;
                },
                VariableMapping::Difference(pos_var, neg_var) => {
                    c_data[pos_var] = coeff;
                    c_data[neg_var] = -coeff;
                },
            }
        }

        // The costs are the right-hand sides of the dual tableau. A free
        // variable's two parts carry opposite costs, so only a zero cost
        // keeps both non-negative.
        if mode == OptimizationMode::Minimize {
            for (var, mapping) in var_mapping.iter().enumerate() {
                match *mapping {
                    VariableMapping::Direct(std_var) => {
                        if c_data[std_var] < 0.0 {
                            return Err(Error::NegativeCost { var: var, value: c_data[std_var] });
                        }
                    },
                    VariableMapping::Difference(pos_var, _) => {
                        if c_data[pos_var] != 0.0 {
                            return Err(Error::FreeVariableCost { var: var, value: c_data[pos_var] });
                        }
                    },
                }
            }
        }

        let statement = ProblemStatement::new(c_data, rows, mode)?;
        Ok((statement, var_mapping))
    }

    pub fn solve(&self) -> Result<Solution, Error> {
        self.solve_with(&SolverOptions::default())
    }

    pub fn solve_with(&self, options: &SolverOptions) -> Result<Solution, Error> {
        let (statement, mapping) = self.statement()?;
        let mut tableau = Tableau::from_problem(&statement);
        let solution = Simplex::new(*options).run(&mut tableau, statement.mode)?;
        if solution.is_unbounded() {
            return Ok(Solution::unbounded(self.variables.len()));
        }

        let values = mapping.iter()
            .map(|mapping| match *mapping {
                VariableMapping::Direct(std_var) => solution.values[std_var],
                VariableMapping::Difference(pos_var, neg_var) => {
                    solution.values[pos_var] - solution.values[neg_var]
                },
            })
            .collect();
        Ok(Solution::new(values, solution.value))
    }
}

#[test]
fn build_constraint() {
    let constraint = Constraint::new()
        .add(0, 1.0)
        .add(1, 2.0)
        .add(0, -3.0)
        .value(Ordering::Less, 5.0);
    assert_eq!(constraint.coefficients.len(), 2);
    assert_eq!(constraint.coefficients[&0], -2.0);
    assert_eq!(constraint.coefficients[&1], 2.0);
    assert_eq!(constraint.direction, Ordering::Less);
    assert_eq!(constraint.value, 5.0);
}

#[test]
fn build_problem() {
    let mut problem = Problem::new();
    let var1 = problem.new_variable(VariableType::NonNegative);
    let var2 = problem.new_variable(VariableType::Free);
    problem.add_constraint(Constraint::new()
        .add(var1, 1.0)
        .add(var2, 2.0)
        .value(Ordering::Less, 5.0));
    problem.add_constraint(Constraint::new()
        .add(var1, 5.0)
        .add(var2, 3.0)
        .value(Ordering::Less, 10.0));
    problem.add_constraint(Constraint::new()
        .add(var2, 1.0)
        .value(Ordering::Greater, -2.0));
    problem.set_objective(Objective::new()
        .add(var1, 1.0)
        .add(var2, 1.0)
        .direction(OptimizationMode::Maximize));
    assert_eq!(problem.variables.len(), 2);
    assert_eq!(problem.constraints.len(), 3);

    let (statement, mapping) = problem.statement().expect("Problem is well formed");
    assert_eq!(statement.constraints,
               vec![vec![1.0, 2.0, -2.0, 5.0],
                    vec![5.0, 3.0, -3.0, 10.0],
                    vec![0.0, -1.0, 1.0, 2.0]]);
    assert_eq!(statement.objective, vec![1.0, 1.0, -1.0]);
    assert_eq!(statement.mode, OptimizationMode::Maximize);
    assert_eq!(mapping[0], VariableMapping::Direct(0));
    assert_eq!(mapping[1], VariableMapping::Difference(1, 2));
}

#[test]
fn equality_becomes_two_rows() {
    let mut problem = Problem::new();
    let x1 = problem.new_variable(VariableType::NonNegative);
    let x2 = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new()
        .add(x1, 1.0)
        .add(x2, 2.0)
        .value(Ordering::Equal, 4.0));
    problem.set_objective(Objective::new()
        .add(x1, 1.0)
        .add(x2, 1.0)
        .direction(OptimizationMode::Minimize));
    let (statement, _) = problem.statement().expect("Problem is well formed");
    assert_eq!(statement.constraints,
               vec![vec![1.0, 2.0, 4.0],
                    vec![-1.0, -2.0, -4.0]]);

    let solution = problem.solve().expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![0.0, 2.0], 2.0));
}

#[test]
fn solve_maximize() {
    let mut problem = Problem::new();
    let x = problem.new_variable(VariableType::NonNegative);
    let y = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new().add(x, 1.0).add(y, 1.0).value(Ordering::Less, 4.0));
    problem.add_constraint(Constraint::new().add(x, 1.0).add(y, 3.0).value(Ordering::Less, 6.0));
    problem.set_objective(Objective::new().add(x, 3.0).add(y, 2.0));
    let solution = problem.solve().expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![4.0, 0.0], 12.0));
}

#[test]
fn solve_minimize_with_less_constraint() {
    let mut problem = Problem::new();
    let x1 = problem.new_variable(VariableType::NonNegative);
    let x2 = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new().add(x1, 1.0).add(x2, 1.0).value(Ordering::Greater, 4.0));
    problem.add_constraint(Constraint::new().add(x1, 1.0).add(x2, 3.0).value(Ordering::Greater, 6.0));
    problem.add_constraint(Constraint::new().add(x1, 1.0).value(Ordering::Less, 5.0));
    problem.set_objective(Objective::new()
        .add(x1, 2.0)
        .add(x2, 3.0)
        .direction(OptimizationMode::Minimize));
    let solution = problem.solve().expect("Solve should not fail");
    assert_abs_diff_eq!(solution.values[0], 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.values[1], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value, 9.0, epsilon = 1e-9);
}

#[test]
fn solve_free_variable() {
    // Maximize -x subject to x >= -5
    let mut problem = Problem::new();
    let x = problem.new_variable(VariableType::Free);
    problem.add_constraint(Constraint::new().add(x, -1.0).value(Ordering::Less, 5.0));
    problem.set_objective(Objective::new().add(x, -1.0));
    let solution = problem.solve().expect("Solve should not fail");
    assert_eq!(solution, Solution::new(vec![-5.0], 5.0));
}

#[test]
fn solve_unbounded() {
    let mut problem = Problem::new();
    let x1 = problem.new_variable(VariableType::NonNegative);
    let x2 = problem.new_variable(VariableType::NonNegative);
    let x3 = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new().add(x1, 1.0).value(Ordering::Less, 7.0));
    problem.add_constraint(Constraint::new().add(x1, 1.0).add(x2, -1.0).value(Ordering::Less, 8.0));
    problem.set_objective(Objective::new().add(x1, 5.0).add(x2, 4.0).add(x3, 0.0));
    let solution = problem.solve().expect("Solve should not fail");
    assert!(solution.is_unbounded());
    assert_eq!(solution.values.len(), 3);
}

#[test]
fn rejects_origin_infeasible_start() {
    let mut problem = Problem::new();
    let x = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new().add(x, 1.0).value(Ordering::Less, 4.0));
    problem.add_constraint(Constraint::new().add(x, 1.0).value(Ordering::Greater, 2.0));
    problem.set_objective(Objective::new().add(x, 1.0));
    assert_eq!(problem.solve(), Err(Error::NegativeRightHandSide { row: 1, value: -2.0 }));
}

#[test]
fn rejects_negative_cost() {
    let mut problem = Problem::new();
    let x1 = problem.new_variable(VariableType::NonNegative);
    let x2 = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new().add(x1, 1.0).add(x2, 1.0).value(Ordering::Greater, 1.0));
    problem.set_objective(Objective::new()
        .add(x1, 1.0)
        .add(x2, -2.0)
        .direction(OptimizationMode::Minimize));
    assert_eq!(problem.solve(), Err(Error::NegativeCost { var: 1, value: -2.0 }));
}

#[test]
fn rejects_costed_free_variable_in_minimization() {
    let mut problem = Problem::new();
    let x = problem.new_variable(VariableType::Free);
    let y = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new().add(x, 1.0).add(y, 1.0).value(Ordering::Greater, 1.0));
    problem.set_objective(Objective::new()
        .add(x, 2.0)
        .add(y, 1.0)
        .direction(OptimizationMode::Minimize));
    let err = problem.solve().expect_err("Free variable with a cost cannot be minimized");
    assert_eq!(err, Error::FreeVariableCost { var: 0, value: 2.0 });
    assert_eq!(format!("{}", err),
               "free variable 0 has cost 2; minimization only allows free variables with zero cost");
}

#[test]
fn allows_free_variable_without_cost_in_minimization() {
    let mut problem = Problem::new();
    let x = problem.new_variable(VariableType::Free);
    let y = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new().add(x, 1.0).add(y, 1.0).value(Ordering::Greater, 1.0));
    problem.set_objective(Objective::new()
        .add(y, 1.0)
        .direction(OptimizationMode::Minimize));
    let (statement, mapping) = problem.statement().expect("Problem is well formed");
    assert_eq!(statement.objective, vec![0.0, 0.0, 1.0]);
    assert_eq!(mapping[0], VariableMapping::Difference(0, 1));
}

#[test]
fn rejects_unknown_variable() {
    let mut problem = Problem::new();
    let x = problem.new_variable(VariableType::NonNegative);
    problem.add_constraint(Constraint::new().add(x, 1.0).add(7, 1.0).value(Ordering::Less, 4.0));
    problem.set_objective(Objective::new().add(x, 1.0));
    assert_eq!(problem.statement().map(|_| ()), Err(Error::UnknownVariable { var: 7 }));
}
