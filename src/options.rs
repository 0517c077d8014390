/// How the entering column is chosen from the objective row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotRule {
    // Most negative reduced cost, earliest column on ties.
    Dantzig,
    // Earliest negative reduced cost. Cannot cycle.
    Bland,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub pivot_rule: PivotRule,
    pub max_iterations: usize,
    // Objective-row entries must be below -tolerance to count as negative,
    // and pivot column entries above tolerance to enter the ratio test.
    pub tolerance: f64,
}

impl SolverOptions {
    pub fn new() -> SolverOptions {
        SolverOptions {
            pivot_rule: PivotRule::Dantzig,
            max_iterations: 10_000,
            tolerance: 0.0,
        }
    }

    pub fn pivot_rule(mut self, rule: PivotRule) -> SolverOptions {
        self.pivot_rule = rule;
        self
    }

    pub fn max_iterations(mut self, iterations: usize) -> SolverOptions {
        self.max_iterations = iterations;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> SolverOptions {
        self.tolerance = tolerance.abs();
        self
    }
}

impl Default for SolverOptions {
    fn default() -> SolverOptions {
        SolverOptions::new()
    }
}

#[test]
fn default_options() {
    let options = SolverOptions::default();
    assert_eq!(options.pivot_rule, PivotRule::Dantzig);
    assert_eq!(options.max_iterations, 10_000);
    assert_eq!(options.tolerance, 0.0);
}

#[test]
fn fluent_options() {
    let options = SolverOptions::new()
        .pivot_rule(PivotRule::Bland)
        .max_iterations(3)
        .tolerance(-1e-9);
    assert_eq!(options.pivot_rule, PivotRule::Bland);
    assert_eq!(options.max_iterations, 3);
    assert_eq!(options.tolerance, 1e-9);
}
