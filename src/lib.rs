pub mod error;
pub mod options;
pub mod problem;
pub mod tableau;
pub mod simplex;
pub mod builder;

mod test_util;

mod random_tests;
