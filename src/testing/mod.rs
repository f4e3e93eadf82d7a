//! On-target test support.
//!
//! Test programs live under `demos/` and report over defmt; no host-side
//! harness exists for this crate.

#[derive(PartialEq, defmt::Format)]
pub enum TestResult {
    Pass,
    Fail(TestError),
}

#[derive(PartialEq, defmt::Format)]
pub enum TestError {
    AssertionFailed(&'static str),
}

pub trait TestCase {
    fn run(&self) -> TestResult;
    fn name(&self) -> &'static str;
}

pub struct TestRunner {
    total_tests: u32,
    passed_tests: u32,
}

impl TestRunner {
    pub fn new() -> Self {
        Self {
            total_tests: 0,
            passed_tests: 0,
        }
    }

    pub fn run_suite(&mut self, name: &'static str, tests: &[&dyn TestCase]) {
        defmt::println!("=== Test Suite: {} ===", name);

        for test in tests {
            self.total_tests += 1;
            match test.run() {
                TestResult::Pass => {
                    self.passed_tests += 1;
                    defmt::println!("{}: PASS", test.name());
                }
                TestResult::Fail(err) => {
                    defmt::println!("{}: FAIL - {}", test.name(), err);
                }
            }
        }
    }

    pub fn print_summary(&self) {
        defmt::println!("Passed: {}/{}", self.passed_tests, self.total_tests);
    }

    pub fn all_passed(&self) -> bool {
        self.passed_tests == self.total_tests
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        if !$cond {
            return $crate::testing::TestResult::Fail(
                $crate::testing::TestError::AssertionFailed(concat!(
                    "assertion failed: `",
                    stringify!($cond),
                    "`"
                )),
            );
        }
    };
}

#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr) => {
        if $left != $right {
            return $crate::testing::TestResult::Fail(
                $crate::testing::TestError::AssertionFailed(concat!(
                    "assertion failed: `",
                    stringify!($left),
                    " == ",
                    stringify!($right),
                    "`"
                )),
            );
        }
    };
}
