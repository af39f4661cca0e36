use std::fmt::Display;

use tracing::warn;

use crate::stack::{BoundedStack, RetrieveResult, StoreResult};

const SUITE_CAPACITY: usize = 3;

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub name: &'static str,
    pub passed: bool,
    pub description: &'static str
}

impl Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.passed { "PASSED" } else { "FAILED" };
        write!(f, "{}: {} ({})", self.name, verdict, self.description)
    }
}

#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub checks: Vec<CheckReport>,
    pub final_contents: Vec<i32>
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

impl Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BoundedStack Check Suite")?;
        writeln!(f, "------------------------")?;
        for check in &self.checks {
            writeln!(f, "{}", check)?;
        }
        write!(f, "\nFinal Stack Contents: {:?}", self.final_contents)
    }
}

struct Checker {
    checks: Vec<CheckReport>
}

impl Checker {
    fn check(&mut self, name: &'static str, passed: bool, description: &'static str) {
        if !passed {
            warn!(name, "check failed");
        }
        self.checks.push(CheckReport { name, passed, description });
    }
}

/// Runs the fixed check list against a fresh capacity-3 stack.
pub fn run_suite() -> SuiteReport {
    let mut stack = BoundedStack::new(SUITE_CAPACITY);
    let mut checker = Checker { checks: Vec::new() };

    checker.check("Empty Stack Display",
        stack.display().is_empty() && stack.is_empty(),
        "Stack should be initially empty");

    checker.check("Empty Stack Retrieval",
        stack.retrieve() == RetrieveResult::Empty,
        "Retrieving from empty stack should report empty");

    checker.check("First Element Storage",
        stack.store(10) == StoreResult::Success,
        "Should successfully store first element");

    checker.check("Display After First Element",
        stack.display() == vec![10],
        "Stack should contain first stored element");

    stack.store(20);
    stack.store(30);
    checker.check("Stack Capacity Limit",
        stack.store(40) == StoreResult::Full && stack.display() == vec![10, 20, 30],
        "Attempting to exceed capacity should return full status");

    checker.check("Retrieve Top Element",
        stack.retrieve().value() == Some(30),
        "Should retrieve most recently added element");

    SuiteReport { checks: checker.checks, final_contents: stack.display() }
}
