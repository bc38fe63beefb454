use assert_cmd::Command;
use crustext::aa::Query;
use predicates::{reflection::PredicateReflection, Predicate};
use std::fmt::Display;

struct CheckProblemsPredicate;

impl Display for CheckProblemsPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CheckProblemsPredicate")
    }
}

impl PredicateReflection for CheckProblemsPredicate {}

impl Predicate<[u8]> for CheckProblemsPredicate {
    fn eval(&self, content: &[u8]) -> bool {
        let str_content = String::from_utf8_lossy(content);
        let inner = match str_content
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix("]\n"))
        {
            Some(s) => s,
            None => return false,
        };
        let mut actual_problems = inner.split(',').collect::<Vec<&str>>();
        actual_problems.sort_unstable();
        let mut expected_problems = Query::iter_problem_strings().collect::<Vec<String>>();
        expected_problems.sort_unstable();
        expected_problems == actual_problems
    }
}

#[test]
fn test_problems() {
    let mut cmd = Command::cargo_bin("crustext").unwrap();
    cmd.arg("problems");
    cmd.assert().success().stdout(CheckProblemsPredicate);
}
