

/// Number of quickcheck cases to run; more on CI.
fn quickcheck_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
