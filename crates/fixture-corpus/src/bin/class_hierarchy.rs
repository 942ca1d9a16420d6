use fixture_corpus::{class_hierarchy, FixtureError};

fn main() -> Result<(), FixtureError> {
    print_support::setup_tracing();
    class_hierarchy::run(&mut std::io::stdout().lock())
}
