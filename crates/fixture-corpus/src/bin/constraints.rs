use fixture_corpus::{constraints, FixtureError};

fn main() -> Result<(), FixtureError> {
    print_support::setup_tracing();
    constraints::run(&mut std::io::stdout().lock())
}
