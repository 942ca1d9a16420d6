use fixture_corpus::{operator_overload, FixtureError};

fn main() -> Result<(), FixtureError> {
    print_support::setup_tracing();
    operator_overload::run(&mut std::io::stdout().lock())
}
