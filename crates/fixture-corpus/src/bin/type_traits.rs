use fixture_corpus::{type_traits, FixtureError};

fn main() -> Result<(), FixtureError> {
    print_support::setup_tracing();
    type_traits::run(&mut std::io::stdout().lock())
}
