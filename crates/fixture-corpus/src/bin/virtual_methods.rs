use fixture_corpus::{virtual_methods, FixtureError};

fn main() -> Result<(), FixtureError> {
    print_support::setup_tracing();
    virtual_methods::run(&mut std::io::stdout().lock())
}
