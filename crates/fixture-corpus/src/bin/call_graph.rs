use fixture_corpus::{call_graph, FixtureError};

fn main() -> Result<(), FixtureError> {
    print_support::setup_tracing();
    call_graph::run(&mut std::io::stdout().lock())
}
