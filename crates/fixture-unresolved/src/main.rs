//! # Unresolved Call
//!
//! `process_data` calls `missing_function`, which is declared here and
//! defined nowhere. Type checking succeeds; linking fails with an undefined
//! symbol. Analyzers should report the call as unresolved.
//!
//! ```bash
//! cargo build --manifest-path crates/fixture-unresolved/Cargo.toml   # link error
//! ```

extern "C" {
    fn missing_function();
}

fn process_data() {
    println!("Processing data...");
    // SAFETY: the symbol has no definition, so this never reaches run time.
    unsafe { missing_function() };
}

fn main() {
    process_data();
}
