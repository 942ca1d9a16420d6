//! # Call Graph Samples
//!
//! Small programs whose only interesting property is who calls whom:
//!
//! ```text
//! run_calculate    -> calculate -> {add, multiply}
//! run_caller       -> caller_function -> simple_function
//! run_process_data -> process_data -> {log_message, format_text,
//!                                      Helper::print_info, Helper::get_status}
//! run_test_class   -> TestClass::hello -> TestClass::get_message
//! run_helper       -> helper_function -> utils::utility_function
//! ```

use crate::error::FixtureError;
use std::io::{self, Write};
use tracing::debug;

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

pub fn calculate(a: i32, b: i32) -> i32 {
    let sum = add(a, b);
    let product = multiply(a, b);
    sum + product
}

pub fn simple_function(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "This is a simple function")
}

pub fn caller_function(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "This function calls another")?;
    simple_function(out)
}

pub fn log_message(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "LOG: {message}")
}

pub fn format_text(text: &str) -> String {
    format!("[{text}]")
}

#[derive(Debug, Default)]
pub struct Helper;

impl Helper {
    pub fn print_info(&self, out: &mut dyn Write) -> io::Result<()> {
        log_message(out, "Helper info")
    }

    pub fn get_status() -> &'static str {
        "OK"
    }
}

pub fn process_data(out: &mut dyn Write, data: &str) -> io::Result<()> {
    log_message(out, "Processing data")?;
    let formatted = format_text(data);
    Helper.print_info(out)?;
    let status = Helper::get_status();
    log_message(out, &format!("Status: {status}, Data: {formatted}"))
}

#[derive(Debug)]
pub struct TestClass {
    message: String,
}

impl Default for TestClass {
    fn default() -> Self {
        Self {
            message: "Hello, world!".to_string(),
        }
    }
}

impl TestClass {
    pub fn hello(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.get_message())
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }
}

/// Callee in a separate module, reached by path.
pub mod utils {
    pub fn utility_function(value: i32) -> i32 {
        value * 2
    }
}

pub fn helper_function(value: i32) -> i32 {
    utils::utility_function(value)
}

pub fn run_calculate(out: &mut dyn Write) -> io::Result<()> {
    let result = calculate(5, 3);
    writeln!(out, "Result: {result}")
}

pub fn run_caller(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Hello World")?;
    caller_function(out)
}

pub fn run_process_data(out: &mut dyn Write) -> io::Result<()> {
    process_data(out, "test")
}

pub fn run_test_class(out: &mut dyn Write) -> io::Result<()> {
    TestClass::default().hello(out)
}

pub fn run_helper(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Helper result: {}", helper_function(7))
}

/// Every sample, in the order listed in the module docs.
pub fn run(out: &mut dyn Write) -> Result<(), FixtureError> {
    let samples: [(&str, fn(&mut dyn Write) -> io::Result<()>); 5] = [
        ("calculate", run_calculate),
        ("caller", run_caller),
        ("process_data", run_process_data),
        ("test_class", run_test_class),
        ("helper", run_helper),
    ];
    for (name, sample) in samples {
        debug!(sample = name, "Running call graph sample");
        sample(out)?;
    }
    Ok(())
}
