//! # macrolang
//!
//! Runs a macro script file. Ctrl-C stops the script before its next line.

mod term;

fn main() {
    std::process::exit(term::main());
}
