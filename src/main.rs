use std::process;

fn main() {
    if let Err(err) = rectlabel::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
