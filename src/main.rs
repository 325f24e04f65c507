extern crate scatter_blur;

use scatter_blur::errors::*;
use scatter_blur::Invocation;
use std::io;

fn run() -> Result<()> {
    let invocation = Invocation::from_env()?;
    let stdin = io::stdin();
    let (input_path, output_path, config) = invocation.resolve(stdin.lock())?;
    scatter_blur::run_blur(&config, &input_path, &output_path)?;
    Ok(())
}

fn main() {
    if let Err(ref e) = run() {
        eprintln!("error: {}", e);

        for e in e.iter().skip(1) {
            eprintln!("caused by: {}", e);
        }

        if let Some(backtrace) = e.backtrace() {
            eprintln!("backtrace: {:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}
