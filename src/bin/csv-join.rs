//! csv-join binary entry point

mod cli;

fn main() {
    let matches = cli::build_cli().get_matches();

    if let Err(e) = cli::run(&matches) {
        tracing::debug!(
            category = e.category(),
            exit_code = e.exit_code(),
            "Join failed"
        );
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
