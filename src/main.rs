use colored::Colorize;
use subnet_compact::cli::{parse_args, run};
use subnet_compact::logging;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = logging::init() {
        eprintln!("Error initializing logging: {e}");
    }
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        eprintln!("{} {e}", "Error:".on_red());
        std::process::exit(1);
    }
}
