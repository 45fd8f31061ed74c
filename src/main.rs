mod cli;

fn main() {
    // Initialize logging - default to warnings only for our crate
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("mmsi=warn,mmsi_lib=warn")
    ).init();

    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
