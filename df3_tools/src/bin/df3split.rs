use df3_tools::{args::split_command, config::SplitConfig, run_split};

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = split_command().get_matches();

    let cfg = match SplitConfig::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run_split(&cfg) {
        eprintln!("Error [{}]: {e}", e.kind());
        std::process::exit(1);
    }
}
