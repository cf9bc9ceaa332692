use df3_tools::{args::combine_command, config::CombineConfig, run_combine};

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = combine_command().get_matches();

    let cfg = match CombineConfig::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run_combine(&cfg) {
        eprintln!("Error [{}]: {e}", e.kind());
        std::process::exit(1);
    }
}
