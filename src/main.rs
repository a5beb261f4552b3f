#![forbid(unsafe_code)]

use life_canvas::config::Config;

fn main() {
    if let Err(err) = life_canvas::run(Config::default()) {
        life_canvas::log_error("run", err);
        std::process::exit(1);
    }
}
