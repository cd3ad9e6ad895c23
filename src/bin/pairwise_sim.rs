use log::error;
use setsim::compute_pairwise_similarities;
use std::env;
use std::process;

fn main() {
    // Initialize the logger
    env_logger::init();

    let input_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            error!("Usage: pairwise-sim <input-path>");
            process::exit(1);
        }
    };

    match compute_pairwise_similarities(&input_path) {
        Ok(results) => {
            for (id_a, id_b, score) in results {
                println!("{} {} {}", id_a, id_b, score);
            }
        }
        Err(e) => {
            error!("Error computing pairwise similarities: {}", e);
            process::exit(1);
        }
    }
}
