use log::error;
use setsim::group_records_by_key;
use std::env;
use std::process;

fn main() {
    // Initialize the logger
    env_logger::init();

    let input_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            error!("Usage: regroup-by-key <input-path>");
            process::exit(1);
        }
    };

    match group_records_by_key(&input_path) {
        Ok(key_groups) => {
            for (secondary_key, primary_keys) in key_groups {
                println!("{}\t{}", secondary_key, primary_keys.join(","));
            }
        }
        Err(e) => {
            error!("Error regrouping records: {}", e);
            process::exit(1);
        }
    }
}
