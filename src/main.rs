use negacyclic_spectra::run_experiment;

/// Matrix dimension sweeps up to 2^(DIM_POW - 1).
const DIM_POW: u32 = 11;
/// Number of random matrices tested per dimension.
const TRIALS: usize = 1000;
/// Matrix entries are sampled uniformly from [0, BOUND).
const BOUND: u64 = 2;
/// Fixed seed so repeated runs reproduce the same tallies.
const SEED: u64 = 20200601;

fn main() {
    match run_experiment(DIM_POW, TRIALS, BOUND, SEED) {
        Ok(summary) => println!("{}", summary.min_lower_failures),
        Err(err) => {
            eprintln!("experiment failed: {err}");
            std::process::exit(1);
        }
    }
}
