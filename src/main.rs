use std::error::Error;

use heaplib::MinMaxHeap;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn main() {
    env_logger::init();
    if let Err(err) = run_main() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn random_permutation(size: usize, seed: Option<u64>) -> Vec<usize> {
    let mut values: Vec<usize> = (1..=size).collect();
    match seed {
        Some(seed) => values.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => values.shuffle(&mut rand::thread_rng()),
    }
    values
}

fn run_main() -> Result<(), Box<dyn Error>> {
    use clap::{value_t, App, Arg};
    let matches = App::new("heaps")
        .about("Builds a min-max heap from a random permutation and drains it in order")
        .arg(Arg::with_name("size").short("n").long("size").takes_value(true).default_value("1000"))
        .arg(Arg::with_name("seed").long("seed").takes_value(true))
        .arg(Arg::with_name("max").long("max").help("drain with pop_max instead of pop_min"))
        .arg(Arg::with_name("dot").long("dot").help("print the built heap as a graph description"))
        .get_matches();

    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };
    let descending = matches.is_present("max");

    log::info!("building a min-max heap of {} elements", size);
    let mut heap = MinMaxHeap::from(random_permutation(size, seed));
    heap.validate()?;
    if matches.is_present("dot") {
        print!("{}", heap.dot());
    }

    let mut out_of_order = 0usize;
    let mut drained = 0usize;
    let mut previous: Option<usize> = None;
    loop {
        let current = if descending { heap.pop_max() } else { heap.pop_min() };
        let current = match current {
            Some(current) => current,
            None => break,
        };
        if let Some(previous) = previous {
            let ordered = if descending { current <= previous } else { previous <= current };
            if !ordered {
                log::error!("{} popped after {}", current, previous);
                out_of_order += 1;
            }
        }
        previous = Some(current);
        drained += 1;
    }
    log::info!("drained {} elements, {} out of order", drained, out_of_order);

    if out_of_order > 0 {
        return Err(format!("{} elements drained out of order", out_of_order).into());
    }
    Ok(())
}
