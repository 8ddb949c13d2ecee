use std::env;
use std::time::Instant;
use thurber_chain::space::vectorspace;
use thurber_chain::thurber;
use thurber_chain::vector::Vector;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "--vector" => run_vector(&args),
        "--batch" => run_batch(&args),
        _ => run_integer(&args),
    }
}

fn print_usage(prog: &str) {
    eprintln!("Usage: {prog} <n>");
    eprintln!("       {prog} --vector <v0> <v1> ... <vk>");
    eprintln!("       {prog} --batch <n> <max>");
    eprintln!();
    eprintln!("  <n>: a positive integer target");
    eprintln!("  --vector: an explicit vector target in the integer lattice");
    eprintln!("  --batch: every nonzero vector of dimension <n> with components in [0, max]");
}

fn run_integer(args: &[String]) {
    let n: i64 = args[1].parse().unwrap_or_else(|_| {
        eprintln!("Invalid integer target: {}", args[1]);
        std::process::exit(1);
    });

    let start = Instant::now();
    match thurber(n) {
        Ok(length) => {
            println!("thurber({n}) = {length}");
            println!("Time elapsed: {:?}", start.elapsed());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run_vector(args: &[String]) {
    if args.len() < 3 {
        eprintln!("--vector requires at least one component");
        std::process::exit(1);
    }
    let components: Vec<i64> = args[2..]
        .iter()
        .map(|s| {
            s.parse().unwrap_or_else(|_| {
                eprintln!("Invalid vector component: {s}");
                std::process::exit(1);
            })
        })
        .collect();
    let target = Vector::from_data(components);

    let start = Instant::now();
    match thurber(target.clone()) {
        Ok(length) => {
            println!("thurber({target}) = {length}");
            println!("Time elapsed: {:?}", start.elapsed());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run_batch(args: &[String]) {
    if args.len() < 4 {
        eprintln!("--batch requires <n> and <max>");
        std::process::exit(1);
    }
    let n: usize = args[2].parse().unwrap_or_else(|_| {
        eprintln!("Invalid dimension: {}", args[2]);
        std::process::exit(1);
    });
    let max: i64 = args[3].parse().unwrap_or_else(|_| {
        eprintln!("Invalid max component: {}", args[3]);
        std::process::exit(1);
    });

    let start = Instant::now();
    for target in vectorspace(n, max) {
        match thurber(target.clone()) {
            Ok(length) => println!("thurber({target}) = {length}"),
            Err(e) => eprintln!("thurber({target}): error: {e}"),
        }
    }
    println!("Time elapsed: {:?}", start.elapsed());
}
