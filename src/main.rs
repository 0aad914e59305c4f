extern crate clap;
extern crate rootrem;
extern crate tracing_subscriber;

use std::process;
use std::str::FromStr;
use rootrem::{check, Int};
use tracing_subscriber::EnvFilter;

fn parse_arg<T: FromStr>(name: &str, value: &str) -> T
    where T::Err: std::fmt::Display
{
    value.parse().unwrap_or_else(|e| {
        clap::Error::with_description(
            &format!("invalid value for '{}': {}: {}", name, value, e),
            clap::ErrorKind::InvalidValue,
        ).exit()
    })
}

fn main() {
    let matches = clap::App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .setting(clap::AppSettings::AllowNegativeNumbers)
        .args_from_usage("--square 'Only test whether each NUMBER is a perfect square'")
        .args_from_usage("--selftest 'Run the randomized self-check'")
        .args_from_usage("--count=[count] 'Number of self-check trials'")
        .args_from_usage("--max-bits=[max-bits] 'Maximum bit length of self-check inputs'")
        .args_from_usage("--seed=[seed] 'Seed of the self-check generator'")
        .args_from_usage("[NUMBER]... 'Decimal or 0x-prefixed hexadecimal integers'")
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut status = 0;
    let square_only = matches.is_present("square");
    for input in matches.values_of("NUMBER").into_iter().flatten() {
        let x: Int = parse_arg("NUMBER", input);
        if square_only {
            println!("- {{input: {}, square: {}}}", x, x.is_perfect_square());
            continue;
        }
        match x.sqrtrem() {
            Ok((root, rem)) => {
                println!("- {{input: {}, root: {}, rem: {}, square: {}}}",
                         x, root, rem, rem.is_zero());
            }
            Err(e) => {
                println!("- {{input: {}, error: '{}'}}", x, e);
                status = 1;
            }
        }
    }

    if matches.is_present("selftest") {
        let mut conf = check::Conf::default();
        if let Some(s) = matches.value_of("count") {
            conf.count = parse_arg("--count", s);
        }
        if let Some(s) = matches.value_of("max-bits") {
            conf.max_bits = parse_arg("--max-bits", s);
        }
        if let Some(s) = matches.value_of("seed") {
            conf.seed = parse_arg("--seed", s);
        }
        println!("selftest:");
        println!("  count: {}", conf.count);
        println!("  max_bits: {}", conf.max_bits);
        println!("  seed: {}", conf.seed);
        let mut run = conf.make_run();
        match run.do_run() {
            Ok(()) => {
                println!("  trials: {}", run.trials());
                println!("  exact: {}", run.exact());
            }
            Err(e) => {
                println!("  error: '{}'", e);
                status = 1;
            }
        }
    }
    process::exit(status);
}
