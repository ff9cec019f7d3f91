//! Prints unions, intersections and differences of even, odd, prime and non-prime numbers.

use anyhow::Result;
use red_black_collections::red_black_tree::RedBlackSet;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const MAX_NUMBER: u32 = 50;

fn print_set(prefix: &str, set: &RedBlackSet<u32>) {
    let numbers: Vec<String> = set.iter().map(|number| number.to_string()).collect();
    println!("{} {}", prefix, numbers.join(" "));
}

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut all = RedBlackSet::new();
    let mut evens = RedBlackSet::new();
    let mut odds = RedBlackSet::new();
    let mut nonprimes = RedBlackSet::new();
    let mut primes = RedBlackSet::new();

    for i in 0..=MAX_NUMBER {
        all.insert(i)?;
        if i % 2 == 0 {
            evens.insert(i)?;
        } else {
            odds.insert(i)?;
        }

        if i < 2 {
            nonprimes.insert(i)?;
        } else {
            for multiple in (2 * i..=MAX_NUMBER).step_by(i as usize) {
                nonprimes.insert(multiple)?;
            }
        }
        if !nonprimes.contains(&i) {
            primes.insert(i)?;
        }
    }

    print_set("Numbers:", &all);
    print_set("Even numbers:", &evens);
    print_set("Odd numbers:", &odds);
    print_set("Non-prime numbers:", &nonprimes);
    print_set("Prime numbers:", &primes);

    print_set("Even or odd numbers:", &evens.union(&odds)?);
    print_set("Prime or non-prime numbers:", &primes.union(&nonprimes)?);
    print_set("Even or prime numbers:", &evens.union(&primes)?);
    print_set("Odd or prime numbers:", &odds.union(&primes)?);

    print_set("Even and odd numbers:", &evens.intersection(&odds)?);
    print_set("Even non-prime numbers:", &evens.intersection(&nonprimes)?);
    print_set("Odd non-prime numbers:", &odds.intersection(&nonprimes)?);
    print_set("Odd prime numbers:", &odds.intersection(&primes)?);
    print_set("Even prime numbers:", &evens.intersection(&primes)?);

    print_set("Even non-prime numbers:", &evens.difference(&primes)?);
    print_set("Odd non-prime numbers:", &odds.difference(&primes)?);
    print_set("Even prime numbers:", &evens.difference(&nonprimes)?);
    print_set("Odd prime numbers:", &odds.difference(&nonprimes)?);

    Ok(())
}
