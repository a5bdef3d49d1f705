//! Basic example: analyze a few small algebraic systems

use algebraic_system::prelude::*;
use algebraic_system::utils::timing::Timer;

fn main() -> Result<()> {
    println!("=== Finite Algebraic Systems ===\n");

    // Integers mod 4 under addition
    let z4 = CayleyTable::cyclic(4);
    println!("{:?}", z4);
    println!("Z4 is a {}", z4.classify()?);

    // max on {0, 1, 2}: a monoid without inverses
    let max = CayleyTable::new(
        vec![0, 1, 2],
        vec![vec![0, 1, 2], vec![1, 1, 2], vec![2, 2, 2]],
    )?;
    println!("\n{:?}", max);
    println!("max is a {}", max.classify()?);
    println!("identity: {:?}, zero element: {}", max.identity(), max.has_zero_element());

    // Klein four-group written with symbols
    let names = ["e", "a", "b", "c"];
    let klein = CayleyTable::from_flat(
        names.to_vec(),
        [0, 1, 2, 3, 1, 0, 3, 2, 2, 3, 0, 1, 3, 2, 1, 0]
            .iter()
            .map(|&i| names[i])
            .collect(),
    )?
    .with_encoding(Encoding::Lookup);

    println!("\n--- Full report for the Klein four-group ---");
    {
        let _timer = Timer::new("klein analysis");
        let analysis = analyze(&klein)?;
        TextReporter::new(std::io::stdout()).report(&analysis)?;
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
