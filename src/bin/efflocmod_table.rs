// Prints the effective-local-moduli reference table for both ladder
// bases. Values are exact in u64; the base-3 rows at p = 11 and p = 13
// are the cert target calibration constants.
use boundcert::core::moduli;

fn main() {
    println!("Table 1: Effective Local Moduli");
    println!("{}", "=".repeat(60));
    println!(
        "{:<5} {:<25} {:<25}",
        "p", "EffLocMod_p^(3)", "EffLocMod_p^(5)"
    );
    println!("{}", "-".repeat(60));
    let base3 = moduli::ladder(3);
    let base5 = moduli::ladder(5);
    for ((p, m3), (_, m5)) in base3.iter().zip(base5.iter()) {
        println!("{p:<5} {m3:<25} {m5:<25}");
    }
    println!("{}", "=".repeat(60));
}
