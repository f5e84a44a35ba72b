use rex_math::{issue, retire, DEFAULT_RATIO};

fn main() {
    // Example usage of the REX pool math functions

    // Issue supply against an existing pool
    let payment = 10_000i64;
    let deposit = 1_000_000i64;
    let supply = 10_000_000_000i64;
    let issued = issue(payment, deposit, supply, DEFAULT_RATIO).unwrap();
    println!("Issue: {} payment -> {} supply", payment, issued);

    // Retire the issued supply against the updated pool
    let returned = retire(issued, deposit + payment, supply + issued).unwrap();
    println!("Retire: {} supply -> {} deposit", issued, returned);
}
