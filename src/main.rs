use engfmt::{from_engineering, step, to_engineering, to_engineering_with_unit, Direction, Notation};

fn approx(a: f64, b: f64) -> bool {
    let epsilon = 100.0 * f64::EPSILON;
    (a - b).abs() < epsilon * (1.0 + a.abs().max(b.abs()))
}

fn main() {
    println!("=== Engineering Notation Demo ===\n");

    let examples = [1e-23, 1234.0, 0.0456, -999.9996, 1e98];
    for value in examples {
        println!(
            "  {value:>12e} -> '{}'  |  '{}'",
            to_engineering(value, 3, Notation::Prefixed),
            to_engineering(value, 3, Notation::Exponential)
        );
    }

    println!("\n=== Units ===\n");
    println!(
        "  1234 Pa  -> '{}'",
        to_engineering_with_unit(1234.0, 3, Notation::Prefixed, "Pa")
    );
    println!(
        "  1234 Pa  -> '{}'",
        to_engineering_with_unit(1234.0, 3, Notation::Exponential, "Pa")
    );

    // Walk the whole prefix range and verify the round trip
    println!("\n=== Round Trip Across Magnitudes ===\n");
    for exp in -24..=24 {
        let x = 10f64.powi(exp);

        let text = to_engineering(x, 3, Notation::Prefixed);
        let y = from_engineering(&text);
        let back = to_engineering(y, 3, Notation::Prefixed);

        let result = if approx(x, y) { "✓" } else { "✗" };
        println!("  {result} {x:>8e}  '{text}'  ->  {y:e}  '{back}'");
    }

    println!("\n=== Stepping ===\n");
    let mut text = "997".to_owned();
    for _ in 0..6 {
        let next = step(&text, 3, Notation::Prefixed, Direction::Increment);
        println!("  '{text}' + 1 ulp -> '{next}'");
        text = next;
    }
    println!();
    let mut text = "1.02 k".to_owned();
    for _ in 0..6 {
        let next = step(&text, 3, Notation::Prefixed, Direction::Decrement);
        println!("  '{text}' - 1 ulp -> '{next}'");
        text = next;
    }

    println!("\n=== Special Values ===\n");
    for (name, value) in [
        ("NaN", f64::NAN),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
        ("Zero", 0.0),
    ] {
        println!(
            "  {name:>10} -> '{}'",
            to_engineering(value, 3, Notation::Prefixed)
        );
    }

    println!("\n=== Demo Complete ===");
}
