//! Classifies each command-line argument with every validator.
//!
//! Run with
//!
//! ```bash
//! cargo run -p textcheck --example check_inputs -- 1.5e3 0x1F 11010519491231002X
//! ```

use textcheck::{check_national_id, parse_numeric_literal};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_inputs <value>...");
        std::process::exit(2);
    }

    for arg in &args {
        println!("{arg}");
        match parse_numeric_literal(arg) {
            Ok(literal) => println!("  numeric:     {:?} {:?}", literal.kind, literal.suffix),
            Err(e) => println!("  numeric:     no ({e})"),
        }
        match check_national_id(arg) {
            Ok(format) => println!("  national id: {format:?}"),
            Err(e) => println!("  national id: no ({e})"),
        }
        #[cfg(feature = "patterns")]
        {
            use textcheck::patterns;

            let checks: [(&str, fn(&str) -> bool); 6] = [
                ("phone", patterns::is_phone_number),
                ("email", patterns::is_email),
                ("ipv4", patterns::is_ipv4),
                ("url", patterns::is_url),
                ("postcode", patterns::is_postcode),
                ("plate", patterns::is_vehicle_plate),
            ];
            let matched: Vec<&str> = checks
                .iter()
                .filter(|(_, check)| check(arg.as_str()))
                .map(|(name, _)| *name)
                .collect();
            println!("  patterns:    {matched:?}");
        }
    }
}
