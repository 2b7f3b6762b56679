#![allow(dead_code)]

/// Numeric inputs covering every rejection path of the scanner.
pub const NUMERIC_SAMPLES: [&str; 15] = [
    "", "+", "1e", "e1", "1.2.3", "1e5.0", "1e5e5", "1-2", "0x", "0xZ1", "1e5L", "12é4", "1.0f",
    "-0x1F", "1.",
];

/// Identity card inputs covering every rejection path of the validator.
pub const NATIONAL_ID_SAMPLES: [&str; 8] = [
    "",
    "123",
    "110105194912310021",
    "1101051949123100AX",
    "110105491331002",
    "011010549123100",
    "11010519491231002x",
    "110105491231002",
];
