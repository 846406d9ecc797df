//! Burn tests and invariants for the C++ → TypeScript type mapper.

use bridgemoc::ts_type;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_burn_table() {
    let cases = [
        ("int", "number"),
        ("double", "number"),
        ("bool", "boolean"),
        ("std::string", "string"),
        ("std::vector<int>", "number[]"),
        ("std::vector<std::string>", "string[]"),
        ("std::array<double, 5>", "number[]"),
        ("std::map<std::string, int>", "Record<string, number>"),
        ("std::unordered_map<std::string, bool>", "Record<string, boolean>"),
        ("std::vector<std::vector<int>>", "number[][]"),
        ("std::map<std::string, std::vector<double>>", "Record<string, number[]>"),
        ("std::map<int, int>", "unknown"),  // non-string key
        ("std::pair<int, int>", "unknown"), // unsupported container
        ("const std::vector<int>&", "number[]"),
        ("unsigned long long", "number"),
        ("nullptr_t", "null"),
    ];

    for (cpp, ts) in cases {
        assert_eq!(ts_type(cpp), ts, "mapping {cpp}");
    }
}

#[test]
fn test_record_of_record() {
    assert_eq!(
        ts_type("std::map<std::string, std::map<std::string, int>>"),
        "Record<string, Record<string, number>>"
    );
}

#[test]
fn test_canonical_signatures_without_spaces() {
    // The renderer emits no space after commas; both forms must agree.
    assert_eq!(ts_type("std::map<std::string,int>"), "Record<string, number>");
    assert_eq!(
        ts_type("std::map<std::string,std::vector<double>>"),
        "Record<string, number[]>"
    );
}

proptest! {
    /// The mapper is total: any input produces a value, never a panic.
    #[test]
    fn prop_ts_type_is_total(input in ".{0,120}") {
        let _ = ts_type(&input);
    }

    /// Every output is a scalar, an array/record composition, or unknown.
    #[test]
    fn prop_output_shape_is_recognized(input in ".{0,120}") {
        let mapped = ts_type(&input);
        let base = mapped.trim_end_matches("[]");
        let shape_ok = matches!(base, "number" | "boolean" | "string" | "null" | "unknown")
            || base.starts_with("Record<string, ");
        prop_assert!(shape_ok, "unexpected output {mapped} for {input}");
    }

    /// Nested sequences map to arrays of matching depth.
    #[test]
    fn prop_nested_vectors_stack_array_suffixes(depth in 1usize..6) {
        let cpp = format!(
            "{}int{}",
            "std::vector<".repeat(depth),
            ">".repeat(depth)
        );
        let expected = format!("number{}", "[]".repeat(depth));
        prop_assert_eq!(ts_type(&cpp), expected);
    }
}
