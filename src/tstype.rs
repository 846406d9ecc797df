//! C++ to TypeScript type mapping for generated stubs.
//!
//! [`ts_type`] is pure and total: any input maps to a scalar TypeScript
//! type, an array/record composition over the recognized containers, or the
//! `unknown` sentinel. It never fails, whatever the input looks like.
//!
//! The vocabulary mirrors what the JSON layer serializes natively: sequence
//! containers become arrays, string-keyed maps become records (JSON objects
//! only allow string keys), scalars map to `number`/`boolean`/`string`/
//! `null`. Everything else, including user-defined types, is `unknown`.

/// Sentinel for any type outside the recognized vocabulary.
pub const UNKNOWN: &str = "unknown";

/// Sequence containers rendered as TypeScript arrays.
const SEQUENCE_CONTAINERS: &[&str] = &["std::vector", "std::deque", "std::list", "std::array"];

/// Associative containers rendered as TypeScript records. Keys must be
/// `std::string`.
const ASSOCIATIVE_CONTAINERS: &[&str] = &["std::map", "std::unordered_map"];

/// Map a canonical C++ type signature to a TypeScript type expression.
///
/// Qualifiers and reference/pointer decorations are stripped first, so
/// `const std::vector<int>&` maps like `std::vector<int>`. Nested containers
/// recurse: `std::map<std::string, std::vector<double>>` becomes
/// `Record<string, number[]>`.
pub fn ts_type(cpp_type: &str) -> String {
    let stripped = cpp_type
        .trim()
        .replace("const ", "")
        .replace(['&', '*'], "");
    let cpp_type = stripped.trim();

    if let Some(scalar) = scalar_type(cpp_type) {
        return scalar.to_string();
    }

    for container in SEQUENCE_CONTAINERS {
        if let Some(inner) = generic_argument(cpp_type, container) {
            // std::array carries a size argument; drop it at the first
            // top-level comma.
            let element = match top_level_comma(inner) {
                Some(pos) if *container == "std::array" => inner[..pos].trim(),
                _ => inner,
            };
            return format!("{}[]", ts_type(element));
        }
    }

    for container in ASSOCIATIVE_CONTAINERS {
        if let Some(inner) = generic_argument(cpp_type, container) {
            let Some(comma) = top_level_comma(inner) else {
                continue;
            };
            let key = inner[..comma].trim();
            let value = inner[comma + 1..].trim();

            // JSON objects only allow string keys.
            if key != "std::string" {
                return UNKNOWN.to_string();
            }
            return format!("Record<string, {}>", ts_type(value));
        }
    }

    UNKNOWN.to_string()
}

/// Fixed scalar vocabulary: every integer/float width and signedness
/// spelling, the fixed-width aliases, `bool`, `std::string`, `nullptr_t`.
fn scalar_type(cpp_type: &str) -> Option<&'static str> {
    let mapped = match cpp_type {
        "bool" => "boolean",
        "char" | "signed char" | "unsigned char" => "number",
        "short" | "short int" | "signed short" | "signed short int" => "number",
        "unsigned short" | "unsigned short int" => "number",
        "int" | "signed" | "signed int" | "unsigned" | "unsigned int" => "number",
        "long" | "long int" | "signed long" | "signed long int" => "number",
        "unsigned long" | "unsigned long int" => "number",
        "long long" | "long long int" | "signed long long" | "signed long long int" => "number",
        "unsigned long long" | "unsigned long long int" => "number",
        "int8_t" | "int16_t" | "int32_t" | "int64_t" => "number",
        "uint8_t" | "uint16_t" | "uint32_t" | "uint64_t" => "number",
        "size_t" | "ssize_t" => "number",
        "float" | "double" | "long double" => "number",
        "std::string" => "string",
        "nullptr_t" => "null",
        _ => return None,
    };
    Some(mapped)
}

/// The text between the outermost angle brackets of `container<...>`, or
/// `None` when the prefix does not match or the closing bracket is missing.
fn generic_argument<'a>(cpp_type: &'a str, container: &str) -> Option<&'a str> {
    let rest = cpp_type.strip_prefix(container)?;
    if !rest.starts_with('<') {
        return None;
    }
    let close = rest.rfind('>')?;
    Some(rest[1..close].trim())
}

/// Position of the first comma at angle-bracket depth zero. Depth-aware
/// scanning keeps `std::map<std::string, std::vector<int>>` from splitting
/// inside the nested argument list.
fn top_level_comma(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
