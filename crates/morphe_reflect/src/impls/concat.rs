/// Concatenates string slices into a single `String`.
///
/// Used to build generic type paths.
///
/// ```
/// use morphe_reflect::impls::concat;
///
/// assert_eq!(concat(&["Vec<", "u8", ">"]), "Vec<u8>");
/// ```
pub fn concat(parts: &[&str]) -> String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut out = String::with_capacity(len);
    for part in parts {
        out.push_str(part);
    }
    out
}
