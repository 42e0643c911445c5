//! Parsing of `java -version` output

/// Extract the major version from `java -version` output.
///
/// Reads the first quoted string following the word `version`. Legacy
/// `1.x` versions report `x` as the major, everything else reports its
/// leading number:
///
/// ```
/// use ktlint_hook::jvm::parse_major_version;
///
/// assert_eq!(parse_major_version(r#"java version "1.8.0_292""#), Some(8));
/// assert_eq!(parse_major_version(r#"openjdk version "17.0.2" 2022-01-18"#), Some(17));
/// assert_eq!(parse_major_version("no java here"), None);
/// ```
pub fn parse_major_version(text: &str) -> Option<u32> {
    let quoted = quoted_version(text)?;
    let mut parts = quoted.split('.');
    let first = leading_number(parts.next()?)?;
    if first == 1 {
        if let Some(minor) = parts.next().and_then(leading_number) {
            return Some(minor);
        }
    }
    Some(first)
}

/// Marker preceding the quoted version in the JDK banner
const VERSION_MARKER: &str = "version \"";

/// The contents of the first `version "..."` occurrence
fn quoted_version(text: &str) -> Option<&str> {
    let start = text.find(VERSION_MARKER)? + VERSION_MARKER.len();
    let len = text[start..].find('"')?;
    Some(&text[start..start + len])
}

/// Digits at the start of `s`, e.g. `24` for `24-ea`
fn leading_number(s: &str) -> Option<u32> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
