//! Version-gated JVM flags for running ktlint

/// Opens `java.lang` for reflective access (JDK 16 stopped doing this by default)
pub const ADD_OPENS_FLAG: &str = "--add-opens=java.base/java.lang=ALL-UNNAMED";

/// Allows preview features
pub const ENABLE_PREVIEW_FLAG: &str = "--enable-preview";

/// Silences the `sun.misc.Unsafe` memory access deprecation on JDK 24+
pub const UNSAFE_MEMORY_ACCESS_FLAG: &str = "--sun-misc-unsafe-memory-access=allow";

/// Allows native access without warnings
pub const ENABLE_NATIVE_ACCESS_FLAG: &str = "--enable-native-access=ALL-UNNAMED";

/// JVM flags for the given major version.
///
/// Gates are applied in a fixed order (16, 24, then 17) and the resulting
/// order must be kept: some launchers are sensitive to it. An unknown
/// version gets no flags.
pub fn derive_flags(major: Option<u32>) -> Vec<String> {
    let Some(version) = major else {
        return Vec::new();
    };

    let mut flags = Vec::new();
    if version >= 16 {
        flags.push(ADD_OPENS_FLAG.to_string());
    }
    if version >= 24 {
        flags.push(ENABLE_PREVIEW_FLAG.to_string());
        flags.push(UNSAFE_MEMORY_ACCESS_FLAG.to_string());
    }
    if version >= 17 {
        flags.push(ENABLE_NATIVE_ACCESS_FLAG.to_string());
    }
    flags
}
