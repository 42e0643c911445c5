//! Java runtime detection and launch flags
//!
//! ktlint runs as a jar, and newer JDKs need extra flags to allow the
//! reflective and native access it performs. The flags are gated on the
//! detected major version; when detection fails no flags are added.

mod flags;
mod probe;
mod version;

pub use flags::{
    derive_flags, ADD_OPENS_FLAG, ENABLE_NATIVE_ACCESS_FLAG, ENABLE_PREVIEW_FLAG,
    UNSAFE_MEMORY_ACCESS_FLAG,
};
pub use probe::{JavaProbe, RuntimeProbe};
pub use version::parse_major_version;

use tracing::debug;

/// Query the runtime and extract its major version.
///
/// Every failure (runtime missing, non-zero exit, unrecognized text) maps
/// to `None`.
pub async fn detect_major_version(probe: &dyn RuntimeProbe) -> Option<u32> {
    let text = match probe.version_text().await {
        Ok(text) => text,
        Err(e) => {
            debug!("Java version probe failed: {}", e);
            return None;
        }
    };

    let major = parse_major_version(&text);
    match major {
        Some(v) => debug!("Detected Java {}", v),
        None => debug!("Unrecognized Java version output: {:?}", text.trim()),
    }
    major
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HookError, HookResult};
    use async_trait::async_trait;

    struct FixedProbe(Option<&'static str>);

    #[async_trait]
    impl RuntimeProbe for FixedProbe {
        async fn version_text(&self) -> HookResult<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| HookError::command_exec("java -version", "not found"))
        }
    }

    #[tokio::test]
    async fn detects_from_probe_output() {
        let probe = FixedProbe(Some(
            "openjdk version \"21.0.4\" 2024-07-16\nOpenJDK Runtime Environment\n",
        ));
        assert_eq!(detect_major_version(&probe).await, Some(21));
    }

    #[tokio::test]
    async fn probe_failure_is_unknown() {
        assert_eq!(detect_major_version(&FixedProbe(None)).await, None);
    }

    #[tokio::test]
    async fn garbage_output_is_unknown() {
        let probe = FixedProbe(Some("command not found: java"));
        assert_eq!(detect_major_version(&probe).await, None);
    }
}
