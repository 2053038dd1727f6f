//! Architecture detection and release URL resolution for bufbuild/buf.

use std::fmt;

/// Base URL for buf release downloads.
pub const DOWNLOAD_BASE: &str = "https://github.com/bufbuild/buf/releases";

/// CPU architectures buf publishes Windows binaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Arm64,
    X86_64,
}

impl Arch {
    /// Classifies a raw platform machine identifier.
    ///
    /// Matching is case-insensitive and substring-based, so values like
    /// "AMD64" or "aarch64-linux-gnu" classify correctly.
    pub fn from_machine(raw: &str) -> Result<Self, UnsupportedArchitecture> {
        let machine = raw.to_lowercase();
        if machine.contains("arm64") || machine.contains("aarch64") {
            return Ok(Arch::Arm64);
        }
        if machine.contains("x86_64") || machine.contains("amd64") {
            return Ok(Arch::X86_64);
        }
        Err(UnsupportedArchitecture(raw.to_string()))
    }

    /// Classifies the architecture of the running process.
    pub fn detect() -> Result<Self, UnsupportedArchitecture> {
        Self::from_machine(std::env::consts::ARCH)
    }

    /// The token embedded in release asset filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::X86_64 => "x86_64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The machine identifier matched none of the supported architectures.
/// Carries the raw identifier for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedArchitecture(pub String);

impl fmt::Display for UnsupportedArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported architecture: {}", self.0)
    }
}

impl std::error::Error for UnsupportedArchitecture {}

/// A resolved download URL and the release tag it addresses.
///
/// For "latest" the tag stays the literal "latest": GitHub resolves the
/// actual version server-side via redirect and the response does not
/// carry it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLocation {
    pub url: String,
    pub tag: String,
}

/// Resolves the download URL and release tag for a requested version
/// against the default buf releases URL.
pub fn release_location(version: &str, arch: Arch) -> ReleaseLocation {
    release_location_at(DOWNLOAD_BASE, version, arch)
}

/// Resolves against an explicit base URL.
pub fn release_location_at(base_url: &str, version: &str, arch: Arch) -> ReleaseLocation {
    if version == "latest" {
        return ReleaseLocation {
            url: format!("{}/latest/download/buf-Windows-{}.exe", base_url, arch),
            tag: "latest".to_string(),
        };
    }

    let tag = if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{}", version)
    };
    ReleaseLocation {
        url: format!("{}/download/{}/buf-Windows-{}.exe", base_url, tag, arch),
        tag,
    }
}
