//! Layer runtime value object - defines what a layer is packaged for
//!
//! A runtime pins everything the isolated install step needs: the container
//! image, the platform the container runs under, and the installer flags that
//! select prebuilt wheels for that same platform.

use std::fmt;
use std::str::FromStr;

use crate::error::BuildError;

/// Platform the dependencies are installed for.
///
/// The container platform and the wheel platform tag are derived from the
/// same value so the installer never targets a different CPU than the
/// container it runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    /// x86_64 Linux (Lambda `x86_64` architecture)
    LinuxAmd64,
}

impl TargetPlatform {
    /// Value passed to `docker run --platform`
    pub fn container_platform(&self) -> &'static str {
        match self {
            TargetPlatform::LinuxAmd64 => "linux/amd64",
        }
    }

    /// Value passed to `pip install --platform`
    pub fn wheel_platform(&self) -> &'static str {
        match self {
            TargetPlatform::LinuxAmd64 => "manylinux2014_x86_64",
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_platform())
    }
}

/// Runtime a layer is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayerRuntime {
    /// CPython 3.12 on x86_64
    #[default]
    Python312Amd64,
}

impl LayerRuntime {
    /// Every runtime the builder can package
    pub const ALL: [LayerRuntime; 1] = [LayerRuntime::Python312Amd64];

    /// Identifier accepted on the command line
    pub fn id(&self) -> &'static str {
        match self {
            LayerRuntime::Python312Amd64 => "python3.12amd64",
        }
    }

    /// Container image used for the isolated install
    pub fn image(&self) -> &'static str {
        match self {
            LayerRuntime::Python312Amd64 => "python:3.12-slim",
        }
    }

    pub fn platform(&self) -> TargetPlatform {
        match self {
            LayerRuntime::Python312Amd64 => TargetPlatform::LinuxAmd64,
        }
    }

    /// Python implementation tag (`--implementation`)
    pub fn implementation(&self) -> &'static str {
        match self {
            LayerRuntime::Python312Amd64 => "cp",
        }
    }

    /// Python version the wheels must match (`--python-version`)
    pub fn python_version(&self) -> &'static str {
        match self {
            LayerRuntime::Python312Amd64 => "3.12",
        }
    }

    /// Top-level directory inside the archive.
    ///
    /// Lambda adds `/opt/python` to `sys.path`, so packages must live under
    /// `python/` in the layer zip.
    pub fn staging_dir(&self) -> &'static str {
        match self {
            LayerRuntime::Python312Amd64 => "python",
        }
    }

    /// File name prefix of produced archives
    pub fn archive_prefix(&self) -> &'static str {
        match self {
            LayerRuntime::Python312Amd64 => "python3-12-amd64-layer",
        }
    }

    /// Lambda runtime identifier the layer is compatible with
    pub fn compatible_runtime(&self) -> &'static str {
        match self {
            LayerRuntime::Python312Amd64 => "python3.12",
        }
    }

    /// Lambda runtime identifiers offered when publishing
    pub fn compatible_runtimes() -> Vec<&'static str> {
        Self::ALL.iter().map(|r| r.compatible_runtime()).collect()
    }
}

impl fmt::Display for LayerRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LayerRuntime {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.id() == s.trim())
            .ok_or_else(|| BuildError::UnsupportedRuntime {
                runtime: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_runtime_id() {
        let runtime: LayerRuntime = "python3.12amd64".parse().unwrap();
        assert_eq!(runtime, LayerRuntime::Python312Amd64);
        assert_eq!(runtime, LayerRuntime::default());
    }

    #[test]
    fn rejects_unknown_runtime() {
        let err = "nodejs20.x".parse::<LayerRuntime>().unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnsupportedRuntime { ref runtime } if runtime == "nodejs20.x"
        ));
    }

    #[test]
    fn wheel_platform_matches_container_architecture() {
        let platform = LayerRuntime::Python312Amd64.platform();
        assert_eq!(platform.container_platform(), "linux/amd64");
        assert!(platform.wheel_platform().ends_with("x86_64"));
    }

    #[test]
    fn display_uses_cli_identifier() {
        assert_eq!(LayerRuntime::Python312Amd64.to_string(), "python3.12amd64");
    }

    #[test]
    fn compatible_runtimes_lists_lambda_identifiers() {
        assert_eq!(LayerRuntime::compatible_runtimes(), vec!["python3.12"]);
    }
}
