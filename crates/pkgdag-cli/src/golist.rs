//! Package metadata and seed listing backed by `go list`.

use std::path::Path;
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use pkgdag_core::{Error, ErrorKind, PackageInfo, PackageProvider, Result, SeedLister};

/// The subset of `go list -json` output pkgdag reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoPackage {
    #[serde(default)]
    import_path: String,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    goroot: bool,
    #[serde(default)]
    standard: bool,
    #[serde(default)]
    error: Option<GoPackageError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoPackageError {
    err: String,
}

/// Runs the go tool to resolve packages.
#[derive(Debug, Clone)]
pub struct GoList {
    program: String,
}

impl Default for GoList {
    fn default() -> Self {
        Self::new("go")
    }
}

impl GoList {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("list").current_dir(dir);
        command
    }
}

impl PackageProvider for GoList {
    fn import(&self, package: &str, src_dir: &Path) -> Result<PackageInfo> {
        let output = self
            .command(src_dir)
            .args(["-e", "-json", package])
            .stdin(Stdio::null())
            .output()
            .map_err(|err| {
                Error::provider_failed(package, format!("failed to run {}", self.program))
                    .with_operation("golist::import")
                    .set_source(err)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::provider_failed(package, stderr.trim())
                .with_operation("golist::import")
                .with_context("status", output.status.to_string()));
        }

        parse_package(package, &output.stdout)
    }
}

impl SeedLister for GoList {
    fn list(&self, root: &Path, patterns: &[String]) -> Result<Vec<String>> {
        debug!(root = %root.display(), ?patterns, "listing seed packages");
        let output = self
            .command(root)
            .args(patterns)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| {
                Error::seed_list_failed(format!("failed to run {}", self.program))
                    .with_operation("golist::list")
                    .set_source(err)
            })?;

        if !output.status.success() {
            return Err(
                Error::seed_list_failed(format!("{} list exited with {}", self.program, output.status))
                    .with_operation("golist::list")
                    .with_context("patterns", patterns.join(" ")),
            );
        }

        Ok(parse_seed_list(&output.stdout))
    }
}

/// Decode one package from `go list -e -json` output.
pub(crate) fn parse_package(package: &str, json: &[u8]) -> Result<PackageInfo> {
    let decoded: GoPackage = serde_json::from_slice(json).map_err(|err| {
        Error::new(ErrorKind::DeserializationFailed, "malformed go list output")
            .with_operation("golist::parse_package")
            .with_context("package", package)
            .set_source(err)
    })?;

    if let Some(error) = decoded.error {
        let err = if error.err.contains("cannot find package") || error.err.contains("is not in std") {
            Error::package_not_found(package).with_context("reason", error.err)
        } else {
            Error::provider_failed(package, error.err)
        };
        return Err(err.with_operation("golist::parse_package"));
    }

    Ok(PackageInfo::new(decoded.import_path)
        .with_imports(decoded.imports)
        .with_standard(decoded.goroot || decoded.standard))
}

/// One package identifier per non-empty line.
pub(crate) fn parse_seed_list(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
