//! Wheel filename parsing and tag normalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::WheelFilename;

// Compiled once (LazyLock for one-time init).
//
// `{name}-{version}-{pyver}-{abi}-{platform}`, anchored at the start of the
// filename. `name` is greedy and may itself contain hyphens; the regex
// backtracks so that the last four hyphen-delimited fields become version,
// interpreter tag, ABI tag, and platform. The platform group runs up to the
// first dot, which leaves the `.whl` suffix outside the match.
static WHEEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+)-(?P<version>[^-]+)-(?P<pyver>cp\d+)-(?P<abi>[^-]+)-(?P<platform>[^.]+)")
        .unwrap()
});

/// Parse a wheel filename into its tag components.
///
/// Returns `None` when the filename does not follow the expected shape
/// (non-CPython interpreter tags like `py3` included); callers treat that
/// as a skip, not an error.
pub fn parse_wheel_filename(filename: &str) -> Option<WheelFilename> {
    let caps = WHEEL_RE.captures(filename)?;
    Some(WheelFilename {
        name: caps["name"].to_string(),
        version: caps["version"].to_string(),
        python_tag: caps["pyver"].to_string(),
        abi_tag: caps["abi"].to_string(),
        platform_tag: caps["platform"].to_string(),
    })
}

/// Convert a CPython interpreter tag to a dotted version string.
///
/// `cp310` → `"3.10"`, `cp39` → `"3.9"`: the first digit after `cp` is the
/// major version, every remaining digit is the minor version. A hypothetical
/// two-digit major (`cp4010`) misparses as `"4.010"`; the splitting rule is
/// kept verbatim for output compatibility with the tooling this replaces.
pub fn python_tag_to_version(tag: &str) -> String {
    let digits = &tag[2..];
    format!("{}.{}", &digits[..1], &digits[1..])
}

/// Map a wheel platform tag onto a `sys.platform`-style label.
///
/// Containment checks run top to bottom; the branches are mutually
/// exclusive in practice. Unrecognized tags pass through unchanged.
pub fn platform_to_sys(platform: &str) -> String {
    if platform.contains("win32") || platform.contains("win_amd64") {
        "win32".to_string()
    } else if platform.contains("manylinux") || platform.contains("linux") {
        "linux".to_string()
    } else if platform.contains("macosx") || platform.contains("macos") {
        "darwin".to_string()
    } else {
        platform.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
