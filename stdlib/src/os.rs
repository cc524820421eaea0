//! Operating system information
//!
//! Names follow the runtime's JavaScript conventions: `arch()` reports `x64`
//! rather than `x86_64`, `os_type()` reports `Linux`, `Darwin` or `Windows_NT`.
//! `machine()` and `version()` come from `uname(2)` on unix.

use anyhow::Result;
use std::env::consts;

/// CPU architecture the binary was compiled for, in runtime naming.
pub fn arch() -> &'static str {
    match consts::ARCH {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        other => other,
    }
}

#[cfg(unix)]
struct Uname {
    machine: String,
    version: String,
}

#[cfg(unix)]
fn uname() -> Result<Uname> {
    use anyhow::Context;

    fn field(raw: &[libc::c_char]) -> String {
        let bytes: Vec<u8> = raw.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    // SAFETY: utsname is plain C data; uname fills it or returns -1.
    let mut info: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut info) } != 0 {
        return Err(std::io::Error::last_os_error()).context("uname");
    }
    Ok(Uname {
        machine: field(&info.machine),
        version: field(&info.version),
    })
}

/// Machine type as reported by `uname -m` (`x86_64`, `arm64` on Apple silicon, ...).
#[cfg(unix)]
pub fn machine() -> Result<String> {
    Ok(uname()?.machine)
}

/// Machine type of the compile target; there is no `uname` here.
#[cfg(not(unix))]
pub fn machine() -> Result<String> {
    Ok(consts::ARCH.to_string())
}

pub fn os_type() -> &'static str {
    match consts::OS {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows_NT",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}

/// Kernel version string as reported by `uname -v`.
#[cfg(unix)]
pub fn version() -> Result<String> {
    let version = uname()?.version;
    tracing::trace!(target: "yaso::os", %version, "uname");
    Ok(version)
}

#[cfg(not(unix))]
pub fn version() -> Result<String> {
    Err(anyhow::anyhow!("os.version() is not supported on {}", consts::OS))
}

/// Default directory for temporary files, without a trailing separator.
pub fn tmpdir() -> String {
    let dir = std::env::temp_dir().to_string_lossy().into_owned();
    let trimmed = dir.trim_end_matches(std::path::is_separator);
    if trimmed.is_empty() {
        dir
    } else {
        trimmed.to_string()
    }
}
