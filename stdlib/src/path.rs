//! POSIX path manipulation
//!
//! Pure string operations on `/`-separated paths with the same results as the
//! runtime's JavaScript `path` module. Nothing here touches the filesystem
//! except [`resolve`], which reads the current directory.

use anyhow::{Context, Result};

pub const SEP: char = '/';

/// Components of a path as returned by [`parse`] and accepted by [`format`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPath {
    pub root: String,
    pub dir: String,
    pub base: String,
    pub ext: String,
    pub name: String,
}

pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEP)
}

/// Collapse `.`/`..` segments and repeated separators. `..` past the start is
/// kept only when `allow_above_root` is set.
fn normalize_segments(path: &str, allow_above_root: bool) -> String {
    let mut out: Vec<&str> = Vec::new();
    for segment in path.split(SEP) {
        match segment {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                } else if allow_above_root {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out.join("/")
}

pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = is_absolute(path);
    let trailing = path.ends_with(SEP);
    let mut normalized = normalize_segments(path, !absolute);

    if normalized.is_empty() {
        if absolute {
            return "/".to_string();
        }
        return if trailing { "./" } else { "." }.to_string();
    }
    if trailing {
        normalized.push(SEP);
    }
    if absolute {
        format!("/{}", normalized)
    } else {
        normalized
    }
}

/// Join non-empty segments with `/` and normalize the result.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        return ".".to_string();
    }
    normalize(&joined)
}

/// Resolve `segments` right to left into an absolute path, falling back to `cwd`.
pub fn resolve_from<S: AsRef<str>>(cwd: &str, segments: &[S]) -> String {
    let mut resolved = String::new();
    let mut absolute = false;

    for segment in segments.iter().rev().map(|s| s.as_ref()).chain(std::iter::once(cwd)) {
        if segment.is_empty() {
            continue;
        }
        resolved = if resolved.is_empty() {
            segment.to_string()
        } else {
            format!("{}/{}", segment, resolved)
        };
        absolute = is_absolute(segment);
        if absolute {
            break;
        }
    }

    let normalized = normalize_segments(&resolved, !absolute);
    if absolute {
        format!("/{}", normalized)
    } else if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

/// [`resolve_from`] against the process working directory.
pub fn resolve<S: AsRef<str>>(segments: &[S]) -> Result<String> {
    let cwd = std::env::current_dir().context("resolve: read current directory")?;
    let resolved = resolve_from(&cwd.to_string_lossy(), segments);
    tracing::trace!(target: "yaso::path", %resolved, "resolve");
    Ok(resolved)
}

pub fn dirname(path: &str) -> String {
    let bytes = path.as_bytes();
    if bytes.is_empty() {
        return ".".to_string();
    }
    let has_root = bytes[0] == b'/';

    let mut end = None;
    let mut matched_slash = true;
    for i in (1..bytes.len()).rev() {
        if bytes[i] == b'/' {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            matched_slash = false;
        }
    }

    match end {
        None if has_root => "/".to_string(),
        None => ".".to_string(),
        Some(1) if has_root => "//".to_string(),
        Some(end) => path[..end].to_string(),
    }
}

/// Last portion of a path, ignoring trailing separators. `suffix` is stripped
/// from the result unless it is the whole last portion; a suffix equal to the
/// whole `path` yields an empty string.
pub fn basename(path: &str, suffix: Option<&str>) -> String {
    if suffix.is_some_and(|suffix| !suffix.is_empty() && suffix == path) {
        return String::new();
    }
    let trimmed = path.trim_end_matches(SEP);
    let base = match trimmed.rfind(SEP) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    };
    match suffix {
        Some(suffix) if !suffix.is_empty() && base != suffix => base.strip_suffix(suffix).unwrap_or(base),
        _ => base,
    }
    .to_string()
}

/// Extension of the last portion, from its last `.`. Leading dots (`.bashrc`)
/// and the `..` entry have no extension.
pub fn extname(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut start_dot: Option<usize> = None;
    let mut start_part = 0usize;
    let mut end: Option<usize> = None;
    let mut matched_slash = true;
    // 0: no char seen before the dot yet, 1: only dots, -1: regular char
    let mut pre_dot_state = 0i8;

    for i in (0..bytes.len()).rev() {
        let c = bytes[i];
        if c == b'/' {
            if !matched_slash {
                start_part = i + 1;
                break;
            }
            continue;
        }
        if end.is_none() {
            matched_slash = false;
            end = Some(i + 1);
        }
        if c == b'.' {
            if start_dot.is_none() {
                start_dot = Some(i);
            } else if pre_dot_state != 1 {
                pre_dot_state = 1;
            }
        } else if start_dot.is_some() {
            pre_dot_state = -1;
        }
    }

    match (start_dot, end) {
        (Some(dot), Some(end))
            if pre_dot_state != 0 && !(pre_dot_state == 1 && dot == end - 1 && dot == start_part + 1) =>
        {
            path[dot..end].to_string()
        }
        _ => String::new(),
    }
}

pub fn parse(path: &str) -> ParsedPath {
    let root = if is_absolute(path) { "/" } else { "" };
    let trimmed = path.trim_end_matches(SEP);

    let (dir, base) = match trimmed.rfind(SEP) {
        _ if trimmed.is_empty() => (root, ""),
        None => ("", trimmed),
        Some(0) => ("/", &trimmed[1..]),
        Some(index) => (&trimmed[..index], &trimmed[index + 1..]),
    };
    let ext = extname(base);
    let name = &base[..base.len() - ext.len()];

    ParsedPath {
        root: root.to_string(),
        dir: dir.to_string(),
        base: base.to_string(),
        name: name.to_string(),
        ext,
    }
}

/// Inverse of [`parse`]: `dir` wins over `root`, `base` wins over `name` + `ext`.
pub fn format(parts: &ParsedPath) -> String {
    let dir = if parts.dir.is_empty() { &parts.root } else { &parts.dir };
    let base = if parts.base.is_empty() {
        let ext = if parts.ext.is_empty() || parts.ext.starts_with('.') {
            parts.ext.clone()
        } else {
            format!(".{}", parts.ext)
        };
        format!("{}{}", parts.name, ext)
    } else {
        parts.base.clone()
    };

    if dir.is_empty() {
        base
    } else if *dir == parts.root {
        format!("{}{}", dir, base)
    } else {
        format!("{}/{}", dir, base)
    }
}
