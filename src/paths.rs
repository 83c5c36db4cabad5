//! Path normalization for IDE descriptor values
//!
//! TrueSTUDIO records paths relative to its own working directories, which
//! sit at different depths for each tool. The constants below encode that
//! layout; the functions are independent of it.

use std::path::MAIN_SEPARATOR_STR;

/// Symbolic "N levels up" tokens used in `locationURI` values.
pub const PARENT_PLACEHOLDERS: &[(&str, &str)] = &[
    ("PARENT-1-PROJECT_LOC", ".."),
    ("PARENT-2-PROJECT_LOC", "../.."),
    ("PARENT-3-PROJECT_LOC", "../../.."),
    ("PARENT-4-PROJECT_LOC", "../../../.."),
    ("PARENT-5-PROJECT_LOC", "../../../../.."),
];

/// Leading `../` segments removed (at most) from linked source paths.
pub const SOURCE_STRIP_DEPTH: usize = 3;

/// Leading `../` segments removed from assembler-scoped include paths.
pub const ASSEMBLER_STRIP_DEPTH: usize = 3;

/// Leading `../` segments removed from compiler-scoped include paths and
/// the linker script reference.
pub const COMPILER_STRIP_DEPTH: usize = 1;

/// Rewrite `PARENT-N-PROJECT_LOC` tokens into literal relative prefixes.
pub fn replace_placeholders(location: &str) -> String {
    let mut out = location.to_string();
    for (token, prefix) in PARENT_PLACEHOLDERS {
        if out.contains(token) {
            out = out.replace(token, prefix);
        }
    }
    out
}

/// Convert backslash separators to the host separator.
pub fn to_host_separators(value: &str) -> String {
    value.replace('\\', MAIN_SEPARATOR_STR)
}

fn strip_parent(path: &str) -> Option<&str> {
    path.strip_prefix("../").or_else(|| path.strip_prefix("..\\"))
}

/// Remove exactly `depth` leading `../` segments.
///
/// A path with fewer leading parent segments is returned unchanged.
pub fn strip_parent_prefix(path: &str, depth: usize) -> &str {
    let mut rest = path;
    for _ in 0..depth {
        match strip_parent(rest) {
            Some(r) => rest = r,
            None => return path,
        }
    }
    rest
}

/// Remove up to `depth` leading `../` segments.
pub fn strip_parent_prefix_up_to(path: &str, depth: usize) -> &str {
    let mut rest = path;
    for _ in 0..depth {
        match strip_parent(rest) {
            Some(r) => rest = r,
            None => break,
        }
    }
    rest
}

/// Normalize a tool-scoped path value (include path or link script).
pub fn normalize_tool_path(value: &str, depth: usize) -> String {
    let host = to_host_separators(value);
    strip_parent_prefix(&host, depth).to_string()
}

/// Normalize a linked-resource location into a project-relative path.
///
/// Up to [`SOURCE_STRIP_DEPTH`] parent segments are dropped, so locations
/// differing only in depth (`PARENT-2-PROJECT_LOC/Src/a.c` and
/// `PARENT-3-PROJECT_LOC/Src/a.c`) normalize to the same `Src/a.c` and are
/// listed once.
pub fn normalize_source_location(location: &str) -> String {
    let host = to_host_separators(&replace_placeholders(location));
    strip_parent_prefix_up_to(&host, SOURCE_STRIP_DEPTH).to_string()
}
