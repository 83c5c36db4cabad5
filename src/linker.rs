//! Linker script layout analysis
//!
//! Lifts the `MEMORY { ... }` body and the `_estack` definition out of the
//! project's linker script so they can be dropped into `Link.tpl`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{St2MakeError, St2MakeResult};
use crate::fs::FileSystem;
use crate::models::MemoryLayout;

static MEMORY_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bMEMORY\s*\{[ \t]*(?:\r\n|\n|\r)?(.*?)\s*\}").expect("valid MEMORY pattern")
});

static ESTACK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(_estack[^\r\n]*)").expect("valid _estack pattern"));

/// Read the linker script at `project_dir/link_script` and analyze it.
pub fn load_memory_layout<F: FileSystem>(
    fs: &F,
    project_dir: &Path,
    link_script: &str,
) -> St2MakeResult<MemoryLayout> {
    let path = project_dir.join(link_script);
    let text = fs
        .read_to_string(&path)
        .map_err(|source| St2MakeError::LinkScriptUnreadable {
            path: path.clone(),
            source,
        })?;
    analyze_link_script(&text, &path)
}

/// Extract the memory body and stack-top line from linker script text.
///
/// Both pieces must be non-empty; `path` only feeds the error message.
pub fn analyze_link_script(text: &str, path: &Path) -> St2MakeResult<MemoryLayout> {
    let memory = MEMORY_BLOCK
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or_default();
    if memory.trim().is_empty() {
        return Err(St2MakeError::MemoryLayoutNotFound {
            path: path.to_path_buf(),
            missing: "MEMORY block",
        });
    }

    let estack = ESTACK_LINE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_end())
        .unwrap_or_default();
    if estack.is_empty() {
        return Err(St2MakeError::MemoryLayoutNotFound {
            path: path.to_path_buf(),
            missing: "_estack definition",
        });
    }

    Ok(MemoryLayout {
        memory: memory.to_string(),
        estack: estack.to_string(),
    })
}
