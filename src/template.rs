//! `$`-placeholder templates (`Makefile.tpl`, `Link.tpl`)
//!
//! Syntax:
//! - `$NAME` or `${NAME}` is replaced by the slot value; names are
//!   `[A-Za-z_][A-Za-z0-9_]*`
//! - `$$` is a literal `$`
//! - any other `$` is an error, as is a placeholder with no slot

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{St2MakeError, St2MakeResult};
use crate::fs::FileSystem;

/// Slot name to substituted text.
pub type Slots<'a> = BTreeMap<&'a str, String>;

/// A loaded template document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    text: String,
}

impl Template {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Load a template from disk.
    pub fn load<F: FileSystem>(fs: &F, path: &Path) -> St2MakeResult<Self> {
        let text = fs
            .read_to_string(path)
            .map_err(|source| St2MakeError::TemplateLoad {
                path: path.to_path_buf(),
                source,
            })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace every placeholder with its slot value.
    pub fn substitute(&self, slots: &Slots<'_>) -> St2MakeResult<String> {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let at = self.text.len() - rest.len() + pos;
            let after = &rest[pos + 1..];

            if let Some(tail) = after.strip_prefix('$') {
                out.push('$');
                rest = tail;
                continue;
            }

            let (ident, tail) = if let Some(braced) = after.strip_prefix('{') {
                let end = braced.find('}').ok_or_else(|| self.invalid(at))?;
                let ident = &braced[..end];
                if !is_identifier(ident) {
                    return Err(self.invalid(at));
                }
                (ident, &braced[end + 1..])
            } else {
                let len = identifier_len(after);
                if len == 0 {
                    return Err(self.invalid(at));
                }
                (&after[..len], &after[len..])
            };

            let value = slots
                .get(ident)
                .ok_or_else(|| St2MakeError::TemplateSubstitution {
                    name: self.name.clone(),
                    message: format!("no value for placeholder '{ident}'"),
                })?;
            out.push_str(value);
            rest = tail;
        }

        out.push_str(rest);
        Ok(out)
    }

    fn invalid(&self, at: usize) -> St2MakeError {
        let line = self.text[..at].matches('\n').count() + 1;
        St2MakeError::TemplateSubstitution {
            name: self.name.clone(),
            message: format!("invalid placeholder on line {line}"),
        }
    }
}

fn identifier_len(s: &str) -> usize {
    let mut len = 0;
    for (i, c) in s.char_indices() {
        let ok = if i == 0 {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || c == '_'
        };
        if !ok {
            break;
        }
        len = i + c.len_utf8();
    }
    len
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && identifier_len(s) == s.len()
}
