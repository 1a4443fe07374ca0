//! Bulk provisioning from directive text.
//!
//! One directive per line:
//!
//! ```text
//! # comment
//! HKLM/SOFTWARE/App                      create a key
//! HKLM/SOFTWARE/App/Name=Aqua            write a str value
//! HKLM/SOFTWARE/App/Count:dword=3        write with an explicit type
//! ?HKCU/SOFTWARE/App/Theme=dark          only if nothing is there yet
//! ```
use std::fmt;

use log::debug;
use serde_json::Value as JsonValue;

use crate::kernel::error::Result;
use crate::registry::Registry;
use crate::value::{Value, ValueType};

/// A single parsed install line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    SetValue {
        path: String,
        ty: Option<ValueType>,
        text: String,
        if_absent: bool,
    },
    CreateKey {
        path: String,
        if_absent: bool,
    },
}

impl Directive {
    pub fn path(&self) -> &str {
        match self {
            Directive::SetValue { path, .. } | Directive::CreateKey { path, .. } => path,
        }
    }

    pub fn if_absent(&self) -> bool {
        match self {
            Directive::SetValue { if_absent, .. } | Directive::CreateKey { if_absent, .. } => {
                *if_absent
            }
        }
    }
}

/// Parse one line. Blank lines and comments yield `Ok(None)`.
///
/// The type of a value directive follows the last `:` before the `=`; an
/// unknown type name is an error.
pub fn parse_directive(line: &str) -> Result<Option<Directive>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (if_absent, line) = match line.strip_prefix('?') {
        Some(rest) => (true, rest.trim()),
        None => (false, line),
    };

    let Some((left, text)) = line.split_once('=') else {
        return Ok(Some(Directive::CreateKey {
            path: line.to_string(),
            if_absent,
        }));
    };

    let left = left.trim();
    let (path, ty) = match left.rsplit_once(':') {
        Some((path, tag)) => (path.trim(), Some(tag.parse::<ValueType>()?)),
        None => (left, None),
    };

    Ok(Some(Directive::SetValue {
        path: path.to_string(),
        ty,
        text: text.trim().to_string(),
        if_absent,
    }))
}

/// What [`Registry::install`] did for one directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallAction {
    Written { path: String, ty: ValueType },
    Created { path: String },
    Skipped { path: String },
}

impl fmt::Display for InstallAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallAction::Written { path, ty } => write!(f, "wrote {path} ({ty})"),
            InstallAction::Created { path } => write!(f, "created {path}"),
            InstallAction::Skipped { path } => write!(f, "skipped {path}"),
        }
    }
}

/// Actions taken by an install, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub actions: Vec<InstallAction>,
}

impl InstallReport {
    pub fn written(&self) -> usize {
        self.count(|a| matches!(a, InstallAction::Written { .. }))
    }

    pub fn created(&self) -> usize {
        self.count(|a| matches!(a, InstallAction::Created { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|a| matches!(a, InstallAction::Skipped { .. }))
    }

    fn count(&self, pred: impl Fn(&InstallAction) -> bool) -> usize {
        self.actions.iter().filter(|a| pred(a)).count()
    }
}

impl Registry {
    /// Apply every directive in `text` for `as_user`.
    ///
    /// Stops at the first line that fails to parse or apply; directives before
    /// it stay applied.
    pub fn install(&self, as_user: &str, text: &str) -> Result<InstallReport> {
        let mut report = InstallReport::default();

        for (index, line) in text.lines().enumerate() {
            let directive = match parse_directive(line) {
                Ok(Some(directive)) => directive,
                Ok(None) => continue,
                Err(e) => {
                    debug!("Install stopped at line {}: {}", index + 1, e);
                    return Err(e);
                }
            };

            if directive.if_absent() && self.get(directive.path())?.is_some() {
                report.actions.push(InstallAction::Skipped {
                    path: directive.path().to_string(),
                });
                continue;
            }

            let action = match directive {
                Directive::SetValue { path, ty, text, .. } => {
                    let ty = match ty {
                        Some(ty) => {
                            self.write_as(as_user, &path, &JsonValue::String(text), Some(ty))?;
                            ty
                        }
                        None => {
                            let value = Value::Str(text);
                            self.write(as_user, &path, &value)?;
                            value.value_type()
                        }
                    };
                    InstallAction::Written { path, ty }
                }
                Directive::CreateKey { path, .. } => {
                    self.create_key(as_user, &path)?;
                    InstallAction::Created { path }
                }
            };
            report.actions.push(action);
        }

        Ok(report)
    }
}
