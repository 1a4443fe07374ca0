use std::path::{Component, Path, PathBuf};

/// Expand a hive base directory template using the process environment.
///
/// `$HOME` and a leading `~` become the current user's home directory,
/// `$VAR` and `${VAR}` are substituted from the environment (unset variables
/// are left as written), and the result is made absolute.
pub fn expand_path(template: &str) -> PathBuf {
    let home = dirs::home_dir();
    expand_path_with(template, home.as_deref(), |name| std::env::var(name).ok())
}

/// Same as [`expand_path`] with an explicit home directory and variable lookup.
pub fn expand_path_with<F>(template: &str, home: Option<&Path>, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let mut expanded = template.to_string();
    // $HOME always means the resolved home, even when the variable is unset
    if let Some(home) = home {
        expanded = expanded.replace("$HOME", &home.to_string_lossy());
    }
    let expanded = expand_vars(&expanded, &lookup);
    let expanded = expand_tilde(&expanded, home);
    absolutize(&expanded)
}

fn expand_vars<F>(input: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                let name = &braced[..end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&rest[pos..pos + end + 3]),
                }
                rest = &braced[end + 1..];
                continue;
            }
        }

        let name_len = after
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
            .map(|(i, _)| i)
            .unwrap_or(after.len());
        if name_len == 0 {
            out.push('$');
            rest = after;
            continue;
        }

        let name = &after[..name_len];
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    out.push_str(rest);
    out
}

fn expand_tilde(input: &str, home: Option<&Path>) -> String {
    match home {
        Some(home) if input == "~" => home.to_string_lossy().into_owned(),
        Some(home) if input.starts_with("~/") => {
            home.join(&input[2..]).to_string_lossy().into_owned()
        }
        _ => input.to_string(),
    }
}

/// Make `path` absolute against the current directory and drop `.`/`..` lexically.
fn absolutize(path: &str) -> PathBuf {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
