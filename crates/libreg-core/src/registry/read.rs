use std::path::{Path, PathBuf};

use crate::kernel::error::Result;
use crate::path::{classify, decode_segment, encoded_path};
use crate::registry::entry::{Entry, Listing, ListingKind};
use crate::registry::{Registry, parse_value_file_name, value_file};
use crate::value::{Value, ValueType, deserialize};

impl Registry {
    /// Read a value or list a key, `Ok(None)` if nothing is there.
    ///
    /// A path naming a hive reads only that hive. Any other path is looked up
    /// in every hive of the precedence list: if it is a key anywhere, the
    /// listings are merged with earlier hives winning per name; otherwise the
    /// first hive holding a value of that name wins.
    ///
    /// Missing hives and missing paths are not errors. Stored text that does
    /// not decode as its type is.
    pub fn get(&self, path: &str) -> Result<Option<Entry>> {
        let parsed = classify(path, &self.table);
        match parsed.hive.as_deref() {
            Some(hive) => {
                let Some(base) = self.table.base_dir(hive) else {
                    return Ok(None);
                };
                let target = encoded_path(&base, &parsed.relative);
                if self.storage.is_dir(&target) {
                    return self.list(std::slice::from_ref(&target)).map(|l| Some(Entry::Key(l)));
                }
                Ok(self.probe(&target)?.map(Entry::Value))
            }
            None => {
                let candidates: Vec<PathBuf> = self
                    .table
                    .priority_order()
                    .into_iter()
                    .filter_map(|hive| self.table.base_dir(hive))
                    .map(|base| encoded_path(&base, &parsed.relative))
                    .collect();

                if candidates.iter().any(|c| self.storage.is_dir(c)) {
                    return self.list(&candidates).map(|l| Some(Entry::Key(l)));
                }
                for candidate in &candidates {
                    if let Some(value) = self.probe(candidate)? {
                        return Ok(Some(Entry::Value(value)));
                    }
                }
                Ok(None)
            }
        }
    }

    /// [`get`](Self::get), falling back to `default` when nothing is found
    pub fn read(&self, path: &str, default: Entry) -> Result<Entry> {
        Ok(self.get(path)?.unwrap_or(default))
    }

    /// Decode the first value file of `target` in probe order
    fn probe(&self, target: &Path) -> Result<Option<Value>> {
        for ty in ValueType::ALL {
            let file = value_file(target, ty);
            if self.storage.is_file(&file) {
                let text = self.storage.read_to_string(&file)?;
                return Ok(Some(deserialize(&text, ty)?));
            }
        }
        Ok(None)
    }

    /// Merge the listings of `dirs`; for each name the first directory wins.
    ///
    /// Within one directory a subkey shadows values of the same name, and
    /// type variants are reported in probe order, matching what a read of
    /// that name returns.
    fn list(&self, dirs: &[PathBuf]) -> Result<Listing> {
        let mut listing = Listing::new();
        for dir in dirs.iter().filter(|d| self.storage.is_dir(d)) {
            let mut local = Listing::new();
            for child in self.storage.read_dir(dir)? {
                let Some(file_name) = child.file_name().map(|n| n.to_string_lossy().into_owned())
                else {
                    continue;
                };
                let found = if self.storage.is_dir(&child) {
                    Some((decode_segment(&file_name), ListingKind::Key))
                } else {
                    parse_value_file_name(&file_name).map(|(name, ty)| (name, ListingKind::Value(ty)))
                };
                let Some((name, kind)) = found else {
                    continue;
                };
                match local.get(&name) {
                    Some(existing) if rank(*existing) <= rank(kind) => {}
                    _ => {
                        local.insert(name, kind);
                    }
                }
            }
            for (name, kind) in local {
                listing.entry(name).or_insert(kind);
            }
        }
        Ok(listing)
    }
}

fn rank(kind: ListingKind) -> usize {
    match kind {
        ListingKind::Key => 0,
        ListingKind::Value(ty) => 1 + ValueType::ALL.iter().position(|t| *t == ty).unwrap_or(0),
    }
}
