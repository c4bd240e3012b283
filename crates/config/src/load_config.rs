// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Looks for `filename` in `path` and then in each of its ancestors.
pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = path.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Picks the configuration file to read, if any.
///
/// An explicit `cli_file` always wins, resolved against `cwd` when relative.
/// Otherwise `default_filename` is searched from `cwd` upwards.
pub fn resolve_config_path<P: Into<PathBuf>>(
    find_in_parent: FindInParent,
    cwd: P,
    default_filename: &str,
    cli_file: Option<P>,
) -> Option<PathBuf> {
    let cli_file: Option<PathBuf> = cli_file.map(Into::into);
    let cwd = cwd.into();

    if let Some(cli_file) = cli_file {
        // config is passed in and is absolute
        if cli_file.is_absolute() {
            return Some(cli_file);
        }

        // config is passed in and is relative
        return Some(clean(cwd.join(cli_file)));
    }

    // search from cwd
    find_in_parent(&cwd, default_filename)
}
