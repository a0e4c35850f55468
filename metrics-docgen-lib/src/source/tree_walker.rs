//! Discovery and parsing of the Go packages under a source root.

use super::go_package::{GoFile, GoPackage, go_parser};
use super::{ExtractError, LOG_TARGET};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Parse every `.go` file below `root` and group the files into packages.
///
/// Directory entries are visited in file-name order and packages are returned
/// ordered by directory, then package name, so the result does not depend on
/// how the file system enumerates entries. External test packages (`*_test`)
/// are dropped. Any file that fails to parse aborts the walk.
pub fn collect_packages(root: &Path) -> Result<Vec<GoPackage>, ExtractError> {
    let mut parser = go_parser()?;
    let mut grouped: BTreeMap<(PathBuf, String), Vec<GoFile>> = BTreeMap::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;

        if entry.file_type().is_dir() || !is_go_file(entry.path()) {
            continue;
        }

        let path = entry.path();
        let source = fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file = GoFile::parse(&mut parser, path, source)?;
        let dir = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
        grouped.entry((dir, file.package_name().to_string())).or_default().push(file);
    }

    let packages: Vec<_> = grouped
        .into_iter()
        .map(|((dir, name), files)| GoPackage { name, dir, files })
        .filter(|package| {
            if package.is_test_only() {
                log::debug!(target: LOG_TARGET, "Skipping test package '{}' in {}", package.name, package.dir.display());
                return false;
            }
            true
        })
        .collect();

    log::debug!(target: LOG_TARGET, "Found {} packages under {}", packages.len(), root.display());
    Ok(packages)
}

fn is_go_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("go")
}
