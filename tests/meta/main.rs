//! Keeps `tests/unit` in lockstep with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Relative paths of every directory and `.rs` file below `base`
    fn relative_paths(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Ok(relative) = path.strip_prefix(base) else {
                return Err(io::Error::other("entry outside scanned directory"));
            };
            let relative = relative.to_string_lossy().replace('\\', "/");

            if path.is_dir() {
                out.insert(relative);
                relative_paths(&path, base, out)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.insert(relative);
            }
        }
        Ok(())
    }

    fn scan(dir: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let root = Path::new(dir);
        let result = relative_paths(root, root, &mut paths);
        assert!(result.is_ok(), "failed to scan {dir}: {result:?}");
        paths
    }

    fn is_module_glue(path: &str) -> bool {
        path == "lib.rs" || path == "main.rs"
    }

    #[test]
    fn test_every_src_file_has_unit_tests() {
        let src = scan("src");
        let unit = scan("tests/unit");

        let missing: Vec<_> = src
            .iter()
            .filter(|p| !is_module_glue(p) && !p.ends_with("mod.rs"))
            .filter(|p| !unit.contains(*p))
            .map(|p| format!("  - src/{p} -> tests/unit/{p}"))
            .collect();

        assert!(
            missing.is_empty(),
            "src files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_src_counterpart() {
        let src = scan("src");
        let unit = scan("tests/unit");

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|p| !p.ends_with("mod.rs"))
            .filter(|p| !src.contains(*p))
            .map(|p| format!("  - tests/unit/{p} (no src/{p})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files without src counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let without_tests: Vec<_> = scan("tests")
            .into_iter()
            .filter(|p| p.ends_with(".rs") && !p.ends_with("mod.rs"))
            .filter(|p| {
                fs::read_to_string(Path::new("tests").join(p))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            without_tests.is_empty(),
            "test files without any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
