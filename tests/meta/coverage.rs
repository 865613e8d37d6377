#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Crate roots and module declaration files carry no logic of their own
    fn is_wiring_file(relative_path: &str) -> bool {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();

        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let relative_path = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative_path);
                paths.extend(collect_relative_paths(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }

        Ok(paths)
    }

    fn source_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src_dir = Path::new("src");
        let tests_dir = Path::new("tests/unit");

        let src_paths = collect_relative_paths(src_dir, src_dir)
            .unwrap_or_else(|error| panic!("Failed to read src directory: {error}"));
        let test_paths = collect_relative_paths(tests_dir, tests_dir)
            .unwrap_or_else(|error| panic!("Failed to read tests/unit directory: {error}"));

        (src_paths, test_paths)
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, test_paths) = source_and_unit_paths();

        let missing: Vec<_> = src_paths
            .iter()
            .filter(|path| !is_wiring_file(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, test_paths) = source_and_unit_paths();

        let orphaned: Vec<_> = test_paths
            .iter()
            .filter(|path| !is_wiring_file(path) && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let paths = collect_relative_paths(tests_dir, tests_dir)
            .unwrap_or_else(|error| panic!("Failed to scan tests directory: {error}"));

        let without_tests: Vec<_> = paths
            .iter()
            .filter(|path| path.ends_with(".rs") && !is_wiring_file(path))
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }

    #[test]
    fn test_wiring_files_are_recognised_in_any_directory() {
        assert!(is_wiring_file("main.rs"));
        assert!(is_wiring_file("unit/algorithm/mod.rs"));
        assert!(is_wiring_file("meta/main.rs"));
        assert!(!is_wiring_file("algorithm/evolver.rs"));
        assert!(!is_wiring_file("io/domain.rs"));
    }
}
