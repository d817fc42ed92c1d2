//! Keeps `tests/unit/` in step with the `src/` module tree
//!
//! Every source file under `src/<module>/` has a test file of the same name
//! under `tests/unit/<module>/`, every test file is declared by its `mod.rs`,
//! and the harness in `tests/unit/main.rs` pulls in every module.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;

    const MODULES: [&str; 3] = ["algorithm", "io", "model"];

    fn modules() -> BTreeSet<String> {
        MODULES.iter().map(ToString::to_string).collect()
    }

    /// File stems of the `.rs` files directly inside `dir`, except `mod.rs`
    fn source_stems(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap_or_else(|error| panic!("cannot read {}: {error}", dir.display()))
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
            .filter(|stem| stem != "mod")
            .collect()
    }

    fn subdirectories(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.is_dir())
            .filter_map(|path| path.file_name().map(|s| s.to_string_lossy().to_string()))
            .collect()
    }

    /// Names of `mod x;` and `pub mod x;` declarations in `file`
    fn declared_modules(file: &Path) -> BTreeSet<String> {
        fs::read_to_string(file)
            .unwrap_or_else(|error| panic!("cannot read {}: {error}", file.display()))
            .lines()
            .map(str::trim)
            .filter_map(|line| {
                line.strip_prefix("pub mod ")
                    .or_else(|| line.strip_prefix("mod "))
                    .and_then(|rest| rest.strip_suffix(';'))
                    .map(ToString::to_string)
            })
            .collect()
    }

    fn listing(names: &BTreeSet<&String>, prefix: &str) -> String {
        names
            .iter()
            .map(|name| format!("  - {prefix}/{name}.rs"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_module_directories_match() {
        assert_eq!(subdirectories(Path::new("src")), modules());
        assert_eq!(subdirectories(Path::new("tests/unit")), modules());
    }

    #[test]
    fn test_every_source_file_is_mirrored() {
        for module in MODULES {
            let sources = source_stems(&Path::new("src").join(module));
            let tests = source_stems(&Path::new("tests/unit").join(module));

            let missing: BTreeSet<&String> = sources.difference(&tests).collect();
            assert!(
                missing.is_empty(),
                "source files without unit tests:\n{}",
                listing(&missing, &format!("tests/unit/{module}"))
            );

            let orphaned: BTreeSet<&String> = tests.difference(&sources).collect();
            assert!(
                orphaned.is_empty(),
                "unit tests without a source file:\n{}",
                listing(&orphaned, &format!("tests/unit/{module}"))
            );
        }
    }

    #[test]
    fn test_mod_files_declare_every_file() {
        for root in ["src", "tests/unit"] {
            for module in MODULES {
                let dir = Path::new(root).join(module);
                assert_eq!(
                    declared_modules(&dir.join("mod.rs")),
                    source_stems(&dir),
                    "{}/mod.rs does not declare exactly its sibling files",
                    dir.display()
                );
            }
        }
    }

    #[test]
    fn test_roots_declare_every_module() {
        assert_eq!(declared_modules(Path::new("src/lib.rs")), modules());
        assert_eq!(declared_modules(Path::new("tests/unit/main.rs")), modules());
    }

    #[test]
    fn test_unit_files_hold_gated_tests() {
        for module in MODULES {
            let dir = Path::new("tests/unit").join(module);
            for stem in source_stems(&dir) {
                let path = dir.join(format!("{stem}.rs"));
                let content = fs::read_to_string(&path).unwrap();

                assert!(
                    content.contains("#[cfg(test)]"),
                    "{} is not wrapped in #[cfg(test)]",
                    path.display()
                );
                assert!(
                    content.contains("#[test]"),
                    "{} holds no #[test] functions",
                    path.display()
                );
            }
        }
    }
}
