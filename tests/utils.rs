#![allow(dead_code)]

use liftoff::config::Config;
use liftoff::renderer::MiniJinjaRenderer;
use liftoff::template::TemplateProcessor;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Loads `config_name` and renders the Terraform and, when configured, the
/// Ansible templates of `templates` into `output_dir`.
pub fn render_fixture(config_name: &str, templates: &str, output_dir: &Path) {
    let config = Config::load_config(fixture(config_name)).unwrap();
    let engine = MiniJinjaRenderer::new();
    let processor = TemplateProcessor::new(&engine, fixture(templates), output_dir);
    processor.process_terraform_template(&config).unwrap();
    if config.ansible.is_some() {
        processor.process_ansible_template(&config).unwrap();
    }
}

fn relative_files(dir: &Path) -> std::collections::BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints files only present in one directory and content differences for
/// files present in both.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    for file in files1.difference(&files2) {
        println!("  only in {:?}: {:?}", dir1, file);
    }
    for file in files2.difference(&files1) {
        println!("  only in {:?}: {:?}", dir2, file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- {:?}:\n{}", dir1, String::from_utf8_lossy(&content1));
            println!("  --- {:?}:\n{}", dir2, String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees hold byte-identical files.
pub fn assert_same_tree(dir1: &Path, dir2: &Path) {
    if dir_diff::is_different(dir1, dir2).unwrap() {
        print_dir_diff(dir1, dir2);
        panic!("Directories differ. See above for details.");
    }
}
