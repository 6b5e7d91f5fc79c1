use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn marginalia_bin() -> PathBuf {
    std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("marginalia")
}

#[test]
fn test_generates_pages_index_and_stylesheet() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(
        root.join("adder.rs"),
        "// Adds two numbers.\nfn add(a: i32, b: i32) -> i32 { a + b }\n",
    )
    .unwrap();
    fs::write(
        root.join("greet.py"),
        "# Says hello.\nprint('hello')\n",
    )
    .unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args([".", "--output", "docs", "--title", "Test Project"])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");

    let adder = fs::read_to_string(root.join("docs/adder.html")).unwrap();
    assert!(adder.contains("Adds two numbers."));
    assert!(adder.contains("language-rust"));
    assert!(adder.contains("a + b"));

    let greet = fs::read_to_string(root.join("docs/greet.html")).unwrap();
    assert!(greet.contains("Says hello."));
    assert!(greet.contains("language-python"));

    let index = fs::read_to_string(root.join("docs/index.html")).unwrap();
    assert!(index.contains("Test Project"));
    assert!(index.contains("adder.html"));
    assert!(index.contains("greet.html"));

    assert!(root.join("docs/marginalia.css").exists());
}

#[test]
fn test_code_is_escaped_in_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("cmp.c"), "int less(int a, int b) { return a < b; }\n").unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["."])
        .output()
        .unwrap();
    assert!(output.status.success());

    let page = fs::read_to_string(root.join("docs/cmp.html")).unwrap();
    assert!(page.contains("a &lt; b"));
}

#[test]
fn test_nested_directories_are_mirrored() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("src/inner")).unwrap();
    fs::write(root.join("src/inner/deep.js"), "// deep file\nlet x = 1;\n").unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["src"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let page = fs::read_to_string(root.join("docs/src/inner/deep.html")).unwrap();
    assert!(page.contains("deep file"));
    // Stylesheet link walks back up to the output root.
    assert!(page.contains("href=\"../../marginalia.css\""));
}

#[test]
fn test_gitignored_files_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join(".gitignore"), "generated.rs\n").unwrap();
    fs::write(root.join("kept.rs"), "// kept\nfn kept() {}\n").unwrap();
    fs::write(root.join("generated.rs"), "// generated\nfn gen() {}\n").unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["."])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert!(root.join("docs/kept.html").exists());
    assert!(!root.join("docs/generated.html").exists());

    // And the opt-out flag restores it.
    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args([".", "--no-gitignore"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(root.join("docs/generated.html").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("only.rs"), "// prose\nfn f() {}\n").unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args([".", "--dry-run"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("[DRY RUN]"), "stdout: {stdout}");
    assert!(!root.join("docs").exists());
}

#[test]
fn test_unrecognized_extensions_are_filtered_out() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("notes.txt"), "just text\n").unwrap();
    fs::write(root.join("real.rs"), "fn f() {}\n").unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["."])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert!(root.join("docs/real.html").exists());
    assert!(!root.join("docs/notes.html").exists());
}

#[test]
fn test_custom_language_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(
        root.join("marginalia.toml"),
        concat!(
            "title = \"Configured\"\n",
            "\n",
            "[languages.fennel]\n",
            "extensions = [\"fnl\"]\n",
            "line_comment = \";;\"\n",
        ),
    )
    .unwrap();
    fs::write(root.join("init.fnl"), ";; configured language\n(print :hi)\n").unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["."])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");

    let page = fs::read_to_string(root.join("docs/init.html")).unwrap();
    assert!(page.contains("configured language"));

    let index = fs::read_to_string(root.join("docs/index.html")).unwrap();
    assert!(index.contains("Configured"));
}

#[test]
fn test_unreadable_file_fails_the_run_but_not_the_others() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("good.rs"), "// fine\nfn good() {}\n").unwrap();
    // Recognized extension, but not valid UTF-8: reading it fails.
    fs::write(root.join("broken.rs"), [0xFF, 0xFE, 0x00, 0x2F]).unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["."])
        .output()
        .unwrap();

    assert!(
        !output.status.success(),
        "a failed file must produce a non-zero exit code"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error processing"), "stderr: {stderr}");
    assert!(stderr.contains("broken.rs"), "stderr: {stderr}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 failed"), "stdout: {stdout}");

    // The healthy file is still documented.
    let page = fs::read_to_string(root.join("docs/good.html")).unwrap();
    assert!(page.contains("fine"));
    assert!(root.join("docs/index.html").exists());
}

#[test]
fn test_verbose_lists_supported_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args([".", "--verbose"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Supported extensions:"), "stdout: {stdout}");
    assert!(stdout.contains("rs"), "stdout: {stdout}");
    assert!(stdout.contains("py"), "stdout: {stdout}");
}

#[test]
fn test_config_discovered_in_target_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/marginalia.toml"), "title = \"Nested Title\"\n").unwrap();
    fs::write(root.join("src/lib.rs"), "// nested\nfn lib() {}\n").unwrap();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["src"])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");

    let index = fs::read_to_string(root.join("docs/index.html")).unwrap();
    assert!(index.contains("Nested Title"));
}

#[test]
fn test_explicit_output_flag_beats_config() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("marginalia.toml"), "output = \"site\"\n").unwrap();
    fs::write(root.join("one.rs"), "fn one() {}\n").unwrap();

    // No flag: the config's output directory is used.
    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["."])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(root.join("site/one.html").exists());

    // Explicitly passing the default must override the config.
    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args([".", "-o", "docs"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(root.join("docs/one.html").exists());
}

#[test]
fn test_empty_match_reports_and_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let output = Command::new(marginalia_bin())
        .current_dir(root)
        .args(["."])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No documentable files"));
}
