//! CLI integration tests for Quill
//!
//! These tests drive the binary end-to-end: site initialization, the
//! content index commands, and the formula/curve/growth commands.

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the quill binary
fn quill_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("quill"))
}

/// Create a temporary directory and initialize a quill site
fn setup_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    quill_cmd().arg("init").arg(dir.path()).assert().success();
    dir
}

/// Write a post file into the site's content directory
fn write_post(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join("content/blog").join(name), contents).unwrap();
}

/// Run a command in the site and parse its JSON stdout
fn json_output(dir: &TempDir, args: &[&str]) -> Value {
    let output = quill_cmd()
        .current_dir(dir.path())
        .args(args)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).unwrap()
}

// =============================================================================
// Initialization Tests
// =============================================================================

#[test]
fn test_init_creates_structure() {
    let dir = TempDir::new().unwrap();

    quill_cmd()
        .arg("init")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized quill site"));

    assert!(dir.path().join("quill.toml").is_file());
    assert!(dir.path().join("content/blog").is_dir());
}

#[test]
fn test_init_is_idempotent() {
    let dir = TempDir::new().unwrap();

    quill_cmd().arg("init").arg(dir.path()).assert().success();
    quill_cmd().arg("init").arg(dir.path()).assert().success();
}

#[test]
fn test_post_commands_require_a_site() {
    let dir = TempDir::new().unwrap();

    quill_cmd()
        .current_dir(dir.path())
        .args(["post", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in a quill site"));
}

// =============================================================================
// Post Tests
// =============================================================================

#[test]
fn test_post_list_empty_site() {
    let dir = setup_site();

    quill_cmd()
        .current_dir(dir.path())
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));

    let slugs = json_output(&dir, &["post", "slugs"]);
    assert_eq!(slugs.as_array().unwrap().len(), 0);
}

#[test]
fn test_post_list_sorted_most_recent_first() {
    let dir = setup_site();
    write_post(
        &dir,
        "oldest.md",
        "---\ntitle: Oldest\ndate: \"2023-01-10\"\n---\nbody",
    );
    write_post(
        &dir,
        "newest.md",
        "---\ntitle: Newest\ndate: \"2025-02-20\"\n---\nbody",
    );
    write_post(
        &dir,
        "middle.md",
        "---\ntitle: Middle\ndate: \"2024-06-01\"\n---\nbody",
    );

    let posts = json_output(&dir, &["post", "list"]);
    let slugs: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();

    assert_eq!(slugs, vec!["newest", "middle", "oldest"]);
}

#[test]
fn test_post_without_date_sorts_oldest() {
    let dir = setup_site();
    write_post(&dir, "dated.md", "---\ndate: \"2020-01-01\"\n---\nbody");
    write_post(&dir, "undated.md", "body only");

    let posts = json_output(&dir, &["post", "list"]);
    let slugs: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();

    assert_eq!(slugs, vec!["dated", "undated"]);
}

#[test]
fn test_post_missing_front_matter_defaults() {
    let dir = setup_site();
    write_post(&dir, "minimal-note.md", "Just a body, no metadata.");

    let posts = json_output(&dir, &["post", "list"]);
    let post = &posts.as_array().unwrap()[0];

    assert_eq!(post["slug"], "minimal-note");
    assert_eq!(post["title"], "minimal-note");
    assert_eq!(post["date"], "");
    assert_eq!(post["excerpt"], "");
    assert_eq!(post["tags"].as_array().unwrap().len(), 0);
    assert_eq!(post["reading_time"], "1 min read");
}

#[test]
fn test_post_reading_time_from_word_count() {
    let dir = setup_site();
    let body: String = vec!["word"; 450].join(" ");
    write_post(
        &dir,
        "long-read.md",
        &format!("---\ntitle: Long\n---\n{}", body),
    );

    let posts = json_output(&dir, &["post", "list"]);
    assert_eq!(posts.as_array().unwrap()[0]["reading_time"], "3 min read");
}

#[test]
fn test_post_show_includes_body() {
    let dir = setup_site();
    write_post(
        &dir,
        "hello-world.md",
        "---\ntitle: Hello World\ndate: \"2024-05-05\"\ntags: [intro, meta]\n---\n\n# Welcome\n\nFirst post.\n",
    );

    quill_cmd()
        .current_dir(dir.path())
        .args(["post", "show", "hello-world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World"))
        .stdout(predicate::str::contains("intro, meta"))
        .stdout(predicate::str::contains("First post."));

    let post = json_output(&dir, &["post", "show", "hello-world"]);
    assert_eq!(post["slug"], "hello-world");
    assert!(post["content"].as_str().unwrap().contains("# Welcome"));
}

#[test]
fn test_post_show_not_found() {
    let dir = setup_site();

    quill_cmd()
        .current_dir(dir.path())
        .args(["post", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post not found: missing"));
}

#[test]
fn test_post_slugs_match_files() {
    let dir = setup_site();
    write_post(&dir, "alpha.md", "a");
    write_post(&dir, "beta.md", "b");
    fs::write(dir.path().join("content/blog/ignored.txt"), "x").unwrap();

    let slugs = json_output(&dir, &["post", "slugs"]);
    let slugs: Vec<&str> = slugs
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();

    assert_eq!(slugs, vec!["alpha", "beta"]);
}

#[test]
fn test_configured_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("quill.toml"),
        "[content]\ndir = \"content/blog\"\nextension = \"mdx\"\n",
    )
    .unwrap();
    quill_cmd().arg("init").arg(dir.path()).assert().success();

    write_post(&dir, "jsx-post.mdx", "---\ntitle: MDX\n---\nbody");
    write_post(&dir, "plain.md", "ignored under mdx config");

    let slugs = json_output(&dir, &["post", "slugs"]);
    assert_eq!(slugs.as_array().unwrap().len(), 1);
    assert_eq!(slugs[0], "jsx-post");
}

// =============================================================================
// Formula Tests
// =============================================================================

#[test]
fn test_formula_list_builtins() {
    let dir = setup_site();

    let formulas = json_output(&dir, &["formula", "list"]);
    let names: Vec<&str> = formulas
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Easy (SAT)", "Hard (SAT)", "Unsatisfiable"]);
}

#[test]
fn test_formula_list_works_outside_a_site() {
    let dir = TempDir::new().unwrap();

    quill_cmd()
        .current_dir(dir.path())
        .args(["formula", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsatisfiable"));
}

#[test]
fn test_formula_from_site_config() {
    let dir = setup_site();
    let manifest = fs::read_to_string(dir.path().join("quill.toml")).unwrap();
    let extra = "\n[[formula]]\nname = \"Tiny\"\ndescription = \"Two clauses\"\nnum_vars = 2\nclauses = [[1, 2], [-1, -2]]\n";
    fs::write(dir.path().join("quill.toml"), manifest + extra).unwrap();

    let formulas = json_output(&dir, &["formula", "list"]);
    assert_eq!(formulas.as_array().unwrap().len(), 4);

    quill_cmd()
        .current_dir(dir.path())
        .args(["formula", "show", "Tiny"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(x1 ∨ x2)"));
}

#[test]
fn test_formula_show_not_found() {
    let dir = setup_site();

    quill_cmd()
        .current_dir(dir.path())
        .args(["formula", "show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Formula not found"));
}

#[test]
fn test_formula_eval_partial_assignment() {
    let dir = setup_site();

    // Easy (SAT) with only x2 = false: the second clause is satisfied
    // through ¬x2, the others stay undetermined.
    let eval = json_output(&dir, &["formula", "eval", "Easy (SAT)", "-a", "x2=false"]);

    assert_eq!(eval["fully_assigned"], false);
    assert_eq!(eval["any_violated"], false);
    assert_eq!(eval["all_satisfied"], false);

    let statuses: Vec<&str> = eval["clauses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["undetermined", "satisfied", "undetermined"]);
}

#[test]
fn test_formula_eval_unsatisfiable_always_violates() {
    let dir = setup_site();

    for (x1, x2) in [("t", "t"), ("t", "f"), ("f", "t"), ("f", "f")] {
        let eval = json_output(
            &dir,
            &[
                "formula",
                "eval",
                "Unsatisfiable",
                "-a",
                &format!("x1={}", x1),
                "-a",
                &format!("x2={}", x2),
            ],
        );

        assert_eq!(eval["fully_assigned"], true);
        assert_eq!(eval["any_violated"], true);
        assert_eq!(eval["all_satisfied"], false);
    }
}

#[test]
fn test_formula_eval_model_found() {
    let dir = setup_site();

    // x3 = true satisfies every clause of Easy (SAT).
    let eval = json_output(
        &dir,
        &[
            "formula", "eval", "Easy (SAT)", "-a", "x1=t", "-a", "x2=t", "-a", "x3=t",
        ],
    );

    assert_eq!(eval["all_satisfied"], true);
    assert_eq!(eval["any_violated"], false);
    assert_eq!(eval["fully_assigned"], true);
}

#[test]
fn test_formula_eval_out_of_range_variable_ignored() {
    let dir = setup_site();

    let eval = json_output(&dir, &["formula", "eval", "Unsatisfiable", "-a", "x9=t"]);
    assert_eq!(eval["fully_assigned"], false);
    assert!(eval["assignment"].get("x9").is_none());
}

#[test]
fn test_formula_eval_rejects_bad_assignment() {
    let dir = setup_site();

    quill_cmd()
        .current_dir(dir.path())
        .args(["formula", "eval", "Easy (SAT)", "-a", "x1=maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));
}

// =============================================================================
// Curve and Growth Tests
// =============================================================================

#[test]
fn test_curve_probability_at_critical_ratio() {
    let dir = setup_site();

    let result = json_output(&dir, &["curve", "--at", "4.267"]);
    let probability = result["probability"].as_f64().unwrap();

    assert!((probability - 0.5).abs() < 1e-9);
}

#[test]
fn test_curve_table_spans_range() {
    let dir = setup_site();

    let result = json_output(&dir, &["curve", "--samples", "12"]);
    let points = result["points"].as_array().unwrap();

    assert_eq!(points.len(), 13);
    assert_eq!(points[0]["ratio"].as_f64().unwrap(), 1.0);
    assert_eq!(points[12]["ratio"].as_f64().unwrap(), 7.0);

    // Monotonically non-increasing across the table
    let probabilities: Vec<f64> = points
        .iter()
        .map(|p| p["probability"].as_f64().unwrap())
        .collect();
    assert!(probabilities.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_curve_steepness_from_site_config() {
    let dir = setup_site();
    let manifest = fs::read_to_string(dir.path().join("quill.toml")).unwrap();
    let manifest = manifest.replace("steepness = 4.5", "steepness = 90.0");
    fs::write(dir.path().join("quill.toml"), manifest).unwrap();

    // A much steeper sigmoid is nearly zero just past the midpoint
    let result = json_output(&dir, &["curve", "--at", "4.5"]);
    assert!(result["probability"].as_f64().unwrap() < 1e-6);
    assert_eq!(result["steepness"].as_f64().unwrap(), 90.0);
}

#[test]
fn test_growth_single_row() {
    let dir = TempDir::new().unwrap();

    let rows = json_output(&dir, &["growth", "--vars", "10"]);
    let row = &rows.as_array().unwrap()[0];

    assert_eq!(row["vars"], 10);
    assert_eq!(row["quadratic"].as_f64().unwrap(), 100.0);
    assert_eq!(row["cubic"].as_f64().unwrap(), 1000.0);
    assert_eq!(row["exponential"].as_f64().unwrap(), 1024.0);
}

#[test]
fn test_growth_ladder_text() {
    let dir = TempDir::new().unwrap();

    quill_cmd()
        .current_dir(dir.path())
        .arg("growth")
        .assert()
        .success()
        .stdout(predicate::str::contains("2^N"))
        .stdout(predicate::str::contains("1.1e15")); // 2^50
}
