use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, OUTPUT_FILES, run, stderr, stdout};

#[test]
fn test_build_writes_all_outputs() -> Result<()> {
    let test = CliTest::with_preset_tree()?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Built 1 category, 2 fields, 2 presets - wrote 5 files"));
    for file in OUTPUT_FILES {
        assert!(test.exists(file), "{} was not written", file);
    }

    Ok(())
}

#[test]
fn test_no_arguments_builds() -> Result<()> {
    let test = CliTest::with_preset_tree()?;

    let output = run(test.command())?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.exists("presets.json"));

    Ok(())
}

#[test]
fn test_bundle_files_keep_source_documents() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    run(test.build_command())?;

    let presets = test.read_file("presets.json")?;
    assert!(presets.starts_with("{\n    \"amenity/cafe\": {\n        \"name\": \"Coffee Shop\","));

    let presets: Value = serde_json::from_str(&presets)?;
    assert_eq!(
        presets["shop"],
        json!({ "name": "Shop", "tags": { "shop": "*" }, "geometry": ["point"] })
    );

    let fields: Value = serde_json::from_str(&test.read_file("fields.json")?)?;
    let ids: Vec<_> = fields.as_object().unwrap().keys().cloned().collect();
    assert_eq!(ids, vec!["address/street", "cuisine"]);

    let categories: Value = serde_json::from_str(&test.read_file("categories.json")?)?;
    assert_eq!(categories["category-food"]["icon"], "restaurant");

    Ok(())
}

#[test]
fn test_taginfo_uses_last_tag() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    run(test.build_command())?;

    let taginfo: Value = serde_json::from_str(&test.read_file("taginfo.json")?)?;
    assert_eq!(taginfo["data_format"], 1);
    assert_eq!(taginfo["project"]["name"], "Editor Presets");
    assert_eq!(
        taginfo["tags"],
        json!([
            { "key": "cuisine", "value": "coffee_shop" },
            { "key": "shop" }
        ])
    );

    Ok(())
}

#[test]
fn test_translation_source() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    run(test.build_command())?;

    let yaml = test.read_file("presets.yaml")?;

    assert!(yaml.starts_with("en:\n  presets:\n    categories:\n      category-food:\n        name: Food\n"));
    assert!(yaml.contains(
        "      address/street:\n        a: b\n        # addr:street=*\n        label: Street\n"
    ));
    assert!(yaml.contains(
        "      cuisine:\n        # cuisine=*\n        label: Cuisine\n        options:\n          # cuisine=pizza\n          pizza: Pizza\n        # cuisine field placeholder\n        placeholder: Pizza, Sushi...\n"
    ));
    assert!(yaml.contains(
        "      amenity/cafe:\n        # amenity=cafe, cuisine=coffee_shop\n        name: Coffee Shop\n        # 'terms: cafe,espresso'\n        terms: <translate with synonyms or related terms for 'Coffee Shop', separated by commas>\n"
    ));
    assert!(yaml.contains(
        "      shop:\n        # shop=*\n        name: Shop\n        terms: <translate with synonyms or related terms for 'Shop', separated by commas>\n"
    ));
    assert!(!yaml.contains("#:"));

    Ok(())
}

#[test]
fn test_build_is_idempotent() -> Result<()> {
    let test = CliTest::with_preset_tree()?;

    run(test.build_command())?;
    let first: Vec<String> = OUTPUT_FILES
        .iter()
        .map(|file| test.read_file(file))
        .collect::<Result<_>>()?;

    run(test.build_command())?;
    let second: Vec<String> = OUTPUT_FILES
        .iter()
        .map(|file| test.read_file(file))
        .collect::<Result<_>>()?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_schema_violation_writes_nothing() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    test.write_file("fields/broken.json", r#"{ "key": "broken", "label": "Broken" }"#)?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error[schema-violation]"), "stderr: {}", err);
    assert!(err.contains("fields/broken.json"), "stderr: {}", err);
    assert!(err.contains("\"type\""), "stderr: {}", err);
    for file in OUTPUT_FILES {
        assert!(!test.exists(file), "{} should not be written", file);
    }

    Ok(())
}

#[test]
fn test_failed_build_keeps_previous_outputs() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    test.write_file("presets.json", "previous")?;
    test.write_file("presets/bad.json", r#"{ "name": "Bad" }"#)?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("presets.json")?, "previous");

    Ok(())
}

#[test]
fn test_unknown_category_member() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    test.write_file(
        "categories/shops.json",
        r#"{ "name": "Shops", "members": ["shop/bakery"] }"#,
    )?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown preset: shop/bakery in category Shops"));
    assert!(!test.exists("categories.json"));

    Ok(())
}

#[test]
fn test_unknown_preset_field() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    test.write_file(
        "presets/amenity/bar.json",
        r#"{ "name": "Bar", "tags": { "amenity": "bar" }, "fields": ["opening_hours"] }"#,
    )?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown preset field: opening_hours in preset Bar"));

    Ok(())
}

#[test]
fn test_string_collision() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    test.write_file(
        "fields/name.json",
        r#"{ "key": "name", "type": "text", "label": "Name", "strings": { "label": "Other" } }"#,
    )?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error[string-collision]"));

    Ok(())
}

#[test]
fn test_malformed_json_is_an_error() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    test.write_file("presets/broken.json", "{ \"name\": ")?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to parse JSON file"), "stderr: {}", err);
    assert!(err.contains("broken.json"), "stderr: {}", err);

    Ok(())
}

#[test]
fn test_missing_schema_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("presets/shop.json", r#"{ "name": "Shop", "tags": {} }"#)?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("field.json"));

    Ok(())
}

#[test]
fn test_out_dir_and_locale() -> Result<()> {
    let test = CliTest::with_preset_tree()?;

    let mut cmd = test.build_command();
    cmd.args(["--out-dir", "dist", "--locale", "pt-BR"]);
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(!test.exists("presets.yaml"));
    assert!(test.read_file("dist/presets.yaml")?.starts_with("pt-BR:\n  presets:\n"));

    Ok(())
}

#[test]
fn test_root_argument() -> Result<()> {
    let test = CliTest::with_preset_tree()?;

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("categories"));
    cmd.args(["build", "--root", "..", "--out-dir", "../out"]);
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.exists("out/taginfo.json"));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    test.write_file(
        ".presetpackrc.json",
        r#"{ "locale": "de", "taginfo": { "name": "Custom Presets", "keywords": ["a", "b"] } }"#,
    )?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.read_file("presets.yaml")?.starts_with("de:\n"));
    let taginfo: Value = serde_json::from_str(&test.read_file("taginfo.json")?)?;
    assert_eq!(taginfo["project"]["name"], "Custom Presets");
    assert_eq!(taginfo["project"]["keywords"], json!(["a", "b"]));
    assert_eq!(
        taginfo["project"]["project_url"],
        "https://github.com/osmlab/editor-presets"
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_preset_tree()?;
    test.write_file(".presetpackrc.json", r#"{ "locale": "not a locale" }"#)?;

    let output = run(test.build_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid locale"));

    Ok(())
}

#[test]
fn test_verbose_lists_outputs() -> Result<()> {
    let test = CliTest::with_preset_tree()?;

    let mut cmd = test.build_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("note: Collected 2 presets"), "stderr: {}", err);
    assert!(stdout(&output).contains("--> ./taginfo.json"));

    Ok(())
}
