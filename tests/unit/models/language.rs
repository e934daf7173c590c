use crate::models::LanguageId;

#[test]
fn from_name_maps_all_supported_extensions() {
    let cases = [
        ("a.rs", LanguageId::Rust),
        ("a.go", LanguageId::Go),
        ("a.py", LanguageId::Python),
        ("a.pyi", LanguageId::Python),
        ("a.js", LanguageId::JavaScript),
        ("a.jsx", LanguageId::JavaScript),
        ("a.mjs", LanguageId::JavaScript),
        ("a.cjs", LanguageId::JavaScript),
        ("a.ts", LanguageId::TypeScript),
        ("a.tsx", LanguageId::TypeScript),
        ("a.mts", LanguageId::TypeScript),
        ("a.cts", LanguageId::TypeScript),
        ("a.json", LanguageId::Json),
        ("a.md", LanguageId::Markdown),
        ("a.markdown", LanguageId::Markdown),
        ("a.css", LanguageId::Css),
        ("a.scss", LanguageId::Css),
        ("a.sass", LanguageId::Css),
        ("a.less", LanguageId::Css),
        ("a.html", LanguageId::Html),
        ("a.htm", LanguageId::Html),
        ("a.xml", LanguageId::Xml),
        ("a.svg", LanguageId::Xml),
        ("a.java", LanguageId::Java),
        ("a.c", LanguageId::C),
        ("a.h", LanguageId::C),
        ("a.cc", LanguageId::Cpp),
        ("a.cpp", LanguageId::Cpp),
        ("a.cxx", LanguageId::Cpp),
        ("a.hpp", LanguageId::Cpp),
        ("a.hh", LanguageId::Cpp),
        ("a.hxx", LanguageId::Cpp),
        ("a.sh", LanguageId::Shell),
        ("a.bash", LanguageId::Shell),
        ("a.zsh", LanguageId::Shell),
        ("a.fish", LanguageId::Shell),
        ("a.sql", LanguageId::Sql),
        ("a.yaml", LanguageId::Yaml),
        ("a.yml", LanguageId::Yaml),
        ("a.toml", LanguageId::Toml),
        ("a.txt", LanguageId::Text),
        ("a.unknown", LanguageId::Text),
    ];

    for (name, expected) in cases {
        assert_eq!(LanguageId::from_name(name), expected, "{name}");
    }
}

#[test]
fn extension_matching_is_case_insensitive() {
    assert_eq!(LanguageId::from_name("MAIN.RS"), LanguageId::Rust);
    assert_eq!(LanguageId::from_name("Readme.MD"), LanguageId::Markdown);
}

#[test]
fn names_without_a_real_extension_fall_back_to_text() {
    assert_eq!(LanguageId::from_name("Makefile"), LanguageId::Text);
    assert_eq!(LanguageId::from_name(".gitignore"), LanguageId::Text);
    assert_eq!(LanguageId::from_name(""), LanguageId::Text);
}

#[test]
fn only_the_last_extension_counts() {
    assert_eq!(LanguageId::from_name("archive.tar.gz"), LanguageId::Text);
    assert_eq!(LanguageId::from_name("types.d.ts"), LanguageId::TypeScript);
}

#[test]
fn tag_strings_match_editor_surface_identifiers() {
    let cases = [
        (LanguageId::Rust, "rust"),
        (LanguageId::TypeScript, "typescript"),
        (LanguageId::Markdown, "markdown"),
        (LanguageId::Shell, "shell"),
        (LanguageId::Text, "text"),
    ];
    for (lang, tag) in cases {
        assert_eq!(lang.tag(), tag);
    }
}
