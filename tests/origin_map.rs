//! Origin map parsing and resolution through the public API.

use origin_map::origin::defaults::{default_rules, with_defaults};
use origin_map::{parse, OriginResolver, ParseError, Rule, RuleSet};

mod common;

#[test]
fn test_parse_and_resolve_table() {
    for (input, mappings) in common::MAPPING_CASES {
        let rules = parse(input, 1).unwrap_or_else(|e| panic!("on input {:?}: {}", input, e));
        let resolver = OriginResolver::new(rules);

        for (repo, expected) in mappings.iter() {
            let got = resolver.resolve(repo).unwrap_or_default();
            assert_eq!(got, *expected, "on input {:?}, repo {:?}", input, repo);
        }
    }
}

#[test]
fn test_parsed_rules_match_expected() {
    let rules = parse("local/!local/% github.com/!https://github.com/%.git", 1).unwrap();
    let expected: RuleSet = vec![
        Rule::new("local/", "local/%"),
        Rule::new("github.com/", "https://github.com/%.git"),
    ]
    .into();
    assert_eq!(rules, expected);
}

#[test]
fn test_defaults_on_empty_resolver() {
    let resolver = OriginResolver::empty();
    resolver.install(RuleSet::new(), true);

    assert_eq!(
        resolver.resolve("github.com/gorilla/mux").as_deref(),
        Some("https://github.com/gorilla/mux.git")
    );
    assert_eq!(
        resolver.resolve("bitbucket.org/gorilla/pat").as_deref(),
        Some("https://bitbucket.org/gorilla/pat.git")
    );
    assert_eq!(resolver.resolve("gitlab.com/a/b"), None);
}

#[test]
fn test_first_match_not_most_specific() {
    let general_first = "github.com/!https://github.com/%.git github.com/corp/!ssh://git@corp/%";
    let general_first = OriginResolver::new(parse(general_first, 2).unwrap());
    assert_eq!(
        general_first.resolve("github.com/corp/app").as_deref(),
        Some("https://github.com/corp/app.git")
    );

    let specific_first = "github.com/corp/!ssh://git@corp/% github.com/!https://github.com/%.git";
    let specific_first = OriginResolver::new(parse(specific_first, 2).unwrap());
    assert_eq!(
        specific_first.resolve("github.com/corp/app").as_deref(),
        Some("ssh://git@corp/app")
    );
}

#[test]
fn test_configured_rules_beat_defaults() {
    let resolver = OriginResolver::empty();
    resolver
        .load_str("github.com/!git@github.com:%.git", true)
        .unwrap();

    assert_eq!(
        resolver.resolve("github.com/a/b").as_deref(),
        Some("git@github.com:a/b.git")
    );
    // bitbucket default still appended
    assert_eq!(resolver.rules().len(), 2);
    assert_eq!(resolver.rules().iter().last(), default_rules().iter().last());
}

#[test]
fn test_malformed_config_installs_nothing() {
    let resolver = OriginResolver::new(with_defaults(RuleSet::new()));
    let before = resolver.rules();

    let err = resolver
        .load_str("local/!local/% !https://x/% c/!z/%", true)
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::EmptyPrefix {
            token: "!https://x/%".into(),
            position: 2,
        }
    );
    assert_eq!(resolver.rules(), before);
    assert_eq!(resolver.resolve("local/foo"), None);
}
