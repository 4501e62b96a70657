//! Configuration loading and hot reload of the active RuleSet.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use origin_map::config::{load_config, watcher, ConfigError, ConfigWatcher, LogFormat};
use origin_map::{parse, OriginResolver};

mod common;

#[test]
fn test_load_config_file() {
    let path = common::write_temp_config(
        r#"
        origin_map = "local/!local/% github.com/!https://github.com/%.git"
        defaults = true

        [observability]
        log_format = "json"
        "#,
    );

    let config = load_config(&path).unwrap();
    assert_eq!(config.observability.log_format, LogFormat::Json);

    let resolver = OriginResolver::from_config(&config).unwrap();
    let prefixes: Vec<String> = resolver.rules().iter().map(|r| r.prefix.clone()).collect();
    assert_eq!(prefixes, vec!["local/", "github.com/", "bitbucket.org/"]);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_rejects_malformed_map() {
    let path = common::write_temp_config("origin_map = \"local/!local/% github.com\"");

    match load_config(&path) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].to_string().contains("token 2"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    std::fs::remove_file(path).ok();
}

#[test]
fn test_readers_never_see_mixed_rule_sets() {
    let first = parse("a/!one/% b/!one/% c/!one/%", 3).unwrap();
    let second = parse("a/!two/% b/!two/% c/!two/%", 3).unwrap();

    let resolver = Arc::new(OriginResolver::new(first.clone()));
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let resolver = resolver.clone();
            let stop = stop.clone();
            thread::spawn(move || {
                let mut checked = 0u64;
                while !stop.load(Ordering::Relaxed) {
                    let snapshot = resolver.rules();
                    let generation: Vec<&str> = snapshot
                        .iter()
                        .map(|r| r.template.split('/').next().unwrap_or(""))
                        .collect();
                    assert_eq!(generation.len(), 3);
                    assert!(generation.iter().all(|g| *g == generation[0]));

                    let origin = resolver.resolve("b/x").expect("lookup must never miss");
                    assert!(origin == "one/x" || origin == "two/x", "got {}", origin);
                    checked += 1;
                }
                checked
            })
        })
        .collect();

    for i in 0..2_000 {
        let next = if i % 2 == 0 { second.clone() } else { first.clone() };
        resolver.replace(next);
    }
    stop.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().unwrap();
    }
}

#[tokio::test]
async fn test_watcher_reloads_changed_file() {
    let path = common::write_temp_config("origin_map = \"a/!before/%\"\ndefaults = false\n");
    let config = load_config(&path).unwrap();
    let resolver = Arc::new(OriginResolver::from_config(&config).unwrap());
    assert_eq!(resolver.resolve("a/x").as_deref(), Some("before/x"));

    let (config_watcher, mut updates) = ConfigWatcher::new(&path);
    let _handle = config_watcher.run().unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    std::fs::write(&path, "origin_map = \"a/!after/%\"\ndefaults = false\n").unwrap();

    // A write may surface as several events; wait for the complete file.
    let reloaded = tokio::time::timeout(Duration::from_secs(10), async {
        while let Some(config) = updates.recv().await {
            if config.origin_map == "a/!after/%" {
                return Some(config);
            }
        }
        None
    })
    .await
    .expect("timed out waiting for reload")
    .expect("watcher channel closed");

    watcher::apply(&resolver, &reloaded);
    assert_eq!(resolver.resolve("a/x").as_deref(), Some("after/x"));

    std::fs::remove_file(path).ok();
}
