// Refresh tests: reload cycles, failure handling and atomic publication

use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::common::{create_test_services, loaded_test_services, TestCorpus};
use tadpole::core::types::RefreshState;

#[tokio::test]
async fn test_queries_empty_until_first_publish() {
    let corpus = TestCorpus::small();
    let services = create_test_services(corpus.path());

    assert!(!services.refresher.status().ready);
    assert!(services.query("tmux").unwrap().is_empty());

    services.refresher.refresh_once().await.unwrap();

    assert!(services.refresher.status().ready);
    assert_eq!(services.query("tmux").unwrap().len(), 2);
}

#[tokio::test]
async fn test_refresh_picks_up_changes() {
    let corpus = TestCorpus::small();
    let services = loaded_test_services(corpus.path()).await;
    assert!(services.query("rebase").unwrap().is_empty());

    corpus.write("git.org", "* Interactive rebase\ngit rebase -i HEAD~3\n");
    services.refresher.refresh_once().await.unwrap();

    assert_eq!(services.query("rebase").unwrap().len(), 1);
    // The old git.org entries are gone with the old index
    assert!(services.query("commit").unwrap().is_empty());
    assert_eq!(services.refresher.status().completed_cycles, 2);
}

#[tokio::test]
async fn test_failed_refresh_keeps_serving_previous_index() {
    let corpus = TestCorpus::small();
    let services = loaded_test_services(corpus.path()).await;

    corpus.write("broken.org", "orphan line\n* Heading\n");
    assert!(services.refresher.refresh_once().await.is_err());

    assert_eq!(services.query("tmux").unwrap().len(), 2);
    let status = services.refresher.status();
    assert_eq!(status.state, RefreshState::Idle);
    assert_eq!(status.completed_cycles, 1);
    assert_eq!(status.failed_cycles, 1);
    assert!(status.last_error.unwrap().contains("broken.org"));

    fs::remove_file(corpus.path().join("broken.org")).unwrap();
    services.refresher.refresh_once().await.unwrap();
    assert!(services.refresher.status().last_error.is_none());
}

#[tokio::test]
async fn test_failed_first_refresh_leaves_nothing_published() {
    let corpus = TestCorpus::with_files(&[("bad.org", "no heading here\n")]);
    let services = create_test_services(corpus.path());

    assert!(services.refresher.refresh_once().await.is_err());

    assert!(!services.refresher.status().ready);
    assert!(services.query("heading").unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_never_see_partial_index() {
    let corpus = TestCorpus::with_files(&[(
        "faq.org",
        "* Alpha\nversion one\n* Alpha extra\nversion one\n",
    )]);
    let staging = tempfile::TempDir::new().unwrap();
    let services = Arc::new(loaded_test_services(corpus.path()).await);
    let done = Arc::new(AtomicBool::new(false));

    let mut readers = Vec::new();
    for _ in 0..4 {
        let services = Arc::clone(&services);
        let done = Arc::clone(&done);
        readers.push(tokio::task::spawn_blocking(move || {
            let mut observed = 0;
            while !done.load(Ordering::SeqCst) {
                let faqs = services.query("version").unwrap();
                // Each published corpus has exactly two entries sharing a body
                assert_eq!(faqs.len(), 2, "saw a partial index: {faqs:?}");
                assert_eq!(faqs[0].answer, faqs[1].answer);
                observed += 1;
            }
            observed
        }));
    }

    for round in 0..20 {
        let (title, body) = if round % 2 == 0 {
            ("Beta", "version two")
        } else {
            ("Alpha", "version one")
        };
        let staged = staging.path().join("faq.org");
        fs::write(
            &staged,
            format!("* {title}\n{body}\n* {title} extra\n{body}\n"),
        )
        .unwrap();
        // Rename is atomic, so the loader never reads a half-written file
        fs::rename(&staged, corpus.path().join("faq.org")).unwrap();

        services.refresher.refresh_once().await.unwrap();
    }
    done.store(true, Ordering::SeqCst);

    for reader in readers {
        assert!(reader.await.unwrap() > 0);
    }
    assert_eq!(services.refresher.status().completed_cycles, 21);
}

#[tokio::test]
async fn test_run_reloads_on_interval() {
    let corpus = TestCorpus::small();
    let services = create_test_services(corpus.path());

    let task = tokio::spawn(Arc::clone(&services.refresher).run(Duration::from_millis(50)));

    let mut cycles = 0;
    for _ in 0..100 {
        cycles = services.refresher.status().completed_cycles;
        if cycles >= 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    task.abort();

    assert!(cycles >= 2, "expected at least two cycles, saw {cycles}");
    assert_eq!(services.query("tmux").unwrap().len(), 2);
}
