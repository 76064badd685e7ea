use super::*;
use crate::store::NewUser;
use tokio::time::{Duration, timeout};

#[tokio::test]
async fn observer_exits_when_store_dropped() {
    let store = UserStore::new();
    let handle = spawn_snapshot_observer(&store);
    drop(store);

    let seen = timeout(Duration::from_millis(500), handle)
        .await
        .expect("observer should exit once the store is gone")
        .expect("observer task should not panic");
    assert_eq!(seen, 0);
}

#[tokio::test]
async fn observer_counts_publications() {
    let store = UserStore::new();
    let rx = store.subscribe();
    let handle = tokio::spawn(observe_snapshots(rx));

    store.toggle_status(2);
    // Let the observer consume the first publication before the next one
    // so the watch channel does not coalesce them.
    tokio::time::sleep(Duration::from_millis(20)).await;
    store.add(NewUser {
        name: "Zoe".into(),
        email: "zoe@example.com".into(),
        role: "User".into(),
        is_active: true,
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    drop(store);

    let seen = timeout(Duration::from_millis(500), handle)
        .await
        .expect("observer should exit")
        .expect("observer task should not panic");
    assert_eq!(seen, 2);
}
