mod test_helpers;
use test_helpers::TestDb;

use gigbook_storage::areas;

#[tokio::test]
async fn test_get_or_create_inserts_once() {
    let db = TestDb::new().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let first = areas::get_or_create(&mut conn, "San Francisco", "CA")
        .await
        .unwrap();
    let second = areas::get_or_create(&mut conn, "San Francisco", "CA")
        .await
        .unwrap();

    assert_eq!(first.id, second.id);

    let all = areas::get_all(db.pool()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].city, "San Francisco");
    assert_eq!(all[0].state, "CA");
}

#[tokio::test]
async fn test_same_city_different_state_is_a_separate_area() {
    let db = TestDb::new().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let springfield_il = areas::get_or_create(&mut conn, "Springfield", "IL")
        .await
        .unwrap();
    let springfield_ma = areas::get_or_create(&mut conn, "Springfield", "MA")
        .await
        .unwrap();

    assert_ne!(springfield_il.id, springfield_ma.id);
    assert_eq!(areas::get_all(db.pool()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_all_is_ordered_by_state() {
    let db = TestDb::new().await;
    let mut conn = db.pool().acquire().await.unwrap();

    areas::get_or_create(&mut conn, "New York", "NY")
        .await
        .unwrap();
    areas::get_or_create(&mut conn, "San Francisco", "CA")
        .await
        .unwrap();
    areas::get_or_create(&mut conn, "Chicago", "IL")
        .await
        .unwrap();

    let states: Vec<String> = areas::get_all(db.pool())
        .await
        .unwrap()
        .into_iter()
        .map(|area| area.state)
        .collect();

    assert_eq!(states, vec!["CA", "IL", "NY"]);
}

#[tokio::test]
async fn test_get_by_id() {
    let db = TestDb::new().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let created = areas::get_or_create(&mut conn, "Chicago", "IL")
        .await
        .unwrap();
    drop(conn);

    let fetched = areas::get_by_id(db.pool(), created.id).await.unwrap();
    assert!(fetched.is_some());
    assert_eq!(fetched.unwrap().city, "Chicago");

    let missing = areas::get_by_id(db.pool(), 9999).await.unwrap();
    assert!(missing.is_none());
}
