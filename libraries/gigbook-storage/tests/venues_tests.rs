mod test_helpers;
use test_helpers::{venue_input, TestDb};

use gigbook_core::{GigError, Listings, UpdateVenue};
use gigbook_storage::{areas, venues, SqliteListings};

#[tokio::test]
async fn test_create_and_get_venue() {
    let db = TestDb::new().await;

    let created = venues::create(db.pool(), venue_input("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();

    assert_eq!(created.name, "The Musical Hop");
    assert_eq!(created.genres, vec!["Jazz", "Folk"]);
    assert!(!created.seeking_talent);

    let fetched = venues::get_by_id(db.pool(), created.id).await.unwrap();
    assert!(fetched.is_some());
    assert_eq!(fetched.unwrap().name, "The Musical Hop");
}

#[tokio::test]
async fn test_create_venue_reuses_existing_area() {
    let db = TestDb::new().await;

    let first = venues::create(db.pool(), venue_input("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let second = venues::create(
        db.pool(),
        venue_input("The Dueling Pianos Bar", "San Francisco", "CA"),
    )
    .await
    .unwrap();

    assert_eq!(first.area_id, second.area_id);
    assert_eq!(areas::get_all(db.pool()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let db = TestDb::new().await;

    for name in [
        "The Musical Hop",
        "Park Square Live Music & Coffee",
        "The Dueling Pianos Bar",
    ] {
        venues::create(db.pool(), venue_input(name, "New York", "NY"))
            .await
            .unwrap();
    }

    let hop = venues::search(db.pool(), "Hop").await.unwrap();
    assert_eq!(hop.len(), 1);
    assert_eq!(hop[0].name, "The Musical Hop");

    let music = venues::search(db.pool(), "Music").await.unwrap();
    let names: Vec<&str> = music.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["The Musical Hop", "Park Square Live Music & Coffee"]
    );

    // Different case, same matches
    let lower = venues::search(db.pool(), "music").await.unwrap();
    assert_eq!(lower.len(), 2);
}

#[tokio::test]
async fn test_search_empty_term_matches_all() {
    let db = TestDb::new().await;

    for name in ["The Musical Hop", "The Dueling Pianos Bar"] {
        venues::create(db.pool(), venue_input(name, "New York", "NY"))
            .await
            .unwrap();
    }

    let all = venues::search(db.pool(), "").await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_get_recent_is_bounded_and_descending() {
    let db = TestDb::new().await;

    for i in 0..12 {
        venues::create(
            db.pool(),
            venue_input(&format!("Venue {i}"), "New York", "NY"),
        )
        .await
        .unwrap();
    }

    let recent = venues::get_recent(db.pool(), 10).await.unwrap();
    assert_eq!(recent.len(), 10);

    let ids: Vec<i64> = recent.iter().map(|v| v.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);

    // The two oldest rows fall outside the window
    assert_eq!(recent.last().unwrap().name, "Venue 2");
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let db = TestDb::new().await;

    let mut input = venue_input("The Musical Hop", "San Francisco", "CA");
    input.seeking_talent = true;
    input.seeking_description = Some("Looking for a jazz trio".to_string());
    let created = venues::create(db.pool(), input).await.unwrap();

    let updated = venues::update(
        db.pool(),
        created.id,
        UpdateVenue {
            name: "The Musical Hop II".to_string(),
            city: "Oakland".to_string(),
            state: "CA".to_string(),
            address: None,
            phone: None,
            genres: vec!["Blues".to_string()],
            image_link: None,
            facebook_link: None,
            website_link: None,
            // Checkbox absent on the edit form: flips back to false
            seeking_talent: false,
            seeking_description: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "The Musical Hop II");
    assert_eq!(updated.genres, vec!["Blues"]);
    assert!(!updated.seeking_talent);
    assert_eq!(updated.seeking_description, None);
    assert_eq!(updated.address, None);

    // The submitted city moved the venue to a fresh area
    assert_ne!(updated.area_id, created.area_id);
    let area = areas::get_by_id(db.pool(), updated.area_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(area.city, "Oakland");
}

#[tokio::test]
async fn test_update_missing_venue_is_not_found() {
    let db = TestDb::new().await;

    let err = venues::update(
        db.pool(),
        4242,
        UpdateVenue {
            name: "Nowhere".to_string(),
            city: "Nowhere".to_string(),
            state: "NA".to_string(),
            address: None,
            phone: None,
            genres: vec![],
            image_link: None,
            facebook_link: None,
            website_link: None,
            seeking_talent: false,
            seeking_description: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, GigError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let db = TestDb::new().await;

    let err = venues::delete(db.pool(), 4242).await.unwrap_err();
    assert!(matches!(err, GigError::NotFound { .. }));
}

#[tokio::test]
async fn test_context_get_venue_not_found() {
    let db = TestDb::new().await;
    let store = SqliteListings::new(db.pool().clone());

    let err = store.get_venue(777).await.unwrap_err();
    assert!(matches!(err, GigError::NotFound { .. }));
}

#[tokio::test]
async fn test_venues_by_area_groups_and_orders_by_state() {
    let db = TestDb::new().await;
    let store = SqliteListings::new(db.pool().clone());

    venues::create(db.pool(), venue_input("The Musical Hop", "New York", "NY"))
        .await
        .unwrap();
    venues::create(db.pool(), venue_input("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    venues::create(
        db.pool(),
        venue_input("Park Square Live Music & Coffee", "San Francisco", "CA"),
    )
    .await
    .unwrap();

    let listing = store.venues_by_area().await.unwrap();
    assert_eq!(listing.len(), 2);

    assert_eq!(listing[0].area.state, "CA");
    assert_eq!(listing[0].venues.len(), 1);

    assert_eq!(listing[1].area.state, "NY");
    assert_eq!(listing[1].venues.len(), 2);
}
