//! End-to-end tests over the full event surface of the engine.

use catalog::{Category, MovieId};
use engine::StreamingService;

fn suggestion_ids(service: &StreamingService, uid: i32) -> Vec<MovieId> {
    service
        .user(uid)
        .expect("user should be registered")
        .suggestions
        .iter()
        .map(|m| m.id)
        .collect()
}

#[test]
fn intake_stays_sorted_and_rejects_duplicates() {
    let mut service = StreamingService::new();
    for (id, cat, year) in [
        (10, Category::Drama, 1976),
        (18, Category::Drama, 1976),
        (147, Category::Comedy, 2014),
        (4, Category::Drama, 1976),
        (711, Category::Romance, 1976),
    ] {
        service.add_movie(id, cat, year).unwrap();
        let ids: Vec<_> = service.intake().iter().map(|p| p.info.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    let before: Vec<_> = service.intake().iter().map(|p| p.info.id).collect();
    assert!(service.add_movie(18, Category::Comedy, 2020).is_err());
    let after: Vec<_> = service.intake().iter().map(|p| p.info.id).collect();
    assert_eq!(before, after);
}

#[test]
fn distribution_places_every_movie_in_its_own_bucket() {
    let mut service = StreamingService::new();
    let staged = [
        (10, Category::Drama, 1976),
        (18, Category::Drama, 1976),
        (147, Category::Comedy, 2014),
        (235, Category::SciFi, 1976),
        (711, Category::Romance, 1976),
    ];
    for (id, cat, year) in staged {
        service.add_movie(id, cat, year).unwrap();
    }
    assert_eq!(service.distribute_movies(), staged.len());
    assert!(service.intake().is_empty());

    for (id, cat, _) in staged {
        // Present in exactly the bucket it was staged for
        assert_eq!(service.catalog().find_anywhere(id).map(|(c, _)| c), Some(cat));
        for other in Category::ALL {
            if other != cat {
                assert!(service.catalog().find_in_bucket(other, id).is_none());
            }
        }
    }

    // Each bucket ascending by id
    for cat in Category::ALL {
        let ids: Vec<_> = service.catalog().bucket(cat).iter().map(|e| e.info.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn failed_watch_leaves_history_untouched() {
    let mut service = StreamingService::new();
    service.register_user(1).unwrap();
    service.add_movie(10, Category::Drama, 1976).unwrap();
    service.distribute_movies();
    service.watch_movie(1, 10).unwrap();

    assert!(service.watch_movie(2, 10).is_err()); // unregistered user
    assert!(service.watch_movie(1, 999).is_err()); // absent movie
    assert_eq!(service.user(1).unwrap().history.len(), 1);
}

#[test]
fn suggest_adds_one_entry_per_contributor_alternating_head_and_tail() {
    let mut service = StreamingService::new();
    for uid in [1, 2, 3, 4, 5] {
        service.register_user(uid).unwrap();
    }
    for (id, year) in [(10, 1976), (20, 1980), (30, 1990), (40, 2000)] {
        service.add_movie(id, Category::Drama, year).unwrap();
    }
    service.distribute_movies();
    service.watch_movie(1, 10).unwrap();
    service.watch_movie(2, 20).unwrap();
    service.watch_movie(3, 30).unwrap();
    service.watch_movie(4, 40).unwrap();

    let k = service.suggest_movies(5).unwrap();
    assert_eq!(k, 4);
    assert_eq!(service.user(5).unwrap().suggestions.len(), 4);

    // Contributor 1 anchors the head run, contributor 2 the tail run,
    // 3 and 4 fill inward.
    assert_eq!(suggestion_ids(&service, 5), vec![10, 30, 40, 20]);

    // Second round pulls the next-older history entries; every history
    // had depth one, so nothing is left to contribute.
    assert_eq!(service.suggest_movies(5).unwrap(), 0);
    assert_eq!(service.user(5).unwrap().suggestions.len(), 4);
}

#[test]
fn first_two_contributors_anchor_head_and_tail_of_an_empty_list() {
    let mut service = StreamingService::new();
    for uid in [3, 4, 5] {
        service.register_user(uid).unwrap();
    }
    service.add_movie(10, Category::Drama, 1976).unwrap();
    service.add_movie(18, Category::Drama, 1976).unwrap();
    service.add_movie(147, Category::Comedy, 2014).unwrap();
    service.distribute_movies();

    service.watch_movie(3, 147).unwrap();
    service.watch_movie(4, 18).unwrap();

    service.suggest_movies(5).unwrap();
    // 147 sits at the head anchor, 18 at the tail anchor.
    assert_eq!(suggestion_ids(&service, 5), vec![147, 18]);
}

#[test]
fn filtered_search_is_the_sorted_filtered_union() {
    let mut service = StreamingService::new();
    service.register_user(1).unwrap();
    let staged = [
        (4, Category::Drama, 1976),
        (10, Category::Drama, 1995),
        (18, Category::Drama, 2005),
        (123, Category::Comedy, 1976),
        (147, Category::Comedy, 2014),
        (235, Category::SciFi, 2010),
    ];
    for (id, cat, year) in staged {
        service.add_movie(id, cat, year).unwrap();
    }
    service.distribute_movies();

    let appended = service
        .filtered_search(1, Category::Drama, Category::Comedy, 1995)
        .unwrap();
    assert_eq!(appended, 3);

    let result = suggestion_ids(&service, 1);
    assert!(result.windows(2).all(|w| w[0] < w[1]), "sorted by id");

    // Set equality with the filtered union of the two buckets; the
    // SciFi movie is recent but in neither category.
    let mut expected: Vec<MovieId> = staged
        .iter()
        .filter(|(_, cat, year)| {
            (*cat == Category::Drama || *cat == Category::Comedy) && *year >= 1995
        })
        .map(|(id, _, _)| *id)
        .collect();
    expected.sort_unstable();
    assert_eq!(result, expected);
}

#[test]
fn filtered_search_appends_after_existing_suggestions() {
    let mut service = StreamingService::new();
    for uid in [1, 2] {
        service.register_user(uid).unwrap();
    }
    service.add_movie(900, Category::Horror, 2020).unwrap();
    service.add_movie(5, Category::Comedy, 2021).unwrap();
    service.distribute_movies();

    service.watch_movie(2, 900).unwrap();
    service.suggest_movies(1).unwrap();
    service
        .filtered_search(1, Category::Comedy, Category::Horror, 2021)
        .unwrap();

    // The merge result (movie 5) lands after the suggestion from user
    // 2's history, even though its id is smaller.
    assert_eq!(suggestion_ids(&service, 1), vec![900, 5]);
}

#[test]
fn take_off_clears_catalog_and_every_suggestion_list() {
    let mut service = StreamingService::new();
    for uid in [1, 2, 3] {
        service.register_user(uid).unwrap();
    }
    service.add_movie(50, Category::Horror, 2001).unwrap();
    service.add_movie(60, Category::Horror, 2002).unwrap();
    service.distribute_movies();

    // Put movie 50 on two suggestion lists via filtered search.
    service.filtered_search(1, Category::Horror, Category::Horror, 0).unwrap();
    service.filtered_search(2, Category::Horror, Category::Horror, 0).unwrap();

    let report = service.take_off_movie(50);
    assert_eq!(report.removed_for, vec![1, 2]);
    assert_eq!(report.removed_from, Some(Category::Horror));

    for uid in [1, 2, 3] {
        assert!(!service.user(uid).unwrap().suggestions.contains(50));
    }
    assert!(service.catalog().find_anywhere(50).is_none());

    // Idempotent on the second call
    let again = service.take_off_movie(50);
    assert!(again.removed_for.is_empty());
    assert_eq!(again.removed_from, None);
}

#[test]
fn unregister_drops_user_state_and_later_events_fail_cleanly() {
    let mut service = StreamingService::new();
    service.register_user(9).unwrap();
    assert!(service.register_user(9).is_err());

    service.unregister_user(9).unwrap();
    assert!(service.unregister_user(9).is_err());
    assert!(service.suggest_movies(9).is_err());
    assert!(service.filtered_search(9, Category::Drama, Category::Comedy, 0).is_err());
}
