//! Human-readable rendering of the engine's state.
//!
//! These functions only read through the engine's enumeration
//! accessors and build strings; all printing happens in `main`.

use catalog::Category;
use engine::StreamingService;
use std::fmt::Write;

fn join_ids<I: Iterator<Item = String>>(items: I) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// `Users = <5>, <10>, <4>`
pub fn user_line(service: &StreamingService) -> String {
    format!(
        "Users = {}",
        join_ids(service.directory().iter().map(|u| format!("<{}>", u.id)))
    )
}

/// `New movies = <147, Comedy, 2014>, ...`
pub fn intake_line(service: &StreamingService) -> String {
    format!(
        "New movies = {}",
        join_ids(service.intake().iter().map(|p| format!(
            "<{}, {}, {}>",
            p.info.id,
            p.category.label(),
            p.info.year
        )))
    )
}

/// One line per category, all six in scan order.
pub fn category_table(service: &StreamingService) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let _ = writeln!(
            out,
            "  {}: {}",
            category.label(),
            join_ids(
                service
                    .catalog()
                    .bucket(category)
                    .iter()
                    .map(|e| format!("<{}>", e.info.id))
            )
        );
    }
    out
}

/// `Watch History = <18>, <147>` (most recent first)
pub fn watch_history_line(service: &StreamingService, uid: i32) -> String {
    let entries = service
        .user(uid)
        .map(|user| join_ids(user.history.iter().map(|e| format!("<{}>", e.info.id))))
        .unwrap_or_default();
    format!("Watch History = {entries}")
}

/// `Suggested Movies = <147>, <18>` (head to tail)
pub fn suggestions_line(service: &StreamingService, uid: i32) -> String {
    let entries = service
        .user(uid)
        .map(|user| join_ids(user.suggestions.iter().map(|m| format!("<{}>", m.id))))
        .unwrap_or_default();
    format!("Suggested Movies = {entries}")
}

/// The `P` event: every user with suggestions and watch history.
pub fn users_block(service: &StreamingService) -> String {
    let mut out = String::new();
    for user in service.directory().iter() {
        let _ = writeln!(out, "  <{}>:", user.id);
        let _ = writeln!(out, "   {}", suggestions_line(service, user.id));
        let _ = writeln!(out, "   {}", watch_history_line(service, user.id));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_service() -> StreamingService {
        let mut service = StreamingService::new();
        service.register_user(5).unwrap();
        service.register_user(10).unwrap();
        service.add_movie(147, Category::Comedy, 2014).unwrap();
        service.add_movie(18, Category::Drama, 1976).unwrap();
        service
    }

    #[test]
    fn test_user_line() {
        let service = demo_service();
        assert_eq!(user_line(&service), "Users = <5>, <10>");
    }

    #[test]
    fn test_intake_line_is_sorted() {
        let service = demo_service();
        assert_eq!(
            intake_line(&service),
            "New movies = <18, Drama, 1976>, <147, Comedy, 2014>"
        );
    }

    #[test]
    fn test_category_table_lists_all_six() {
        let mut service = demo_service();
        service.distribute_movies();
        let table = category_table(&service);
        assert_eq!(table.lines().count(), 6);
        assert!(table.contains("  Comedy: <147>"));
        assert!(table.contains("  Horror: \n") || table.contains("  Horror: "));
    }

    #[test]
    fn test_watch_history_line_is_most_recent_first() {
        let mut service = demo_service();
        service.distribute_movies();
        service.watch_movie(5, 18).unwrap();
        service.watch_movie(5, 147).unwrap();
        assert_eq!(
            watch_history_line(&service, 5),
            "Watch History = <147>, <18>"
        );
    }
}
