use chrono::NaiveDate;

use super::{create_test_chatter, create_test_storage};

#[test]
fn test_chatter_sessions_oldest_first() {
    let (storage, _temp_dir) = create_test_storage();
    storage.save_chatter_session(&create_test_chatter("user-1", 5, 30.0, 90.0)).unwrap();
    storage.save_chatter_session(&create_test_chatter("user-1", 2, 60.0, 60.0)).unwrap();
    storage.save_chatter_session(&create_test_chatter("user-2", 3, 10.0, 10.0)).unwrap();

    let sessions = storage.list_chatter_sessions("user-1", None).unwrap();
    let days: Vec<String> = sessions.iter().map(|s| s.session_date.to_string()).collect();
    assert_eq!(days, vec!["2026-03-02", "2026-03-05"]);
    assert_eq!(sessions[1], create_test_chatter("user-1", 5, 30.0, 90.0));
}

#[test]
fn test_chatter_since_is_inclusive() {
    let (storage, _temp_dir) = create_test_storage();
    for day in [1, 4, 8] {
        storage.save_chatter_session(&create_test_chatter("user-1", day, 10.0, 10.0)).unwrap();
    }
    let since = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
    assert_eq!(storage.list_chatter_sessions("user-1", Some(since)).unwrap().len(), 2);
}

#[test]
fn test_chatter_optional_fields_round_trip() {
    let (storage, _temp_dir) = create_test_storage();
    let mut session = create_test_chatter("user-1", 1, 0.0, 45.0);
    session.project_id = None;
    session.model_used = None;
    storage.save_chatter_session(&session).unwrap();

    assert_eq!(storage.list_chatter_sessions("user-1", None).unwrap(), vec![session]);
}
