use hotelstore_core::{
    EntityKind, FileHotelRepository, Hotel, HotelPatch, HotelRepository, Outcome,
    RecordValidationError, RepoError,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn repo_in_tempdir() -> (TempDir, PathBuf, FileHotelRepository) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_hotels.txt");
    let repo = FileHotelRepository::new(&path);
    (dir, path, repo)
}

#[test]
fn create_then_list_contains_hotel_once() {
    let (_dir, path, repo) = repo_in_tempdir();

    let outcome = repo
        .create_hotel(&Hotel::new("Hotel Test", "Ciudad A", "50", "100.5"))
        .unwrap();
    assert_eq!(outcome, Outcome::Created(EntityKind::Hotel));
    assert_eq!(outcome.message(), "[INFO] Hotel successfully created.");

    let hotels = repo.list_hotels();
    assert_eq!(hotels, vec![Hotel::new("Hotel Test", "Ciudad A", "50", "100.5")]);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Hotel Test|Ciudad A|50|100.5\n"
    );
}

#[test]
fn duplicate_create_leaves_file_unchanged() {
    let (_dir, path, repo) = repo_in_tempdir();
    repo.create_hotel(&Hotel::new("Hotel Doble", "Lugar X", "30", "75.0"))
        .unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let outcome = repo
        .create_hotel(&Hotel::new("Hotel Doble", "Lugar Y", "31", "76.0"))
        .unwrap();

    assert_eq!(outcome.to_string(), "[ERROR] Hotel already exists.");
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn full_hotel_lifecycle() {
    let (_dir, _path, repo) = repo_in_tempdir();

    repo.create_hotel(&Hotel::new("Hotel Plaza", "NYC", "100", "150.00"))
        .unwrap();
    let hotels = repo.list_hotels();
    assert_eq!(hotels.len(), 1);
    assert_eq!(
        (
            hotels[0].name.as_str(),
            hotels[0].location.as_str(),
            hotels[0].rooms.as_str(),
            hotels[0].price.as_str()
        ),
        ("Hotel Plaza", "NYC", "100", "150.00")
    );

    let patch = HotelPatch {
        price: Some("175.00".to_string()),
        ..HotelPatch::default()
    };
    let outcome = repo.modify_hotel("Hotel Plaza", &patch).unwrap();
    assert_eq!(outcome.message(), "[INFO] Hotel successfully modified.");
    let hotels = repo.list_hotels();
    assert_eq!(hotels[0].rooms, "100");
    assert_eq!(hotels[0].price, "175.00");

    let outcome = repo.delete_hotel("Hotel Plaza").unwrap();
    assert_eq!(outcome.message(), "[INFO] Hotel successfully deleted.");
    assert!(repo.list_hotels().is_empty());
}

#[test]
fn modify_all_fields() {
    let (_dir, _path, repo) = repo_in_tempdir();
    repo.create_hotel(&Hotel::new("Hotel Mod", "Lugar Z", "20", "50.0"))
        .unwrap();

    let patch = HotelPatch {
        location: Some("Nuevo Lugar".to_string()),
        rooms: Some("40".to_string()),
        price: Some("120.0".to_string()),
    };
    repo.modify_hotel("Hotel Mod", &patch).unwrap();

    assert_eq!(
        repo.get_hotel("Hotel Mod"),
        Some(Hotel::new("Hotel Mod", "Nuevo Lugar", "40", "120.0"))
    );
}

#[test]
fn modify_and_delete_missing_hotel_are_no_ops() {
    let (_dir, path, repo) = repo_in_tempdir();
    repo.create_hotel(&Hotel::new("Hotel Real", "Lima", "10", "10.0"))
        .unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let patch = HotelPatch {
        location: Some("Ciudad X".to_string()),
        ..HotelPatch::default()
    };
    let modify = repo.modify_hotel("No Existe", &patch).unwrap();
    let delete = repo.delete_hotel("No Existe").unwrap();

    assert_eq!(modify.message(), "[ERROR] Hotel not found.");
    assert_eq!(delete, Outcome::NotFound(EntityKind::Hotel));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn delete_removes_only_target_and_keeps_order() {
    let (_dir, _path, repo) = repo_in_tempdir();
    for name in ["A", "B", "C"] {
        repo.create_hotel(&Hotel::new(name, "X", "1", "1.0")).unwrap();
    }

    repo.delete_hotel("B").unwrap();

    let names: Vec<String> = repo.list_hotels().into_iter().map(|h| h.name).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn list_on_missing_or_empty_file_is_empty() {
    let (_dir, path, repo) = repo_in_tempdir();
    assert!(repo.list_hotels().is_empty());

    fs::write(&path, "").unwrap();
    assert!(repo.list_hotels().is_empty());
}

#[test]
fn malformed_lines_are_skipped_on_load() {
    let (_dir, path, repo) = repo_in_tempdir();
    fs::write(
        &path,
        "Hotel Uno|Lima|10|50.0\nINVALID DATA LINE\nHotel Dos|Quito|20|60.0\n",
    )
    .unwrap();

    let names: Vec<String> = repo.list_hotels().into_iter().map(|h| h.name).collect();
    assert_eq!(names, vec!["Hotel Uno", "Hotel Dos"]);
}

#[test]
fn only_invalid_data_lists_empty() {
    let (_dir, path, repo) = repo_in_tempdir();
    fs::write(&path, "INVALID DATA LINE\n").unwrap();

    assert!(repo.list_hotels().is_empty());
}

#[test]
fn next_write_drops_malformed_lines() {
    let (_dir, path, repo) = repo_in_tempdir();
    fs::write(&path, "Hotel Uno|Lima|10|50.0\nbroken|line\n").unwrap();

    repo.create_hotel(&Hotel::new("Hotel Dos", "Quito", "20", "60.0"))
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Hotel Uno|Lima|10|50.0\nHotel Dos|Quito|20|60.0\n"
    );
}

#[test]
fn create_rejects_field_with_delimiter() {
    let (_dir, path, repo) = repo_in_tempdir();

    let err = repo
        .create_hotel(&Hotel::new("Bad|Name", "X", "1", "1.0"))
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
    assert!(!path.exists());
}

#[test]
fn write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileHotelRepository::new(dir.path().join("missing").join("hotels.txt"));

    let err = repo
        .create_hotel(&Hotel::new("Hotel Plaza", "NYC", "100", "150.00"))
        .unwrap_err();

    assert!(matches!(err, RepoError::Store(_)));
}

#[test]
fn unreadable_file_degrades_to_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileHotelRepository::new(dir.path());

    assert!(repo.list_hotels().is_empty());
}

#[test]
fn padded_price_is_rejected_instead_of_silently_trimmed() {
    let (_dir, path, repo) = repo_in_tempdir();

    let err = repo
        .create_hotel(&Hotel::new("A", "B", "1", "150.00 "))
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(RecordValidationError::Padded { field: "price", .. })
    ));
    assert!(!path.exists());
    assert_eq!(repo.get_hotel("A"), None);
}

#[test]
fn empty_location_is_rejected() {
    let (_dir, _path, repo) = repo_in_tempdir();

    let err = repo
        .create_hotel(&Hotel::new("Hotel Vacio", "", "10", "10.0"))
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(RecordValidationError::Empty {
            field: "location",
            ..
        })
    ));
}

#[test]
fn padded_patch_value_leaves_stored_hotel_untouched() {
    let (_dir, path, repo) = repo_in_tempdir();
    repo.create_hotel(&Hotel::new("Hotel Plaza", "NYC", "100", "150.00"))
        .unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let patch = HotelPatch {
        rooms: Some(" 120".to_string()),
        ..HotelPatch::default()
    };
    let err = repo.modify_hotel("Hotel Plaza", &patch).unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}
