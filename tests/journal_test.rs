#[macro_use]
extern crate assert_float_eq;

use chrono::NaiveDate;

use calorie_tracker_rs::form::{AddEntryForm, EntryPrefill, FormAlert, FormStatus, NavigationHost};
use calorie_tracker_rs::models::FoodTemplate;
use calorie_tracker_rs::state::FoodJournal;

#[derive(Default)]
struct Nav {
    dismissed: bool,
}

impl NavigationHost for Nav {
    fn dismiss(&mut self) {
        self.dismissed = true;
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 23).unwrap()
}

#[test]
fn test_template_to_journal_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.json");

    let mut journal = FoodJournal::open(&path).unwrap();
    journal
        .add_template(FoodTemplate::new("Apple", 100.0, 52.0))
        .unwrap();

    let template = journal.find_template("apple").unwrap();
    let mut form = AddEntryForm::initialize_on(EntryPrefill::from_template(template), today());
    assert!(form.auto_calculate_enabled());

    form.set_grams(150.0);
    assert_float_absolute_eq!(form.draft().calories(), 78.0, 1e-9);

    let mut nav = Nav::default();
    let entry = form.submit(&mut journal, &mut nav).unwrap();
    assert!(nav.dismissed);
    assert_eq!(entry.name, "Apple");

    let reopened = FoodJournal::open(&path).unwrap();
    let logged = reopened.entries_on(today());
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].grams, 150.0);
    assert_float_absolute_eq!(logged[0].calories, 78.0, 1e-9);
    assert_eq!(reopened.templates().len(), 1);
}

#[test]
fn test_unwritable_journal_surfaces_save_failure() {
    let dir = tempfile::tempdir().unwrap();
    // Loads as empty, but the parent directory does not exist for the write
    let missing = dir.path().join("no_such_dir").join("journal.json");
    let mut journal = FoodJournal::open(&missing).unwrap();

    let mut form = AddEntryForm::initialize_on(
        EntryPrefill::new(Some("Toast".into()), Some(40.0), Some(110.0), None),
        today(),
    );
    let mut nav = Nav::default();

    assert!(form.submit(&mut journal, &mut nav).is_err());
    assert!(matches!(form.alert(), Some(FormAlert::SaveFailed(_))));
    assert_eq!(form.status(), FormStatus::Editing);
    assert_eq!(form.draft().name(), "Toast");
    assert!(!nav.dismissed);
    assert!(journal.entries().is_empty());
}

#[test]
fn test_daily_totals_across_days() {
    let dir = tempfile::tempdir().unwrap();
    let mut journal = FoodJournal::open(dir.path().join("journal.json")).unwrap();

    for (day, name, grams, calories) in [
        (21, "Rice", 200.0, 260.0),
        (22, "Egg", 50.0, 70.0),
        (21, "Beans", 100.0, 120.0),
    ] {
        let mut form = AddEntryForm::initialize_on(
            EntryPrefill::new(Some(name.into()), Some(grams), Some(calories), None),
            today(),
        );
        form.set_date(NaiveDate::from_ymd_opt(2023, 6, day).unwrap());
        form.submit(&mut journal, &mut Nav::default()).unwrap();
    }

    let totals = journal.daily_totals();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].entries, 2);
    assert_float_absolute_eq!(totals[0].calories, 380.0, 1e-9);
    assert_float_absolute_eq!(totals[1].grams, 50.0, 1e-9);
}
