use freightdesk_core::{
    BookingError, BookingField, BookingForm, BookingSummary, IntakeField, IntakeForm, MemoryStore,
    ScheduleConfig, ScheduleEngine, ScheduleOrigin, TerminalCatalog, decode_criteria,
    decode_selection, encode_selection, select_sailing,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn intake() -> IntakeForm {
    let mut form = IntakeForm::new(&TerminalCatalog::default());
    form.set(IntakeField::DepartureTerminal, "Chengdu");
    form.set(IntakeField::ArrivalTerminal, "Malaszewicze");
    form.set(IntakeField::CargoReadyDate, "2024-05-20");
    form.set(IntakeField::CargoPeriod, "2 weeks");
    form.set(IntakeField::ContainerNumber, "3");
    form.set(IntakeField::ContainerType, "20ft");
    form
}

#[test]
fn intake_to_booking_round_trip() {
    let query = intake().submit_query().unwrap();
    let criteria = decode_criteria(&format!("?{query}")).unwrap();
    assert_eq!(criteria, intake().submit().unwrap());

    let engine = ScheduleEngine::new(MemoryStore::new(), ScheduleConfig::default());
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    let batch = engine.reconcile(&criteria, &mut rng).unwrap();
    assert_eq!(batch.origin, ScheduleOrigin::Generated);

    // Reloading the schedule page from the same query shows the same batch.
    let reloaded = decode_criteria(&query).unwrap();
    let again = engine.reconcile(&reloaded, &mut rng).unwrap();
    assert_eq!(again.origin, ScheduleOrigin::Cached);
    assert_eq!(again.sailings, batch.sailings);

    for sailing in &batch.sailings {
        match select_sailing(&batch.sailings, sailing.id, &criteria) {
            Ok(selection) => {
                let handed = decode_selection(&encode_selection(&selection)).unwrap();
                assert_eq!(handed, selection);
                let summary = BookingSummary::from(&handed);
                assert_eq!(summary.departure_terminal, "Chengdu");
                assert_eq!(summary.arrival_terminal, "Malaszewicze");
                assert_eq!(summary.container_number, "3");
                assert_eq!(summary.container_type, "20ft");
                assert!(summary.price.ends_with(",00\u{a0}$"));
            }
            Err(BookingError::InsufficientSpace {
                available,
                requested,
            }) => {
                assert!(available < requested);
                assert_eq!(requested, 3);
            }
            Err(other) => panic!("unexpected {other}"),
        }
    }
}

#[test]
fn invalid_intake_never_reaches_the_schedule() {
    let mut form = intake();
    form.set(IntakeField::ContainerNumber, "41");
    form.set(IntakeField::ContainerType, "Select a type");
    let errors = form.submit_query().unwrap_err();
    let expected = [
        "Please enter a valid number of containers between 1 and 40.",
        "Please select a container type.",
    ];
    assert_eq!(errors.joined(), expected.join("\n"));
}

#[test]
fn booking_form_gates_submission() {
    let mut form = BookingForm::default();
    form.set(BookingField::CompanyName, "Eurasia Link");
    form.set(BookingField::CompanyCode, "EL12");
    form.set(BookingField::Email, "bookings@eurasia-link.com");
    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message_for("company-code"),
        Some("Please enter a valid company code.")
    );

    form.set(BookingField::CompanyCode, "EL1234");
    assert!(form.validate().is_empty());
}
