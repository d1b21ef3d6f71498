use std::time::{Duration, Instant};

use outpost_app_core::{SimulatedTransport, SubmissionController};
use outpost_core::{DraftField, SubmissionStatus};

#[test]
fn submit_does_not_panic_without_tokio_runtime() {
    let transport = SimulatedTransport::new("hq@example.com", Duration::from_millis(10));
    let mut c = SubmissionController::new(transport, Duration::from_millis(10));
    c.update_field(DraftField::Name, "A");
    c.update_field(DraftField::Email, "a@x.com");
    c.update_field(DraftField::Subject, "S");
    c.update_field(DraftField::Message, "M");

    c.submit();
    assert_eq!(c.status(), SubmissionStatus::Sending);

    let deadline = Instant::now() + Duration::from_secs(3);
    let mut seen_success = false;
    while Instant::now() < deadline {
        c.tick();
        match c.status() {
            SubmissionStatus::Success => seen_success = true,
            SubmissionStatus::Idle if seen_success => return,
            _ => {}
        }
        std::thread::sleep(Duration::from_millis(2));
    }

    panic!("did not observe Success followed by Idle");
}
