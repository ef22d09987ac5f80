//! Property tests for the duplicate-window rules.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use tokio::runtime::Runtime;
use tracing::Span;

use shift_scheduler::checker::MatchPolicy;
use shift_scheduler::models::{Shift, ShiftDraft, ShiftFilter, TimeOfDay};
use shift_scheduler::store::{InMemoryShiftStore, ShiftStore};
use shift_scheduler::usecase::{ShiftService, WriteOutcome};

fn time_strategy() -> impl Strategy<Value = TimeOfDay> {
    (0u8..24, 0u8..60).prop_map(|(h, m)| TimeOfDay::new(h, m).unwrap())
}

fn draft_strategy() -> impl Strategy<Value = ShiftDraft> {
    (0u32..60, time_strategy(), time_strategy()).prop_map(|(offset, start, end)| ShiftDraft {
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(offset.into()),
        start_time: start,
        end_time: end,
        name: None,
    })
}

fn service_over(shifts: Vec<Shift>) -> (ShiftService, Arc<InMemoryShiftStore>) {
    let store = Arc::new(InMemoryShiftStore::seeded(MatchPolicy::Exact, shifts).unwrap());
    let service = ShiftService::new(store.clone(), MatchPolicy::Exact, Span::none());
    (service, store)
}

proptest! {
    #[test]
    fn create_in_free_window_returns_input_fields(
        existing in draft_strategy(),
        candidate in draft_strategy(),
    ) {
        prop_assume!(existing.date != candidate.date || existing.window() != candidate.window());
        let rt = Runtime::new().unwrap();
        let (service, store) = service_over(vec![Shift::from_draft("existing", existing)]);

        let outcome = rt.block_on(service.create(candidate.clone())).unwrap();

        match outcome {
            WriteOutcome::Applied(shift) => {
                prop_assert_eq!(shift.date, candidate.date);
                prop_assert_eq!(shift.start_time, candidate.start_time);
                prop_assert_eq!(shift.end_time, candidate.end_time);
            }
            WriteOutcome::Rejected => prop_assert!(false, "free window was rejected"),
        }
        prop_assert_eq!(rt.block_on(store.len()), 2);
    }

    #[test]
    fn create_in_taken_window_is_rejected_without_mutation(existing in draft_strategy()) {
        let rt = Runtime::new().unwrap();
        let (service, store) = service_over(vec![Shift::from_draft("existing", existing.clone())]);
        let before = rt.block_on(store.find(&ShiftFilter::default())).unwrap();

        let outcome = rt.block_on(service.create(existing)).unwrap();

        prop_assert_eq!(outcome, WriteOutcome::Rejected);
        let after = rt.block_on(store.find(&ShiftFilter::default())).unwrap();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn update_to_own_window_succeeds(existing in draft_strategy()) {
        let rt = Runtime::new().unwrap();
        let (service, _) = service_over(vec![Shift::from_draft("self", existing.clone())]);

        let outcome = rt.block_on(service.update_by_id("self", existing.clone())).unwrap();

        prop_assert_eq!(outcome, WriteOutcome::Applied(Shift::from_draft("self", existing)));
    }

    #[test]
    fn update_to_window_of_other_shift_fails(
        taken in draft_strategy(),
        mine in draft_strategy(),
    ) {
        prop_assume!(taken.date != mine.date || taken.window() != mine.window());
        let rt = Runtime::new().unwrap();
        let (service, store) = service_over(vec![
            Shift::from_draft("taken", taken.clone()),
            Shift::from_draft("mine", mine.clone()),
        ]);

        let outcome = rt.block_on(service.update_by_id("mine", taken)).unwrap();

        prop_assert_eq!(outcome, WriteOutcome::Rejected);
        let unchanged = rt.block_on(store.find_by_id("mine")).unwrap();
        prop_assert_eq!(unchanged, Shift::from_draft("mine", mine));
    }
}
