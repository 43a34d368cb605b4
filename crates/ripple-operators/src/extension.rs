pub mod filter;
pub mod map;
pub mod try_filter;
pub mod try_map;

use crate::Predicate;
use ripple_core::{IObservable, Observable};
use std::fmt::Display;

pub use filter::Filter;
pub use map::Map;
pub use try_filter::TryFilter;
pub use try_map::TryMap;

pub trait ObservableExtensions<T>: Sized + IObservable<T> {
    fn map<U, F: Fn(T) -> U>(self, mapping: F) -> Map<T, Self, U, F> {
        Map::new(self, mapping)
    }

    fn filter<P: Predicate<T>>(self, predicate: P) -> Filter<T, Self, P> {
        Filter::new(self, predicate)
    }

    fn try_map<U, E: Display, F: Fn(T) -> Result<U, E>>(
        self,
        mapping: F,
    ) -> TryMap<T, Self, U, E, F> {
        TryMap::new(self, mapping)
    }

    fn try_filter<E: Display, F: Fn(&T) -> Result<bool, E>>(
        self,
        predicate: F,
    ) -> TryFilter<T, Self, E, F> {
        TryFilter::new(self, predicate)
    }

    /// Erases the operator chain into a plain [`Observable`].
    fn into_observable(self) -> Observable<T>
    where
        Self: Send + Sync + 'static,
        T: 'static,
    {
        Observable::from_handler(move |subscriber| self.subscribe(subscriber))
    }
}

impl<T, O: IObservable<T>> ObservableExtensions<T> for O {}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use ripple_core::{Event, IObserver, Recorder};

    fn record<T: Clone + Send + 'static>(source: &impl IObservable<T>) -> Vec<Event<T>> {
        let recorder = Recorder::new();
        source.subscribe(recorder.clone());
        recorder.events()
    }

    fn arb_terminal() -> impl Strategy<Value = Event<i32>> {
        prop_oneof![
            Just(Event::Completed),
            "[a-z ]{0,12}".prop_map(Event::Error),
        ]
    }

    /// A handler-built source replaying `values` followed by `terminal`.
    fn scripted(values: Vec<i32>, terminal: Event<i32>) -> Observable<i32> {
        Observable::from_handler(move |mut subscriber| {
            for value in &values {
                subscriber.next(*value);
            }
            subscriber.notify(terminal.clone());
        })
    }

    fn assert_well_terminated<T>(events: &[Event<T>]) {
        let terminals = events.iter().filter(|e| e.is_terminal()).count();
        assert!(terminals <= 1);
        if terminals == 1 {
            assert!(events.last().is_some_and(Event::is_terminal));
        }
    }

    proptest! {
        #[test]
        fn map_applies_to_every_value_in_order(
            values in proptest::collection::vec(any::<i32>(), 0..32),
            terminal in arb_terminal(),
        ) {
            let source = scripted(values.clone(), terminal.clone()).map(|n: i32| n.wrapping_mul(3));

            let mut expected: Vec<Event<i32>> =
                values.iter().map(|n| Event::Next(n.wrapping_mul(3))).collect();
            expected.push(terminal);

            prop_assert_eq!(record(&source), expected);
        }

        #[test]
        fn filter_keeps_matching_subsequence(
            values in proptest::collection::vec(any::<i32>(), 0..32),
            terminal in arb_terminal(),
        ) {
            let source = scripted(values.clone(), terminal.clone()).filter(|n: &i32| n % 3 == 0);

            let mut expected: Vec<Event<i32>> = values
                .iter()
                .filter(|n| *n % 3 == 0)
                .map(|n| Event::Next(*n))
                .collect();
            expected.push(terminal);

            prop_assert_eq!(record(&source), expected);
        }

        #[test]
        fn chains_terminate_at_most_once(
            values in proptest::collection::vec(any::<i32>(), 0..32),
            divisor in 0..4_i32,
        ) {
            let source = Observable::from_sequence(values)
                .map(move |n: i32| n / divisor)
                .filter(|n: &i32| *n >= 0)
                .into_observable();

            let first = record(&source);
            assert_well_terminated(&first);
            prop_assert_eq!(first, record(&source));
        }
    }

    #[test]
    fn erased_chain_can_be_cloned_and_stored() {
        let chains: Vec<Observable<String>> = vec![
            Observable::from_sequence([1, 2]).map(|n: i32| n.to_string()).into_observable(),
            Observable::from_sequence(["x"]).map(str::to_owned).into_observable(),
        ];

        let rendered: Vec<Vec<Event<String>>> = chains.iter().map(|c| record(&c.clone())).collect();
        assert_eq!(
            rendered,
            vec![
                vec![
                    Event::Next("1".to_string()),
                    Event::Next("2".to_string()),
                    Event::Completed
                ],
                vec![Event::Next("x".to_string()), Event::Completed],
            ]
        );
    }
}
