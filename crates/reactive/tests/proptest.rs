//! Property-based tests for ripple-reactive using proptest.

use proptest::prelude::*;
use ripple_core::{Data, Value};
use ripple_reactive::{observe, CallbackObserver, ObserverContext};
use std::cell::RefCell;
use std::rc::Rc;

fn leaf_strategy() -> impl Strategy<Value = Data> {
    prop_oneof![
        Just(Data::Leaf(Value::Null)),
        any::<bool>().prop_map(|b| Data::leaf(b)),
        any::<i64>().prop_map(|n| Data::leaf(n)),
        "[a-z]{0,8}".prop_map(|s| Data::leaf(s)),
    ]
}

fn data_strategy() -> impl Strategy<Value = Data> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
            .prop_map(|fields| Data::object_from(fields))
    })
}

proptest! {
    /// Instrumentation preserves the tree: every key and every leaf value
    /// survives the round through observe() untouched.
    #[test]
    fn observe_preserves_structure(data in data_strategy()) {
        let reactive = observe(data.clone());
        prop_assert_eq!(reactive.to_data(), data);
    }

    /// Leaves pass through instrumentation as-is, with no registries.
    #[test]
    fn observe_leaf_is_identity(data in leaf_strategy()) {
        let reactive = observe(data.clone());
        prop_assert!(reactive.is_leaf());
        prop_assert_eq!(reactive.to_data(), data);
    }

    /// One write reaches every subscriber exactly once, however many there
    /// are and however often each of them read the property.
    #[test]
    fn write_notifies_each_subscriber_once(
        subscribers in 1usize..8,
        reads_per_subscriber in 1usize..4,
    ) {
        let root = observe(Data::object_from([("k", Data::leaf(0i64))]));
        let root = root.as_object().unwrap().clone();

        let count = Rc::new(RefCell::new(0usize));
        let mut observers = Vec::new();

        let mut ctx = ObserverContext::new();
        for _ in 0..subscribers {
            let c = count.clone();
            let observer = CallbackObserver::shared(move || *c.borrow_mut() += 1);
            ctx.scope(observer.clone(), |ctx| {
                for _ in 0..reads_per_subscriber {
                    root.read("k", ctx);
                }
            });
            observers.push(observer);
        }

        prop_assert_eq!(root.subscriber_count("k"), Some(subscribers));

        root.write("k", Data::leaf(1i64));
        prop_assert_eq!(*count.borrow(), subscribers);

        drop(observers);
        prop_assert_eq!(root.subscriber_count("k"), Some(0));
    }

    /// Writing a value into a slot and reading it back yields that value,
    /// whatever its shape.
    #[test]
    fn write_read_round_trip(data in data_strategy()) {
        let root = observe(Data::object_from([("slot", Data::Leaf(Value::Null))]));
        let root = root.as_object().unwrap().clone();

        root.write("slot", data.clone());

        let ctx = ObserverContext::new();
        let value = root.read("slot", &ctx).unwrap();
        prop_assert_eq!(value.to_data(), data);
    }
}
