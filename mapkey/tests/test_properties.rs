mod utils;

use mapkey::{find_or, find_or_else, find_ptr, MapKey, StringMap, TransparentLess};
use proptest::prelude::*;
use std::{borrow::Cow, collections::BTreeMap, rc::Rc};
use utils::CallCounter;

fn small_map() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map("[a-d]{0,3}", any::<i64>(), 0..16)
}

proptest! {
    #[test]
    fn comparator_is_strict_weak_order(a in ".{0,4}", b in ".{0,4}", c in ".{0,4}") {
        let less = TransparentLess;
        // Mix representations on each side.
        let a_cow: Cow<'_, str> = Cow::Borrowed(a.as_str());
        let b_rc: Rc<str> = Rc::from(b.as_str());
        prop_assert!(!less.less(&a, &a_cow));
        if less.less(&a_cow, &b_rc) {
            prop_assert!(!less.less(&b_rc, &a));
        }
        if less.less(&a, &b) && less.less(b.as_str(), &c) {
            prop_assert!(less.less(&a_cow, c.as_str()));
        }
        if less.equivalent(&a, &b) && less.equivalent(&b_rc, &c) {
            prop_assert!(less.equivalent(&a, &c));
        }
        prop_assert_eq!(less.less(&a, &b), a < b);
    }

    #[test]
    fn bind_agrees_with_direct_lookup(mut map in small_map(), key in "[a-d]{0,3}") {
        let expected = map.get(key.as_str()).copied();
        let mk = MapKey::bind(&mut map, key.as_str());
        prop_assert_eq!(mk.found(), expected.is_some());
        prop_assert_eq!(mk.value_ref().copied(), expected);
    }

    #[test]
    fn assign_on_found_overwrites(mut map in small_map(), key in "[a-d]{0,3}", v in any::<i64>()) {
        map.insert(key.clone(), 0);
        let len = map.len();
        let assigned = MapKey::bind(&mut map, key.as_str()).assign(v);
        prop_assert!(!assigned.inserted);
        prop_assert_eq!(map.len(), len);
        prop_assert_eq!(map.get(key.as_str()), Some(&v));
    }

    #[test]
    fn assign_on_missing_inserts_once(mut map in small_map(), key in "[a-d]{0,3}", v in any::<i64>()) {
        map.remove(key.as_str());
        let len = map.len();
        let assigned = MapKey::bind(&mut map, key.as_str()).assign(v);
        prop_assert!(assigned.inserted);
        prop_assert_eq!(map.len(), len + 1);
        let mk = MapKey::bind(&mut map, key.as_str());
        prop_assert!(mk.found());
        prop_assert_eq!(mk.value_ref(), Some(&v));
    }

    #[test]
    fn factories_run_only_on_miss(mut map in small_map(), key in "[a-d]{0,3}", v in any::<i64>()) {
        let present = map.contains_key(key.as_str());

        let counter = CallCounter::default();
        let got = find_or_else(&map, key.as_str(), counter.factory(v));
        prop_assert_eq!(counter.calls(), usize::from(!present));
        if !present {
            prop_assert_eq!(got, v);
        }

        let counter = CallCounter::default();
        let stored = *MapKey::bind(&mut map, key.as_str()).value_or_insert_with(counter.factory(v));
        // Reading the result again must not invoke anything.
        let reread = *MapKey::bind(&mut map, key.as_str()).value_or_insert_with(counter.factory(v));
        prop_assert_eq!(stored, reread);
        prop_assert_eq!(counter.calls(), usize::from(!present));
    }

    #[test]
    fn find_or_round_trips(map in small_map(), key in "[a-d]{0,3}", d in any::<i64>()) {
        let got = *find_or(&map, key.as_str(), &d);
        match find_ptr(&map, key.as_str()) {
            Some(stored) => prop_assert_eq!(got, *stored),
            None => prop_assert_eq!(got, d),
        }
    }
}

#[test]
fn test_string_map_order_matches_comparator() {
    let map: StringMap<()> = ["b", "B", "ab", "a", ""].iter().map(|k| (k.to_string(), ())).collect();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    let mut sorted = keys.clone();
    sorted.sort_by(|a, b| TransparentLess.compare(a, b));
    assert_eq!(keys, sorted);
}
