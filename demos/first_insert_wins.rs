use sorted_vector_map::SortedVectorMap;

fn main() {
    let mut map = SortedVectorMap::new();

    assert!(map.insert(5, "a"));
    assert!(map.insert(2, "b"));

    // the second write to key 5 is dropped, the first value stays
    assert!(!map.insert(5, "c"));

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&5), Some(&"a"));

    for (k, v) in map.iter() {
        println!("{k} -> {v}");
    }
}
