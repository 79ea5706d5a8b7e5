use rand::seq::SliceRandom;
use sorted_vector_map::SortedVectorMap;

const COUNT: usize = 10000;

#[inline(never)]
fn create_map() -> SortedVectorMap<i32, usize> {
    let mut map = SortedVectorMap::with_capacity(COUNT);

    let mut keys = (0..COUNT as i32).collect::<Vec<_>>();
    keys.shuffle(&mut rand::thread_rng());

    for (i, k) in keys.into_iter().enumerate() {
        map.insert(k, i);
    }

    println!("{}", map.len());
    map
}

#[inline(never)]
fn probe_map(map: &SortedVectorMap<i32, usize>) {
    for k in 0..COUNT as i32 {
        assert!(map.contains_key(&k));
    }
    println!("{}", map.iter().count());
}

fn main() {
    let map = create_map();
    probe_map(&map);
}
