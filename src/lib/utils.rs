use core::hash::Hash;
use im::HashMap;

pub trait OrDefault<K, V> {
    fn get_or_default(&self, item: &K) -> V;
}

impl<K, V> OrDefault<K, V> for HashMap<K, V>
where
    K: Eq + PartialEq + Hash,
    V: Default + Clone,
{
    fn get_or_default(&self, item: &K) -> V {
        match self.get(item) {
            Some(v) => v.clone(),
            None => V::default(),
        }
    }
}
