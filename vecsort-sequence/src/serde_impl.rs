use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DynamicSequence;

// a sequence goes over the wire as its elements only; capacity is not kept
impl<T: Serialize> Serialize for DynamicSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicSequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
