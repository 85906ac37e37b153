//! Serde: множество как возрастающая последовательность целых.

use std::fmt;

use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::FastIntSet;

struct SetVisitor;

impl Serialize for FastIntSet {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for v in self.iter() {
            seq.serialize_element(&v)?;
        }
        seq.end()
    }
}

impl<'de> Visitor<'de> for SetVisitor {
    type Value = FastIntSet;

    fn expecting(
        &self,
        formatter: &mut fmt::Formatter,
    ) -> fmt::Result {
        formatter.write_str("a sequence of i64")
    }

    fn visit_seq<A>(
        self,
        mut access: A,
    ) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Порядок и дубликаты во входе не важны.
        let mut set = FastIntSet::new();
        while let Some(v) = access.next_element::<i64>()? {
            set.add(v);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for FastIntSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor)
    }
}
